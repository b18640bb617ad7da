//! The four lifecycle entry points the room host calls.
//!
//! The hosting platform owns the room document — player list, joinability,
//! version bookkeeping, persistence, transport. This module is the thin
//! seam between that platform and the engine: it resolves the acting
//! player's identity to a seat, gates on phase, and delegates to
//! [`GameState`].
//!
//! Every function takes the room by shared reference and returns a fresh
//! state document. Validation failures therefore can never leave partial
//! mutation behind: the platform keeps whatever it already had.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::Player;
use crate::error::{EngineResult, GameError};
use crate::game::{GameState, MoveOutcome, MoveRequest, Status};
use crate::rules::RuleSet;

/// Number of players a game needs before play starts.
pub const SEATS: usize = 2;

/// The slice of the platform's room document the engine reads.
///
/// The platform also tracks joinability, a version counter, and transport
/// concerns; the engine only consumes the seated players (in join order)
/// and the last state document it returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub players: Vec<Player>,
    pub state: GameState,
}

/// A partial overwrite of the platform's room document.
///
/// `None` flags mean "leave the platform's value unchanged".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub state: GameState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joinable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
}

impl RoomUpdate {
    fn state_only(state: GameState) -> Self {
        Self {
            state,
            joinable: None,
            finished: None,
        }
    }
}

/// Create the state document for a fresh room.
#[must_use]
pub fn on_room_start() -> RoomUpdate {
    on_room_start_with_rules(RuleSet::default())
}

/// Create the state document for a fresh room under a specific rule set.
#[must_use]
pub fn on_room_start_with_rules(rules: RuleSet) -> RoomUpdate {
    debug!(?rules, "room started");
    RoomUpdate {
        state: GameState::new(rules),
        joinable: Some(true),
        finished: None,
    }
}

/// React to a player joining.
///
/// The platform has already appended `player` to `room.players`. Fails
/// with [`GameError::InvalidPhase`] once the game has started; with both
/// seats filled the game begins and the room stops being joinable.
pub fn on_player_join(player: &Player, room: &Room) -> EngineResult<RoomUpdate> {
    room.state.expect_status(Status::PreGame)?;

    let mut state = room.state.clone();
    if room.players.len() >= SEATS {
        state.begin()?;
        info!(player = %player, "second player seated, game started");
        return Ok(RoomUpdate {
            state,
            joinable: Some(false),
            finished: None,
        });
    }
    debug!(player = %player, "player seated, waiting for opponent");
    Ok(RoomUpdate {
        state,
        joinable: Some(true),
        finished: None,
    })
}

/// Validate and apply a submitted move.
///
/// Fails with [`GameError::InvalidPhase`] outside InGame and with
/// [`GameError::OutOfTurn`] unless `player` is seated at the turn-owner
/// index. Legality itself is re-derived from the board inside
/// [`GameState::apply`]; whatever the client highlighted is irrelevant.
pub fn on_player_move(
    player: &Player,
    request: &MoveRequest,
    room: &Room,
) -> EngineResult<RoomUpdate> {
    room.state.expect_status(Status::InGame)?;

    let seat = room.state.player_to_move.index();
    match room.players.get(seat) {
        Some(seated) if seated.id == player.id => {}
        _ => {
            return Err(GameError::OutOfTurn {
                username: player.username.clone(),
            })
        }
    }

    let mut state = room.state.clone();
    let outcome = state.apply(request)?;
    debug!(player = %player, ?outcome, "move applied");

    if let MoveOutcome::Finished { winner } = outcome {
        let winner = room.players.get(winner.index()).cloned();
        if let Some(ref winner) = winner {
            info!(winner = %winner, "game finished by elimination");
        }
        state.winner = winner;
        return Ok(RoomUpdate {
            state,
            joinable: None,
            finished: Some(true),
        });
    }
    Ok(RoomUpdate::state_only(state))
}

/// React to a player quitting.
///
/// The platform removes the quitter before invoking this. A sole
/// remaining player wins by abandonment; any other count ends the game as
/// a no-contest with no winner. A quit after the game has already ended
/// changes nothing: the recorded result stands.
#[must_use]
pub fn on_player_quit(player: &Player, room: &Room) -> RoomUpdate {
    let mut state = room.state.clone();
    if state.status == Status::EndGame {
        debug!(quitter = %player, "quit after the game already ended");
    } else {
        let winner = if room.players.len() == 1 {
            Some(room.players[0].clone())
        } else {
            None
        };
        match winner {
            Some(ref winner) => {
                info!(quitter = %player, winner = %winner, "game won by abandonment")
            }
            None => info!(quitter = %player, "game ended with no contest"),
        }
        state.conclude(winner);
    }

    RoomUpdate {
        state,
        joinable: Some(false),
        finished: Some(true),
    }
}
