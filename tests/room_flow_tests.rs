//! Room lifecycle integration tests.
//!
//! These exercise the engine the way the hosting platform does: through
//! the four lifecycle functions, holding the returned state document
//! between calls.

use checkers_engine::{
    jump_moves, legal_moves, on_player_join, on_player_move, on_player_quit, on_room_start,
    on_room_start_with_rules, Board, BySide, GameError, GameState, MoveRequest, Piece, Player,
    Room, RuleSet, Side, Square, Status,
};

fn alice() -> Player {
    Player::new("id-alice", "alice")
}

fn bob() -> Player {
    Player::new("id-bob", "bob")
}

/// A room with both players seated and the game started.
fn started_room() -> Room {
    let update = on_room_start();
    let mut room = Room {
        players: vec![alice()],
        state: update.state,
    };
    let update = on_player_join(&alice(), &room).unwrap();
    room.state = update.state;

    room.players.push(bob());
    let update = on_player_join(&bob(), &room).unwrap();
    assert_eq!(update.joinable, Some(false));
    room.state = update.state;
    room
}

/// The player currently on move in `room`.
fn current_player(room: &Room) -> Player {
    room.players[room.state.player_to_move.index()].clone()
}

/// Pick a move for the side on move: the open chain's first jump, else any
/// jump, else the first regular step. `None` when the side cannot move.
fn pick_move(state: &GameState) -> Option<MoveRequest> {
    if let Some(at) = state.pending_jump {
        let piece = state.board.piece_at(at)?;
        let jump = *jump_moves(&state.board, at, piece).first()?;
        return Some(MoveRequest::Piece {
            from: at,
            to: jump.destination,
            capture: jump.capture,
        });
    }

    let mut fallback = None;
    for (square, piece) in state.board.pieces() {
        if piece.owner != state.player_to_move {
            continue;
        }
        let moves = legal_moves(&state.board, square, state.player_to_move, &state.rules).unwrap();
        for option in moves {
            let request = MoveRequest::Piece {
                from: square,
                to: option.destination,
                capture: option.capture,
            };
            if option.is_jump() {
                return Some(request);
            }
            if fallback.is_none() {
                fallback = Some(request);
            }
        }
    }
    fallback
}

// =============================================================================
// Lifecycle gating
// =============================================================================

#[test]
fn test_room_start_document() {
    let update = on_room_start();

    assert_eq!(update.state.status, Status::PreGame);
    assert_eq!(update.state.remaining[Side::One], 12);
    assert_eq!(update.state.remaining[Side::Two], 12);
    assert_eq!(update.state.winner, None);
    assert_eq!(update.joinable, Some(true));
    assert!(update.state.rules.mandatory_capture);
}

#[test]
fn test_second_join_starts_the_game() {
    let room = started_room();
    assert_eq!(room.state.status, Status::InGame);
    assert_eq!(room.state.player_to_move, Side::One);
}

#[test]
fn test_third_join_is_rejected() {
    let room = started_room();
    let eve = Player::new("id-eve", "eve");

    assert_eq!(
        on_player_join(&eve, &room),
        Err(GameError::InvalidPhase {
            required: Status::PreGame,
            actual: Status::InGame,
        })
    );
}

#[test]
fn test_move_by_the_waiting_player_is_rejected() {
    let room = started_room();

    let request = MoveRequest::step(Square::new(2, 1), Square::new(3, 0));
    assert_eq!(
        on_player_move(&bob(), &request, &room),
        Err(GameError::OutOfTurn {
            username: "bob".to_string(),
        })
    );
}

#[test]
fn test_move_by_a_stranger_is_rejected() {
    let room = started_room();
    let eve = Player::new("id-eve", "eve");

    let request = MoveRequest::step(Square::new(5, 0), Square::new(4, 1));
    assert_eq!(
        on_player_move(&eve, &request, &room),
        Err(GameError::OutOfTurn {
            username: "eve".to_string(),
        })
    );
}

#[test]
fn test_regular_move_passes_the_turn_to_the_other_player() {
    let mut room = started_room();

    let request = MoveRequest::step(Square::new(5, 0), Square::new(4, 1));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    room.state = update.state;

    assert_eq!(room.state.player_to_move, Side::Two);
    assert_eq!(current_player(&room).id, bob().id);

    // Alice immediately moving again is out of turn.
    let request = MoveRequest::step(Square::new(6, 1), Square::new(5, 0));
    assert_eq!(
        on_player_move(&alice(), &request, &room),
        Err(GameError::OutOfTurn {
            username: "alice".to_string(),
        })
    );
}

// =============================================================================
// Elimination and promotion scenarios
// =============================================================================

#[test]
fn test_final_capture_finishes_with_winner() {
    let mut room = started_room();
    let mut board = Board::empty();
    board.place(Square::new(5, 2), Piece::man(Side::One));
    board.place(Square::new(4, 1), Piece::man(Side::Two));
    room.state.board = board;
    room.state.remaining = BySide::new(|side| match side {
        Side::One => 1,
        Side::Two => 1,
    });

    let request = MoveRequest::jump(Square::new(5, 2), Square::new(3, 0), Square::new(4, 1));
    let update = on_player_move(&alice(), &request, &room).unwrap();

    assert_eq!(update.finished, Some(true));
    assert_eq!(update.state.status, Status::EndGame);
    assert_eq!(update.state.winner, Some(alice()));
    assert_eq!(update.state.remaining[Side::Two], 0);

    // The finished document rejects everything.
    room.state = update.state;
    let request = MoveRequest::step(Square::new(3, 0), Square::new(2, 1));
    assert_eq!(
        on_player_move(&alice(), &request, &room),
        Err(GameError::InvalidPhase {
            required: Status::InGame,
            actual: Status::EndGame,
        })
    );
}

#[test]
fn test_promotion_grants_backward_moves() {
    let mut room = started_room();
    let mut board = Board::empty();
    board.place(Square::new(1, 2), Piece::man(Side::One));
    board.place(Square::new(6, 5), Piece::man(Side::Two));
    room.state.board = board;
    room.state.remaining = BySide::with_value(1);

    let request = MoveRequest::step(Square::new(1, 2), Square::new(0, 1));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    room.state = update.state;

    let crowned = room.state.board.piece_at(Square::new(0, 1)).unwrap();
    assert!(crowned.is_king());

    // The new king generates options back down the board.
    let moves = legal_moves(
        &room.state.board,
        Square::new(0, 1),
        Side::One,
        &room.state.rules,
    )
    .unwrap();
    assert!(moves.iter().any(|m| m.destination.row == 1));
}

#[test]
fn test_open_chain_keeps_the_mover_on_turn() {
    let mut room = started_room();
    let mut board = Board::empty();
    board.place(Square::new(6, 1), Piece::man(Side::One));
    board.place(Square::new(5, 2), Piece::man(Side::Two));
    board.place(Square::new(3, 4), Piece::man(Side::Two));
    room.state.board = board;
    room.state.remaining = BySide::new(|side| match side {
        Side::One => 1,
        Side::Two => 2,
    });

    let request = MoveRequest::jump(Square::new(6, 1), Square::new(4, 3), Square::new(5, 2));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    room.state = update.state;

    assert_eq!(update.finished, None);
    assert_eq!(room.state.pending_jump, Some(Square::new(4, 3)));
    assert_eq!(room.state.player_to_move, Side::One);

    // Bob is still out of turn while the chain is open.
    let request = MoveRequest::step(Square::new(3, 4), Square::new(4, 5));
    assert_eq!(
        on_player_move(&bob(), &request, &room),
        Err(GameError::OutOfTurn {
            username: "bob".to_string(),
        })
    );

    // Alice finishes the chain and the turn finally passes.
    let request = MoveRequest::jump(Square::new(4, 3), Square::new(2, 5), Square::new(3, 4));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    room.state = update.state;
    assert_eq!(room.state.pending_jump, None);
    assert_eq!(room.state.player_to_move, Side::Two);
}

// =============================================================================
// Quit paths
// =============================================================================

#[test]
fn test_quit_leaving_one_player_awards_the_win() {
    let mut room = started_room();
    room.players.retain(|p| p.id != bob().id);

    let update = on_player_quit(&bob(), &room);
    assert_eq!(update.state.status, Status::EndGame);
    assert_eq!(update.state.winner, Some(alice()));
    assert_eq!(update.joinable, Some(false));
    assert_eq!(update.finished, Some(true));
}

#[test]
fn test_second_quit_keeps_the_abandonment_result() {
    let mut room = started_room();
    room.players.retain(|p| p.id != bob().id);
    let update = on_player_quit(&bob(), &room);
    room.state = update.state;
    assert_eq!(room.state.winner, Some(alice()));

    // The winner's own later quit does not erase the recorded result.
    room.players.clear();
    let update = on_player_quit(&alice(), &room);
    assert_eq!(update.state.status, Status::EndGame);
    assert_eq!(update.state.winner, Some(alice()));
    assert_eq!(update.finished, Some(true));
}

#[test]
fn test_quit_before_start_closes_the_room() {
    let start = on_room_start();
    let room = Room {
        players: vec![],
        state: start.state,
    };

    let update = on_player_quit(&alice(), &room);
    assert_eq!(update.state.status, Status::EndGame);
    assert_eq!(update.state.winner, None);
    assert_eq!(update.joinable, Some(false));
}

// =============================================================================
// Driven play
// =============================================================================

/// Drive a jump-greedy game through the room interface and check the
/// document invariants at every step. Termination is not required (two
/// kings can shuffle forever); the invariants are.
#[test]
fn test_driven_game_preserves_document_invariants() {
    let mut room = started_room();
    let mut finished = false;

    for _ in 0..300 {
        let Some(request) = pick_move(&room.state) else {
            break;
        };
        let mover = current_player(&room);
        let before = room.state.remaining;

        let update = on_player_move(&mover, &request, &room).unwrap();
        room.state = update.state;

        // Counters only ever decrease, and always match the board.
        assert!(room.state.remaining[Side::One] <= before[Side::One]);
        assert!(room.state.remaining[Side::Two] <= before[Side::Two]);
        assert_eq!(room.state.board.count_pieces(), room.state.remaining);

        if update.finished == Some(true) {
            finished = true;
            break;
        }
        assert_eq!(room.state.status, Status::InGame);
    }

    if finished {
        assert_eq!(room.state.status, Status::EndGame);
        let winner = room.state.winner.as_ref().expect("elimination has a winner");
        assert!(room.players.iter().any(|p| p.id == winner.id));
        let loser_side = if winner.id == alice().id {
            Side::Two
        } else {
            Side::One
        };
        assert_eq!(room.state.remaining[loser_side], 0);
    }
}

/// The permissive rule set accepts a regular step even when the same
/// piece could jump.
#[test]
fn test_permissive_rules_allow_declining_a_capture() {
    let start = on_room_start_with_rules(RuleSet::permissive());
    let mut room = Room {
        players: vec![alice(), bob()],
        state: start.state,
    };
    let update = on_player_join(&bob(), &room).unwrap();
    room.state = update.state;

    let mut board = Board::empty();
    board.place(Square::new(5, 2), Piece::man(Side::One));
    board.place(Square::new(4, 1), Piece::man(Side::Two));
    room.state.board = board;
    room.state.remaining = BySide::with_value(1);

    let request = MoveRequest::step(Square::new(5, 2), Square::new(4, 3));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    assert_eq!(update.state.remaining[Side::Two], 1);

    // Strict rules reject the same decline.
    let mut strict_room = started_room();
    let mut board = Board::empty();
    board.place(Square::new(5, 2), Piece::man(Side::One));
    board.place(Square::new(4, 1), Piece::man(Side::Two));
    strict_room.state.board = board;
    strict_room.state.remaining = BySide::with_value(1);

    assert_eq!(
        on_player_move(&alice(), &request, &strict_room),
        Err(GameError::IllegalMove {
            origin: Square::new(5, 2),
            destination: Square::new(4, 3),
        })
    );
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_state_document_round_trips_through_json() {
    let mut room = started_room();
    let request = MoveRequest::step(Square::new(5, 0), Square::new(4, 1));
    let update = on_player_move(&alice(), &request, &room).unwrap();
    room.state = update.state;

    let json = serde_json::to_string(&room).unwrap();
    let restored: Room = serde_json::from_str(&json).unwrap();
    assert_eq!(room, restored);
}

#[test]
fn test_wire_shape_matches_the_platform_contract() {
    let update = on_room_start();
    let value = serde_json::to_value(&update).unwrap();

    assert_eq!(value["joinable"], true);
    assert_eq!(value["state"]["status"], "preGame");
    assert!(value["state"]["board"][3][0].is_null());
    assert_eq!(value["state"]["board"][0][1]["owner"], "two");
    assert_eq!(value["state"]["remaining"], serde_json::json!([12, 12]));
    // "finished" is a partial overwrite; unset means untouched.
    assert!(value.get("finished").is_none());
}
