//! Move legality: generation functions and the capture policy.

pub mod movegen;

use serde::{Deserialize, Serialize};

pub use movegen::{jump_moves, legal_moves, regular_moves, MoveList, MoveOption};

/// Rule configuration fixed at room start.
///
/// The single knob is the mandatory-capture policy. Strict draughts
/// (the default) withholds regular moves from a piece that can jump; the
/// permissive variant offers both, jumps listed first, and lets an open
/// jump chain be ended voluntarily.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// When true, a piece with at least one jump is offered only jumps,
    /// and an open jump chain cannot be voluntarily ended.
    pub mandatory_capture: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            mandatory_capture: true,
        }
    }
}

impl RuleSet {
    /// Offer jumps and regular moves together and allow a jump chain
    /// to be ended voluntarily.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            mandatory_capture: false,
        }
    }
}
