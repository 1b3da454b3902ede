//! Move result types.

use crate::card::Card;
use crate::pile::Completion;

/// Result of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Source pile index.
    pub from: usize,
    /// Target pile index.
    pub to: usize,
    /// Number of cards moved.
    pub moved: usize,
    /// Suit cleared from the target pile, if the move completed one.
    pub completed: Option<Completion>,
    /// Card turned face up on the source pile, if any.
    pub revealed: Option<Card>,
}
