//! Error types for engine operations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::card::{Card, Run};

/// Errors that can occur while parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty.
    #[error("empty card token")]
    Empty,
    /// Suit symbol or code not recognized.
    #[error("unknown suit: {0:?}")]
    UnknownSuit(String),
    /// Rank label not recognized.
    #[error("unknown rank: {0:?}")]
    UnknownRank(String),
    /// Rank index outside `1..=13`.
    #[error("rank value {0} is out of range")]
    RankOutOfRange(u8),
}

/// Index into a pile's visible cards is out of range.
///
/// The message is fixed regardless of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("list index out of range")]
pub struct BoundsError {
    /// The requested index.
    pub index: usize,
    /// Number of visible cards at the time of the request.
    pub len: usize,
}

/// Errors that can occur when placing cards on a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// No cards were offered.
    #[error("no cards to stack")]
    NoCards,
    /// The leading card does not stack on the pile's outermost card.
    #[error("{card} cannot be stacked on {onto}")]
    IllegalStack {
        /// First card of the offered run.
        card: Card,
        /// Outermost visible card of the pile.
        onto: Card,
    },
}

/// A picked-up slice of visible cards is not a legal run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{card} can not be moved with {next}, attempting to move: {}", Run(.run))]
pub struct RunError {
    /// Last card of the legal prefix.
    pub card: Card,
    /// Card that breaks the run.
    pub next: Card,
    /// The whole attempted run.
    pub run: Vec<Card>,
}

/// Errors that can occur when picking up cards from a pile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetachError {
    /// Index out of range.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// Cards from the index onward do not form a legal run.
    #[error(transparent)]
    IllegalRun(#[from] RunError),
}

/// Why a move between two piles was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// The target pile cannot take the run.
    #[error(transparent)]
    Stack(#[from] StackError),
    /// The source pile cannot release the run.
    #[error(transparent)]
    Detach(#[from] DetachError),
    /// The target pile is empty and empty piles are closed.
    #[error("target pile is empty: {0}")]
    EmptyTarget(BoundsError),
}

/// Errors that can occur when moving cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Pile index out of range.
    #[error("pile {0} not found")]
    PileNotFound(usize),
    /// Source and target are the same pile.
    #[error("cannot move pile {0} onto itself")]
    SamePile(usize),
    /// No pile shows the requested source card.
    #[error("{0} is not visible on any pile")]
    CardNotFound(Card),
    /// No pile ends with the requested target card.
    #[error("no pile ends with {0}")]
    TargetNotFound(Card),
    /// The move is not legal.
    #[error("cannot move src cards: {} to target pile: {}: {reason}", Run(.cards), Run(.target))]
    Rejected {
        /// The candidate run.
        cards: Vec<Card>,
        /// Visible cards of the target pile.
        target: Vec<Card>,
        /// What failed.
        reason: MoveRejection,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck cannot fill every pile.
    #[error("not enough cards to deal: needed {needed}, got {available}")]
    NotEnoughCards {
        /// Cards required by the layout.
        needed: usize,
        /// Cards supplied.
        available: usize,
    },
}
