//! A Spider solitaire rules engine with optional `no_std` support.
//!
//! The crate provides a [`Board`] type that deals the two-deck layout onto
//! ten [`Pile`]s and enforces which runs may be picked up, where they may be
//! placed, and when a full suit is cleared.
//!
//! # Example
//!
//! ```
//! use spiders::{Board, Card, GameOptions};
//!
//! let mut board = Board::new(GameOptions::default().with_shuffle(false), 0);
//! let two: Card = "2♣".parse().unwrap();
//! let three: Card = "3♥".parse().unwrap();
//! board.move_card(&two, &three).unwrap();
//! assert_eq!(board.pile(9).unwrap().top(), Some(&two));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use board::{Board, DEALT_CARDS, PILE_COUNT, PILE_SIZES};
pub use card::{Card, Color, HIDDEN_SYMBOL, RANKS_PER_SUIT, Rank, Run, Suit};
pub use deck::{DECK_SIZE, PLAY_DECK_SIZE, RunOrder};
pub use error::{
    BoundsError, DealError, DetachError, MoveError, MoveRejection, ParseError, RunError,
    StackError,
};
pub use options::{EmptyPileRule, GameOptions};
pub use pile::{Completion, Pile};
pub use result::MoveOutcome;
