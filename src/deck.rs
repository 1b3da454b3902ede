//! Deck construction.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, RANKS_PER_SUIT, Rank, Suit};

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANKS_PER_SUIT;

/// Number of cards in the two-deck Spider play deck.
pub const PLAY_DECK_SIZE: usize = 2 * DECK_SIZE;

/// Rank order of a suit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOrder {
    /// Ace first.
    Ascending,
    /// King first.
    Descending,
}

/// Builds the thirteen cards of one suit.
#[must_use]
pub fn suit_run(suit: Suit, order: RunOrder) -> Vec<Card> {
    let mut cards: Vec<Card> = Rank::ALL.into_iter().map(|rank| Card::new(suit, rank)).collect();
    if order == RunOrder::Descending {
        cards.reverse();
    }
    cards
}

/// Builds one 52-card deck: every suit ascending, in [`Suit::ALL`] order.
#[must_use]
pub fn single_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        cards.extend(suit_run(suit, RunOrder::Ascending));
    }
    cards
}

/// Builds the unshuffled 104-card play deck (two single decks back to back).
#[must_use]
pub fn play_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(PLAY_DECK_SIZE);
    cards.extend(single_deck());
    cards.extend(single_deck());
    cards
}

/// Builds the play deck and shuffles it with `rng`.
pub fn shuffled_play_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = play_deck();
    cards.shuffle(rng);
    cards
}
