//! Board layout and state.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::deck::{play_deck, shuffled_play_deck};
use crate::error::DealError;
use crate::options::GameOptions;
use crate::pile::Pile;

mod moves;

/// Number of piles on the table.
pub const PILE_COUNT: usize = 10;

/// Cards dealt to each pile, in pile order.
pub const PILE_SIZES: [usize; PILE_COUNT] = [6, 6, 6, 6, 5, 5, 5, 5, 5, 5];

/// Total cards dealt to the piles.
pub const DEALT_CARDS: usize = {
    let mut total = 0;
    let mut index = 0;
    while index < PILE_COUNT {
        total += PILE_SIZES[index];
        index += 1;
    }
    total
};

/// A Spider table: ten piles and the undealt reserve.
///
/// The board owns its piles and is the only place completed suits are
/// recorded.
///
/// # Example
///
/// ```
/// use spiders::{Board, GameOptions};
///
/// let board = Board::new(GameOptions::default(), 42);
/// assert_eq!(board.piles().len(), 10);
/// assert_eq!(board.reserve().len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Game options.
    options: GameOptions,
    /// The table piles.
    piles: [Pile; PILE_COUNT],
    /// Undealt cards; the last card is dealt first.
    stack: Vec<Card>,
    /// Suits cleared so far, in order.
    completed: Vec<Suit>,
}

impl Board {
    /// Creates a board, shuffling with a generator seeded from `seed` unless
    /// [`GameOptions::shuffle`] is off.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!("new board (seed {seed}, shuffle {})", options.shuffle);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a board, shuffling with `rng` unless [`GameOptions::shuffle`]
    /// is off.
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let deck = if options.shuffle {
            shuffled_play_deck(rng)
        } else {
            play_deck()
        };
        Self::deal(options, deck)
    }

    /// Creates a board by dealing `deck` as given.
    ///
    /// Cards are taken from the end of `deck`; whatever is left becomes the
    /// reserve.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` cannot fill the piles.
    pub fn from_deck(options: GameOptions, deck: Vec<Card>) -> Result<Self, DealError> {
        if deck.len() < DEALT_CARDS {
            return Err(DealError::NotEnoughCards {
                needed: DEALT_CARDS,
                available: deck.len(),
            });
        }
        Ok(Self::deal(options, deck))
    }

    /// Creates a board from piles already laid out, with `stack` as the
    /// reserve. No suits are recorded as completed.
    #[must_use]
    pub const fn from_piles(
        options: GameOptions,
        piles: [Pile; PILE_COUNT],
        stack: Vec<Card>,
    ) -> Self {
        Self {
            options,
            piles,
            stack,
            completed: Vec::new(),
        }
    }

    fn deal(options: GameOptions, mut deck: Vec<Card>) -> Self {
        let piles = PILE_SIZES.map(|size| {
            let mut hidden = deck.split_off(deck.len() - size);
            let visible = hidden.pop().into_iter().collect();
            Pile::new(hidden, visible)
        });
        debug!("dealt {DEALT_CARDS} cards, {} in reserve", deck.len());

        Self {
            options,
            piles,
            stack: deck,
            completed: Vec::new(),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the piles.
    #[must_use]
    pub const fn piles(&self) -> &[Pile; PILE_COUNT] {
        &self.piles
    }

    /// Returns the pile at `index`.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Returns the undealt reserve.
    #[must_use]
    pub fn reserve(&self) -> &[Card] {
        &self.stack
    }

    /// Returns how many full rounds the reserve holds.
    #[must_use]
    pub fn remaining_deals(&self) -> usize {
        self.stack.len() / PILE_COUNT
    }

    /// Returns the suits completed so far, in order.
    #[must_use]
    pub fn completed(&self) -> &[Suit] {
        &self.completed
    }

    /// Returns the number of completed suits.
    #[must_use]
    pub fn total_completed_runs(&self) -> usize {
        self.completed.len()
    }

    /// Finds the first pile, in pile order, showing `card`.
    ///
    /// Returns the pile index and the index of the matching visible card
    /// nearest the front.
    #[must_use]
    pub fn locate(&self, card: &Card) -> Option<(usize, usize)> {
        self.piles
            .iter()
            .enumerate()
            .find_map(|(pile, p)| p.find_closest_index(card).map(|index| (pile, index)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COMPLETE: {}", self.total_completed_runs())?;
        for (index, pile) in self.piles.iter().enumerate() {
            writeln!(f, "{index}: {pile}")?;
        }
        write!(f, "REMAINING: {}", self.remaining_deals())
    }
}
