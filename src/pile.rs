//! Table piles: face-down cards topped by face-up cards.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::card::{Card, HIDDEN_SYMBOL, RANKS_PER_SUIT, Suit};
use crate::deck::{RunOrder, suit_run};
use crate::error::{BoundsError, DetachError, RunError, StackError};

/// A full suit cleared from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Suit of the cleared run.
    pub suit: Suit,
    /// Card turned face up after the run left the pile, if any was hidden.
    pub revealed: Option<Card>,
}

/// One column of the table.
///
/// Both sequences are ordered from the table outward: `hidden[0]` lies on
/// the table, `visible[0]` rests on the last hidden card, and the last
/// visible card is the one in front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Face-down cards.
    hidden: Vec<Card>,
    /// Face-up cards.
    visible: Vec<Card>,
}

impl Pile {
    /// Creates a pile.
    ///
    /// If `visible` is empty and `hidden` is not, the outermost hidden card
    /// is turned face up.
    #[must_use]
    pub fn new(hidden: Vec<Card>, visible: Vec<Card>) -> Self {
        let mut pile = Self { hidden, visible };
        if pile.visible.is_empty() {
            pile.flip();
        }
        pile
    }

    /// Returns the face-down cards.
    #[must_use]
    pub fn hidden(&self) -> &[Card] {
        &self.hidden
    }

    /// Returns the face-up cards.
    #[must_use]
    pub fn visible(&self) -> &[Card] {
        &self.visible
    }

    /// Returns the outermost face-up card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.visible.last()
    }

    /// Returns the total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len() + self.visible.len()
    }

    /// Returns whether the pile holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty() && self.visible.is_empty()
    }

    /// Checks whether `cards` can be placed on this pile.
    ///
    /// An empty pile takes any run.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::NoCards`] if `cards` is empty, or
    /// [`StackError::IllegalStack`] if the first card does not stack on the
    /// outermost visible card.
    pub fn can_accept(&self, cards: &[Card]) -> Result<(), StackError> {
        let card = cards.first().ok_or(StackError::NoCards)?;
        match self.visible.last() {
            Some(onto) if !card.can_stack_on(onto) => Err(StackError::IllegalStack {
                card: *card,
                onto: *onto,
            }),
            _ => Ok(()),
        }
    }

    /// Places `cards` on this pile, then clears a completed suit if one
    /// formed.
    ///
    /// # Errors
    ///
    /// Returns the [`can_accept`](Self::can_accept) error; the pile is left
    /// untouched.
    pub fn accept(&mut self, cards: &[Card]) -> Result<Option<Completion>, StackError> {
        self.can_accept(cards)?;
        Ok(self.force_accept(cards))
    }

    /// Places `cards` on this pile without checking legality, then clears a
    /// completed suit if one formed.
    pub fn force_accept(&mut self, cards: &[Card]) -> Option<Completion> {
        self.visible.extend_from_slice(cards);
        self.take_completed()
    }

    /// Checks whether the visible cards from `index` onward can be picked up.
    ///
    /// # Errors
    ///
    /// Returns [`DetachError::Bounds`] if `index` is past the visible cards,
    /// or [`DetachError::IllegalRun`] naming the first pair that breaks the
    /// run.
    pub fn can_detach(&self, index: usize) -> Result<(), DetachError> {
        let run = self.visible.get(index..).filter(|run| !run.is_empty()).ok_or(
            BoundsError {
                index,
                len: self.visible.len(),
            },
        )?;

        for pair in run.windows(2) {
            let (card, next) = (pair[0], pair[1]);
            if !next.can_stack_on(&card) {
                return Err(RunError {
                    card,
                    next,
                    run: run.to_vec(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Removes the visible cards from `index` onward.
    ///
    /// Legality is not checked; call [`can_detach`](Self::can_detach) first.
    /// Returns the card turned face up if the visible cards ran out.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError`] if `index` is past the visible cards.
    pub fn detach(&mut self, index: usize) -> Result<Option<Card>, BoundsError> {
        if index >= self.visible.len() {
            return Err(BoundsError {
                index,
                len: self.visible.len(),
            });
        }

        self.visible.truncate(index);
        Ok(self.flip_if_exposed())
    }

    /// Turns the outermost hidden card face up, placing it under the visible
    /// cards. Does nothing if no card is hidden.
    pub fn flip(&mut self) -> Option<Card> {
        let card = self.hidden.pop()?;
        self.visible.insert(0, card);
        debug!("flipped {card}");
        Some(card)
    }

    /// Returns the index of the visible card identical to `card` that is
    /// nearest the front.
    #[must_use]
    pub fn find_closest_index(&self, card: &Card) -> Option<usize> {
        self.visible.iter().rposition(|visible| visible.strict_eq(card))
    }

    /// Returns display tokens: one placeholder per hidden card followed by
    /// the visible cards.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let hidden = self.hidden.iter().map(|_| HIDDEN_SYMBOL.to_string());
        let visible = self.visible.iter().map(ToString::to_string);
        hidden.chain(visible).collect()
    }

    fn flip_if_exposed(&mut self) -> Option<Card> {
        if self.visible.is_empty() {
            self.flip()
        } else {
            None
        }
    }

    fn take_completed(&mut self) -> Option<Completion> {
        let start = self.visible.len().checked_sub(RANKS_PER_SUIT)?;
        let tail = &self.visible[start..];
        let suit = tail[0].suit;
        if tail != suit_run(suit, RunOrder::Descending).as_slice() {
            return None;
        }

        self.visible.truncate(start);
        debug!("completed {suit}");
        Some(Completion {
            suit,
            revealed: self.flip(),
        })
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for _ in &self.hidden {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{HIDDEN_SYMBOL}")?;
            first = false;
        }
        for card in &self.visible {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
