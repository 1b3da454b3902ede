extern crate alloc;

use alloc::vec::Vec;

use log::{debug, trace};

use crate::card::Card;
use crate::error::{BoundsError, MoveError, MoveRejection};
use crate::options::EmptyPileRule;
use crate::result::MoveOutcome;

use super::{Board, PILE_COUNT};

impl Board {
    fn check_pile(index: usize) -> Result<(), MoveError> {
        if index < PILE_COUNT {
            Ok(())
        } else {
            Err(MoveError::PileNotFound(index))
        }
    }

    /// Checks a move without applying it.
    ///
    /// # Errors
    ///
    /// Returns the error [`move_run`](Self::move_run) would return.
    pub fn can_move(&self, from: usize, card_index: usize, to: usize) -> Result<(), MoveError> {
        Self::check_pile(from)?;
        Self::check_pile(to)?;
        if from == to {
            return Err(MoveError::SamePile(from));
        }

        let source = &self.piles[from];
        let target = &self.piles[to];
        let cards = source.visible().get(card_index..).unwrap_or_default();

        let verdict = source
            .can_detach(card_index)
            .map_err(MoveRejection::from)
            .and_then(|()| {
                if target.is_empty() && self.options.empty_pile == EmptyPileRule::Reject {
                    Err(MoveRejection::EmptyTarget(BoundsError { index: 0, len: 0 }))
                } else {
                    target.can_accept(cards).map_err(MoveRejection::from)
                }
            });

        verdict.map_err(|reason| {
            trace!("rejected move {from}:{card_index} -> {to}: {reason}");
            MoveError::Rejected {
                cards: cards.to_vec(),
                target: target.visible().to_vec(),
                reason,
            }
        })
    }

    /// Moves the visible cards of pile `from`, starting at `card_index`,
    /// onto pile `to`.
    ///
    /// Both piles are checked before either is touched: the source must
    /// release the run and the target must accept it. The target then clears
    /// a completed suit if one formed, and the source turns up its next
    /// hidden card if it ran out of visible cards.
    ///
    /// # Errors
    ///
    /// Returns an error if either pile index is out of range, the piles are
    /// the same, or the move is not legal. The board is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::{Board, GameOptions};
    ///
    /// let mut board = Board::new(GameOptions::default().with_shuffle(false), 0);
    /// // 2♣ onto 3♥
    /// let outcome = board.move_run(4, 0, 9).unwrap();
    /// assert_eq!(outcome.moved, 1);
    /// ```
    pub fn move_run(
        &mut self,
        from: usize,
        card_index: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.can_move(from, card_index, to)?;

        let cards = self.piles[from].visible()[card_index..].to_vec();
        let revealed = self.piles[from]
            .detach(card_index)
            .map_err(|err| MoveError::Rejected {
                cards: cards.clone(),
                target: self.piles[to].visible().to_vec(),
                reason: MoveRejection::Detach(err.into()),
            })?;
        let completed = self.piles[to].force_accept(&cards);

        if let Some(completion) = completed {
            self.completed.push(completion.suit);
        }

        debug!("moved {} card(s) from pile {from} to pile {to}", cards.len());
        Ok(MoveOutcome {
            from,
            to,
            moved: cards.len(),
            completed,
            revealed,
        })
    }

    /// Moves the run starting at `card` onto the pile whose front card is
    /// `onto`.
    ///
    /// A play deck holds two of every card, so both may be showing. Every
    /// showing copy of `card` is tried against every pile fronted by `onto`,
    /// in pile order; the first legal pairing is played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CardNotFound`] or [`MoveError::TargetNotFound`]
    /// if either card is not in play, otherwise the
    /// [`move_run`](Self::move_run) error for the first pairing tried.
    pub fn move_card(&mut self, card: &Card, onto: &Card) -> Result<MoveOutcome, MoveError> {
        let sources: Vec<(usize, usize)> = self
            .piles
            .iter()
            .enumerate()
            .filter_map(|(from, pile)| Some((from, pile.find_closest_index(card)?)))
            .collect();
        if sources.is_empty() {
            return Err(MoveError::CardNotFound(*card));
        }

        let targets: Vec<usize> = self
            .piles
            .iter()
            .enumerate()
            .filter(|(_, pile)| pile.top().is_some_and(|top| top.strict_eq(onto)))
            .map(|(to, _)| to)
            .collect();
        if targets.is_empty() {
            return Err(MoveError::TargetNotFound(*onto));
        }

        let mut first_err = None;
        for &(from, card_index) in &sources {
            for &to in &targets {
                match self.can_move(from, card_index, to) {
                    Ok(()) => return self.move_run(from, card_index, to),
                    Err(err) => {
                        first_err.get_or_insert(err);
                    }
                }
            }
        }
        Err(first_err.unwrap_or(MoveError::CardNotFound(*card)))
    }
}
