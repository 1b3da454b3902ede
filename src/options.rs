//! Game configuration options.

/// Whether an empty pile takes cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum EmptyPileRule {
    /// An empty pile takes any run.
    #[default]
    AcceptAny,
    /// An empty pile takes nothing.
    Reject,
}

/// Configuration options for a Spider game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use spiders::{EmptyPileRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_shuffle(false)
///     .with_empty_pile(EmptyPileRule::Reject);
/// assert!(!options.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the play deck is shuffled before dealing.
    ///
    /// When `false` the deck keeps its suit-major order, so every deal is
    /// identical.
    pub shuffle: bool,
    /// What an empty pile accepts.
    pub empty_pile: EmptyPileRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            empty_pile: EmptyPileRule::AcceptAny,
        }
    }
}

impl GameOptions {
    /// Sets whether the deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle(false);
    /// assert_eq!(options.shuffle, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets what an empty pile accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::{EmptyPileRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_empty_pile(EmptyPileRule::Reject);
    /// assert_eq!(options.empty_pile, EmptyPileRule::Reject);
    /// ```
    #[must_use]
    pub const fn with_empty_pile(mut self, rule: EmptyPileRule) -> Self {
        self.empty_pile = rule;
        self
    }
}
