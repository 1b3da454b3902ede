//! Card, suit, and rank types.

extern crate alloc;

use alloc::string::ToString;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// Placeholder shown in place of a face-down card.
pub const HIDDEN_SYMBOL: char = '?';

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits, in the order a deck is built.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
        }
    }

    /// Parses a display symbol. `❤` is accepted as an alias for hearts.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownSuit`] for any other character.
    pub fn from_symbol(symbol: char) -> Result<Self, ParseError> {
        match symbol {
            '♥' | '❤' => Ok(Self::Hearts),
            '♠' => Ok(Self::Spades),
            '♣' => Ok(Self::Clubs),
            '♦' => Ok(Self::Diamonds),
            other => Err(ParseError::UnknownSuit(other.to_string())),
        }
    }

    /// Returns the single-letter command code (`h`, `s`, `c`, `d`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Spades => 's',
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
        }
    }

    /// Parses a single-letter command code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownSuit`] if the letter is not a suit code.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        match code.to_ascii_lowercase() {
            'h' => Ok(Self::Hearts),
            's' => Ok(Self::Spades),
            'c' => Ok(Self::Clubs),
            'd' => Ok(Self::Diamonds),
            _ => Err(ParseError::UnknownSuit(code.to_string())),
        }
    }

    /// Returns the suit color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Spades | Self::Clubs => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered Ace (low) to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Self; RANKS_PER_SUIT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the 1-based rank index (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RankOutOfRange`] if `value` is not in `1..=13`.
    pub const fn from_value(value: u8) -> Result<Self, ParseError> {
        if value == 0 || value as usize > RANKS_PER_SUIT {
            return Err(ParseError::RankOutOfRange(value));
        }
        Ok(Self::ALL[value as usize - 1])
    }

    /// Returns the text label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a text label. Face-card letters are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownRank`] if `label` is not one of the
    /// thirteen labels.
    pub fn from_label(label: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseError::UnknownRank(label.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// `==` compares suit and rank. Use [`Card::same_value`] for the rank-only
/// comparison the rules are phrased in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from a 1-based rank index.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RankOutOfRange`] if `value` is not in `1..=13`.
    pub fn from_rank_value(suit: Suit, value: u8) -> Result<Self, ParseError> {
        Rank::from_value(value).map(|rank| Self::new(suit, rank))
    }

    /// Returns the 1-based rank index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the card color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Returns whether both cards have the same rank, regardless of suit.
    #[must_use]
    pub const fn same_value(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    /// Returns whether both cards have the same rank and suit.
    ///
    /// Same as `==`; named as the counterpart of [`Card::same_value`].
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Compares cards by rank only.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Returns whether this card may be placed on `other`.
    ///
    /// The card must be exactly one rank lower, and either share `other`'s
    /// suit or have the opposite color.
    #[must_use]
    pub fn can_stack_on(&self, other: &Self) -> bool {
        self.value() + 1 == other.value()
            && (self.suit == other.suit || self.color() != other.color())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses `<rank><suit symbol>`, e.g. `10♦` or `Q♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let symbol = s.chars().next_back().ok_or(ParseError::Empty)?;
        let suit = Suit::from_symbol(symbol)?;
        let rank = Rank::from_label(&s[..s.len() - symbol.len_utf8()])?;
        Ok(Self::new(suit, rank))
    }
}

/// Display adapter that renders a card slice as `['10♦', '2♥']`.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a>(pub &'a [Card]);

impl fmt::Display for Run<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{card}'")?;
        }
        f.write_str("]")
    }
}
