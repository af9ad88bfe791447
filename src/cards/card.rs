//! Card values for a standard 52-card deck.
//!
//! `Card` is a plain value: `(rank, suit)` uniquely identifies a
//! physical card because a standard deck has no duplicates. Ranks run
//! 1 (Ace) through 13 (King); suits carry a red/black `Color` used by
//! the tableau rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of an Ace (lowest).
pub const ACE: u8 = 1;
/// Rank of a King (highest).
pub const KING: u8 = 13;
/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// All four suits, in foundation-index order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Decode a suit from its wire index.
    pub fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Suit::Spades),
            1 => Ok(Suit::Hearts),
            2 => Ok(Suit::Diamonds),
            3 => Ok(Suit::Clubs),
            other => Err(CardError::InvalidSuit(other)),
        }
    }

    /// Wire index of this suit (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Red or black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

/// Suit color, the property the tableau alternation rule cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A playing card.
///
/// Serializes as a `{rank, suit}` record with primitive values;
/// decoding rejects out-of-range ranks and suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Wire form of a card: both fields as plain integers.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawCard {
    rank: u8,
    suit: u8,
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        RawCard {
            rank: card.rank,
            suit: card.suit.index(),
        }
    }
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        if !(ACE..=KING).contains(&raw.rank) {
            return Err(CardError::InvalidRank(raw.rank));
        }
        Ok(Card {
            rank: raw.rank,
            suit: Suit::from_index(raw.suit)?,
        })
    }
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!((ACE..=KING).contains(&rank), "rank {rank} out of range");
        Self { rank, suit }
    }

    /// Rank in 1 (Ace) ..= 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Color of this card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// The full ordered 52-card deck, grouped by suit, Ace to King.
    #[must_use]
    pub fn deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                deck.push(Card { rank, suit });
            }
        }
        deck
    }
}

impl fmt::Display for Card {
    /// Short code like "AH", "7C", "TD", "KS".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => (b'0' + n) as char,
        };
        let s = match self.suit {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        };
        write!(f, "{r}{s}")
    }
}

/// Error decoding a card from its wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardError {
    /// Rank outside `1..=13`.
    InvalidRank(u8),
    /// Suit index outside `0..=3`.
    InvalidSuit(u8),
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardError::InvalidRank(rank) => write!(f, "invalid card rank {rank}"),
            CardError::InvalidSuit(suit) => write!(f, "invalid suit index {suit}"),
        }
    }
}

impl std::error::Error for CardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_is_52_unique_cards() {
        let deck = Card::deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: std::collections::HashSet<_> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Card::new(1, Suit::Hearts).color(), Color::Red);
        assert_eq!(Card::new(1, Suit::Diamonds).color(), Color::Red);
        assert_eq!(Card::new(1, Suit::Spades).color(), Color::Black);
        assert_eq!(Card::new(1, Suit::Clubs).color(), Color::Black);
    }

    #[test]
    fn test_display_codes() {
        assert_eq!(Card::new(1, Suit::Hearts).to_string(), "AH");
        assert_eq!(Card::new(7, Suit::Clubs).to_string(), "7C");
        assert_eq!(Card::new(10, Suit::Diamonds).to_string(), "TD");
        assert_eq!(Card::new(13, Suit::Spades).to_string(), "KS");
    }

    #[test]
    fn test_serde_wire_form() {
        let card = Card::new(1, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"rank":1,"suit":1}"#);

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_serde_rejects_bad_rank() {
        let err = serde_json::from_str::<Card>(r#"{"rank":14,"suit":0}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<Card>(r#"{"rank":0,"suit":0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_serde_rejects_bad_suit() {
        let err = serde_json::from_str::<Card>(r#"{"rank":5,"suit":4}"#);
        assert!(err.is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_new_rejects_bad_rank() {
        let _ = Card::new(14, Suit::Spades);
    }
}
