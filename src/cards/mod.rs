//! Card values: ranks, suits, colors, and the standard deck.

mod card;

pub use card::{Card, CardError, Color, Suit, ACE, DECK_SIZE, KING};
