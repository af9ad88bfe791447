//! Move legality: pure predicates, no side effects.
//!
//! The controller consults the matching predicate before calling any
//! mutator in [`super::moves`]. There is no game-phase machine; legality
//! gating is entirely predicate-based, and [`GameState::is_won`] is a
//! pure query rather than a terminal transition.

use super::state::{GameState, NUM_FOUNDATIONS};
use crate::cards::{Card, ACE, KING};

impl GameState {
    /// Can a card be dealt from the stock to the waste?
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.stock.is_empty()
    }

    /// Can `card` be dropped on foundation `i`?
    ///
    /// Legal on an empty foundation for an Ace, otherwise for the same
    /// suit one rank above the current top.
    #[must_use]
    pub fn can_drop_on_foundation(&self, card: Card, i: usize) -> bool {
        match self.foundations[i].last() {
            None => card.rank() == ACE,
            Some(top) => card.suit() == top.suit() && card.rank() == top.rank() + 1,
        }
    }

    /// Can `card` be dropped on tableau pile `i`?
    ///
    /// Legal on an empty pile for a King, otherwise on a face-up top
    /// card one rank above `card` and of the opposite color.
    #[must_use]
    pub fn can_drop_on_tableau(&self, card: Card, i: usize) -> bool {
        match self.tableaux[i].last() {
            None => card.rank() == KING,
            Some(&top) => {
                self.is_face_up(top)
                    && card.rank() + 1 == top.rank()
                    && card.color() != top.color()
            }
        }
    }

    /// Can a fan be dropped on tableau pile `i`?
    ///
    /// Only the lead card's rank and color matter; the fan itself is
    /// already a legal tableau suffix.
    #[must_use]
    pub fn can_drop_fan(&self, fan: &[Card], i: usize) -> bool {
        fan.first()
            .is_some_and(|&lead| self.can_drop_on_tableau(lead, i))
    }

    /// Can `card` be flipped face up?
    ///
    /// Legal only for a face-down card sitting on top of a tableau pile.
    #[must_use]
    pub fn can_flip(&self, card: Card) -> bool {
        !self.is_face_up(card)
            && self
                .tableaux
                .iter()
                .any(|pile| pile.last() == Some(&card))
    }

    /// Has the game been won? True iff every foundation holds all 13
    /// cards of its suit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        (0..NUM_FOUNDATIONS).all(|i| self.foundations[i].len() == 13)
    }
}
