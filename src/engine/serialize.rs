//! Saved-state wire form and load-time validation.
//!
//! [`SavedState`] is the nested keyed structure an external persistence
//! collaborator stores: one list per pile plus the face-up card list.
//! `GameState` serializes through it, and restoring validates that the
//! piles hold exactly the 52 standard cards, each exactly once, so a
//! corrupt save fails loudly instead of producing an inconsistent game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rng::GameRng;
use super::state::{GameState, NUM_FOUNDATIONS, NUM_TABLEAUX};
use crate::cards::{Card, DECK_SIZE};

/// Wire form of a complete game state.
///
/// Top-level keys are exactly `stock`, `waste`, `foundation`,
/// `tableau`, and `faceUpCards`. Pile order is bottom to top;
/// `faceUpCards` has set semantics and its order is irrelevant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedState {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundation: [Vec<Card>; NUM_FOUNDATIONS],
    pub tableau: [Vec<Card>; NUM_TABLEAUX],
    #[serde(rename = "faceUpCards")]
    pub face_up_cards: Vec<Card>,
}

impl SavedState {
    /// Check the 52-unique-card invariant across all piles.
    pub fn validate(&self) -> Result<(), MalformedState> {
        let mut seen = FxHashSet::default();
        let mut total = 0usize;

        let piles = std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundation.iter())
            .chain(self.tableau.iter());

        for pile in piles {
            for &card in pile {
                if !seen.insert(card) {
                    return Err(MalformedState::DuplicateCard(card));
                }
                total += 1;
            }
        }

        if total != DECK_SIZE {
            return Err(MalformedState::CardCount(total));
        }
        Ok(())
    }
}

impl From<GameState> for SavedState {
    fn from(state: GameState) -> Self {
        SavedState {
            stock: state.stock,
            waste: state.waste,
            foundation: state.foundations,
            tableau: state.tableaux,
            face_up_cards: state.face_up.into_iter().collect(),
        }
    }
}

impl TryFrom<SavedState> for GameState {
    type Error = MalformedState;

    /// Restore a game, validating the card set first. The restored
    /// state gets a fresh entropy-seeded RNG; shuffle history is not
    /// part of the wire contract.
    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        saved.validate()?;
        Ok(GameState {
            stock: saved.stock,
            waste: saved.waste,
            foundations: saved.foundation,
            tableaux: saved.tableau,
            face_up: saved.face_up_cards.into_iter().collect(),
            rng: GameRng::from_entropy(),
        })
    }
}

impl GameState {
    /// Snapshot this state into its wire form.
    #[must_use]
    pub fn saved(&self) -> SavedState {
        self.clone().into()
    }

    /// Restore a state from its wire form.
    pub fn restore(saved: SavedState) -> Result<Self, MalformedState> {
        saved.try_into()
    }
}

/// A saved state that does not describe a standard 52-card game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedState {
    /// A card appears in more than one pile position.
    DuplicateCard(Card),
    /// The piles hold the wrong number of cards in total.
    CardCount(usize),
}

impl fmt::Display for MalformedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedState::DuplicateCard(card) => {
                write!(f, "card {card} appears more than once")
            }
            MalformedState::CardCount(n) => {
                write!(f, "expected {DECK_SIZE} cards, found {n}")
            }
        }
    }
}

impl std::error::Error for MalformedState {}
