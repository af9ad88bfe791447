//! Pile identifiers and move provenance.
//!
//! ## CardPile
//!
//! Tagged selector over the twelve piles plus the stock. Used for
//! queries and as metadata; never stored long-term.
//!
//! ## DropSource
//!
//! The provenance a drop executor returns so the controller can undo
//! the move exactly. A drop's source is never legitimately the stock,
//! so `DropSource` excludes it at the type level instead of no-opping
//! on an impossible variant at undo time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for any pile in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardPile {
    /// The face-down draw pile.
    Stock,
    /// The face-up discard pile fed by stock deals.
    Waste,
    /// One of the four ascending single-suit piles (index 0..=3).
    Foundation(usize),
    /// One of the seven playing piles (index 0..=6).
    Tableau(usize),
}

/// Origin pile of a dropped card or fan, captured for undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropSource {
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl From<DropSource> for CardPile {
    fn from(source: DropSource) -> Self {
        match source {
            DropSource::Waste => CardPile::Waste,
            DropSource::Foundation(i) => CardPile::Foundation(i),
            DropSource::Tableau(i) => CardPile::Tableau(i),
        }
    }
}

impl fmt::Display for CardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardPile::Stock => write!(f, "stock"),
            CardPile::Waste => write!(f, "waste"),
            CardPile::Foundation(i) => write!(f, "foundation[{i}]"),
            CardPile::Tableau(i) => write!(f, "tableau[{i}]"),
        }
    }
}

impl fmt::Display for DropSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CardPile::from(*self))
    }
}
