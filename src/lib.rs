//! # klondike-engine
//!
//! A Klondike solitaire game-state engine with exactly reversible moves.
//!
//! ## Design Principles
//!
//! 1. **Predicate-gated mutation**: Pure `can_*` predicates decide
//!    legality; mutators assume legality and never re-validate.
//!
//! 2. **Provenance-based undo**: Every mutator returns the data needed
//!    for its exact inverse. The controller owns the undo stack; the
//!    engine only supplies per-move provenance.
//!
//! 3. **Single owner**: `GameState` exclusively owns all pile contents.
//!    `Card` is a plain `Copy` value, so nothing aliases.
//!
//! The engine is single-threaded and synchronous: no locks, no I/O, no
//! suspension points. Callers serialize access themselves if several
//! threads can touch one game instance.
//!
//! ## Modules
//!
//! - `cards`: Card values, suits, colors, the standard deck
//! - `engine`: Pile store, rule predicates, move executors, saved state

pub mod cards;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{Card, CardError, Color, Suit, ACE, DECK_SIZE, KING};

pub use crate::engine::{
    CardPile, DropSource, Fan, GameRng, GameState, MalformedState, SavedState, NUM_FOUNDATIONS,
    NUM_TABLEAUX,
};
