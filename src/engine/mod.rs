//! The game engine: pile store, rule predicates, move executors, and
//! the saved-state adapter.
//!
//! ## Key Types
//!
//! - `GameState`: the aggregate owning every pile and the face-up set
//! - `CardPile` / `DropSource`: pile identifiers and move provenance
//! - `SavedState` / `MalformedState`: wire form and its validation
//! - `GameRng`: seeded RNG for shuffles
//!
//! ## Control flow
//!
//! The controller calls a `can_*` predicate, then the matching mutator,
//! capturing its return value; to undo, it calls the paired `undo_*`
//! with that captured value. The engine holds no history of its own.

pub mod moves;
pub mod pile;
pub mod rng;
pub mod rules;
pub mod serialize;
pub mod state;

pub use pile::{CardPile, DropSource};
pub use rng::GameRng;
pub use serialize::{MalformedState, SavedState};
pub use state::{Fan, GameState, NUM_FOUNDATIONS, NUM_TABLEAUX};
