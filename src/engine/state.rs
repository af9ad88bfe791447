//! Game state: the pile store and its lifecycle.
//!
//! `GameState` exclusively owns every pile. All twelve piles plus the
//! stock are ordered `Vec<Card>` with the top at the end; face-up
//! marking is independent set storage consulted by the rule predicates
//! and the renderer.
//!
//! A state is created fresh (new shuffled deal) or restored from its
//! saved form, mutated in place for the lifetime of one game, and
//! re-collected into the stock when a new game starts.

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::pile::CardPile;
use super::rng::GameRng;
use super::serialize::SavedState;
use crate::cards::{Card, DECK_SIZE};

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;
/// Number of tableau piles.
pub const NUM_TABLEAUX: usize = 7;

/// Shuffle passes a fresh deal performs over the stock.
const FRESH_SHUFFLE_PASSES: usize = 5;

/// A contiguous tableau suffix moved as a unit.
///
/// A legal fan is never longer than 13 cards (King down to Ace), so it
/// stays inline.
pub type Fan = SmallVec<[Card; 13]>;

/// Complete Klondike game state.
///
/// Mutators assume the matching `can_*` predicate was consulted first;
/// they do not re-validate. Serializes through [`SavedState`], which
/// validates the 52-unique-card invariant on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "SavedState", into = "SavedState")]
pub struct GameState {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: [Vec<Card>; NUM_FOUNDATIONS],
    pub(crate) tableaux: [Vec<Card>; NUM_TABLEAUX],
    pub(crate) face_up: FxHashSet<Card>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a state with the full ordered deck in the stock and the
    /// given shuffle seed. Call [`GameState::fresh_game`] to deal.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a state seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    pub(crate) fn with_rng(rng: GameRng) -> Self {
        Self {
            stock: Card::deck(),
            waste: Vec::new(),
            foundations: Default::default(),
            tableaux: Default::default(),
            face_up: FxHashSet::default(),
            rng,
        }
    }

    // === Queries ===

    /// The stock, bottom to top.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// The waste, bottom to top.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Foundation pile `i` (0..=3), Ace upward.
    #[must_use]
    pub fn foundation(&self, i: usize) -> &[Card] {
        &self.foundations[i]
    }

    /// Tableau pile `i` (0..=6), bottom to top.
    #[must_use]
    pub fn tableau(&self, i: usize) -> &[Card] {
        &self.tableaux[i]
    }

    /// Contents of any pile by identifier.
    #[must_use]
    pub fn pile(&self, id: CardPile) -> &[Card] {
        match id {
            CardPile::Stock => &self.stock,
            CardPile::Waste => &self.waste,
            CardPile::Foundation(i) => &self.foundations[i],
            CardPile::Tableau(i) => &self.tableaux[i],
        }
    }

    /// Is this card marked face up, wherever it sits?
    #[must_use]
    pub fn is_face_up(&self, card: Card) -> bool {
        self.face_up.contains(&card)
    }

    /// Locate `card` inside any tableau pile and return it plus every
    /// card above it, or `None` if it is not in a tableau.
    #[must_use]
    pub fn fan_starting_at(&self, card: Card) -> Option<Fan> {
        for pile in &self.tableaux {
            if let Some(pos) = pile.iter().position(|&c| c == card) {
                return Some(pile[pos..].iter().copied().collect());
            }
        }
        None
    }

    // === Lifecycle ===

    /// Move every card from every pile back into the stock and clear
    /// the face-up set. Resulting stock order is unspecified.
    pub fn collect_all_into_stock(&mut self) {
        self.stock.append(&mut self.waste);
        for pile in &mut self.foundations {
            self.stock.append(pile);
        }
        for pile in &mut self.tableaux {
            self.stock.append(pile);
        }
        self.face_up.clear();
    }

    /// Recycle the exhausted waste into the stock, one card at a time.
    ///
    /// LIFO on both sides: the last waste card becomes the next stock
    /// draw. Face-up flags are cleared as cards go face down into the
    /// stock. Mirrored exactly by [`GameState::undo_collect_waste_into_stock`].
    pub fn collect_waste_into_stock(&mut self) {
        let n = self.waste.len();
        for _ in 0..n {
            let card = self.waste.pop().expect("waste length checked");
            self.face_up.remove(&card);
            self.stock.push(card);
        }
    }

    /// Reverse a waste recycle, restoring waste order and face-up flags.
    ///
    /// Precondition: the stock holds exactly the cards the matching
    /// [`GameState::collect_waste_into_stock`] recycled (the recycle
    /// only ever runs on an empty stock).
    pub fn undo_collect_waste_into_stock(&mut self) {
        while let Some(card) = self.stock.pop() {
            self.face_up.insert(card);
            self.waste.push(card);
        }
    }

    /// Shuffle the stock with `passes` full passes, each swapping every
    /// index with a uniformly random one.
    pub fn shuffle_stock(&mut self, passes: usize) {
        let n = self.stock.len();
        if n == 0 {
            return;
        }
        for _ in 0..passes {
            for j in 0..n {
                let k = self.rng.gen_range_usize(0..n);
                self.stock.swap(j, k);
            }
        }
    }

    /// Deal 28 cards from the stock into the seven tableau piles in the
    /// standard triangular pattern, marking the last card dealt to each
    /// pile face up.
    ///
    /// # Panics
    ///
    /// Panics unless the stock holds the full deck.
    pub fn deal_to_tableaux(&mut self) {
        assert_eq!(self.stock.len(), DECK_SIZE, "deal requires a full stock");
        for i in 0..NUM_TABLEAUX {
            for j in i..NUM_TABLEAUX {
                let card = self.stock.pop().expect("stock length checked");
                self.tableaux[j].push(card);
                if i == j {
                    // Last card dealt to this pile.
                    self.face_up.insert(card);
                }
            }
        }
    }

    /// Start a new game: collect every card, shuffle, and deal.
    ///
    /// Replaces the prior state wholesale; any controller-held undo
    /// history is stale after this.
    pub fn fresh_game(&mut self) {
        debug!("fresh game, shuffle seed {}", self.rng.seed());
        self.collect_all_into_stock();
        self.shuffle_stock(FRESH_SHUFFLE_PASSES);
        self.deal_to_tableaux();
    }
}

impl fmt::Display for GameState {
    /// Diagnostic dump of every pile, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_pile(f: &mut fmt::Formatter<'_>, name: &str, cards: &[Card]) -> fmt::Result {
            write!(f, "{name}:")?;
            for card in cards {
                write!(f, " {card}")?;
            }
            writeln!(f)
        }

        write_pile(f, "stock", &self.stock)?;
        write_pile(f, "waste", &self.waste)?;
        for (i, pile) in self.foundations.iter().enumerate() {
            write_pile(f, &format!("foundation[{i}]"), pile)?;
        }
        for (i, pile) in self.tableaux.iter().enumerate() {
            write_pile(f, &format!("tableau[{i}]"), pile)?;
        }
        Ok(())
    }
}
