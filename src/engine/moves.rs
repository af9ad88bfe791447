//! Move executors: mutation paired with exact reversal.
//!
//! Every executor returns the provenance the controller needs to undo
//! the move precisely; the controller owns the undo stack. Executors
//! assume the matching predicate in [`super::rules`] already approved
//! the move — calling one on an illegal move is a contract violation
//! and panics rather than corrupting the piles.

use log::trace;

use super::pile::DropSource;
use super::state::{GameState, NUM_FOUNDATIONS, NUM_TABLEAUX};
use crate::cards::Card;

impl GameState {
    // === Dealing ===

    /// Deal the top stock card to the waste, face up.
    ///
    /// # Panics
    ///
    /// Panics if the stock is empty (gate with [`GameState::can_deal`]).
    pub fn deal_card(&mut self) {
        let card = self.stock.pop().expect("deal from empty stock");
        self.face_up.insert(card);
        self.waste.push(card);
    }

    /// Reverse a single deal: the top waste card goes back to the
    /// stock, face down.
    ///
    /// # Panics
    ///
    /// Panics if the waste is empty.
    pub fn undo_deal_card(&mut self) {
        let card = self.waste.pop().expect("undo deal with empty waste");
        self.face_up.remove(&card);
        self.stock.push(card);
    }

    /// Deal up to `n` cards from the stock to the waste.
    ///
    /// Returns the cards actually dealt, in deal order, so the caller
    /// can animate them and knows the count for
    /// [`GameState::undo_deal_cards`]. Dealing from a short or empty
    /// stock deals what is there.
    pub fn deal_cards(&mut self, n: usize) -> Vec<Card> {
        let count = n.min(self.stock.len());
        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.stock.pop().expect("stock length checked");
            self.face_up.insert(card);
            self.waste.push(card);
            dealt.push(card);
        }
        trace!("dealt {count} of {n} requested");
        dealt
    }

    /// Reverse a batch deal of exactly `n` cards.
    ///
    /// Precondition: `n` is the length returned by the matching
    /// [`GameState::deal_cards`] call; panics if it exceeds the waste.
    pub fn undo_deal_cards(&mut self, n: usize) {
        for _ in 0..n {
            self.undo_deal_card();
        }
    }

    // === Drops ===

    /// Drop `card` on foundation `i`, returning the pile it came from.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not the top card of the waste, a foundation,
    /// or a tableau pile (gate with [`GameState::can_drop_on_foundation`]).
    pub fn drop_on_foundation(&mut self, card: Card, i: usize) -> DropSource {
        let source = self.remove_top_card(card);
        self.foundations[i].push(card);
        trace!("{card} {source} -> foundation[{i}]");
        source
    }

    /// Reverse a foundation drop: pop foundation `i` and put the card
    /// back on `source`.
    ///
    /// # Panics
    ///
    /// Panics if foundation `i` is empty.
    pub fn undo_drop_on_foundation(&mut self, source: DropSource, i: usize) {
        let card = self.foundations[i]
            .pop()
            .expect("undo drop on empty foundation");
        self.pile_mut(source).push(card);
    }

    /// Drop `card` on tableau pile `i`, returning the pile it came from.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not the top card of the waste, a foundation,
    /// or a tableau pile (gate with [`GameState::can_drop_on_tableau`]).
    pub fn drop_on_tableau(&mut self, card: Card, i: usize) -> DropSource {
        let source = self.remove_top_card(card);
        self.tableaux[i].push(card);
        trace!("{card} {source} -> tableau[{i}]");
        source
    }

    /// Reverse a tableau drop: pop tableau `i` and put the card back on
    /// `source`.
    ///
    /// # Panics
    ///
    /// Panics if tableau pile `i` is empty.
    pub fn undo_drop_on_tableau(&mut self, source: DropSource, i: usize) {
        let card = self.tableaux[i]
            .pop()
            .expect("undo drop on empty tableau");
        self.pile_mut(source).push(card);
    }

    /// Drop a whole fan on tableau pile `i`, returning the pile it came
    /// from. The fan keeps its order.
    ///
    /// # Panics
    ///
    /// Panics if the fan is empty or its last card is not the top of
    /// any pile (gate with [`GameState::can_drop_fan`]).
    pub fn drop_fan(&mut self, fan: &[Card], i: usize) -> DropSource {
        let source = self.remove_top_cards(fan);
        self.tableaux[i].extend_from_slice(fan);
        trace!("fan of {} {source} -> tableau[{i}]", fan.len());
        source
    }

    /// Reverse a fan drop: move the last `len` cards of tableau `i`
    /// back to `source`, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if tableau pile `i` holds fewer than `len` cards.
    pub fn undo_drop_fan(&mut self, len: usize, source: DropSource, i: usize) {
        let pile = &mut self.tableaux[i];
        assert!(pile.len() >= len, "undo fan longer than destination");
        let fan = pile.split_off(pile.len() - len);
        self.pile_mut(source).extend(fan);
    }

    // === Flips ===

    /// Mark `card` face up. Legality was checked via
    /// [`GameState::can_flip`]; the only effect is on the face-up set.
    pub fn flip_card(&mut self, card: Card) {
        self.face_up.insert(card);
    }

    /// Mark `card` face down again.
    pub fn undo_flip_card(&mut self, card: Card) {
        self.face_up.remove(&card);
    }

    // === Provenance helpers ===

    /// Find the pile holding `card` as its top card.
    ///
    /// Scan order: waste, foundations 0..=3, tableaux 0..=6. The stock
    /// is skipped; its cards are never legal drop subjects, which is
    /// why [`DropSource`] has no stock variant.
    fn find_drop_source(&self, card: Card) -> Option<DropSource> {
        if self.waste.last() == Some(&card) {
            return Some(DropSource::Waste);
        }
        for i in 0..NUM_FOUNDATIONS {
            if self.foundations[i].last() == Some(&card) {
                return Some(DropSource::Foundation(i));
            }
        }
        for i in 0..NUM_TABLEAUX {
            if self.tableaux[i].last() == Some(&card) {
                return Some(DropSource::Tableau(i));
            }
        }
        None
    }

    /// Remove `card` from the top of whichever pile holds it.
    fn remove_top_card(&mut self, card: Card) -> DropSource {
        let source = self
            .find_drop_source(card)
            .unwrap_or_else(|| panic!("{card} is not on top of any pile"));
        self.pile_mut(source).pop();
        source
    }

    /// Remove a fan (identified by its last card being some pile's top)
    /// from the tail of whichever pile holds it.
    fn remove_top_cards(&mut self, fan: &[Card]) -> DropSource {
        let last = *fan.last().expect("fan must be non-empty");
        let source = self
            .find_drop_source(last)
            .unwrap_or_else(|| panic!("fan ending in {last} is not on top of any pile"));
        let pile = self.pile_mut(source);
        pile.truncate(pile.len() - fan.len());
        source
    }

    fn pile_mut(&mut self, source: DropSource) -> &mut Vec<Card> {
        match source {
            DropSource::Waste => &mut self.waste,
            DropSource::Foundation(i) => &mut self.foundations[i],
            DropSource::Tableau(i) => &mut self.tableaux[i],
        }
    }
}
