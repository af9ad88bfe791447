//! Property tests for rule legality and card conservation.

use proptest::prelude::*;

use klondike_engine::{
    Card, CardPile, GameState, SavedState, Suit, ACE, DECK_SIZE, KING, NUM_FOUNDATIONS,
    NUM_TABLEAUX,
};

fn arb_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
    ]
}

fn arb_card() -> impl Strategy<Value = Card> {
    (ACE..=KING, arb_suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Build a state through the wire form: the given piles, every
/// remaining card in the stock, the given cards marked face up.
fn state_with(
    foundation0: Vec<Card>,
    tableau0: Vec<Card>,
    face_up: Vec<Card>,
) -> GameState {
    let placed: std::collections::HashSet<Card> =
        foundation0.iter().chain(&tableau0).copied().collect();
    let stock: Vec<Card> = Card::deck()
        .into_iter()
        .filter(|card| !placed.contains(card))
        .collect();

    let mut foundation: [Vec<Card>; 4] = Default::default();
    foundation[0] = foundation0;
    let mut tableau: [Vec<Card>; 7] = Default::default();
    tableau[0] = tableau0;

    GameState::restore(SavedState {
        stock,
        waste: vec![],
        foundation,
        tableau,
        face_up_cards: face_up,
    })
    .expect("constructed state holds the full deck")
}

fn assert_conservation(state: &GameState) {
    let mut seen = std::collections::HashSet::new();
    let mut piles = vec![CardPile::Stock, CardPile::Waste];
    piles.extend((0..NUM_FOUNDATIONS).map(CardPile::Foundation));
    piles.extend((0..NUM_TABLEAUX).map(CardPile::Tableau));

    for pile in piles {
        for &card in state.pile(pile) {
            assert!(seen.insert(card), "{card} appears twice");
        }
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

proptest! {
    /// Foundation legality matches the rule exactly, over every partial
    /// foundation height and candidate card.
    #[test]
    fn prop_foundation_legality(height in 0u8..=13, suit in arb_suit(), card in arb_card()) {
        let run: Vec<Card> = (1..=height).map(|r| Card::new(r, suit)).collect();
        let state = state_with(run, vec![], vec![]);

        let expected = if height == 0 {
            card.rank() == ACE
        } else {
            card.suit() == suit && card.rank() == height + 1
        };
        prop_assert_eq!(state.can_drop_on_foundation(card, 0), expected);
    }

    /// Tableau legality: face-up top, descending rank, alternating
    /// color; a face-down top rejects everything.
    #[test]
    fn prop_tableau_legality(top in arb_card(), top_face_up in any::<bool>(), card in arb_card()) {
        let face_up = if top_face_up { vec![top] } else { vec![] };
        let state = state_with(vec![], vec![top], face_up);

        let expected = top_face_up
            && card.rank() + 1 == top.rank()
            && card.color() != top.color();
        prop_assert_eq!(state.can_drop_on_tableau(card, 0), expected);

        // Empty pile: kings only, regardless of the candidate's suit.
        prop_assert_eq!(state.can_drop_on_tableau(card, 1), card.rank() == KING);
    }

    /// Deal/undo round trips restore stock, waste, and face-up marking
    /// for any prior deal depth and any batch size.
    #[test]
    fn prop_deal_undo_round_trip(seed in any::<u64>(), pre in 0usize..30, n in 0usize..30) {
        let mut state = GameState::new(seed);
        state.fresh_game();
        state.deal_cards(pre);

        let stock_before = state.stock().to_vec();
        let waste_before = state.waste().to_vec();

        let dealt = state.deal_cards(n);
        prop_assert_eq!(dealt.len(), n.min(stock_before.len()));

        state.undo_deal_cards(dealt.len());
        prop_assert_eq!(state.stock(), stock_before.as_slice());
        prop_assert_eq!(state.waste(), waste_before.as_slice());
        prop_assert!(waste_before.iter().all(|&c| state.is_face_up(c)));
        prop_assert!(state.stock().iter().all(|&c| !state.is_face_up(c)));
        assert_conservation(&state);
    }

    /// Card conservation holds across random play: deals, recycles,
    /// and every legal drop or flip the position offers.
    #[test]
    fn prop_conservation_under_play(seed in any::<u64>(), ops in prop::collection::vec(0u8..4, 1..60)) {
        let mut state = GameState::new(seed);
        state.fresh_game();

        for op in ops {
            match op {
                0 => {
                    if state.can_deal() {
                        state.deal_card();
                    } else {
                        state.collect_waste_into_stock();
                    }
                }
                1 => {
                    state.deal_cards(3);
                }
                2 => {
                    // First legal single-card drop, scanning tops.
                    let mut candidates: Vec<Card> = Vec::new();
                    candidates.extend(state.waste().last().copied());
                    for i in 0..NUM_TABLEAUX {
                        candidates.extend(state.tableau(i).last().copied());
                    }
                    'outer: for card in candidates {
                        for i in 0..NUM_FOUNDATIONS {
                            if state.can_drop_on_foundation(card, i) {
                                state.drop_on_foundation(card, i);
                                break 'outer;
                            }
                        }
                        for i in 0..NUM_TABLEAUX {
                            if state.can_drop_on_tableau(card, i) {
                                state.drop_on_tableau(card, i);
                                break 'outer;
                            }
                        }
                    }
                }
                _ => {
                    // Flip any uncovered face-down tableau top.
                    for i in 0..NUM_TABLEAUX {
                        if let Some(&top) = state.tableau(i).last() {
                            if state.can_flip(top) {
                                state.flip_card(top);
                                break;
                            }
                        }
                    }
                }
            }

            assert_conservation(&state);

            // Foundations stay unbroken ascending single-suit runs.
            for i in 0..NUM_FOUNDATIONS {
                let pile = state.foundation(i);
                for (pos, card) in pile.iter().enumerate() {
                    prop_assert_eq!(card.rank() as usize, pos + 1);
                    prop_assert_eq!(card.suit(), pile[0].suit());
                }
            }
        }
    }

    /// Restoring a serialized state reproduces it exactly.
    #[test]
    fn prop_serde_round_trip(seed in any::<u64>(), deals in 0usize..25) {
        let mut state = GameState::new(seed);
        state.fresh_game();
        state.deal_cards(deals);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.stock(), state.stock());
        prop_assert_eq!(restored.waste(), state.waste());
        for i in 0..NUM_FOUNDATIONS {
            prop_assert_eq!(restored.foundation(i), state.foundation(i));
        }
        for i in 0..NUM_TABLEAUX {
            prop_assert_eq!(restored.tableau(i), state.tableau(i));
        }
        for card in Card::deck() {
            prop_assert_eq!(restored.is_face_up(card), state.is_face_up(card));
        }
    }
}
