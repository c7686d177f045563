use klondike::core::actions::{apply_action, is_stuck, list_legal_moves, Action};
use klondike::core::invariants::{check_card_conservation, check_foundations};
use klondike::core::rng::SimpleRng;
use klondike::core::{GameState, LayoutBuilder};
use klondike::types::{
    DrawCount, Move, PileId, RedealPolicy, Score, Settings, Suit, DECK_SIZE, STOCK_AFTER_DEAL,
};

fn test_settings() -> Settings {
    let mut settings = Settings::default()
        .with_draw_count(DrawCount::One)
        .with_redeal_policy(RedealPolicy::None);
    settings.animations = false;
    settings
}

#[test]
fn test_fresh_deal_shape() {
    for seed in [1u32, 2, 99, 123_456, u32::MAX] {
        let state = GameState::deal(seed, test_settings(), 0);

        for (i, col) in state.tableau.iter().enumerate() {
            assert_eq!(col.len(), i + 1, "seed {seed} column {i}");
            for (j, card) in col.iter().enumerate() {
                assert_eq!(card.face_up, j == i, "seed {seed} column {i} row {j}");
            }
        }
        assert_eq!(state.stock.len(), STOCK_AFTER_DEAL);
        assert!(state.stock.iter().all(|c| !c.face_up));
        assert!(state.waste.is_empty());
        assert_eq!(state.foundation_total(), 0);
        assert_eq!(state.score, Score { total: 0, moves: 0 });
        assert_eq!(check_card_conservation(&state), Ok(()));
    }
}

#[test]
fn test_card_conservation_random_walk() {
    // random legal play from several deals, including three-card draws
    for seed in 0..20u32 {
        let settings = if seed % 2 == 0 {
            Settings::default()
        } else {
            Settings::default().with_draw_count(DrawCount::Three)
        };
        let mut state = GameState::deal(seed, settings, 0);
        let mut rng = SimpleRng::new(seed + 1000);

        for _ in 0..300 {
            let moves = list_legal_moves(&state);
            if moves.is_empty() {
                break;
            }
            let pick = rng.next_range(moves.len() as u32) as usize;
            state = apply_action(&state, &moves[pick]);
            assert_eq!(check_card_conservation(&state), Ok(()), "seed {seed}");
            assert_eq!(check_foundations(&state), Ok(()), "seed {seed}");
        }
    }
}

#[test]
fn test_win_criterion() {
    let mut builder = LayoutBuilder::new();
    for suit in Suit::ALL {
        builder = builder.foundation_to(suit, 13);
    }
    let won = builder.build().unwrap();
    assert_eq!(won.foundation_total(), DECK_SIZE);
    assert!(won.is_win());
    assert!(!is_stuck(&won));

    let almost = LayoutBuilder::new()
        .foundation_to(Suit::Spades, 13)
        .foundation_to(Suit::Hearts, 13)
        .foundation_to(Suit::Diamonds, 13)
        .foundation_to(Suit::Clubs, 12)
        .column(0, &["C13"])
        .build()
        .unwrap();
    assert_eq!(almost.foundation_total(), DECK_SIZE - 1);
    assert!(!almost.is_win());
    assert!(!is_stuck(&almost));
}

#[test]
fn test_limited_one_redeal_boundary() {
    let settings = test_settings().with_redeal_policy(RedealPolicy::Limited(1));
    let mut state = LayoutBuilder::new()
        .settings(settings)
        .waste(&["S5", "H6"])
        .build()
        .unwrap();

    // first recycle succeeds
    assert!(state.can_draw());
    let out = state.draw_cards();
    assert_eq!((out.drawn, out.restocks), (1, 1));
    assert_eq!(state.redeals_remaining, 0);

    // run the stock dry again
    while !state.stock.is_empty() {
        state.draw_cards();
    }
    assert_eq!(state.waste.len(), 2);

    // second recycle fails closed
    assert!(!state.can_draw());
    let out = state.draw_cards();
    assert_eq!((out.drawn, out.restocks), (0, 0));
    assert_eq!(state.waste.len(), 2);
    assert!(state.stock.is_empty());
}

#[test]
fn test_black_nine_on_black_ten_rejected() {
    let state = LayoutBuilder::new()
        .column(0, &["C10"])
        .column(1, &["S9"])
        .build()
        .unwrap();
    let mv = Move::new(PileId::Tableau(1), 0, PileId::Tableau(0));
    assert!(!state.is_legal_move(&mv));

    let next = apply_action(&state, &Action::Transfer(mv));
    assert_eq!(next, state);
}

#[test]
fn test_stock_never_source_or_destination() {
    let state = LayoutBuilder::new()
        .stock(&["S13"])
        .waste(&["H13"])
        .build()
        .unwrap();
    assert!(!state.is_legal_move(&Move::new(PileId::Stock, 0, PileId::Tableau(0))));
    assert!(!state.is_legal_move(&Move::new(PileId::Waste, 0, PileId::Stock)));
    assert!(state.is_legal_move(&Move::new(PileId::Waste, 0, PileId::Tableau(0))));
}

#[test]
fn test_flip_action() {
    let state = LayoutBuilder::new().column(3, &["d8"]).build().unwrap();
    let next = apply_action(&state, &Action::Flip { column: 3 });
    assert!(next.tableau[3][0].face_up);
    // flipping a face-up card changes nothing
    assert_eq!(apply_action(&next, &Action::Flip { column: 3 }), next);
}
