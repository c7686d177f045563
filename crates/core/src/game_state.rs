//! Game state module - piles, the deal, and the rules of card movement
//!
//! `GameState` is a closed, plain-data record: every pile is an inline
//! fixed-capacity vector, so `clone()` is a flat value copy. That copy is what
//! the engine pushes on its undo stack and what the solver explores.
//!
//! The methods here are the rule primitives (acceptance, transfer, draw,
//! restock, win). They never touch score; the engine layers scoring on top.

use arrayvec::ArrayVec;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::rng::shuffled_deck;
use crate::types::*;

/// Inline card storage for one pile (index 0 = bottom, last = top)
pub type Cards = ArrayVec<Card, DECK_SIZE>;

/// Result of moving a run of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transfer {
    /// Cards moved
    pub moved: usize,
    /// Whether the new top of the source tableau was turned face-up
    pub revealed: bool,
}

/// Result of a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawOutcome {
    /// Cards moved from stock to waste
    pub drawn: usize,
    /// Times the waste was recycled into the stock
    pub restocks: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub seed: u32,
    pub tableau: [Cards; TABLEAU_COLUMNS],
    /// Foundations in [`Suit::ALL`] order
    pub foundations: [Cards; FOUNDATION_COUNT],
    pub stock: Cards,
    pub waste: Cards,
    pub settings: Settings,
    pub score: Score,
    pub redeals_remaining: u32,
    pub time: TimeState,
    #[serde(default)]
    pub win_bonus_awarded: bool,
}

impl GameState {
    /// State with every pile empty
    pub fn empty(settings: Settings) -> Self {
        Self {
            seed: 0,
            tableau: std::array::from_fn(|_| Cards::new()),
            foundations: std::array::from_fn(|_| Cards::new()),
            stock: Cards::new(),
            waste: Cards::new(),
            settings,
            score: Score::default(),
            redeals_remaining: settings.redeal_policy.initial_redeals(),
            time: TimeState::default(),
            win_bonus_awarded: false,
        }
    }

    /// Deal a fresh Klondike layout from `seed`
    ///
    /// Column i (0-based) receives i+1 cards from the top of the shuffled deck,
    /// only the last one face-up. The rest becomes the face-down stock.
    pub fn deal(seed: u32, settings: Settings, now_ms: u64) -> Self {
        let mut deck = Cards::from(shuffled_deck(seed));
        let mut state = Self::empty(settings);
        state.seed = seed;

        for col in 0..TABLEAU_COLUMNS {
            for row in 0..=col {
                let Some(card) = deck.pop() else {
                    break;
                };
                state.tableau[col].push(card.with_face_up(row == col));
            }
        }
        state.stock = deck;
        state.reset_clock(now_ms);

        debug!(
            "dealt seed={} draw={} redeal={}",
            seed,
            settings.draw_count.count(),
            settings.redeal_policy
        );
        state
    }

    /// Restart the game clock at `now_ms`
    pub fn reset_clock(&mut self, now_ms: u64) {
        self.time = TimeState {
            started_at_ms: now_ms,
            elapsed_ms: 0,
            next_penalty_at_ms: now_ms + self.settings.time_penalty_interval_ms(),
        };
    }

    pub fn pile(&self, id: PileId) -> Option<&Cards> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(suit) => Some(&self.foundations[suit.index()]),
            PileId::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Cards> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(suit) => Some(&mut self.foundations[suit.index()]),
            PileId::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    /// Top card of a pile
    pub fn top(&self, id: PileId) -> Option<&Card> {
        self.pile(id).and_then(|p| p.last())
    }

    pub fn foundation(&self, suit: Suit) -> &Cards {
        &self.foundations[suit.index()]
    }

    /// Highest rank banked for `suit` (0 when empty)
    pub fn foundation_rank(&self, suit: Suit) -> u8 {
        self.foundation(suit).len() as u8
    }

    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(|f| f.len()).sum()
    }

    /// Win ⇔ all 52 cards are on the foundations
    pub fn is_win(&self) -> bool {
        self.foundation_total() == DECK_SIZE
    }

    /// Every card in every pile
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain(std::iter::once(&self.stock))
            .chain(std::iter::once(&self.waste))
            .flat_map(|p| p.iter())
    }

    /// Whether `dst` would accept `card` as a single-card drop
    ///
    /// - Foundation: Ace of its suit when empty, else next rank of its suit.
    /// - Tableau: King when empty, else opposite color one rank below a face-up top.
    pub fn can_accept(&self, card: &Card, dst: PileId) -> bool {
        match dst {
            PileId::Foundation(suit) => {
                if card.suit != suit {
                    return false;
                }
                match self.top(dst) {
                    None => card.rank == 1,
                    Some(top) => same_suit_asc(card, top),
                }
            }
            PileId::Tableau(i) => {
                if (i as usize) >= TABLEAU_COLUMNS {
                    return false;
                }
                match self.top(dst) {
                    None => card.rank == RANKS_PER_SUIT,
                    Some(top) => top.face_up && alternating_color_desc(card, top),
                }
            }
            PileId::Stock | PileId::Waste => false,
        }
    }

    /// The run a move would carry, if the source slice exists and is non-empty
    pub fn run(&self, src: PileId, card_index: usize) -> Option<&[Card]> {
        let pile = self.pile(src)?;
        let run = pile.get(card_index..)?;
        if run.is_empty() {
            None
        } else {
            Some(run)
        }
    }

    /// Full legality check for a move command
    ///
    /// The run must be face-up. Only a tableau source may carry more than one
    /// card, and such a run must itself alternate color and descend. The stock
    /// is never a source or destination, and foundations take one card at a time.
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        if mv.src == mv.dst || self.pile(mv.dst).is_none() {
            return false;
        }
        let Some(run) = self.run(mv.src, mv.card_index) else {
            return false;
        };
        if !run.iter().all(|c| c.face_up) {
            return false;
        }
        let run_ok = match mv.src {
            PileId::Stock => false,
            PileId::Tableau(_) => run.windows(2).all(|w| alternating_color_desc(&w[1], &w[0])),
            PileId::Waste | PileId::Foundation(_) => run.len() == 1,
        };
        if !run_ok {
            return false;
        }
        if mv.dst.is_foundation() && run.len() != 1 {
            return false;
        }
        self.can_accept(&run[0], mv.dst)
    }

    /// Move `src[card_index..]` onto `dst` without checking legality
    ///
    /// Flips the new top of a tableau source if it is face-down. Callers are
    /// expected to have validated the move with [`GameState::is_legal_move`].
    pub fn transfer(&mut self, mv: &Move) -> Transfer {
        let run: Cards = match self.pile_mut(mv.src) {
            Some(src) if mv.card_index < src.len() => src.drain(mv.card_index..).collect(),
            _ => return Transfer::default(),
        };
        let moved = run.len();
        match self.pile_mut(mv.dst) {
            Some(dst) => dst.extend(run),
            None => return Transfer::default(),
        }

        let revealed = mv.src.is_tableau() && self.flip_top(mv.src);
        Transfer { moved, revealed }
    }

    /// Turn the top card of a tableau pile face-up; `true` if it was face-down
    pub fn flip_top(&mut self, id: PileId) -> bool {
        if !id.is_tableau() {
            return false;
        }
        match self.pile_mut(id).and_then(|p| p.last_mut()) {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Whether a restock from the waste is currently allowed
    pub fn can_restock(&self) -> bool {
        !self.waste.is_empty()
            && self
                .settings
                .redeal_policy
                .permits_redeal(self.redeals_remaining)
    }

    /// Whether a draw would move any card at all
    pub fn can_draw(&self) -> bool {
        !self.stock.is_empty() || self.can_restock()
    }

    /// Recycle the waste into the stock (reversed, face-down)
    fn restock(&mut self) {
        self.stock
            .extend(self.waste.drain(..).rev().map(|c| c.with_face_up(false)));
        if let RedealPolicy::Limited(_) = self.settings.redeal_policy {
            self.redeals_remaining = self.redeals_remaining.saturating_sub(1);
        }
        debug!("restocked, redeals_remaining={}", self.redeals_remaining);
    }

    /// Turn `draw_count` cards from stock to waste
    ///
    /// When the stock runs out mid-draw the waste is recycled if the policy
    /// permits; otherwise the draw stops early. A short draw is not an error.
    pub fn draw_cards(&mut self) -> DrawOutcome {
        let mut outcome = DrawOutcome::default();
        for _ in 0..self.settings.draw_count.count() {
            if self.stock.is_empty() {
                if self.can_restock() {
                    self.restock();
                    outcome.restocks += 1;
                } else {
                    break;
                }
            }
            let Some(card) = self.stock.pop() else {
                break;
            };
            self.waste.push(card.with_face_up(true));
            outcome.drawn += 1;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::parse_code(code).unwrap()
    }

    fn settings(draw: DrawCount, policy: RedealPolicy) -> Settings {
        Settings::default()
            .with_draw_count(draw)
            .with_redeal_policy(policy)
    }

    #[test]
    fn test_deal_shape() {
        let state = GameState::deal(42, settings(DrawCount::One, RedealPolicy::None), 1_000);

        for (i, col) in state.tableau.iter().enumerate() {
            assert_eq!(col.len(), i + 1);
            let (last, rest) = col.split_last().unwrap();
            assert!(last.face_up);
            assert!(rest.iter().all(|c| !c.face_up));
        }
        assert_eq!(state.stock.len(), STOCK_AFTER_DEAL);
        assert!(state.stock.iter().all(|c| !c.face_up));
        assert!(state.waste.is_empty());
        assert!(state.foundations.iter().all(|f| f.is_empty()));
        assert_eq!(state.score, Score { total: 0, moves: 0 });
        assert_eq!(state.redeals_remaining, 0);
        assert_eq!(state.time.started_at_ms, 1_000);
        assert_eq!(state.time.next_penalty_at_ms, 11_000);
        assert_eq!(state.all_cards().count(), DECK_SIZE);
    }

    #[test]
    fn test_deal_deterministic() {
        let s = Settings::default();
        assert_eq!(GameState::deal(7, s, 0), GameState::deal(7, s, 0));
        assert_ne!(GameState::deal(7, s, 0).tableau, GameState::deal(8, s, 0).tableau);
    }

    #[test]
    fn test_pile_lookup() {
        let state = GameState::empty(Settings::default());
        assert!(state.pile(PileId::Tableau(6)).is_some());
        assert!(state.pile(PileId::Tableau(7)).is_none());
        assert!(state.top(PileId::Waste).is_none());
    }

    #[test]
    fn test_can_accept_foundation() {
        let mut state = GameState::empty(Settings::default());
        let hearts = PileId::Foundation(Suit::Hearts);
        assert!(state.can_accept(&card("H1"), hearts));
        assert!(!state.can_accept(&card("H2"), hearts));
        assert!(!state.can_accept(&card("S1"), hearts));

        state.foundations[Suit::Hearts.index()].push(card("H1"));
        assert!(state.can_accept(&card("H2"), hearts));
        assert!(!state.can_accept(&card("H3"), hearts));
    }

    #[test]
    fn test_can_accept_tableau() {
        let mut state = GameState::empty(Settings::default());
        let col = PileId::Tableau(0);
        assert!(state.can_accept(&card("S13"), col));
        assert!(!state.can_accept(&card("S12"), col));

        state.tableau[0].push(card("C10"));
        assert!(state.can_accept(&card("H9"), col));
        assert!(!state.can_accept(&card("S9"), col));
        assert!(!state.can_accept(&card("H8"), col));

        state.tableau[0][0].face_up = false;
        assert!(!state.can_accept(&card("H9"), col));
    }

    #[test]
    fn test_run_legality() {
        let mut state = GameState::empty(Settings::default());
        state.tableau[0].extend([card("s4"), card("C9"), card("H8"), card("S7")]);
        state.tableau[1].push(card("D10"));
        state.tableau[2].extend([card("H9"), card("H8")]);
        state.tableau[3].push(card("S10"));

        // whole face-up run onto a red ten
        assert!(state.is_legal_move(&Move::new(PileId::Tableau(0), 1, PileId::Tableau(1))));
        // face-down card cannot lead a run
        assert!(!state.is_legal_move(&Move::new(PileId::Tableau(0), 0, PileId::Tableau(1))));
        // broken run (same color) cannot move as a unit
        assert!(!state.is_legal_move(&Move::new(PileId::Tableau(2), 0, PileId::Tableau(3))));
        // runs never go to a foundation
        state.foundations[Suit::Hearts.index()].extend((1..=7).map(|r| Card::new(Suit::Hearts, r, true)));
        assert!(!state.is_legal_move(&Move::new(PileId::Tableau(0), 2, PileId::Foundation(Suit::Hearts))));
        // index past the end is nothing to move
        assert!(!state.is_legal_move(&Move::new(PileId::Tableau(0), 4, PileId::Tableau(1))));
        // same pile
        assert!(!state.is_legal_move(&Move::new(PileId::Tableau(0), 3, PileId::Tableau(0))));
    }

    #[test]
    fn test_waste_moves_only_top() {
        let mut state = GameState::empty(Settings::default());
        state.waste.extend([card("H1"), card("S13")]);
        assert!(!state.is_legal_move(&Move::new(PileId::Waste, 0, PileId::Foundation(Suit::Hearts))));
        assert!(state.is_legal_move(&Move::new(PileId::Waste, 1, PileId::Tableau(0))));
        assert!(!state.is_legal_move(&Move::new(PileId::Waste, 1, PileId::Stock)));
    }

    #[test]
    fn test_transfer_reveals_source_top() {
        let mut state = GameState::empty(Settings::default());
        state.tableau[0].extend([card("h5"), card("S1")]);

        let t = state.transfer(&Move::new(PileId::Tableau(0), 1, PileId::Foundation(Suit::Spades)));
        assert_eq!(t, Transfer { moved: 1, revealed: true });
        assert!(state.tableau[0][0].face_up);
        assert_eq!(state.foundation_rank(Suit::Spades), 1);

        // nothing left face-down, so no further reveal
        assert!(!state.flip_top(PileId::Tableau(0)));
    }

    #[test]
    fn test_draw_one_and_three() {
        let mut state = GameState::empty(settings(DrawCount::Three, RedealPolicy::None));
        state.stock.extend([card("s2"), card("h3"), card("d4"), card("c5")]);

        let out = state.draw_cards();
        assert_eq!(out, DrawOutcome { drawn: 3, restocks: 0 });
        assert_eq!(state.stock.len(), 1);
        assert!(state.waste.iter().all(|c| c.face_up));
        assert_eq!(state.waste.last().unwrap().rank, 3);

        // partial draw when the stock runs dry and redeals are not allowed
        let out = state.draw_cards();
        assert_eq!(out, DrawOutcome { drawn: 1, restocks: 0 });
        assert!(state.stock.is_empty());
        assert!(!state.can_draw());
    }

    #[test]
    fn test_restock_reverses_and_turns_down() {
        let mut state = GameState::empty(settings(DrawCount::One, RedealPolicy::Unlimited));
        state.waste.extend([card("S1"), card("S2"), card("S3")]);

        let out = state.draw_cards();
        assert_eq!(out, DrawOutcome { drawn: 1, restocks: 1 });
        // the first card put on the waste is drawn first after restocking
        assert_eq!(state.waste.as_slice(), &[card("S1")]);
        assert_eq!(state.stock.as_slice(), &[card("s3"), card("s2")]);
        assert_eq!(state.redeals_remaining, u32::MAX);
    }

    #[test]
    fn test_limited_redeal_counts_down() {
        let mut state = GameState::empty(settings(DrawCount::One, RedealPolicy::Limited(1)));
        state.waste.push(card("D7"));
        assert!(state.can_draw());

        state.draw_cards();
        assert_eq!(state.redeals_remaining, 0);
        assert_eq!(state.waste.len(), 1);
        assert!(!state.can_draw());
        assert_eq!(state.draw_cards(), DrawOutcome::default());
    }

    #[test]
    fn test_is_win() {
        let mut state = GameState::empty(Settings::default());
        for suit in Suit::ALL {
            state.foundations[suit.index()].extend((1..=13).map(|r| Card::new(suit, r, true)));
        }
        assert!(state.is_win());
        state.foundations[0].pop();
        assert!(!state.is_win());
    }
}
