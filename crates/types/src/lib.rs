//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with serde support, so the same values flow through
//! the rules core, the solver, the engine's event channel and persisted snapshots.
//!
//! # Layout
//!
//! Standard Klondike layout:
//!
//! - **Tableau**: 7 columns (`tab-1` .. `tab-7`), column i dealt i cards
//! - **Foundations**: 4 piles, one per suit (`foundation-S`, `-H`, `-D`, `-C`)
//! - **Stock**: 24 face-down cards after the deal (`stock`)
//! - **Waste**: face-up draw output (`waste`)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WASTE_TO_FOUNDATION_POINTS` | 10 | Banking the waste top |
//! | `TABLEAU_TO_FOUNDATION_POINTS` | 5 | Banking a tableau top |
//! | `FOUNDATION_RETURN_PENALTY` | 5 | Per card taken back off a foundation |
//! | `REVEAL_POINTS` | 5 | Turning over a face-down tableau card |
//! | `WIN_BONUS` | 100 | Awarded once when all 52 cards are banked |
//!
//! # Examples
//!
//! ```
//! use klondike_types::{Card, PileId, RedealPolicy, Suit};
//!
//! let ace = Card::parse_code("H1").unwrap();
//! assert_eq!(ace.suit, Suit::Hearts);
//! assert!(ace.face_up);
//!
//! assert_eq!(PileId::from_str("tab-3"), Some(PileId::Tableau(2)));
//! assert_eq!(PileId::Foundation(Suit::Clubs).to_string(), "foundation-C");
//!
//! assert_eq!(RedealPolicy::from_str("limited(2)"), Some(RedealPolicy::Limited(2)));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// Ranks per suit (Ace = 1 .. King = 13)
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of tableau columns
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles
pub const FOUNDATION_COUNT: usize = 4;

/// Cards left in the stock after the deal (52 - 28)
pub const STOCK_AFTER_DEAL: usize = DECK_SIZE - (TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1)) / 2;

/// Maximum retained undo snapshots
pub const UNDO_CAPACITY: usize = 100;

/// Points for waste -> foundation
pub const WASTE_TO_FOUNDATION_POINTS: i32 = 10;

/// Points for tableau -> foundation
pub const TABLEAU_TO_FOUNDATION_POINTS: i32 = 5;

/// Penalty per card moved off a foundation
pub const FOUNDATION_RETURN_PENALTY: i32 = 5;

/// Points for revealing a face-down tableau card
pub const REVEAL_POINTS: i32 = 5;

/// One-time bonus when the game is won
pub const WIN_BONUS: i32 = 100;

/// Default interval between time penalties (seconds)
pub const DEFAULT_TIME_PENALTY_SECS: u32 = 10;

/// Default points subtracted per elapsed interval
pub const DEFAULT_TIME_PENALTY_POINTS: i32 = 2;

/// Iteration cap for the fixpoint auto-player
pub const AUTO_FIXPOINT_MAX_ITERATIONS: u32 = 1000;

/// Move cap for the fixpoint auto-player
pub const AUTO_FIXPOINT_MAX_MOVES: u32 = 500;

/// Default solver wall-clock budget (milliseconds)
pub const DEFAULT_SOLVER_BUDGET_MS: u64 = 200;

/// Default per-move animation duration handed to the animator (milliseconds)
pub const DEFAULT_ANIMATION_MS: u64 = 150;

/// Card color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in foundation order (S, H, D, C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "S")]
    Spades,
    #[serde(rename = "H")]
    Hearts,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "C")]
    Clubs,
}

impl Suit {
    /// All suits in foundation order
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Parse from the one-letter code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_types::Suit;
    ///
    /// assert_eq!(Suit::from_char('h'), Some(Suit::Hearts));
    /// assert_eq!(Suit::from_char('C'), Some(Suit::Clubs));
    /// assert_eq!(Suit::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// One-letter code
    pub fn as_char(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Index into the foundation array
    pub fn index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// The two suits of the other color, in foundation order
    pub fn opposite_color_suits(&self) -> [Suit; 2] {
        match self.color() {
            Color::Red => [Suit::Spades, Suit::Clubs],
            Color::Black => [Suit::Hearts, Suit::Diamonds],
        }
    }
}

/// A playing card
///
/// Identity is structural (suit + rank): a dealt game holds each pair once.
/// Only `face_up` ever changes after the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: u8, face_up: bool) -> Self {
        Self {
            suit,
            rank,
            face_up,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// Same card with the given orientation
    pub fn with_face_up(self, face_up: bool) -> Self {
        Self { face_up, ..self }
    }

    /// Whether two cards are the same physical card, ignoring orientation
    pub fn same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Parse a compact card code
    ///
    /// Uppercase suit letter means face-up, lowercase means face-down.
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_types::{Card, Suit};
    ///
    /// let c = Card::parse_code("d13").unwrap();
    /// assert_eq!((c.suit, c.rank, c.face_up), (Suit::Diamonds, 13, false));
    /// assert_eq!(Card::parse_code("H14"), None);
    /// assert_eq!(Card::parse_code(""), None);
    /// ```
    pub fn parse_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let first = chars.next()?;
        let suit = Suit::from_char(first)?;
        let rank: u8 = chars.as_str().parse().ok()?;
        if !(1..=RANKS_PER_SUIT).contains(&rank) {
            return None;
        }
        Some(Self::new(suit, rank, first.is_ascii_uppercase()))
    }

    /// Inverse of [`Card::parse_code`]
    pub fn code(&self) -> String {
        let suit = if self.face_up {
            self.suit.as_char()
        } else {
            self.suit.as_char().to_ascii_lowercase()
        };
        format!("{}{}", suit, self.rank)
    }
}

/// Rank label (A, 2..10, J, Q, K)
pub fn rank_label(rank: u8) -> &'static str {
    const LABELS: [&str; 14] = [
        "?", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
    ];
    LABELS.get(rank as usize).copied().unwrap_or("?")
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit.symbol())
    }
}

/// Tableau adjacency: `card` may sit on `onto` (opposite color, one rank lower)
pub fn alternating_color_desc(card: &Card, onto: &Card) -> bool {
    card.color() != onto.color() && onto.rank.checked_sub(1) == Some(card.rank)
}

/// Foundation adjacency: `card` follows `onto` (same suit, one rank higher)
pub fn same_suit_asc(card: &Card, onto: &Card) -> bool {
    card.suit == onto.suit && card.rank.checked_sub(1) == Some(onto.rank)
}

/// Pile identifier
///
/// Resolved once from the string vocabulary
/// `"stock" | "waste" | "foundation-{suit}" | "tab-{1..7}"`.
/// Tableau indices are 0-based internally and 1-based in the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PileId {
    Stock,
    Waste,
    Foundation(Suit),
    Tableau(u8),
}

impl PileId {
    /// Parse from the string vocabulary
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_types::{PileId, Suit};
    ///
    /// assert_eq!(PileId::from_str("stock"), Some(PileId::Stock));
    /// assert_eq!(PileId::from_str("foundation-H"), Some(PileId::Foundation(Suit::Hearts)));
    /// assert_eq!(PileId::from_str("tab-7"), Some(PileId::Tableau(6)));
    /// assert_eq!(PileId::from_str("tab-8"), None);
    /// assert_eq!(PileId::from_str("tab-0"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "stock" => Some(PileId::Stock),
            "waste" => Some(PileId::Waste),
            _ => {
                if let Some(rest) = s.strip_prefix("foundation-") {
                    let mut chars = rest.chars();
                    let suit = Suit::from_char(chars.next()?)?;
                    if chars.next().is_some() {
                        return None;
                    }
                    return Some(PileId::Foundation(suit));
                }
                let col: usize = s.strip_prefix("tab-")?.parse().ok()?;
                if (1..=TABLEAU_COLUMNS).contains(&col) {
                    Some(PileId::Tableau((col - 1) as u8))
                } else {
                    None
                }
            }
        }
    }

    pub fn tableau(index: usize) -> Self {
        PileId::Tableau(index as u8)
    }

    pub fn is_tableau(&self) -> bool {
        matches!(self, PileId::Tableau(_))
    }

    pub fn is_foundation(&self) -> bool {
        matches!(self, PileId::Foundation(_))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(suit) => write!(f, "foundation-{}", suit.as_char()),
            PileId::Tableau(i) => write!(f, "tab-{}", i + 1),
        }
    }
}

impl TryFrom<String> for PileId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PileId::from_str(&value).ok_or_else(|| format!("unknown pile id: {}", value))
    }
}

impl From<PileId> for String {
    fn from(value: PileId) -> Self {
        value.to_string()
    }
}

/// Restock policy for recycling the waste back into the stock
///
/// String form: `"unlimited"`, `"none"` or `"limited(n)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RedealPolicy {
    Unlimited,
    None,
    Limited(u32),
}

impl RedealPolicy {
    /// Parse from the policy string
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_types::RedealPolicy;
    ///
    /// assert_eq!(RedealPolicy::from_str("unlimited"), Some(RedealPolicy::Unlimited));
    /// assert_eq!(RedealPolicy::from_str("none"), Some(RedealPolicy::None));
    /// assert_eq!(RedealPolicy::from_str("limited(3)"), Some(RedealPolicy::Limited(3)));
    /// assert_eq!(RedealPolicy::from_str("limited()"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "unlimited" => Some(RedealPolicy::Unlimited),
            "none" => Some(RedealPolicy::None),
            other => {
                let n = other.strip_prefix("limited(")?.strip_suffix(')')?;
                n.trim().parse().ok().map(RedealPolicy::Limited)
            }
        }
    }

    /// Redeal counter value at deal time
    pub fn initial_redeals(&self) -> u32 {
        match self {
            RedealPolicy::Unlimited => u32::MAX,
            RedealPolicy::None => 0,
            RedealPolicy::Limited(n) => *n,
        }
    }

    /// Whether a restock is allowed with `remaining` redeals left
    pub fn permits_redeal(&self, remaining: u32) -> bool {
        match self {
            RedealPolicy::Unlimited => true,
            RedealPolicy::None => false,
            RedealPolicy::Limited(_) => remaining > 0,
        }
    }
}

impl fmt::Display for RedealPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedealPolicy::Unlimited => write!(f, "unlimited"),
            RedealPolicy::None => write!(f, "none"),
            RedealPolicy::Limited(n) => write!(f, "limited({})", n),
        }
    }
}

impl TryFrom<String> for RedealPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RedealPolicy::from_str(&value).ok_or_else(|| format!("unknown redeal policy: {}", value))
    }
}

impl From<RedealPolicy> for String {
    fn from(value: RedealPolicy) -> Self {
        value.to_string()
    }
}

/// Cards turned per draw (serialized as the number 1 or 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawCount {
    One,
    Three,
}

impl DrawCount {
    pub fn from_u8(n: u8) -> Option<Self> {
        match n {
            1 => Some(DrawCount::One),
            3 => Some(DrawCount::Three),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DrawCount::from_u8(value).ok_or_else(|| format!("draw count must be 1 or 3, got {}", value))
    }
}

impl From<DrawCount> for u8 {
    fn from(value: DrawCount) -> Self {
        value.count() as u8
    }
}

/// Game settings
///
/// Only `draw_count`, `redeal_policy` and the time penalty fields affect the
/// rules; the rest are carried for the UI collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub draw_count: DrawCount,
    pub redeal_policy: RedealPolicy,
    pub left_hand_mode: bool,
    pub animations: bool,
    pub hints: bool,
    pub auto_complete: bool,
    pub sound: bool,
    pub time_penalty_secs: u32,
    pub time_penalty_points: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draw_count: DrawCount::One,
            redeal_policy: RedealPolicy::Unlimited,
            left_hand_mode: false,
            animations: true,
            hints: true,
            auto_complete: true,
            sound: false,
            time_penalty_secs: DEFAULT_TIME_PENALTY_SECS,
            time_penalty_points: DEFAULT_TIME_PENALTY_POINTS,
        }
    }
}

impl Settings {
    pub fn with_draw_count(self, draw_count: DrawCount) -> Self {
        Self { draw_count, ..self }
    }

    pub fn with_redeal_policy(self, redeal_policy: RedealPolicy) -> Self {
        Self {
            redeal_policy,
            ..self
        }
    }

    /// Penalty interval in milliseconds
    pub fn time_penalty_interval_ms(&self) -> u64 {
        u64::from(self.time_penalty_secs) * 1000
    }
}

/// Move command: take `src[card_index..]` and put it on `dst`
///
/// Wire shape: `{"srcPileId": "tab-1", "cardIndex": 3, "dstPileId": "foundation-H"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "srcPileId")]
    pub src: PileId,
    #[serde(rename = "cardIndex")]
    pub card_index: usize,
    #[serde(rename = "dstPileId")]
    pub dst: PileId,
}

impl Move {
    pub fn new(src: PileId, card_index: usize, dst: PileId) -> Self {
        Self {
            src,
            card_index,
            dst,
        }
    }

    /// Build from string pile ids; `None` when either id is malformed
    pub fn from_ids(src: &str, card_index: usize, dst: &str) -> Option<Self> {
        Some(Self::new(
            PileId::from_str(src)?,
            card_index,
            PileId::from_str(dst)?,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] -> {}", self.src, self.card_index, self.dst)
    }
}

/// Score counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub total: i32,
    pub moves: u32,
}

/// Game clock (epoch milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeState {
    pub started_at_ms: u64,
    pub elapsed_ms: u64,
    pub next_penalty_at_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Clubs.opposite_color_suits(), [Suit::Hearts, Suit::Diamonds]);
        assert_eq!(Suit::Hearts.opposite_color_suits(), [Suit::Spades, Suit::Clubs]);
    }

    #[test]
    fn test_suit_index_matches_all_order() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn test_card_code_round_trip() {
        for code in ["S1", "h5", "D10", "c13"] {
            let card = Card::parse_code(code).unwrap();
            assert_eq!(card.code(), code);
        }
        assert_eq!(Card::parse_code("X3"), None);
        assert_eq!(Card::parse_code("H0"), None);
        assert_eq!(Card::parse_code("Hx"), None);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Hearts, 1, true).to_string(), "A♥");
        assert_eq!(Card::new(Suit::Clubs, 10, true).to_string(), "10♣");
        assert_eq!(Card::new(Suit::Spades, 12, false).to_string(), "Q♠");
    }

    #[test]
    fn test_adjacency_predicates() {
        let king_spades = Card::new(Suit::Spades, 13, true);
        let queen_hearts = Card::new(Suit::Hearts, 12, true);
        let queen_clubs = Card::new(Suit::Clubs, 12, true);
        assert!(alternating_color_desc(&queen_hearts, &king_spades));
        assert!(!alternating_color_desc(&queen_clubs, &king_spades));
        assert!(!alternating_color_desc(&king_spades, &queen_hearts));

        let ace_clubs = Card::new(Suit::Clubs, 1, true);
        let two_clubs = Card::new(Suit::Clubs, 2, true);
        let two_diamonds = Card::new(Suit::Diamonds, 2, true);
        assert!(same_suit_asc(&two_clubs, &ace_clubs));
        assert!(!same_suit_asc(&two_diamonds, &ace_clubs));
        assert!(!same_suit_asc(&ace_clubs, &two_clubs));

        // out-of-range ranks compare as unrelated
        let wild = Card::new(Suit::Hearts, u8::MAX, true);
        let zero = Card::new(Suit::Spades, 0, true);
        assert!(!alternating_color_desc(&wild, &king_spades));
        assert!(!alternating_color_desc(&queen_hearts, &zero));
        assert!(!same_suit_asc(&Card::new(Suit::Clubs, 0, true), &ace_clubs));
        assert!(!same_suit_asc(&two_clubs, &Card::new(Suit::Clubs, u8::MAX, true)));
    }

    #[test]
    fn test_pile_id_round_trip() {
        let mut ids = vec![PileId::Stock, PileId::Waste];
        ids.extend(Suit::ALL.iter().map(|s| PileId::Foundation(*s)));
        ids.extend((0..TABLEAU_COLUMNS).map(PileId::tableau));
        for id in ids {
            assert_eq!(PileId::from_str(&id.to_string()), Some(id));
        }
    }

    #[test]
    fn test_pile_id_rejects_malformed() {
        for bad in ["", "tab", "tab-", "tab-x", "foundation-", "foundation-X", "foundation-HH", "STOCK"] {
            assert_eq!(PileId::from_str(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_redeal_policy_counters() {
        assert_eq!(RedealPolicy::Unlimited.initial_redeals(), u32::MAX);
        assert_eq!(RedealPolicy::None.initial_redeals(), 0);
        assert_eq!(RedealPolicy::Limited(2).initial_redeals(), 2);

        assert!(RedealPolicy::Unlimited.permits_redeal(0));
        assert!(!RedealPolicy::None.permits_redeal(5));
        assert!(RedealPolicy::Limited(1).permits_redeal(1));
        assert!(!RedealPolicy::Limited(1).permits_redeal(0));
    }

    #[test]
    fn test_settings_json_shape() {
        let settings = Settings::default()
            .with_draw_count(DrawCount::Three)
            .with_redeal_policy(RedealPolicy::Limited(2));
        let json = serde_json::to_value(settings).unwrap();
        assert_eq!(json["drawCount"], 3);
        assert_eq!(json["redealPolicy"], "limited(2)");
        assert_eq!(json["timePenaltySecs"], 10);

        let back: Settings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_settings_reject_bad_draw_count() {
        let err = serde_json::from_str::<Settings>(r#"{"drawCount": 2}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_move_wire_shape() {
        let mv = Move::from_ids("tab-1", 3, "foundation-H").unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(
            json,
            r#"{"srcPileId":"tab-1","cardIndex":3,"dstPileId":"foundation-H"}"#
        );
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
        assert!(Move::from_ids("tab-9", 0, "waste").is_none());
    }

    #[test]
    fn test_stock_after_deal() {
        assert_eq!(STOCK_AFTER_DEAL, 24);
    }
}
