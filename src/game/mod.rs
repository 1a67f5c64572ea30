//! ゲーム層
//!
//! 札データと、検証エンジンを動かすセッション管理。
//! 統計の永続化や対戦などの上位機能はこの層の外側にある。

pub mod cards;
pub mod session;

pub use cards::{
    card_by_id, cards_by_category, cards_by_difficulty, random_cards, validate_deck,
    CardCategory, Difficulty, KarutaCard, KARUTA_CARDS,
};
pub use session::{
    AttemptRecord, GameMode, GameResult, GameSession, GameStatus, KeyOutcome,
};
