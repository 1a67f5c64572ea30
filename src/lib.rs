pub mod config;
pub mod core;
pub mod game;
pub mod rng;
pub mod scoring;
pub mod typing;

pub use crate::core::expand;
pub use game::{GameMode, GameSession};
pub use scoring::{calc_score, calc_score_with, ScoreInput, ScoreParams};
pub use typing::{InputValidator, ValidationResult};
