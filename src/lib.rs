#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod error;
pub mod config;
pub mod rng;
pub mod cards;
pub mod board;
pub mod hand;
pub mod pool;
pub mod play_state;
pub mod state;

pub mod engine {
    pub mod apply;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, Edge, Node};
pub use crate::cards::{load_cards_from_json, parse_cards_json, Card, CardDef, CardId};
pub use crate::config::GameConfig;
pub use crate::engine::apply::{apply_move, apply_play};
pub use crate::engine::score::score;
pub use crate::error::{CardError, ConfigError, PlayError};
pub use crate::hand::Hand;
pub use crate::play_state::{PlayState, Selection};
pub use crate::pool::CardPool;
pub use crate::rng::rng_for_game;
pub use crate::state::{choose_first, GameState, Move, PlayReport, Player, Standing};
pub use crate::types::{Dir, Owner, PlayerId};
