//! Game Configuration
//!
//! Serde-backed tuning knobs. Defaults match the shipped demo; a JSON file
//! can override any subset of them.

pub mod arena_config;
pub mod game_config;

pub use arena_config::ArenaConfig;
pub use game_config::GameConfig;
