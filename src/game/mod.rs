//! Game Module
//!
//! Game-specific entities and systems that build on top of the engine:
//! the playable character, the Android boss, its shots, and the per-frame
//! combat orchestration.

pub mod android;
pub mod character;
pub mod config;
pub mod state;
pub mod systems;

pub use android::{Android, ArmSide, BossPhase};
pub use character::{Character, CharacterState, IDLE_FRAME_COUNT, RUN_FRAME_COUNT};
pub use config::{ArenaConfig, GameConfig};
pub use state::{GameError, GameState};
pub use systems::{CombatEvent, CombatSystem, KillSource, Shot, ShotState, ShotSystem, ShotUpdate};
