//! Game Systems
//!
//! Per-frame simulation systems. Each system is driven once per tick by the
//! game state and reports what happened as a list of events; systems never
//! talk to each other directly.

pub mod combat_system;
pub mod shot_system;

pub use combat_system::{CombatEvent, CombatSystem, KillSource};
pub use shot_system::{Shot, ShotState, ShotSystem, ShotUpdate};
