//! Android Arena Engine Library
//!
//! Core simulation for a small boss-fight demo: a character explores a
//! procedurally generated heightfield while the Android boss aims, charges
//! and fires at it. The library is headless; rendering, windowing and asset
//! decoding live outside and consume the geometry this crate produces.
//!
//! # Modules
//!
//! - [`terrain`] - Seeded heightfield generation, terrain mesh arrays, and
//!   continuous ground-height sampling
//! - [`physics`] - Axis-aligned bounding boxes and point containment for
//!   hit detection
//!
//! # Example
//!
//! ```ignore
//! use android_arena_engine::game::{GameConfig, GameState};
//!
//! let mut state = GameState::new(GameConfig::default()).unwrap();
//!
//! // Fixed 30 ms tick, same cadence as the demo binary
//! loop {
//!     for event in state.update(0.03) {
//!         println!("{event:?}");
//!     }
//!     if state.character().is_dead() {
//!         break;
//!     }
//! }
//! ```

pub mod physics;
pub mod terrain;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export core terrain types at crate level for convenience
pub use terrain::{Heightfield, HeightfieldParams, TerrainError, TerrainMesh, TerrainVertex};
// Re-export collision types
pub use physics::{BoundingBox, CollisionError, transformed_corners};
