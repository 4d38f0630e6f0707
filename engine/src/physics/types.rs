//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the collision system, re-exported from the glam library.

pub use glam::{Vec2, Vec3};
