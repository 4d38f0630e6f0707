//! Physics module for the Android Arena engine.
//!
//! Custom collision implementation, built from scratch without an external
//! physics dependency: axis-aligned bounding boxes derived once from mesh
//! vertices and re-transformed every frame, plus point containment tests
//! for hit detection.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, angles in radians.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`bounding_box`] - Rest/current AABB corners and containment queries

pub mod bounding_box;
pub mod types;

pub use bounding_box::{BoundingBox, CollisionError, rotate_y, transformed_corners};
pub use types::{Vec2, Vec3};
