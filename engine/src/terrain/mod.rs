//! Terrain module for the Android Arena engine.
//!
//! Deterministically synthesizes a square heightfield from a seed and a
//! small set of shape parameters, produces the per-vertex arrays the
//! renderer uploads once at startup, and answers continuous ground-height
//! queries every frame.
//!
//! # Determinism
//!
//! Every height is a pure function of `(column, row, seed, shape params)`.
//! Regenerating with identical parameters reproduces identical heights, and
//! the mesh normals are derived from the same noise stack so geometry and
//! collision never disagree.
//!
//! # Submodules
//!
//! - [`noise`] - Stateless value-noise stack (hash, smoothing, cosine
//!   interpolation, octave summation)
//! - [`heightfield`] - Grid generation and terrain mesh building
//! - [`sampler`] - Barycentric ground-height lookup for arbitrary (x, z)

pub mod heightfield;
pub mod noise;
pub mod sampler;

pub use heightfield::{
    Heightfield, HeightfieldParams, TerrainError, TerrainMesh, TerrainVertex, build_mesh,
};
pub use noise::{NoiseParams, cosine_interpolate, generate_height, interpolated_noise};
pub use sampler::barycentric_height;
