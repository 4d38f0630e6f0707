//! Heightfield generation and terrain mesh building.
//!
//! [`Heightfield::generate`] runs once at world startup and produces the
//! persistent `heights[row][col]` grid; [`build_mesh`] derives the
//! render-facing vertex and index arrays from the same height values so the
//! visible surface and the sampled surface can never drift apart.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;
use thiserror::Error;

use super::noise::{NoiseParams, generate_height};

/// Terrain construction failures, rejected before any height is computed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// A grid needs at least two samples per edge to form a cell.
    #[error("terrain vertex_count must be at least 2, got {vertex_count}")]
    VertexCountTooSmall { vertex_count: usize },
}

/// Shape parameters for a generated heightfield.
///
/// `Default` reproduces the shipped arena: a 20-unit square with 64 samples
/// per edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightfieldParams {
    /// World-space edge length of the square terrain.
    pub size: f32,
    /// Number of samples per edge; the grid is `vertex_count x vertex_count`.
    pub vertex_count: usize,
    /// Noise seed, fixed at generation time.
    pub seed: i64,
    /// Maximum height of a full-amplitude noise octave.
    pub max_height: f32,
    /// Interpolation step count (part of the configuration surface; the
    /// octave loop is bounded by `roughness`, see [`generate_height`]).
    pub interpolation_steps: u32,
    /// Per-octave amplitude falloff and octave-count bound.
    pub roughness: f32,
}

impl Default for HeightfieldParams {
    fn default() -> Self {
        Self {
            size: 20.0,
            vertex_count: 64,
            seed: 719_393,
            max_height: 2.0,
            interpolation_steps: 3,
            roughness: 0.3,
        }
    }
}

impl HeightfieldParams {
    /// Noise parameters for height generation under this configuration.
    pub fn noise_params(&self) -> NoiseParams {
        NoiseParams {
            seed: self.seed,
            interpolation_steps: self.interpolation_steps,
            roughness: self.roughness,
            max_height: self.max_height,
        }
    }
}

/// The terrain's persistent height data.
///
/// Created once at world initialization and immutable thereafter. Heights
/// are indexed `heights[row][col]` where `row` advances along +z and `col`
/// along +x.
pub struct Heightfield {
    params: HeightfieldParams,
    heights: Vec<Vec<f32>>,
}

impl Heightfield {
    /// Generate the full grid from `params`.
    ///
    /// Deterministic: identical parameters reproduce identical heights.
    pub fn generate(params: HeightfieldParams) -> Result<Self, TerrainError> {
        if params.vertex_count < 2 {
            return Err(TerrainError::VertexCountTooSmall {
                vertex_count: params.vertex_count,
            });
        }

        let noise = params.noise_params();
        let heights = (0..params.vertex_count)
            .map(|row| {
                (0..params.vertex_count)
                    .map(|col| generate_height(col as i32, row as i32, &noise))
                    .collect()
            })
            .collect();

        Ok(Self { params, heights })
    }

    /// The parameters this field was generated from.
    pub fn params(&self) -> &HeightfieldParams {
        &self.params
    }

    /// Stored height at grid cell `(col, row)`. Indices must be within
    /// `[0, vertex_count)`.
    pub fn height(&self, col: usize, row: usize) -> f32 {
        self.heights[row][col]
    }

    /// Samples per edge.
    pub fn vertex_count(&self) -> usize {
        self.params.vertex_count
    }

    /// World-space edge length.
    pub fn size(&self) -> f32 {
        self.params.size
    }
}

/// Vertex for the terrain surface, laid out for direct GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

// Tightly packed: 11 floats, no padding
const_assert_eq!(std::mem::size_of::<TerrainVertex>(), 44);

/// Generated terrain mesh data, row-major grid order.
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    pub indices: Vec<u32>,
}

/// Build the render mesh for a heightfield.
///
/// Positions reuse the stored grid heights. Normals are the cheap central
/// difference `(h_left - h_right, 2.0, h_down - h_up)` normalized; steep or
/// noisy terrain shows artifacts with this formula and the renderer is
/// written against exactly this output. Colors are a checkerboard debug
/// pattern.
pub fn build_mesh(field: &Heightfield) -> TerrainMesh {
    let params = field.params();
    let noise = params.noise_params();
    let count = params.vertex_count;
    let edge = (count - 1) as f32;

    let mut vertices = Vec::with_capacity(count * count);
    for row in 0..count {
        for col in 0..count {
            let x = col as f32 / edge * params.size;
            let z = row as f32 / edge * params.size;
            let y = field.height(col, row);

            let (cx, cz) = (col as i32, row as i32);
            let height_left = generate_height(cx - 1, cz, &noise);
            let height_right = generate_height(cx + 1, cz, &noise);
            let height_down = generate_height(cx, cz - 1, &noise);
            let height_up = generate_height(cx, cz + 1, &noise);
            let normal = glam::Vec3::new(
                height_left - height_right,
                2.0,
                height_down - height_up,
            )
            .normalize();

            vertices.push(TerrainVertex {
                position: [x, y, z],
                normal: normal.into(),
                color: [(col % 2) as f32, 0.0, (row % 2) as f32],
                uv: [col as f32 / edge, row as f32 / edge],
            });
        }
    }

    let mut indices = Vec::with_capacity((count - 1) * (count - 1) * 6);
    for gz in 0..count - 1 {
        for gx in 0..count - 1 {
            let top_left = (gz * count + gx) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((gz + 1) * count + gx) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                top_right,
                bottom_left,
                bottom_right,
            ]);
        }
    }

    TerrainMesh { vertices, indices }
}
