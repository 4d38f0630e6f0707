//! Continuous ground-height lookup over a generated heightfield.
//!
//! Used once per frame per grounded entity to clamp feet to the terrain
//! surface. Queries outside the grid return a flat `0.0` rather than
//! erroring or clamping to the edge; callers rely on that fallback when an
//! entity walks off the terrain.

use glam::{Vec2, Vec3};

use super::heightfield::Heightfield;

/// Barycentric interpolation of the triangle's y values at `pos`, using the
/// x/z components of `p1..p3` as the 2D triangle.
pub fn barycentric_height(p1: Vec3, p2: Vec3, p3: Vec3, pos: Vec2) -> f32 {
    let det = (p2.z - p3.z) * (p1.x - p3.x) + (p3.x - p2.x) * (p1.z - p3.z);
    let l1 = ((p2.z - p3.z) * (pos.x - p3.x) + (p3.x - p2.x) * (pos.y - p3.z)) / det;
    let l2 = ((p3.z - p1.z) * (pos.x - p3.x) + (p1.x - p3.x) * (pos.y - p3.z)) / det;
    let l3 = 1.0 - l1 - l2;
    l1 * p1.y + l2 * p2.y + l3 * p3.y
}

impl Heightfield {
    /// Terrain height at world position `(x, z)`.
    ///
    /// Locates the enclosing grid cell, picks the upper-left or lower-right
    /// triangle of that cell, and interpolates barycentrically. Returns
    /// `0.0` for any query outside the valid cell range.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let cell = self.size() / self.vertex_count() as f32;
        let grid_x = (x / cell).floor() as isize;
        let grid_z = (z / cell).floor() as isize;

        let last_cell = self.vertex_count() as isize - 1;
        if grid_x < 0 || grid_z < 0 || grid_x >= last_cell || grid_z >= last_cell {
            return 0.0;
        }
        let (gx, gz) = (grid_x as usize, grid_z as usize);

        let u = (x % cell) / cell;
        let v = (z % cell) / cell;
        let pos = Vec2::new(u, v);

        if u < 1.0 - v {
            barycentric_height(
                Vec3::new(0.0, self.height(gx, gz), 0.0),
                Vec3::new(1.0, self.height(gx + 1, gz), 0.0),
                Vec3::new(0.0, self.height(gx, gz + 1), 1.0),
                pos,
            )
        } else {
            barycentric_height(
                Vec3::new(1.0, self.height(gx + 1, gz), 0.0),
                Vec3::new(1.0, self.height(gx + 1, gz + 1), 1.0),
                Vec3::new(0.0, self.height(gx, gz + 1), 1.0),
                pos,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::heightfield::HeightfieldParams;

    fn field() -> Heightfield {
        Heightfield::generate(HeightfieldParams {
            size: 20.0,
            vertex_count: 4,
            seed: 42,
            max_height: 2.0,
            interpolation_steps: 3,
            roughness: 0.3,
        })
        .unwrap()
    }

    #[test]
    fn test_barycentric_recovers_corner_values() {
        let p1 = Vec3::new(0.0, 3.0, 0.0);
        let p2 = Vec3::new(1.0, 7.0, 0.0);
        let p3 = Vec3::new(0.0, 5.0, 1.0);
        assert!((barycentric_height(p1, p2, p3, Vec2::new(0.0, 0.0)) - 3.0).abs() < 1e-6);
        assert!((barycentric_height(p1, p2, p3, Vec2::new(1.0, 0.0)) - 7.0).abs() < 1e-6);
        assert!((barycentric_height(p1, p2, p3, Vec2::new(0.0, 1.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_returns_zero() {
        let f = field();
        let cell = f.size() / f.vertex_count() as f32;
        assert_eq!(f.height_at(-0.1, 3.0), 0.0);
        assert_eq!(f.height_at(3.0, -0.1), 0.0);
        // gridX == vertex_count - 1 is already out of range
        assert_eq!(f.height_at(cell * 3.0, 1.0), 0.0);
        assert_eq!(f.height_at(1.0, cell * 3.5), 0.0);
        assert_eq!(f.height_at(1e6, 1e6), 0.0);
    }

    #[test]
    fn test_sampler_matches_grid_at_vertices() {
        let f = field();
        let cell = f.size() / f.vertex_count() as f32;
        for row in 0..3 {
            for col in 0..3 {
                let sampled = f.height_at(col as f32 * cell, row as f32 * cell);
                let stored = f.height(col, row);
                assert!(
                    (sampled - stored).abs() < 1e-5,
                    "vertex ({col},{row}): sampled {sampled}, stored {stored}"
                );
            }
        }
    }

    #[test]
    fn test_triangle_branches_agree_on_diagonal() {
        let f = field();
        let cell = f.size() / f.vertex_count() as f32;
        // Midpoint of the cell diagonal (u = v = 0.5) lies on both triangles
        let x = 0.5 * cell;
        let z = 0.5 * cell;
        let from_lower = f.height_at(x, z);
        let from_upper = barycentric_height(
            Vec3::new(0.0, f.height(0, 0), 0.0),
            Vec3::new(1.0, f.height(1, 0), 0.0),
            Vec3::new(0.0, f.height(0, 1), 1.0),
            Vec2::new(0.5, 0.5),
        );
        assert!((from_lower - from_upper).abs() < 1e-5);
    }

    #[test]
    fn test_interior_sample_within_corner_bounds() {
        let f = field();
        let cell = f.size() / f.vertex_count() as f32;
        let sampled = f.height_at(0.25 * cell, 0.25 * cell);
        let corners = [f.height(0, 0), f.height(1, 0), f.height(0, 1)];
        let min = corners.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = corners.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(sampled >= min - 1e-5 && sampled <= max + 1e-5);
    }
}
