//! Axis-aligned bounding boxes for hit detection.
//!
//! Each animated entity owns one box per collidable part. The object-space
//! ("rest") corners are computed once when the part's mesh loads; the
//! world-space ("current") corners are recomputed from scratch every frame
//! from the entity's scale, yaw and position, never accumulated
//! incrementally, so repeated updates cannot drift.
//!
//! Per-frame contract: callers must [`BoundingBox::update`] a box before
//! querying [`BoundingBox::contains`] in the same tick. There is no
//! staleness detection; a skipped update means stale hit tests.

use glam::Vec3;
use thiserror::Error;

/// Collision construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollisionError {
    /// A bounding box needs at least one mesh vertex to measure.
    #[error("cannot build a bounding box from an empty vertex list")]
    EmptyMesh,
}

/// Rotate `v` about the Y axis by `angle` radians.
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// World-space corners for a rest box under the given transform.
///
/// Pure function of its inputs: scale first, then yaw, then translate.
/// X/Z rotation components of the owning entity are ignored by design; the
/// game only ever yaws its characters.
pub fn transformed_corners(
    rest: &[Vec3; 8],
    scale: f32,
    rotation_y: f32,
    position: Vec3,
) -> [Vec3; 8] {
    rest.map(|corner| rotate_y(corner * scale, rotation_y) + position)
}

/// A per-entity collision volume: 8 object-space corners plus their
/// world-space image under the current frame's transform.
#[derive(Debug, Clone)]
pub struct BoundingBox {
    rest: [Vec3; 8],
    current: [Vec3; 8],
}

impl BoundingBox {
    /// Measure the object-space extents of a mesh and build its box.
    ///
    /// The min/max accumulators start at the origin, so a mesh lying
    /// entirely on one side of an axis gets that extent widened to include
    /// zero. The shipped hit volumes are tuned around this behavior.
    pub fn from_vertices(vertices: &[Vec3]) -> Result<Self, CollisionError> {
        if vertices.is_empty() {
            return Err(CollisionError::EmptyMesh);
        }

        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        for vertex in vertices {
            min = min.min(*vertex);
            max = max.max(*vertex);
        }

        let rest = [
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, min.y, min.z),
        ];
        Ok(Self {
            rest,
            current: rest,
        })
    }

    /// Object-space corners, fixed at construction.
    pub fn rest_corners(&self) -> &[Vec3; 8] {
        &self.rest
    }

    /// World-space corners as of the last [`update`](Self::update).
    pub fn current_corners(&self) -> &[Vec3; 8] {
        &self.current
    }

    /// Refresh the world-space corners from the current frame's transform.
    ///
    /// Always derives from the rest corners; calling this twice with the
    /// same transform yields identical results.
    pub fn update(&mut self, scale: f32, rotation_y: f32, position: Vec3) {
        self.current = transformed_corners(&self.rest, scale, rotation_y, position);
    }

    /// Inclusive containment test of `point` against the axis-aligned
    /// min/max of the current corners.
    pub fn contains(&self, point: Vec3) -> bool {
        let mut min = self.current[0];
        let mut max = self.current[0];
        for corner in &self.current[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::from_vertices(&[Vec3::splat(-1.0), Vec3::splat(1.0)]).unwrap()
    }

    #[test]
    fn test_empty_vertex_list_is_rejected() {
        assert!(matches!(
            BoundingBox::from_vertices(&[]),
            Err(CollisionError::EmptyMesh)
        ));
    }

    #[test]
    fn test_rest_containment_matches_extents() {
        let bounds = unit_box();
        assert!(bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::new(1.0, -1.0, 0.5)));
        assert!(!bounds.contains(Vec3::new(1.1, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, -1.1, 0.0)));
    }

    #[test]
    fn test_scaled_translated_box_scenario() {
        let mut bounds = unit_box();
        bounds.update(2.0, 0.0, Vec3::new(5.0, 0.0, 0.0));
        // x extent becomes [5 - 2, 5 + 2] = [3, 7]
        assert!(bounds.contains(Vec3::new(4.0, 0.0, 0.0)));
        assert!(bounds.contains(Vec3::new(3.0, 2.0, -2.0)));
        assert!(!bounds.contains(Vec3::new(8.0, 0.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(2.9, 0.0, 0.0)));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut bounds = unit_box();
        bounds.update(1.5, 0.7, Vec3::new(3.0, 1.0, -2.0));
        let first = *bounds.current_corners();
        bounds.update(1.5, 0.7, Vec3::new(3.0, 1.0, -2.0));
        assert_eq!(first, *bounds.current_corners());
    }

    #[test]
    fn test_update_never_mutates_rest() {
        let mut bounds = unit_box();
        let rest_before = *bounds.rest_corners();
        bounds.update(3.0, 1.2, Vec3::new(10.0, 5.0, -4.0));
        bounds.update(0.5, -2.0, Vec3::new(-1.0, 0.0, 8.0));
        assert_eq!(rest_before, *bounds.rest_corners());
    }

    #[test]
    fn test_one_sided_mesh_extends_to_origin() {
        // Accumulators start at zero, so a mesh strictly in the positive
        // octant still spans down to the origin
        let bounds =
            BoundingBox::from_vertices(&[Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 3.0, 4.0)])
                .unwrap();
        assert!(bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::new(0.5, 0.5, 0.5)));
        assert!(!bounds.contains(Vec3::new(-0.1, 0.0, 0.0)));
    }

    #[test]
    fn test_yaw_rotation_swings_corners() {
        let mut bounds = BoundingBox::from_vertices(&[
            Vec3::new(-2.0, -1.0, -0.5),
            Vec3::new(2.0, 1.0, 0.5),
        ])
        .unwrap();
        // Quarter turn about Y maps the x extent onto z
        bounds.update(1.0, std::f32::consts::FRAC_PI_2, Vec3::ZERO);
        assert!(bounds.contains(Vec3::new(0.0, 0.0, 1.9)));
        assert!(!bounds.contains(Vec3::new(1.9, 0.0, 0.0)));
    }

    #[test]
    fn test_rotate_y_formula() {
        let rotated = rotate_y(Vec3::new(1.0, 5.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert!((rotated.x - 0.0).abs() < 1e-6);
        assert_eq!(rotated.y, 5.0);
        assert!((rotated.z - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_contains_uses_current_not_rest() {
        let mut bounds = unit_box();
        bounds.update(1.0, 0.0, Vec3::new(100.0, 0.0, 0.0));
        assert!(!bounds.contains(Vec3::ZERO));
        assert!(bounds.contains(Vec3::new(100.0, 0.0, 0.0)));
    }
}
