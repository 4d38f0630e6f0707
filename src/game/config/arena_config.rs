//! Arena tuning parameters.
//!
//! Entity placement, collider extents, and the boss fight timings. All
//! distances are in world units, all durations in seconds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gameplay tuning for one arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Where the character starts.
    pub character_spawn: Vec3,
    /// Where the boss stands. The boss never moves.
    pub boss_position: Vec3,
    /// Object-space extents of the character's hit volume.
    pub character_collider_min: Vec3,
    pub character_collider_max: Vec3,
    /// Object-space extents of one boss arm's hit volume. Both arms share
    /// the same model.
    pub arm_collider_min: Vec3,
    pub arm_collider_max: Vec3,
    /// Distance at which the boss notices the character and starts aiming.
    pub aggro_range: f32,
    /// Arm-to-character distance that triggers the charge-up.
    pub charge_trigger_distance: f32,
    /// Seconds of charge-up before the shot leaves.
    pub charge_delay: f32,
    /// Seconds after firing before the boss returns to idle.
    pub reset_delay: f32,
    /// Shot speed in world units per second.
    pub shot_speed: f32,
    /// Distance a shot covers before it fizzles.
    pub shot_max_range: f32,
    /// Simulation tick length in seconds.
    pub frame_interval: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            character_spawn: Vec3::ZERO,
            boss_position: Vec3::new(0.0, 0.0, 5.0),
            character_collider_min: Vec3::new(-3.0, 0.0, -2.0),
            character_collider_max: Vec3::new(3.0, 18.0, 2.0),
            arm_collider_min: Vec3::new(-0.4, -2.2, -0.4),
            arm_collider_max: Vec3::new(0.4, 0.4, 0.4),
            aggro_range: 15.0,
            charge_trigger_distance: 4.0,
            charge_delay: 1.5,
            reset_delay: 2.0,
            shot_speed: 12.0,
            shot_max_range: 40.0,
            frame_interval: 0.03,
        }
    }
}

impl ArenaConfig {
    /// Corner vertex list spanning `min`..`max`, the shape collider meshes
    /// are built from.
    pub fn collider_corners(min: Vec3, max: Vec3) -> Vec<Vec3> {
        vec![
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, max.y, max.z),
        ]
    }

    /// Character collider vertex list.
    pub fn character_collider(&self) -> Vec<Vec3> {
        Self::collider_corners(self.character_collider_min, self.character_collider_max)
    }

    /// Boss arm collider vertex list.
    pub fn arm_collider(&self) -> Vec<Vec3> {
        Self::collider_corners(self.arm_collider_min, self.arm_collider_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = ArenaConfig::default();
        assert!(config.aggro_range > config.charge_trigger_distance);
        assert!(config.charge_delay > 0.0);
        assert!(config.reset_delay > 0.0);
        assert!(config.frame_interval > 0.0);
        assert!(config.shot_max_range > config.aggro_range);
    }

    #[test]
    fn test_collider_corners_span_extents() {
        let corners = ArenaConfig::collider_corners(Vec3::splat(-1.0), Vec3::splat(2.0));
        assert_eq!(corners.len(), 8);
        assert!(corners.contains(&Vec3::splat(-1.0)));
        assert!(corners.contains(&Vec3::splat(2.0)));
    }
}
