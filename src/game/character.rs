//! Playable character.
//!
//! Transform, facing direction, animation frame counters, and the
//! Idle / Running / Dead state machine. Movement is frame-stepped: one
//! animation frame and one movement step per simulation tick at the fixed
//! 30 ms cadence.

use glam::Vec3;

use crate::physics::bounding_box::{BoundingBox, CollisionError, rotate_y};
use crate::terrain::Heightfield;

/// Frames in the idle animation cycle.
pub const IDLE_FRAME_COUNT: usize = 59;
/// Frames in the run animation cycle.
pub const RUN_FRAME_COUNT: usize = 24;
/// Model-to-world scale of the character.
pub const CHARACTER_SCALE: f32 = 0.1;
/// Distance covered per running tick.
pub const CHARACTER_SPEED: f32 = 0.1;
/// Turn step per input press (radians).
pub const TURN_STEP: f32 = 30.0 * std::f32::consts::PI / 180.0;

/// Character behavior state. `Dead` is absorbing: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterState {
    Idle,
    Running,
    Dead,
}

/// The player-controlled character.
pub struct Character {
    /// Feet position in world space.
    pub position: Vec3,
    /// Accumulated yaw (radians), mirrors `direction` for the renderer.
    pub rotation_y: f32,
    /// Uniform model scale.
    pub scale: f32,
    direction: Vec3,
    state: CharacterState,
    idle_frame: usize,
    run_frame: usize,
    bounds: BoundingBox,
}

impl Character {
    /// Place a character at `position`, measuring its collision volume from
    /// the model's vertex list.
    pub fn new(position: Vec3, mesh_vertices: &[Vec3]) -> Result<Self, CollisionError> {
        Ok(Self {
            position,
            rotation_y: 0.0,
            scale: CHARACTER_SCALE,
            direction: Vec3::Z,
            state: CharacterState::Idle,
            idle_frame: 0,
            run_frame: 0,
            bounds: BoundingBox::from_vertices(mesh_vertices)?,
        })
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == CharacterState::Dead
    }

    /// Current facing, a unit vector in the XZ plane.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Toggle between standing and running. Ignored once dead.
    pub fn toggle_run(&mut self) {
        self.state = match self.state {
            CharacterState::Idle => CharacterState::Running,
            CharacterState::Running => CharacterState::Idle,
            CharacterState::Dead => CharacterState::Dead,
        };
    }

    /// Kill the character. Irreversible.
    pub fn kill(&mut self) {
        if self.state != CharacterState::Dead {
            log::info!("character died at {:?}", self.position);
            self.state = CharacterState::Dead;
        }
    }

    /// Turn by one step; `sign` is +1 for left, -1 for right.
    pub fn turn(&mut self, sign: f32) {
        if self.is_dead() {
            return;
        }
        let angle = sign * TURN_STEP;
        self.direction = rotate_y(self.direction, angle);
        self.rotation_y += angle;
    }

    /// Advance one animation tick and return the frame index the renderer
    /// should draw. Running also steps the position along the facing
    /// direction; dead characters hold frame 0 and never move.
    pub fn advance_frame(&mut self) -> usize {
        match self.state {
            CharacterState::Idle => {
                self.idle_frame = (self.idle_frame + 1) % IDLE_FRAME_COUNT;
                self.idle_frame
            }
            CharacterState::Running => {
                self.run_frame = (self.run_frame + 1) % RUN_FRAME_COUNT;
                self.position += self.direction * CHARACTER_SPEED;
                self.run_frame
            }
            CharacterState::Dead => 0,
        }
    }

    /// Clamp the feet to the terrain surface under the current position.
    pub fn snap_to_ground(&mut self, terrain: &Heightfield) {
        self.position.y = terrain.height_at(self.position.x, self.position.z);
    }

    /// Refresh the collision volume from the current transform. Must run
    /// before any containment query in the same tick.
    pub fn refresh_bounds(&mut self) {
        self.bounds.update(self.scale, self.rotation_y, self.position);
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}
