//! The Android boss.
//!
//! A fixed torso with a slowly spinning head and two arms that track the
//! target. The fight cadence is a four-phase machine driven by accumulated
//! elapsed seconds: Idle until the target comes close, Aiming while the
//! arms line up, Charging for a fixed delay before the shot leaves, and
//! Resolving until the arena resets. Transitions happen only through the
//! methods here; callers cannot write the phase directly.

use glam::Vec3;

use crate::physics::bounding_box::{BoundingBox, CollisionError};

/// Head offset from the torso origin.
pub const HEAD_OFFSET: Vec3 = Vec3::new(0.0, 2.8, 0.0);
/// Left arm socket offset from the torso origin.
pub const LEFT_ARM_OFFSET: Vec3 = Vec3::new(1.4, 1.5, 0.0);
/// Right arm socket offset from the torso origin.
pub const RIGHT_ARM_OFFSET: Vec3 = Vec3::new(-1.4, 1.5, 0.0);
/// Head spin rate (radians/second).
pub const HEAD_TURN_RATE: f32 = 0.29;

/// Which arm of the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    pub const BOTH: [ArmSide; 2] = [ArmSide::Left, ArmSide::Right];
}

/// Fight cadence phase. Timers accumulate the caller's frame deltas; the
/// phase advances when a per-tick deadline comparison trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossPhase {
    /// Target out of range; arms rest.
    Idle,
    /// Arms tracking the target, waiting for it to come within reach.
    Aiming,
    /// Shot winding up; fires once `elapsed` passes the charge delay.
    Charging { elapsed: f32 },
    /// Shot in flight or spent; returns to Idle after the reset delay.
    Resolving { elapsed: f32 },
}

/// The boss entity: torso transform, articulated head and arms, and the
/// per-arm collision volumes.
pub struct Android {
    /// Torso position in world space.
    pub position: Vec3,
    /// Torso yaw (radians).
    pub rotation_y: f32,
    head_rotation_y: f32,
    left_arm_yaw: f32,
    right_arm_yaw: f32,
    left_arm_bounds: BoundingBox,
    right_arm_bounds: BoundingBox,
    phase: BossPhase,
}

/// Yaw that carries the model's +X axis onto `direction` in the XZ plane.
fn xz_yaw(direction: Vec3) -> f32 {
    let flat = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
    (-flat.z).atan2(flat.x)
}

impl Android {
    /// Place the boss at `position`. Both arms share the same model, so one
    /// vertex list builds both collision volumes.
    pub fn new(position: Vec3, arm_vertices: &[Vec3]) -> Result<Self, CollisionError> {
        let arm_bounds = BoundingBox::from_vertices(arm_vertices)?;
        Ok(Self {
            position,
            rotation_y: 0.0,
            head_rotation_y: 0.0,
            left_arm_yaw: 0.0,
            right_arm_yaw: 0.0,
            left_arm_bounds: arm_bounds.clone(),
            right_arm_bounds: arm_bounds,
            phase: BossPhase::Idle,
        })
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn head_rotation_y(&self) -> f32 {
        self.head_rotation_y
    }

    /// World-space socket position of an arm.
    pub fn arm_position(&self, side: ArmSide) -> Vec3 {
        let offset = match side {
            ArmSide::Left => LEFT_ARM_OFFSET,
            ArmSide::Right => RIGHT_ARM_OFFSET,
        };
        self.position + offset
    }

    /// Current yaw of an arm.
    pub fn arm_yaw(&self, side: ArmSide) -> f32 {
        match side {
            ArmSide::Left => self.left_arm_yaw,
            ArmSide::Right => self.right_arm_yaw,
        }
    }

    /// Collision volume of an arm.
    pub fn arm_bounds(&self, side: ArmSide) -> &BoundingBox {
        match side {
            ArmSide::Left => &self.left_arm_bounds,
            ArmSide::Right => &self.right_arm_bounds,
        }
    }

    /// Point both arms at `target`, each from its own socket.
    pub fn track_target(&mut self, target: Vec3) {
        self.left_arm_yaw = xz_yaw(target - self.arm_position(ArmSide::Left));
        self.right_arm_yaw = xz_yaw(target - self.arm_position(ArmSide::Right));
    }

    /// Spin the head by one tick.
    pub fn spin_head(&mut self, delta: f32) {
        self.head_rotation_y += HEAD_TURN_RATE * delta;
    }

    /// Refresh both arm collision volumes from the current arm transforms.
    /// Must run before any containment query in the same tick.
    pub fn refresh_bounds(&mut self) {
        self.left_arm_bounds
            .update(1.0, self.left_arm_yaw, self.arm_position(ArmSide::Left));
        self.right_arm_bounds
            .update(1.0, self.right_arm_yaw, self.arm_position(ArmSide::Right));
    }

    /// The arm socket closest to `target`; shots leave from here.
    pub fn closest_arm(&self, target: Vec3) -> ArmSide {
        let left = target.distance(self.arm_position(ArmSide::Left));
        let right = target.distance(self.arm_position(ArmSide::Right));
        if left <= right { ArmSide::Left } else { ArmSide::Right }
    }

    /// Idle -> Aiming. No-op in any other phase.
    pub fn start_aiming(&mut self) {
        if self.phase == BossPhase::Idle {
            log::debug!("android acquired target");
            self.phase = BossPhase::Aiming;
        }
    }

    /// Aiming -> Charging. No-op in any other phase.
    pub fn begin_charge(&mut self) {
        if self.phase == BossPhase::Aiming {
            log::debug!("android charging shot");
            self.phase = BossPhase::Charging { elapsed: 0.0 };
        }
    }

    /// Advance the charge timer. Returns `true` exactly once, on the tick
    /// the charge delay lapses; the phase then moves to Resolving and the
    /// caller fires the shot.
    pub fn advance_charge(&mut self, delta: f32, charge_delay: f32) -> bool {
        if let BossPhase::Charging { elapsed } = &mut self.phase {
            *elapsed += delta;
            if *elapsed >= charge_delay {
                self.phase = BossPhase::Resolving { elapsed: 0.0 };
                return true;
            }
        }
        false
    }

    /// Advance the resolution timer. Returns `true` exactly once, on the
    /// tick the reset delay lapses; the phase then returns to Idle.
    pub fn advance_resolution(&mut self, delta: f32, reset_delay: f32) -> bool {
        if let BossPhase::Resolving { elapsed } = &mut self.phase {
            *elapsed += delta;
            if *elapsed >= reset_delay {
                self.phase = BossPhase::Idle;
                return true;
            }
        }
        false
    }
}
