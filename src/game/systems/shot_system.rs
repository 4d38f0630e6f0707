//! Shot System
//!
//! Tracks the boss's energy shots. Shots fly in a straight line at constant
//! speed and expire once they have covered their maximum range; gravity and
//! terrain do not affect them. The combat system decides what a shot hits,
//! this module only moves them.

use glam::Vec3;

/// Upper bound on simultaneously live shots.
pub const DEFAULT_MAX_SHOTS: usize = 8;

/// What a shot did during one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotState {
    /// Still in the air.
    Flying,
    /// Covered its maximum range this step.
    Expired,
}

/// A single energy shot in flight.
#[derive(Debug, Clone)]
pub struct Shot {
    /// Current world position.
    pub position: Vec3,
    /// Velocity in world units per second.
    pub velocity: Vec3,
    distance_traveled: f32,
}

impl Shot {
    /// Launch a shot from `position` along `direction` at `speed`.
    pub fn spawn(position: Vec3, direction: Vec3, speed: f32) -> Self {
        Self {
            position,
            velocity: direction.normalize_or_zero() * speed,
            distance_traveled: 0.0,
        }
    }

    /// Total distance covered since launch.
    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    /// Advance the shot by `delta` seconds.
    pub fn integrate(&mut self, max_range: f32, delta: f32) -> ShotState {
        let step = self.velocity * delta;
        self.position += step;
        self.distance_traveled += step.length();
        if self.distance_traveled >= max_range {
            ShotState::Expired
        } else {
            ShotState::Flying
        }
    }
}

/// Outcome of one shot for one tick, reported back to the combat system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotUpdate {
    /// Index of the shot in the system's pool.
    pub index: usize,
    /// World position after integration.
    pub position: Vec3,
    pub state: ShotState,
}

/// Pool of live shots.
pub struct ShotSystem {
    shots: Vec<Shot>,
    max_shots: usize,
}

impl Default for ShotSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SHOTS)
    }
}

impl ShotSystem {
    pub fn new(max_shots: usize) -> Self {
        Self {
            shots: Vec::with_capacity(max_shots),
            max_shots,
        }
    }

    /// Launch a shot if the pool has room. Returns `false` when the pool is
    /// full and the shot was dropped.
    pub fn fire(&mut self, position: Vec3, direction: Vec3, speed: f32) -> bool {
        if self.shots.len() >= self.max_shots {
            log::warn!("shot pool full, dropping shot");
            return false;
        }
        self.shots.push(Shot::spawn(position, direction, speed));
        true
    }

    /// Integrate every live shot by `delta` seconds and report each one's
    /// position and state. Expired shots are reported, not removed; the
    /// caller decides removal order after hit tests.
    pub fn update(&mut self, max_range: f32, delta: f32) -> Vec<ShotUpdate> {
        self.shots
            .iter_mut()
            .enumerate()
            .map(|(index, shot)| {
                let state = shot.integrate(max_range, delta);
                ShotUpdate {
                    index,
                    position: shot.position,
                    state,
                }
            })
            .collect()
    }

    /// Remove the shot at `index`. Swaps with the last element, so callers
    /// removing several shots in one tick must go highest index first.
    pub fn remove(&mut self, index: usize) {
        self.shots.swap_remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter()
    }

    pub fn active_count(&self) -> usize {
        self.shots.len()
    }

    pub fn clear(&mut self) {
        self.shots.clear();
    }
}
