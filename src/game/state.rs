//! Game State
//!
//! Owns the whole simulation: terrain, character, boss, and shots. The
//! embedding loop constructs one from a [`GameConfig`], feeds it input, and
//! ticks it at the configured frame interval.

use thiserror::Error;

use crate::game::android::Android;
use crate::game::character::Character;
use crate::game::config::GameConfig;
use crate::game::systems::{CombatEvent, CombatSystem, ShotSystem};
use crate::physics::bounding_box::CollisionError;
use crate::terrain::{Heightfield, TerrainError, TerrainMesh, build_mesh};

/// Game construction failures.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terrain generation failed: {0}")]
    Terrain(#[from] TerrainError),
    #[error("collision setup failed: {0}")]
    Collision(#[from] CollisionError),
}

/// The full simulation.
pub struct GameState {
    config: GameConfig,
    heightfield: Heightfield,
    terrain_mesh: TerrainMesh,
    character: Character,
    android: Android,
    shots: ShotSystem,
}

impl GameState {
    /// Build the world described by `config`. The terrain is generated once
    /// here; every later height query reads the stored grid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let heightfield = Heightfield::generate(config.terrain)?;
        let terrain_mesh = build_mesh(&heightfield);
        let mut character =
            Character::new(config.arena.character_spawn, &config.arena.character_collider())?;
        character.snap_to_ground(&heightfield);
        let android = Android::new(config.arena.boss_position, &config.arena.arm_collider())?;
        log::info!(
            "arena ready: {}x{} terrain, boss at {:?}",
            heightfield.vertex_count(),
            heightfield.vertex_count(),
            config.arena.boss_position
        );
        Ok(Self {
            config,
            heightfield,
            terrain_mesh,
            character,
            android,
            shots: ShotSystem::default(),
        })
    }

    /// Advance the simulation by one tick of `delta` seconds: one animation
    /// frame, a ground snap, then the combat systems.
    pub fn update(&mut self, delta: f32) -> Vec<CombatEvent> {
        self.character.advance_frame();
        self.character.snap_to_ground(&self.heightfield);
        CombatSystem::update(
            &mut self.character,
            &mut self.android,
            &mut self.shots,
            &self.config.arena,
            delta,
        )
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn heightfield(&self) -> &Heightfield {
        &self.heightfield
    }

    pub fn terrain_mesh(&self) -> &TerrainMesh {
        &self.terrain_mesh
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn android(&self) -> &Android {
        &self.android
    }

    pub fn shots(&self) -> &ShotSystem {
        &self.shots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BossPhase, CharacterState};

    #[test]
    fn test_new_builds_world_from_defaults() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.heightfield().vertex_count(), 64);
        assert!(!state.terrain_mesh().vertices.is_empty());
        assert_eq!(state.character().state(), CharacterState::Idle);
        assert_eq!(state.android().phase(), BossPhase::Idle);
        assert_eq!(state.shots().active_count(), 0);
    }

    #[test]
    fn test_spawned_character_rests_on_terrain() {
        let state = GameState::new(GameConfig::default()).unwrap();
        let spawn = state.config().arena.character_spawn;
        let ground = state.heightfield().height_at(spawn.x, spawn.z);
        assert_eq!(state.character().position.y, ground);
    }

    #[test]
    fn test_update_keeps_character_grounded() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.character_mut().toggle_run();
        for _ in 0..20 {
            state.update(0.03);
            let pos = state.character().position;
            assert_eq!(pos.y, state.heightfield().height_at(pos.x, pos.z));
        }
    }

    #[test]
    fn test_default_spawn_aggros_the_boss() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        // Spawn is 5 units from the boss, inside the default aggro range
        let events = state.update(0.03);
        assert!(events.contains(&CombatEvent::BossAiming));
    }
}
