//! Combat System
//!
//! Drives one tick of the boss fight: refreshes every hit volume, advances
//! the boss's fight cadence, launches and resolves shots, and reports the
//! tick's outcomes as events. The system holds no state of its own; all
//! state lives in the entities it is handed.

use glam::Vec3;

use crate::game::android::{Android, ArmSide, BossPhase};
use crate::game::character::Character;
use crate::game::config::ArenaConfig;
use crate::game::systems::shot_system::{ShotState, ShotSystem};

/// What killed the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillSource {
    /// Walked into a boss arm.
    ArmContact,
    /// Hit by an energy shot.
    Shot,
}

/// Everything noteworthy that happened during one combat tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    /// The boss noticed the character and started aiming.
    BossAiming,
    /// The character came within reach; the shot is winding up.
    ChargeStarted,
    /// A shot left the given arm socket.
    ShotFired { position: Vec3 },
    /// The character died this tick.
    CharacterKilled { by: KillSource },
    /// A shot covered its maximum range without hitting anything.
    ShotMissed,
    /// The boss finished its post-shot pause and went back to idle.
    BossReset,
}

/// Stateless combat orchestrator.
pub struct CombatSystem;

impl CombatSystem {
    /// Advance the fight by `delta` seconds.
    ///
    /// Order within the tick matters: hit volumes are refreshed first so
    /// every containment test below sees this tick's transforms, then arm
    /// contact, then the boss cadence, then shots.
    pub fn update(
        character: &mut Character,
        android: &mut Android,
        shots: &mut ShotSystem,
        config: &ArenaConfig,
        delta: f32,
    ) -> Vec<CombatEvent> {
        let mut events = Vec::new();

        android.track_target(character.position);
        android.spin_head(delta);
        character.refresh_bounds();
        android.refresh_bounds();

        if !character.is_dead() {
            for side in ArmSide::BOTH {
                if android.arm_bounds(side).contains(character.position) {
                    character.kill();
                    events.push(CombatEvent::CharacterKilled {
                        by: KillSource::ArmContact,
                    });
                    break;
                }
            }
        }

        match android.phase() {
            BossPhase::Idle => {
                let distance = character.position.distance(android.position);
                if !character.is_dead() && distance <= config.aggro_range {
                    android.start_aiming();
                    events.push(CombatEvent::BossAiming);
                }
            }
            BossPhase::Aiming => {
                let side = android.closest_arm(character.position);
                let reach = character.position.distance(android.arm_position(side));
                if reach < config.charge_trigger_distance {
                    android.begin_charge();
                    events.push(CombatEvent::ChargeStarted);
                }
            }
            BossPhase::Charging { .. } => {
                if android.advance_charge(delta, config.charge_delay) {
                    let side = android.closest_arm(character.position);
                    let origin = android.arm_position(side);
                    shots.fire(origin, character.position - origin, config.shot_speed);
                    log::info!("android fired from {side:?} arm at {origin:?}");
                    events.push(CombatEvent::ShotFired { position: origin });
                }
            }
            BossPhase::Resolving { .. } => {
                if android.advance_resolution(delta, config.reset_delay) {
                    log::debug!("android reset to idle");
                    events.push(CombatEvent::BossReset);
                }
            }
        }

        let updates = shots.update(config.shot_max_range, delta);
        let mut spent = Vec::new();
        for update in updates {
            match update.state {
                ShotState::Expired => {
                    events.push(CombatEvent::ShotMissed);
                    spent.push(update.index);
                }
                ShotState::Flying => {
                    if !character.is_dead() && character.bounds().contains(update.position) {
                        character.kill();
                        events.push(CombatEvent::CharacterKilled {
                            by: KillSource::Shot,
                        });
                        spent.push(update.index);
                    }
                }
            }
        }
        // swap_remove invalidates later indices, so remove back to front
        spent.sort_unstable_by(|a, b| b.cmp(a));
        for index in spent {
            shots.remove(index);
        }

        events
    }
}
