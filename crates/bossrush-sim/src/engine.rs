//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world (the enemy roster), the arena,
//! player, weapon, wave and effect state. It processes player commands, runs
//! all systems and produces `GameStateSnapshot`s. Completely headless, which
//! keeps it deterministic and testable.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use bossrush_arena::Arena;
use bossrush_core::commands::PlayerCommand;
use bossrush_core::constants::*;
use bossrush_core::enums::{GamePhase, WeaponId};
use bossrush_core::events::{PresentationEvent, PresentationSink};
use bossrush_core::state::GameStateSnapshot;
use bossrush_core::types::SimTime;

use crate::effects::EffectState;
use crate::player::{InputState, PlayerState};
use crate::systems;
use crate::systems::snapshot::SnapshotSources;
use crate::wave::WaveState;
use crate::weapon::WeaponState;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Maximum simultaneous minions.
    pub max_minions: usize,
    /// Seconds between a boss kill and the next wave.
    pub wave_delay_secs: f32,
    /// Weapon equipped at game start.
    pub start_weapon: WeaponId,
    /// Player health at game start.
    pub player_health: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_minions: MAX_MINIONS,
            wave_delay_secs: WAVE_DELAY_SECS,
            start_weapon: WeaponId::Ak,
            player_health: PLAYER_MAX_HEALTH,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    arena: Arena,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: PlayerState,
    input: InputState,
    weapon: WeaponState,
    wave: WaveState,
    effects: EffectState,
    kills: u32,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<PresentationEvent>,
}

impl SimulationEngine {
    /// Create a new engine on the standard arena.
    pub fn new(config: SimConfig) -> Self {
        Self::with_arena(config, Arena::standard())
    }

    /// Create a new engine on a custom arena.
    pub fn with_arena(config: SimConfig, arena: Arena) -> Self {
        Self {
            world: World::new(),
            arena,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: PlayerState::new(config.player_health),
            input: InputState::default(),
            weapon: WeaponState::new(config.start_weapon),
            wave: WaveState::new(config.wave_delay_secs, config.max_minions),
            effects: EffectState::default(),
            kills: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. `dt` is clamped to `[0, MAX_DT]`.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_DT)
        } else {
            0.0
        };

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        self.effects.decay(dt);
        self.effects.present_all(&self.events);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &SnapshotSources {
                world: &self.world,
                time: &self.time,
                phase: self.phase,
                player: &self.player,
                input: &self.input,
                weapon: &self.weapon,
                wave: &self.wave,
                effects: &self.effects,
                kills: self.kills,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn weapon(&self) -> &WeaponState {
        &self.weapon
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Spawn a single enemy outside the wave flow (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        profile: &bossrush_ai::profiles::EnemyProfile,
        position: glam::Vec3,
    ) -> hecs::Entity {
        crate::world_setup::spawn_enemy(
            &mut self.world,
            &mut self.rng,
            position,
            profile,
            &mut self.events,
        )
    }

    /// Mutable world access (for testing).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable player access (for testing).
    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Mutable weapon access (for testing).
    #[cfg(test)]
    pub fn weapon_mut(&mut self) -> &mut WeaponState {
        &mut self.weapon
    }

    /// Skip the ready screen without spawning a wave (for testing).
    #[cfg(test)]
    pub fn activate_empty(&mut self) {
        self.phase = GamePhase::Active;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Held-state setters always apply;
    /// edge events only while the game is active.
    fn handle_command(&mut self, command: PlayerCommand) {
        let active = self.phase == GamePhase::Active;
        match command {
            PlayerCommand::SetMoveKeys { keys } => self.input.keys = keys,
            PlayerCommand::SetSprint { held } => self.input.sprint = held,
            PlayerCommand::SetCrouch { held } => self.input.crouch = held,
            PlayerCommand::SetAim { held } => self.input.aim = held,
            PlayerCommand::Look { yaw, pitch } => {
                if yaw.is_finite() && pitch.is_finite() {
                    self.player.view.yaw = yaw.rem_euclid(std::f32::consts::TAU);
                    self.player.view.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
                }
            }
            PlayerCommand::TriggerDown => {
                self.input.trigger_held = true;
                if active {
                    self.input.trigger_pulled = true;
                }
            }
            PlayerCommand::TriggerUp => self.input.trigger_held = false,
            PlayerCommand::Jump => {
                if active {
                    self.player.jump_buffer = JUMP_BUFFER_SECS;
                }
            }
            PlayerCommand::Reload => {
                if active && self.weapon.request_reload() {
                    log::debug!("{:?} reload started", self.weapon.id);
                    self.events.push(PresentationEvent::ReloadStarted {
                        weapon: self.weapon.id,
                    });
                }
            }
            PlayerCommand::SelectWeapon { slot } => {
                let Some(id) = WeaponId::from_slot(slot) else {
                    return;
                };
                if active && id != self.weapon.id {
                    self.weapon.switch_weapon(id);
                    log::debug!("switched to {}", self.weapon.def().name);
                    self.events
                        .push(PresentationEvent::WeaponSwitched { weapon: id });
                }
            }
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::Pause => {
                if active {
                    log::debug!("paused at tick {}", self.time.tick);
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    log::debug!("resumed at tick {}", self.time.tick);
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Reset the session and spawn wave 1.
    fn start_game(&mut self) {
        self.time = SimTime::default();
        self.player = PlayerState::new(self.config.player_health);
        self.weapon = WeaponState::new(self.config.start_weapon);
        self.wave = WaveState::new(self.config.wave_delay_secs, self.config.max_minions);
        self.input.trigger_pulled = false;
        self.effects.clear();
        self.kills = 0;
        systems::wave_director::start_wave(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            &mut self.wave,
            &mut self.events,
        );
        self.phase = GamePhase::Active;
        log::info!("game started (seed {})", self.config.seed);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player movement
        systems::movement::run(&mut self.player, &self.input, &self.arena, dt);
        // 2. Weapon (+ hitscan on fire)
        if let Some(report) = systems::weapon::run(
            &mut self.world,
            &self.arena,
            &mut self.rng,
            &mut self.weapon,
            &mut self.input,
            &self.player,
            dt,
            &mut self.events,
        ) {
            self.kills += report.kills.len() as u32;
        }
        // 3. Enemy AI
        systems::enemy_ai::run(
            &mut self.world,
            &self.arena,
            &mut self.rng,
            &mut self.player,
            &self.wave,
            dt,
            &mut self.events,
        );
        // 4. Wave director
        systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            &mut self.wave,
            dt,
            &mut self.events,
        );
        // 5. Death check
        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            self.input.trigger_held = false;
            self.events.push(PresentationEvent::PlayerDied);
            log::info!(
                "player died on wave {} at {:.1}s with {} kills",
                self.wave.wave,
                self.time.elapsed_secs,
                self.kills
            );
        }
    }
}
