//! Simulation engine: the run orchestrator.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nightfall_core::commands::PlayerCommand;
use nightfall_core::components::Enemy;
use nightfall_core::config::Tuning;
use nightfall_core::enums::{EnemyKind, GamePhase, WeaponId};
use nightfall_core::events::GameEvent;
use nightfall_core::state::{GameStateSnapshot, HudSnapshot, RunSummary, UpgradeChoiceView};
use nightfall_core::types::{MoveInput, SimTime};
use nightfall_core::upgrades::UpgradeDefinition;
use nightfall_core::weapons::weapon_definition;

use crate::effects::PassiveEffects;
use crate::player::Player;
use crate::systems;
use crate::systems::boss::BossGate;
use crate::systems::snapshot::RunCounters;
use crate::systems::spawner::{SpawnContext, SpawnSchedule};
use crate::upgrades::{apply_upgrade, UpgradeSystem};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed, inputs and dt sequence give the
    /// same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    tuning: Tuning,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    weapon: WeaponId,
    player: Option<Player>,
    input: MoveInput,
    upgrades: UpgradeSystem,
    effects: PassiveEffects,
    spawn_schedule: SpawnSchedule,
    boss_gate: BossGate,
    next_serial: u64,
    kills: u32,

    // --- Level-up offers ---
    pending_levels: VecDeque<u32>,
    offer: Option<Vec<&'static UpgradeDefinition>>,
    summary: Option<RunSummary>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            weapon: WeaponId::default(),
            player: None,
            input: MoveInput::NONE,
            upgrades: UpgradeSystem::default(),
            effects: PassiveEffects::default(),
            spawn_schedule: SpawnSchedule::new(&config.tuning),
            boss_gate: BossGate::new(&config.tuning),
            next_serial: 0,
            kills: 0,
            pending_levels: VecDeque::new(),
            offer: None,
            summary: None,
            tuning: config.tuning,
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

    /// Advance the simulation by `dt` seconds (clamped) and return the
    /// resulting snapshot. Paused, idle and ended runs only process commands.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        let dt = self.clamp_dt(dt);
        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
        }

        self.snapshot()
    }

    /// Begin a fresh run with `weapon`, discarding any current run.
    pub fn start_run(&mut self, weapon: WeaponId) {
        let def = weapon_definition(weapon);
        self.world.clear();
        self.time = SimTime::default();
        self.weapon = weapon;
        self.player = Some(Player::new(Vec2::ZERO, def, &self.tuning, &mut self.rng));
        self.input = MoveInput::NONE;
        self.upgrades.configure_for_weapon(def);
        self.effects.clear();
        self.spawn_schedule = SpawnSchedule::new(&self.tuning);
        self.boss_gate = BossGate::new(&self.tuning);
        self.next_serial = 0;
        self.kills = 0;
        self.pending_levels.clear();
        self.offer = None;
        self.summary = None;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted { weapon });
        log::info!("run started with {} ({})", def.name, weapon.key());
    }

    /// Drop the current run and return to idle.
    pub fn return_to_menu(&mut self) {
        self.world.clear();
        self.player = None;
        self.effects.clear();
        self.pending_levels.clear();
        self.offer = None;
        self.summary = None;
        self.phase = GamePhase::Idle;
        log::debug!("returned to menu");
    }

    pub fn set_input(&mut self, input: MoveInput) {
        self.input = input;
    }

    /// Apply the offered upgrade at `index`. Returns `false` if there is no
    /// pending offer or the index is out of range.
    pub fn choose_upgrade(&mut self, index: usize) -> bool {
        if self.phase != GamePhase::Paused {
            log::warn!("upgrade choice ignored in phase {:?}", self.phase);
            return false;
        }
        let Some(upgrade) = self.offer.as_ref().and_then(|c| c.get(index).copied()) else {
            log::warn!(
                "upgrade index {index} out of range ({} offered)",
                self.offer.as_ref().map_or(0, |c| c.len())
            );
            return false;
        };
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        apply_upgrade(upgrade, player, &mut self.effects, &mut self.rng);
        self.events.push(GameEvent::UpgradeApplied {
            title: upgrade.title.to_string(),
        });
        self.offer = None;
        self.present_next_offer();
        true
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn weapon(&self) -> WeaponId {
        self.weapon
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn passive_effects(&self) -> &PassiveEffects {
        &self.effects
    }

    /// Elapsed time at which the next boss may spawn.
    pub fn next_boss_at(&self) -> f32 {
        self.boss_gate.next_at
    }

    /// HUD numbers for the current run; zeros when idle.
    pub fn hud(&self) -> HudSnapshot {
        self.player
            .as_ref()
            .map(|p| systems::snapshot::build_hud(p, self.counters()))
            .unwrap_or_default()
    }

    /// The upgrade offer awaiting a choice.
    pub fn pending_offer(&self) -> Option<Vec<UpgradeChoiceView>> {
        self.offer.as_deref().map(systems::snapshot::choice_views)
    }

    /// Summary of the ended run.
    pub fn run_summary(&self) -> Option<RunSummary> {
        self.summary
    }

    /// Copy of an enemy's state, if it still exists.
    pub fn enemy(&self, entity: Entity) -> Option<Enemy> {
        self.world.get::<&Enemy>(entity).ok().map(|e| (*e).clone())
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// Place an enemy directly, bypassing the spawn system. Used by scripted
    /// scenarios. Returns `None` when no run is active.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, position: Vec2, difficulty: f32) -> Option<Entity> {
        self.player.as_ref()?;
        let entity = world_setup::spawn_enemy(
            &mut self.world,
            kind,
            position,
            difficulty,
            false,
            self.next_serial,
        );
        self.next_serial += 1;
        if kind.preset().is_boss && self.boss_gate.active.is_none() {
            self.boss_gate.active = Some(entity);
        }
        Some(entity)
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun { weapon } => self.start_run(weapon),
            PlayerCommand::SetInput { input } => self.set_input(input),
            PlayerCommand::ChooseUpgrade { index } => {
                self.choose_upgrade(index);
            }
            PlayerCommand::ReturnToMenu => self.return_to_menu(),
        }
    }

    fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("invalid frame dt {dt}, treating as 0");
            return 0.0;
        }
        dt.min(self.tuning.max_frame_dt)
    }

    fn counters(&self) -> RunCounters {
        RunCounters {
            elapsed_secs: self.time.elapsed_secs,
            kills: self.kills,
            boss_health_ratio: self.boss_gate.health_ratio(&self.world),
        }
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let counters = self.counters();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.weapon,
            self.player.as_ref(),
            counters,
            self.offer.as_deref(),
            events,
            self.summary,
        )
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        // 1. Clock
        self.time.advance(dt);
        let elapsed = self.time.elapsed_secs;
        let mut kills = Vec::new();

        // 2. Passive effects (parry window, pulse nova)
        systems::effects::run(&self.world, &mut self.effects, player, dt, &mut kills);

        // 3. Player movement
        player.update(dt, self.input);

        // 4. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_schedule,
            &self.tuning,
            SpawnContext {
                elapsed,
                player_pos: player.position,
                attack_radius: player.stats.attack_radius,
            },
            dt,
            &mut self.next_serial,
        );

        // 5. Boss gate
        if let Some(max_health) = systems::boss::run(
            &mut self.world,
            &mut self.rng,
            &mut self.boss_gate,
            &self.tuning,
            elapsed,
            player.position,
            player.stats.attack_radius,
            &mut self.next_serial,
        ) {
            self.events.push(GameEvent::BossSpawned { max_health });
        }

        // 6. Auto-target
        let target = systems::targeting::nearest_in_range(
            &self.world,
            player.position,
            player.stats.attack_radius,
        );

        // 7. Attack
        let shots = player.try_attack(target);
        if !shots.is_empty() {
            self.effects.on_attack();
            for shot in shots {
                world_setup::spawn_shot(&mut self.world, shot);
            }
        }

        // 8. Enemy homing
        systems::movement::run_enemies(&mut self.world, player.position, dt);

        // 9. Projectile flight
        systems::movement::run_projectiles(&mut self.world, player.position, dt);

        // 10. Orbitals
        systems::orbitals::run(&self.world, player, dt, &mut kills);

        // 11. Projectile hits, then kill credit for every source
        systems::collision::handle_projectiles(&self.world, self.effects.chain_spark(), &mut kills);
        for kill in kills {
            self.kills += 1;
            self.events.push(GameEvent::EnemyKilled {
                kind: kill.kind,
                reward_xp: kill.reward_xp,
            });
            if kill.is_boss {
                self.events.push(GameEvent::BossDefeated);
                if self.boss_gate.on_boss_killed(kill.entity, &self.tuning, elapsed) {
                    log::info!(
                        "boss defeated at t={elapsed:.1}s, next boss at {:.1}s",
                        self.boss_gate.next_at
                    );
                }
            }
            let pending = &mut self.pending_levels;
            player.gain_experience(kill.reward_xp, &self.tuning, |level| pending.push_back(level));
        }

        // 12. Contact damage
        systems::collision::handle_player(&self.world, player, self.tuning.contact_pad, dt);

        // 13. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        log::trace!(
            "tick {} t={elapsed:.2}s hp={:.1} kills={}",
            self.time.tick,
            player.health,
            self.kills
        );

        // 14. End of run, else level-up offers
        if !player.alive {
            self.end_run();
        } else if self.offer.is_none() {
            self.present_next_offer();
        }
    }

    /// Present the next queued level-up offer, or resume play when none is
    /// left. Levels reached with an empty pool are skipped without pausing.
    fn present_next_offer(&mut self) {
        while let Some(level) = self.pending_levels.pop_front() {
            let choices = self
                .upgrades
                .get_choices(&mut self.rng, self.tuning.upgrade_choices);
            if choices.is_empty() {
                log::debug!("level {level} reached with an empty upgrade pool");
                continue;
            }
            log::info!(
                "level {level}: offering {}",
                choices.iter().map(|u| u.title).collect::<Vec<_>>().join(", ")
            );
            self.events.push(GameEvent::LevelUp {
                level,
                choices: systems::snapshot::choice_views(&choices),
            });
            self.offer = Some(choices);
            self.phase = GamePhase::Paused;
            return;
        }
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
    }

    fn end_run(&mut self) {
        self.phase = GamePhase::Ended;
        self.pending_levels.clear();
        self.offer = None;
        let summary = RunSummary {
            time_survived: self.time.elapsed_secs.round() as u32,
            kills: self.kills,
            level: self.player.as_ref().map_or(1, |p| p.level),
        };
        self.summary = Some(summary);
        self.events.push(GameEvent::RunEnded {
            time_survived: summary.time_survived,
            kills: summary.kills,
        });
        log::info!(
            "run ended after {}s with {} kills at level {}",
            summary.time_survived,
            summary.kills,
            summary.level
        );
    }
}
