//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use nightfall_core::components::{Enemy, Projectile};
use nightfall_core::enums::{GamePhase, WeaponId};
use nightfall_core::events::GameEvent;
use nightfall_core::state::*;
use nightfall_core::types::{Position, SimTime};
use nightfall_core::upgrades::UpgradeDefinition;

use crate::player::Player;

/// Run counters the HUD needs beyond the player itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCounters {
    pub elapsed_secs: f32,
    pub kills: u32,
    pub boss_health_ratio: Option<f32>,
}

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    weapon: WeaponId,
    player: Option<&Player>,
    counters: RunCounters,
    offer: Option<&[&'static UpgradeDefinition]>,
    events: Vec<GameEvent>,
    summary: Option<RunSummary>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        weapon,
        hud: player.map(|p| build_hud(p, counters)).unwrap_or_default(),
        player: player.map(build_player).unwrap_or_default(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        offer: offer.map(choice_views),
        events,
        summary,
    }
}

pub fn build_hud(player: &Player, counters: RunCounters) -> HudSnapshot {
    HudSnapshot {
        health: player.health,
        max_health: player.max_health,
        damage: player.stats.damage,
        speed: player.stats.speed,
        level: player.level,
        experience: player.experience,
        experience_to_level: player.experience_to_level,
        elapsed_secs: counters.elapsed_secs,
        kill_count: counters.kills,
        orbital_count: player.orbitals.len() as u32,
        boss_health_ratio: counters.boss_health_ratio,
    }
}

pub fn choice_views(choices: &[&'static UpgradeDefinition]) -> Vec<UpgradeChoiceView> {
    choices
        .iter()
        .map(|u| UpgradeChoiceView {
            title: u.title.to_string(),
            description: u.description.to_string(),
        })
        .collect()
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: Position(player.position),
        facing: player.facing,
        walk_cycle: player.walk_cycle,
        hurt: player.hurt_timer > 0.0,
        attack_flash: player.attack_flash > 0.0,
        orbitals: player
            .orbitals
            .iter()
            .map(|orb| OrbitalView {
                position: Position(orb.point(player.position)),
                sprite: orb.sprite,
            })
            .collect(),
    }
}

/// Enemies in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(u64, EnemyView)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .filter(|(_, (_, enemy))| enemy.alive)
        .map(|(_, (pos, enemy))| {
            (
                enemy.serial,
                EnemyView {
                    kind: enemy.kind,
                    position: *pos,
                    size: enemy.size,
                    health_ratio: enemy.health_ratio(),
                    is_boss: enemy.is_boss,
                    is_elite: enemy.is_elite,
                    hurt: enemy.hurt_timer > 0.0,
                    walk_cycle: enemy.walk_cycle,
                },
            )
        })
        .collect();

    enemies.sort_by_key(|(serial, _)| *serial);
    enemies.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile)>()
        .iter()
        .filter(|(_, (_, proj))| proj.alive)
        .map(|(_, (pos, proj))| ProjectileView {
            position: *pos,
            rotation: proj.rotation,
            sprite: proj.sprite,
            kind: proj.kind,
            arc: proj.arc,
        })
        .collect()
}
