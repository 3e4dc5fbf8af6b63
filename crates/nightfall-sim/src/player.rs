//! The player: movement, auto-attack, orbitals, health and leveling.
//!
//! Stored on `SimulationEngine` as plain data, NOT as an ECS entity.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use nightfall_core::components::{Orbital, Projectile};
use nightfall_core::config::Tuning;
use nightfall_core::constants::*;
use nightfall_core::enums::{OrbitalSprite, WeaponId, WeaponKind};
use nightfall_core::math;
use nightfall_core::types::{MoveInput, Pierce};
use nightfall_core::weapons::{PlayerStats, WeaponDefinition, WeaponShape};

/// A projectile about to be spawned into the world.
#[derive(Debug, Clone)]
pub struct Shot {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Track the player's position instead of integrating velocity.
    pub follow: bool,
    pub projectile: Projectile,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub level: u32,
    pub experience: f32,
    pub experience_to_level: f32,
    pub attack_timer: f32,
    pub hurt_timer: f32,
    pub attack_flash: f32,
    pub walk_cycle: f32,
    /// Last movement or aim heading, for the renderer.
    pub facing: f32,
    pub weapon_id: WeaponId,
    pub stats: PlayerStats,
    /// Mitigation without temporary buffs.
    pub base_mitigation: f32,
    pub weapon: WeaponShape,
    pub orbitals: Vec<Orbital>,
    pub alive: bool,
}

impl Player {
    /// New player at `position` equipped with `def`, including the weapon's
    /// starting orbitals.
    pub fn new<R: Rng>(
        position: Vec2,
        def: &WeaponDefinition,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let stats = def.stats();
        let mut player = Self {
            position,
            velocity: Vec2::ZERO,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            level: 1,
            experience: 0.0,
            experience_to_level: tuning.xp_first_threshold,
            attack_timer: 0.0,
            hurt_timer: 0.0,
            attack_flash: 0.0,
            walk_cycle: 0.0,
            facing: 0.0,
            weapon_id: def.id,
            stats,
            base_mitigation: stats.mitigation,
            weapon: def.shape(),
            orbitals: Vec::new(),
            alive: true,
        };
        for i in 0..def.starting_orbitals {
            let i = i as f32;
            player.add_orbital(
                rng,
                ORBITAL_BASE_RADIUS + i * ORBITAL_RADIUS_STEP,
                ORBITAL_BASE_SPEED + i * ORBITAL_SPEED_STEP,
                stats.damage * ORBITAL_DAMAGE_FRACTION,
                OrbitalSprite::Core,
            );
        }
        player
    }

    /// Move by the held keys and decay timers. No-op once dead.
    pub fn update(&mut self, dt: f32, input: MoveInput) {
        if !self.alive {
            return;
        }
        let dir = input.direction();
        self.velocity = dir * self.stats.speed;
        self.position += self.velocity * dt;

        let move_mag = self.velocity.length();
        if move_mag > WALK_CYCLE_MIN_SPEED {
            self.walk_cycle += dt * (move_mag / PLAYER_WALK_CYCLE_SCALE);
            self.facing = math::heading(dir);
        }
        self.attack_timer = (self.attack_timer - dt).max(0.0);
        self.hurt_timer = (self.hurt_timer - dt).max(0.0);
        self.attack_flash = (self.attack_flash - dt).max(0.0);
        for orbital in &mut self.orbitals {
            orbital.angle += dt * orbital.speed;
        }
    }

    /// Attack `target` if the cooldown allows. Returns the shots to spawn;
    /// empty when there is no target, the attack is cooling down, or the
    /// player is dead.
    pub fn try_attack(&mut self, target: Option<Vec2>) -> Vec<Shot> {
        let Some(target) = target else {
            return Vec::new();
        };
        if self.attack_timer > 0.0 || !self.alive {
            return Vec::new();
        }
        self.attack_timer = self.stats.attack_cooldown;
        self.attack_flash = ATTACK_FLASH_SECS;

        let base_angle = math::heading(target - self.position);
        self.facing = base_angle;

        match self.weapon.kind {
            WeaponKind::Melee => vec![Shot {
                position: self.position,
                velocity: Vec2::ZERO,
                follow: true,
                projectile: Projectile {
                    kind: WeaponKind::Melee,
                    damage: self.stats.damage,
                    lifespan: MELEE_LIFESPAN,
                    sprite: self.weapon.projectile,
                    rotation: base_angle,
                    pierce: Pierce::Infinite,
                    splash_radius: 0.0,
                    arc: self.weapon.arc,
                    struck: Vec::new(),
                    alive: true,
                },
            }],
            WeaponKind::Ranged => {
                let count = self.weapon.count.max(1);
                (0..count)
                    .map(|i| {
                        let offset = if count > 1 {
                            self.weapon.spread * (i as f32 / (count - 1) as f32 - 0.5)
                        } else {
                            0.0
                        };
                        let angle = base_angle + offset;
                        let dir = Vec2::new(angle.cos(), angle.sin());
                        Shot {
                            position: self.position,
                            velocity: dir * self.stats.projectile_speed,
                            follow: false,
                            projectile: Projectile {
                                kind: WeaponKind::Ranged,
                                damage: self.stats.damage,
                                lifespan: self.weapon.lifespan,
                                sprite: self.weapon.projectile,
                                rotation: angle,
                                pierce: self.weapon.pierce,
                                splash_radius: self.weapon.splash_radius,
                                arc: 0.0,
                                struck: Vec::new(),
                                alive: true,
                            },
                        }
                    })
                    .collect()
            }
        }
    }

    /// Append an orbital with a random starting phase.
    pub fn add_orbital<R: Rng>(
        &mut self,
        rng: &mut R,
        radius: f32,
        speed: f32,
        damage: f32,
        sprite: OrbitalSprite,
    ) {
        self.orbitals.push(Orbital {
            angle: rng.gen::<f32>() * TAU,
            radius,
            speed,
            damage,
            sprite,
        });
    }

    /// Apply mitigated damage. Health stays in `[0, max_health]` and death is
    /// sticky.
    pub fn take_damage(&mut self, amount: f32) {
        if !self.alive {
            return;
        }
        let mitigated = amount * (1.0 - self.stats.mitigation);
        self.health = math::clamp(self.health - mitigated, 0.0, self.max_health);
        self.hurt_timer = PLAYER_HURT_SECS;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
        }
    }

    /// Add experience, calling `on_level_up` with the new level once per level
    /// gained.
    pub fn gain_experience(
        &mut self,
        amount: f32,
        tuning: &Tuning,
        mut on_level_up: impl FnMut(u32),
    ) {
        self.experience += amount;
        while self.experience >= self.experience_to_level {
            self.experience -= self.experience_to_level;
            self.level += 1;
            self.experience_to_level = tuning.next_threshold(self.experience_to_level);
            on_level_up(self.level);
        }
    }

    pub fn heal(&mut self, amount: f32) {
        if !self.alive {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightfall_core::weapons::weapon_definition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player(id: WeaponId) -> Player {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        Player::new(Vec2::ZERO, weapon_definition(id), &Tuning::default(), &mut rng)
    }

    #[test]
    fn test_update_moves_at_stat_speed() {
        let mut p = player(WeaponId::Shard);
        let input = MoveInput {
            right: true,
            ..MoveInput::NONE
        };
        p.update(0.5, input);
        assert!((p.position.x - 90.0).abs() < 1e-4);
        assert!(p.walk_cycle > 0.0);

        p.update(0.5, MoveInput::NONE);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_dead_player_does_not_move() {
        let mut p = player(WeaponId::Shard);
        p.take_damage(10_000.0);
        p.update(
            1.0,
            MoveInput {
                up: true,
                ..MoveInput::NONE
            },
        );
        assert_eq!(p.position, Vec2::ZERO);
    }

    #[test]
    fn test_try_attack_respects_cooldown() {
        let mut p = player(WeaponId::Shard);
        let target = Some(Vec2::new(100.0, 0.0));
        assert_eq!(p.try_attack(target).len(), 1);
        assert!(p.try_attack(target).is_empty(), "second call inside cooldown");
        assert!(p.try_attack(None).is_empty());

        p.update(0.9, MoveInput::NONE);
        assert_eq!(p.try_attack(target).len(), 1);
    }

    #[test]
    fn test_single_shot_is_on_base_angle() {
        let mut p = player(WeaponId::Shard);
        let shots = p.try_attack(Some(Vec2::new(0.0, 50.0)));
        let angle = shots[0].projectile.rotation;
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
        assert!((shots[0].velocity.length() - 340.0).abs() < 1e-3);
    }

    #[test]
    fn test_fan_is_symmetric() {
        let mut p = player(WeaponId::Bow);
        let shots = p.try_attack(Some(Vec2::new(100.0, 0.0)));
        assert_eq!(shots.len(), 3);
        let angles: Vec<f32> = shots.iter().map(|s| s.projectile.rotation).collect();
        assert!((angles[0] + 0.175).abs() < 1e-5);
        assert!(angles[1].abs() < 1e-6);
        assert!((angles[2] - 0.175).abs() < 1e-5);
        assert!(shots.iter().all(|s| s.projectile.pierce == Pierce::Finite(1)));
    }

    #[test]
    fn test_melee_emits_one_following_sweep() {
        let mut p = player(WeaponId::Sword);
        let shots = p.try_attack(Some(Vec2::new(-40.0, 0.0)));
        assert_eq!(shots.len(), 1);
        let sweep = &shots[0];
        assert!(sweep.follow);
        assert_eq!(sweep.velocity, Vec2::ZERO);
        assert_eq!(sweep.projectile.pierce, Pierce::Infinite);
        assert_eq!(sweep.projectile.lifespan, MELEE_LIFESPAN);
        assert_eq!(sweep.projectile.arc, 1.35);
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut p = player(WeaponId::Shard);
        p.take_damage(-500.0);
        assert_eq!(p.health, p.max_health);
        p.take_damage(40.0);
        assert_eq!(p.health, 120.0);
        p.take_damage(1_000.0);
        assert_eq!(p.health, 0.0);
        assert!(!p.alive);
        p.take_damage(5.0);
        assert_eq!(p.health, 0.0);
        assert!(!p.alive);
    }

    #[test]
    fn test_mitigation_reduces_damage() {
        let mut p = player(WeaponId::Shard);
        p.stats.mitigation = 0.25;
        p.take_damage(40.0);
        assert!((p.health - 130.0).abs() < 1e-4);
    }

    #[test]
    fn test_gain_experience_multiple_levels() {
        let mut p = player(WeaponId::Shard);
        let tuning = Tuning::default();
        let mut levels = Vec::new();
        p.gain_experience(120.0, &tuning, |level| levels.push(level));
        assert_eq!(levels, vec![2, 3]);
        assert_eq!(p.level, 3);
        assert!((p.experience - 6.0).abs() < 1e-4, "leftover {}", p.experience);
        assert_eq!(p.experience_to_level, 96.0);
    }

    #[test]
    fn test_staff_starts_with_orbital() {
        let p = player(WeaponId::Staff);
        assert_eq!(p.orbitals.len(), 1);
        let orb = p.orbitals[0];
        assert_eq!(orb.radius, ORBITAL_BASE_RADIUS);
        assert!((orb.damage - 16.0 * ORBITAL_DAMAGE_FRACTION).abs() < 1e-4);
        assert!((0.0..TAU).contains(&orb.angle));
    }
}
