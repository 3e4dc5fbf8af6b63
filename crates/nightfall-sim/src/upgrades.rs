//! Upgrade offers and the upgrade effect dispatcher.

use rand::seq::SliceRandom;
use rand::Rng;

use nightfall_core::upgrades::{UpgradeDefinition, UpgradeEffect};
use nightfall_core::weapons::WeaponDefinition;

use crate::effects::PassiveEffects;
use crate::player::Player;

/// Pool of upgrades scoped to the equipped weapon.
#[derive(Debug, Clone, Default)]
pub struct UpgradeSystem {
    pool: Vec<&'static UpgradeDefinition>,
}

impl UpgradeSystem {
    pub fn for_weapon(def: &'static WeaponDefinition) -> Self {
        let mut system = Self::default();
        system.configure_for_weapon(def);
        system
    }

    pub fn configure_for_weapon(&mut self, def: &'static WeaponDefinition) {
        self.pool = def.upgrades.iter().collect();
    }

    pub fn pool(&self) -> &[&'static UpgradeDefinition] {
        &self.pool
    }

    /// Up to `count` distinct upgrades in uniformly shuffled order. A pool
    /// smaller than `count` is returned whole.
    pub fn get_choices<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<&'static UpgradeDefinition> {
        let mut options = self.pool.clone();
        options.shuffle(rng);
        options.truncate(count);
        options
    }
}

/// Apply every effect of `upgrade` in order.
pub fn apply_upgrade<R: Rng>(
    upgrade: &UpgradeDefinition,
    player: &mut Player,
    effects: &mut PassiveEffects,
    rng: &mut R,
) {
    for effect in upgrade.effects {
        apply_effect(effect, player, effects, rng);
    }
    log::info!("upgrade applied: {}", upgrade.title);
}

pub fn apply_effect<R: Rng>(
    effect: &UpgradeEffect,
    player: &mut Player,
    effects: &mut PassiveEffects,
    rng: &mut R,
) {
    match *effect {
        UpgradeEffect::ScaleStat { stat, factor } => {
            *player.stats.get_mut(stat) *= factor;
        }
        UpgradeEffect::AddStat { stat, amount } => {
            *player.stats.get_mut(stat) += amount;
        }
        UpgradeEffect::AddProjectiles { amount, max } => {
            player.weapon.count = player.weapon.count.saturating_add(amount).min(max);
        }
        UpgradeEffect::AdjustSpread { delta, floor } => {
            player.weapon.spread = (player.weapon.spread + delta).max(floor);
        }
        UpgradeEffect::ScaleArc { factor } => {
            player.weapon.arc *= factor;
        }
        UpgradeEffect::AddPierce { amount } => {
            player.weapon.pierce = player.weapon.pierce.extend(amount);
        }
        UpgradeEffect::ScaleSplash { factor, fallback } => {
            let base = if player.weapon.splash_radius > 0.0 {
                player.weapon.splash_radius
            } else {
                fallback
            };
            player.weapon.splash_radius = (base * factor).round();
        }
        UpgradeEffect::ScaleLifespan { factor } => {
            player.weapon.lifespan *= factor;
        }
        UpgradeEffect::AddMaxHealth { amount, heal } => {
            player.max_health += amount;
            player.heal(heal);
        }
        UpgradeEffect::AddOrbital {
            radius,
            speed,
            damage_factor,
            sprite,
        } => {
            let damage = player.stats.damage * damage_factor;
            player.add_orbital(rng, radius, speed, damage, sprite);
        }
        UpgradeEffect::BoostOrbitals {
            damage_factor,
            speed_factor,
        } => {
            for orbital in &mut player.orbitals {
                orbital.damage *= damage_factor;
                orbital.speed *= speed_factor;
            }
        }
        UpgradeEffect::ParryGuard {
            duration,
            mitigation,
        } => effects.add_parry_guard(duration, mitigation),
        UpgradeEffect::ChainSpark { fraction } => effects.add_chain_spark(fraction),
        UpgradeEffect::PulseNova { damage_factor } => effects.add_pulse_nova(damage_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use nightfall_core::config::Tuning;
    use nightfall_core::enums::{Stat, WeaponId};
    use nightfall_core::types::Pierce;
    use nightfall_core::weapons::weapon_definition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup(id: WeaponId) -> (Player, PassiveEffects, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let player = Player::new(Vec2::ZERO, weapon_definition(id), &Tuning::default(), &mut rng);
        (player, PassiveEffects::default(), rng)
    }

    #[test]
    fn test_choices_are_distinct_and_bounded() {
        let system = UpgradeSystem::for_weapon(weapon_definition(WeaponId::Staff));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            let choices = system.get_choices(&mut rng, 3);
            assert_eq!(choices.len(), 3);
            for (i, a) in choices.iter().enumerate() {
                for b in &choices[i + 1..] {
                    assert_ne!(a.title, b.title, "duplicate choice in one offer");
                }
            }
        }
    }

    #[test]
    fn test_small_pool_returned_whole() {
        let system = UpgradeSystem::for_weapon(weapon_definition(WeaponId::Knife));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(system.get_choices(&mut rng, 10).len(), system.pool().len());
        assert!(UpgradeSystem::default().get_choices(&mut rng, 3).is_empty());
    }

    #[test]
    fn test_cooldown_double_then_halve_round_trips() {
        let (mut player, mut effects, mut rng) = setup(WeaponId::Shard);
        let original = player.stats.attack_cooldown;
        let double = UpgradeEffect::ScaleStat {
            stat: Stat::AttackCooldown,
            factor: 2.0,
        };
        let halve = UpgradeEffect::ScaleStat {
            stat: Stat::AttackCooldown,
            factor: 0.5,
        };
        apply_effect(&double, &mut player, &mut effects, &mut rng);
        apply_effect(&halve, &mut player, &mut effects, &mut rng);
        assert!((player.stats.attack_cooldown - original).abs() < 1e-6);
    }

    #[test]
    fn test_projectile_count_is_capped() {
        let (mut player, mut effects, mut rng) = setup(WeaponId::Knife);
        let upgrade = &weapon_definition(WeaponId::Knife).upgrades[0];
        for _ in 0..10 {
            apply_upgrade(upgrade, &mut player, &mut effects, &mut rng);
        }
        assert_eq!(player.weapon.count, 4);
        assert!((player.weapon.spread - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_pierce_and_health_upgrades() {
        let (mut player, mut effects, mut rng) = setup(WeaponId::Crossbow);
        let def = weapon_definition(WeaponId::Crossbow);
        apply_upgrade(&def.upgrades[0], &mut player, &mut effects, &mut rng);
        assert_eq!(player.weapon.pierce, Pierce::Finite(4));

        player.take_damage(10.0);
        apply_upgrade(&def.upgrades[3], &mut player, &mut effects, &mut rng);
        assert_eq!(player.max_health, 185.0);
        assert_eq!(player.health, 175.0);
    }

    #[test]
    fn test_splash_scales_from_fallback() {
        let (mut player, mut effects, mut rng) = setup(WeaponId::Shard);
        let grow = UpgradeEffect::ScaleSplash {
            factor: 1.25,
            fallback: 60.0,
        };
        apply_effect(&grow, &mut player, &mut effects, &mut rng);
        assert_eq!(player.weapon.splash_radius, 75.0);
        apply_effect(&grow, &mut player, &mut effects, &mut rng);
        assert_eq!(player.weapon.splash_radius, 94.0);
    }

    #[test]
    fn test_spellweave_adds_orbital_and_passives_register() {
        let (mut player, mut effects, mut rng) = setup(WeaponId::Staff);
        let def = weapon_definition(WeaponId::Staff);
        let spellweave = def
            .upgrades
            .iter()
            .find(|u| u.title == "Spellweave")
            .unwrap();
        apply_upgrade(spellweave, &mut player, &mut effects, &mut rng);
        assert_eq!(player.orbitals.len(), 2);
        assert!((player.orbitals[1].damage - 16.0 * 0.6).abs() < 1e-4);
        assert!((player.stats.attack_cooldown - 0.85).abs() < 1e-6);

        let nova = def.upgrades.iter().find(|u| u.title == "Pulse Nova").unwrap();
        apply_upgrade(nova, &mut player, &mut effects, &mut rng);
        assert_eq!(effects.len(), 1);
    }
}
