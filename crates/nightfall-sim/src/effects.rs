//! Passive effects granted by upgrades.
//!
//! Stored on `SimulationEngine` and ticked once per tick, before the player
//! moves. Each effect kind appears at most once; picking it again strengthens
//! the existing record.

use nightfall_core::constants::*;

use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassiveEffect {
    /// Temporary mitigation bonus re-armed by every attack.
    ParryGuard {
        duration: f32,
        mitigation: f32,
        remaining: f32,
    },
    /// Projectile hits arc to the nearest other enemy within `radius`.
    ChainSpark { fraction: f32, radius: f32 },
    /// Periodic burst around the player.
    PulseNova {
        interval: f32,
        radius: f32,
        damage_factor: f32,
        timer: f32,
    },
}

/// A pulse that fired this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseBurst {
    pub radius: f32,
    pub damage: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PassiveEffects {
    effects: Vec<PassiveEffect>,
}

impl PassiveEffects {
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PassiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Grant or strengthen the parry guard. The window opens immediately.
    pub fn add_parry_guard(&mut self, duration: f32, mitigation: f32) {
        for effect in &mut self.effects {
            if let PassiveEffect::ParryGuard {
                duration: d,
                mitigation: m,
                remaining,
            } = effect
            {
                *d = d.max(duration);
                *m += mitigation;
                *remaining = *d;
                return;
            }
        }
        self.effects.push(PassiveEffect::ParryGuard {
            duration,
            mitigation,
            remaining: duration,
        });
    }

    pub fn add_chain_spark(&mut self, fraction: f32) {
        for effect in &mut self.effects {
            if let PassiveEffect::ChainSpark { fraction: f, .. } = effect {
                *f = f.max(fraction);
                return;
            }
        }
        self.effects.push(PassiveEffect::ChainSpark {
            fraction,
            radius: CHAIN_SPARK_RADIUS,
        });
    }

    pub fn add_pulse_nova(&mut self, damage_factor: f32) {
        for effect in &mut self.effects {
            if let PassiveEffect::PulseNova {
                damage_factor: f,
                timer,
                ..
            } = effect
            {
                *f = f.max(damage_factor);
                *timer = 0.0;
                return;
            }
        }
        self.effects.push(PassiveEffect::PulseNova {
            interval: PULSE_NOVA_INTERVAL,
            radius: PULSE_NOVA_RADIUS,
            damage_factor,
            timer: 0.0,
        });
    }

    /// Chain spark parameters `(fraction, radius)` if granted.
    pub fn chain_spark(&self) -> Option<(f32, f32)> {
        self.effects.iter().find_map(|e| match *e {
            PassiveEffect::ChainSpark { fraction, radius } => Some((fraction, radius)),
            _ => None,
        })
    }

    /// Called whenever the player attacks.
    pub fn on_attack(&mut self) {
        for effect in &mut self.effects {
            if let PassiveEffect::ParryGuard {
                duration,
                remaining,
                ..
            } = effect
            {
                *remaining = *duration;
            }
        }
    }

    /// Advance timers and set the player's effective mitigation. Returns the
    /// pulses that fired.
    pub fn tick(&mut self, dt: f32, player: &mut Player) -> Vec<PulseBurst> {
        let mut mitigation = player.base_mitigation;
        let mut bursts = Vec::new();
        for effect in &mut self.effects {
            match effect {
                PassiveEffect::ParryGuard {
                    mitigation: bonus,
                    remaining,
                    ..
                } => {
                    if *remaining > 0.0 {
                        *remaining -= dt;
                        mitigation = (player.base_mitigation + *bonus).min(MITIGATION_BUFF_CAP);
                    }
                }
                PassiveEffect::ChainSpark { .. } => {}
                PassiveEffect::PulseNova {
                    interval,
                    radius,
                    damage_factor,
                    timer,
                } => {
                    *timer += dt;
                    if *timer >= *interval {
                        *timer -= *interval;
                        bursts.push(PulseBurst {
                            radius: *radius,
                            damage: *damage_factor * player.stats.damage,
                        });
                    }
                }
            }
        }
        player.stats.mitigation = mitigation;
        bursts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use nightfall_core::config::Tuning;
    use nightfall_core::enums::WeaponId;
    use nightfall_core::weapons::weapon_definition;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sword_player() -> Player {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        Player::new(
            Vec2::ZERO,
            weapon_definition(WeaponId::Sword),
            &Tuning::default(),
            &mut rng,
        )
    }

    #[test]
    fn test_parry_window_expires_and_rearms() {
        let mut player = sword_player();
        let mut effects = PassiveEffects::default();
        effects.add_parry_guard(3.0, 0.1);

        effects.tick(0.05, &mut player);
        assert!((player.stats.mitigation - 0.1).abs() < 1e-6);

        for _ in 0..80 {
            effects.tick(0.05, &mut player);
        }
        assert_eq!(player.stats.mitigation, player.base_mitigation);

        effects.on_attack();
        effects.tick(0.05, &mut player);
        assert!((player.stats.mitigation - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_parry_mitigation_is_capped() {
        let mut player = sword_player();
        let mut effects = PassiveEffects::default();
        for _ in 0..10 {
            effects.add_parry_guard(3.0, 0.1);
        }
        assert_eq!(effects.len(), 1);
        effects.tick(0.05, &mut player);
        assert!((player.stats.mitigation - MITIGATION_BUFF_CAP).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_fires_on_interval() {
        let mut player = sword_player();
        let mut effects = PassiveEffects::default();
        effects.add_pulse_nova(1.5);
        let mut fired = 0;
        for _ in 0..200 {
            fired += effects.tick(0.05, &mut player).len();
        }
        // 10 seconds of ticks at a 4 second interval.
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_chain_spark_lookup() {
        let mut effects = PassiveEffects::default();
        assert!(effects.chain_spark().is_none());
        effects.add_chain_spark(0.45);
        effects.add_chain_spark(0.3);
        assert_eq!(effects.chain_spark(), Some((0.45, CHAIN_SPARK_RADIUS)));
    }
}
