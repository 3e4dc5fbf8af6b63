//! Weapon catalog: base stat and shape overrides plus each weapon's upgrade
//! pool.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{OrbitalSprite, ProjectileSprite, Stat, WeaponId, WeaponKind};
use crate::types::Pierce;
use crate::upgrades::{UpgradeDefinition, UpgradeEffect};

/// The player's mutable stat block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub speed: f32,
    pub damage: f32,
    pub attack_radius: f32,
    pub attack_cooldown: f32,
    /// Fraction of incoming damage ignored, in `[0, 1)`.
    pub mitigation: f32,
    pub projectile_speed: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            damage: PLAYER_DAMAGE,
            attack_radius: PLAYER_ATTACK_RADIUS,
            attack_cooldown: PLAYER_ATTACK_COOLDOWN,
            mitigation: PLAYER_MITIGATION,
            projectile_speed: PLAYER_PROJECTILE_SPEED,
        }
    }
}

impl PlayerStats {
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Speed => self.speed,
            Stat::Damage => self.damage,
            Stat::AttackRadius => self.attack_radius,
            Stat::AttackCooldown => self.attack_cooldown,
            Stat::ProjectileSpeed => self.projectile_speed,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Speed => &mut self.speed,
            Stat::Damage => &mut self.damage,
            Stat::AttackRadius => &mut self.attack_radius,
            Stat::AttackCooldown => &mut self.attack_cooldown,
            Stat::ProjectileSpeed => &mut self.projectile_speed,
        }
    }
}

/// How the equipped weapon shapes each attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponShape {
    pub kind: WeaponKind,
    /// Projectiles per volley (ranged).
    pub count: u32,
    /// Total fan width in radians (ranged).
    pub spread: f32,
    pub projectile: ProjectileSprite,
    pub lifespan: f32,
    pub pierce: Pierce,
    /// Area damage radius around the struck enemy; 0 disables splash.
    pub splash_radius: f32,
    /// Melee cone half-width in radians.
    pub arc: f32,
}

impl Default for WeaponShape {
    fn default() -> Self {
        Self {
            kind: WeaponKind::Ranged,
            count: 1,
            spread: FALLBACK_SPREAD,
            projectile: ProjectileSprite::Arrow,
            lifespan: FALLBACK_LIFESPAN,
            pierce: Pierce::Finite(0),
            splash_radius: 0.0,
            arc: FALLBACK_ARC,
        }
    }
}

/// Per-weapon overrides of the base stat block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatOverrides {
    pub speed: Option<f32>,
    pub damage: Option<f32>,
    pub attack_radius: Option<f32>,
    pub attack_cooldown: Option<f32>,
    pub projectile_speed: Option<f32>,
}

impl StatOverrides {
    pub const NONE: StatOverrides = StatOverrides {
        speed: None,
        damage: None,
        attack_radius: None,
        attack_cooldown: None,
        projectile_speed: None,
    };

    pub fn apply(&self, base: PlayerStats) -> PlayerStats {
        PlayerStats {
            speed: self.speed.unwrap_or(base.speed),
            damage: self.damage.unwrap_or(base.damage),
            attack_radius: self.attack_radius.unwrap_or(base.attack_radius),
            attack_cooldown: self.attack_cooldown.unwrap_or(base.attack_cooldown),
            mitigation: base.mitigation,
            projectile_speed: self.projectile_speed.unwrap_or(base.projectile_speed),
        }
    }
}

/// Per-weapon overrides of the fallback weapon shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOverrides {
    pub kind: Option<WeaponKind>,
    pub count: Option<u32>,
    pub spread: Option<f32>,
    pub projectile: Option<ProjectileSprite>,
    pub lifespan: Option<f32>,
    pub pierce: Option<u32>,
    pub splash_radius: Option<f32>,
    pub arc: Option<f32>,
}

impl ShapeOverrides {
    pub const NONE: ShapeOverrides = ShapeOverrides {
        kind: None,
        count: None,
        spread: None,
        projectile: None,
        lifespan: None,
        pierce: None,
        splash_radius: None,
        arc: None,
    };

    pub fn apply(&self, base: WeaponShape) -> WeaponShape {
        WeaponShape {
            kind: self.kind.unwrap_or(base.kind),
            count: self.count.unwrap_or(base.count),
            spread: self.spread.unwrap_or(base.spread),
            projectile: self.projectile.unwrap_or(base.projectile),
            lifespan: self.lifespan.unwrap_or(base.lifespan),
            pierce: self.pierce.map(Pierce::Finite).unwrap_or(base.pierce),
            splash_radius: self.splash_radius.unwrap_or(base.splash_radius),
            arc: self.arc.unwrap_or(base.arc),
        }
    }
}

/// Static catalog entry for a selectable weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDefinition {
    pub id: WeaponId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub stats: StatOverrides,
    pub shape: ShapeOverrides,
    pub starting_orbitals: u32,
    pub upgrades: &'static [UpgradeDefinition],
}

impl WeaponDefinition {
    /// Base stat block with this weapon's overrides applied.
    pub fn stats(&self) -> PlayerStats {
        self.stats.apply(PlayerStats::default())
    }

    /// Fallback shape with this weapon's overrides applied.
    pub fn shape(&self) -> WeaponShape {
        self.shape.apply(WeaponShape::default())
    }
}

/// Catalog entry for `id`.
pub fn weapon_definition(id: WeaponId) -> &'static WeaponDefinition {
    WEAPONS
        .iter()
        .find(|w| w.id == id)
        .unwrap_or(&WEAPONS[0])
}

pub const WEAPONS: &[WeaponDefinition] = &[
    WeaponDefinition {
        id: WeaponId::Shard,
        name: "Shard Resonator",
        description: "Balanced shots: medium damage, steady rate, slight spread.",
        icon: "weapon_shard_icon",
        stats: StatOverrides {
            damage: Some(12.0),
            attack_cooldown: Some(0.9),
            attack_radius: Some(280.0),
            projectile_speed: Some(340.0),
            ..StatOverrides::NONE
        },
        shape: ShapeOverrides {
            count: Some(1),
            spread: Some(0.12),
            projectile: Some(ProjectileSprite::Shard),
            lifespan: Some(1.7),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 0,
        upgrades: &[
            UpgradeDefinition {
                title: "Duplex Shard",
                description: "+1 shard and a slightly wider fan",
                effects: &[
                    UpgradeEffect::AddProjectiles { amount: 1, max: 5 },
                    UpgradeEffect::AdjustSpread {
                        delta: 0.06,
                        floor: 0.0,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Compressed Build",
                description: "-15% attack cooldown",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackCooldown,
                    factor: 0.85,
                }],
            },
            UpgradeDefinition {
                title: "Crystal Edge",
                description: "+25% shard damage",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Damage,
                    factor: 1.25,
                }],
            },
            UpgradeDefinition {
                title: "Packet Inertia",
                description: "+20% projectile speed",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::ProjectileSpeed,
                    factor: 1.2,
                }],
            },
            UpgradeDefinition {
                title: "Chain Spark",
                description: "Hits spark to one more enemy for 45% damage",
                effects: &[UpgradeEffect::ChainSpark { fraction: 0.45 }],
            },
        ],
    },
    WeaponDefinition {
        id: WeaponId::Sword,
        name: "Warden's Blade",
        description: "Close sweeping strike. High damage, but you must get close.",
        icon: "weapon_sword_icon",
        stats: StatOverrides {
            damage: Some(26.0),
            attack_cooldown: Some(0.95),
            attack_radius: Some(210.0),
            projectile_speed: Some(0.0),
            speed: Some(190.0),
        },
        shape: ShapeOverrides {
            kind: Some(WeaponKind::Melee),
            arc: Some(1.35),
            count: Some(1),
            projectile: Some(ProjectileSprite::Sword),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 0,
        upgrades: &[
            UpgradeDefinition {
                title: "Wide Sweep",
                description: "+25% blade arc and a little extra speed",
                effects: &[
                    UpgradeEffect::ScaleArc { factor: 1.25 },
                    UpgradeEffect::AddStat {
                        stat: Stat::Speed,
                        amount: 10.0,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Tempered Steel",
                description: "+20% sword damage",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Damage,
                    factor: 1.2,
                }],
            },
            UpgradeDefinition {
                title: "Short Stance",
                description: "-18% strike cooldown",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackCooldown,
                    factor: 0.82,
                }],
            },
            UpgradeDefinition {
                title: "Parry",
                description: "After each strike, 10% damage mitigation for 3s",
                effects: &[UpgradeEffect::ParryGuard {
                    duration: 3.0,
                    mitigation: 0.1,
                }],
            },
            UpgradeDefinition {
                title: "Field Dressing",
                description: "Heal 35 and +15 max health",
                effects: &[UpgradeEffect::AddMaxHealth {
                    amount: 15.0,
                    heal: 35.0,
                }],
            },
        ],
    },
    WeaponDefinition {
        id: WeaponId::Knife,
        name: "Throwing Knives",
        description: "Fast knives fly one after another, opening gaps in the horde.",
        icon: "weapon_knife_icon",
        stats: StatOverrides {
            damage: Some(12.0),
            attack_cooldown: Some(0.55),
            attack_radius: Some(320.0),
            projectile_speed: Some(420.0),
            ..StatOverrides::NONE
        },
        shape: ShapeOverrides {
            kind: Some(WeaponKind::Ranged),
            count: Some(1),
            spread: Some(0.08),
            projectile: Some(ProjectileSprite::Knife),
            lifespan: Some(1.6),
            pierce: Some(0),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 0,
        upgrades: &[
            UpgradeDefinition {
                title: "Double Lunge",
                description: "+1 knife per volley, tighter cone",
                effects: &[
                    UpgradeEffect::AddProjectiles { amount: 1, max: 4 },
                    UpgradeEffect::AdjustSpread {
                        delta: -0.015,
                        floor: 0.05,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Honed Edges",
                description: "+25% knife damage",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Damage,
                    factor: 1.25,
                }],
            },
            UpgradeDefinition {
                title: "Quick Throw",
                description: "-15% cooldown",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackCooldown,
                    factor: 0.85,
                }],
            },
            UpgradeDefinition {
                title: "Shadow Step",
                description: "+12% movement speed",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Speed,
                    factor: 1.12,
                }],
            },
        ],
    },
    WeaponDefinition {
        id: WeaponId::Crossbow,
        name: "Crossbow Bolt",
        description: "Slow but heavy shot that passes through.",
        icon: "weapon_crossbow_icon",
        stats: StatOverrides {
            damage: Some(34.0),
            attack_cooldown: Some(1.25),
            attack_radius: Some(360.0),
            projectile_speed: Some(520.0),
            ..StatOverrides::NONE
        },
        shape: ShapeOverrides {
            kind: Some(WeaponKind::Ranged),
            count: Some(1),
            spread: Some(0.0),
            projectile: Some(ProjectileSprite::Bolt),
            lifespan: Some(2.2),
            pierce: Some(2),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 0,
        upgrades: &[
            UpgradeDefinition {
                title: "Piercing Tip",
                description: "+2 pierce",
                effects: &[UpgradeEffect::AddPierce { amount: 2 }],
            },
            UpgradeDefinition {
                title: "Heavy Stock",
                description: "+30% bolt damage",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Damage,
                    factor: 1.3,
                }],
            },
            UpgradeDefinition {
                title: "Hip Reload",
                description: "-16% cooldown",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackCooldown,
                    factor: 0.84,
                }],
            },
            UpgradeDefinition {
                title: "Oak Frame",
                description: "+25 max health",
                effects: &[UpgradeEffect::AddMaxHealth {
                    amount: 25.0,
                    heal: 25.0,
                }],
            },
        ],
    },
    WeaponDefinition {
        id: WeaponId::Bow,
        name: "Longbow Volleys",
        description: "Several slow arrows clear a corridor.",
        icon: "weapon_bow_icon",
        stats: StatOverrides {
            damage: Some(11.0),
            attack_cooldown: Some(1.05),
            attack_radius: Some(360.0),
            projectile_speed: Some(340.0),
            ..StatOverrides::NONE
        },
        shape: ShapeOverrides {
            kind: Some(WeaponKind::Ranged),
            count: Some(3),
            spread: Some(0.35),
            projectile: Some(ProjectileSprite::Arrow),
            lifespan: Some(1.8),
            pierce: Some(1),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 0,
        upgrades: &[
            UpgradeDefinition {
                title: "Extra String",
                description: "+1 arrow per volley",
                effects: &[UpgradeEffect::AddProjectiles { amount: 1, max: 5 }],
            },
            UpgradeDefinition {
                title: "Fletching",
                description: "+15% damage and +10% arrow speed",
                effects: &[
                    UpgradeEffect::ScaleStat {
                        stat: Stat::Damage,
                        factor: 1.15,
                    },
                    UpgradeEffect::ScaleStat {
                        stat: Stat::ProjectileSpeed,
                        factor: 1.1,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Quick Draw",
                description: "-14% cooldown",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackCooldown,
                    factor: 0.86,
                }],
            },
            UpgradeDefinition {
                title: "Far Sight",
                description: "+20% auto-attack radius",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::AttackRadius,
                    factor: 1.2,
                }],
            },
        ],
    },
    WeaponDefinition {
        id: WeaponId::Staff,
        name: "Spark Staff",
        description: "Slow orbs burst and catch groups of enemies.",
        icon: "weapon_staff_icon",
        stats: StatOverrides {
            damage: Some(16.0),
            attack_cooldown: Some(1.0),
            attack_radius: Some(340.0),
            projectile_speed: Some(260.0),
            ..StatOverrides::NONE
        },
        shape: ShapeOverrides {
            kind: Some(WeaponKind::Ranged),
            count: Some(1),
            spread: Some(0.08),
            projectile: Some(ProjectileSprite::Orb),
            lifespan: Some(2.0),
            splash_radius: Some(80.0),
            pierce: Some(0),
            ..ShapeOverrides::NONE
        },
        starting_orbitals: 1,
        upgrades: &[
            UpgradeDefinition {
                title: "Second Charge",
                description: "+1 orb and a slightly wider cone",
                effects: &[
                    UpgradeEffect::AddProjectiles { amount: 1, max: 3 },
                    UpgradeEffect::AdjustSpread {
                        delta: 0.06,
                        floor: 0.0,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Grave Flash",
                description: "+25% burst radius",
                effects: &[UpgradeEffect::ScaleSplash {
                    factor: 1.25,
                    fallback: 60.0,
                }],
            },
            UpgradeDefinition {
                title: "Spellweave",
                description: "-15% cooldown and +1 orbiting spirit",
                effects: &[
                    UpgradeEffect::ScaleStat {
                        stat: Stat::AttackCooldown,
                        factor: 0.85,
                    },
                    UpgradeEffect::AddOrbital {
                        radius: 90.0,
                        speed: 2.2,
                        damage_factor: 0.6,
                        sprite: OrbitalSprite::Spirit,
                    },
                ],
            },
            UpgradeDefinition {
                title: "Condensed Mana",
                description: "+20% orb damage",
                effects: &[UpgradeEffect::ScaleStat {
                    stat: Stat::Damage,
                    factor: 1.2,
                }],
            },
            UpgradeDefinition {
                title: "Pulse Nova",
                description: "Every 4s a burst hits nearby enemies for 150% damage",
                effects: &[UpgradeEffect::PulseNova { damage_factor: 1.5 }],
            },
            UpgradeDefinition {
                title: "Spirit Edge",
                description: "Orbiting spirits deal +30% damage and spin faster",
                effects: &[UpgradeEffect::BoostOrbitals {
                    damage_factor: 1.3,
                    speed_factor: 1.15,
                }],
            },
        ],
    },
];
