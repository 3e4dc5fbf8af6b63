//! Simulation constants and tuning defaults.
//!
//! Values that the runtime [`Tuning`](crate::config::Tuning) can override are
//! the authoritative defaults for that struct.

// --- Frame timing ---

/// Upper bound on a single frame's dt (seconds). Guards against large jumps
/// after the host was backgrounded.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Nominal host frame rate (Hz) used by the real-time loop and tests.
pub const NOMINAL_FRAME_RATE: u32 = 60;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 160.0;
pub const PLAYER_SPEED: f32 = 180.0;
pub const PLAYER_DAMAGE: f32 = 14.0;
pub const PLAYER_ATTACK_RADIUS: f32 = 260.0;
pub const PLAYER_ATTACK_COOLDOWN: f32 = 0.9;
pub const PLAYER_MITIGATION: f32 = 0.0;
pub const PLAYER_PROJECTILE_SPEED: f32 = 320.0;

/// Experience needed for the first level-up.
pub const XP_FIRST_THRESHOLD: f32 = 45.0;

/// Threshold growth: `ceil(threshold * XP_GROWTH_FACTOR + XP_GROWTH_OFFSET)`.
pub const XP_GROWTH_FACTOR: f32 = 1.12;
pub const XP_GROWTH_OFFSET: f32 = 18.0;

/// Duration of the attack pose after firing (seconds).
pub const ATTACK_FLASH_SECS: f32 = 0.22;

/// Duration of the player's hurt flash (seconds).
pub const PLAYER_HURT_SECS: f32 = 0.35;

/// Speed below which the walk cycle does not advance.
pub const WALK_CYCLE_MIN_SPEED: f32 = 5.0;

/// Speed that advances the player's walk cycle by one unit per second.
pub const PLAYER_WALK_CYCLE_SCALE: f32 = 70.0;

/// Mitigation can never be raised past this by temporary buffs.
pub const MITIGATION_BUFF_CAP: f32 = 0.6;

// --- Fallback weapon shape ---

pub const FALLBACK_SPREAD: f32 = 0.1;
pub const FALLBACK_LIFESPAN: f32 = 1.7;
pub const FALLBACK_ARC: f32 = 1.1;

// --- Melee sweep ---

pub const MELEE_LIFESPAN: f32 = 0.25;

/// Melee reach is `arc * MELEE_REACH_PER_RADIAN`.
pub const MELEE_REACH_PER_RADIAN: f32 = 80.0;

/// Rotation rate of in-flight ranged projectiles (rad/s, cosmetic).
pub const PROJECTILE_SPIN_RATE: f32 = 6.0;

// --- Orbitals ---

pub const ORBITAL_BASE_RADIUS: f32 = 78.0;
pub const ORBITAL_RADIUS_STEP: f32 = 6.0;
pub const ORBITAL_BASE_SPEED: f32 = 2.0;
pub const ORBITAL_SPEED_STEP: f32 = 0.15;

/// Starting orbital damage as a fraction of the player's damage.
pub const ORBITAL_DAMAGE_FRACTION: f32 = 0.55;

/// Extra touch radius added to the enemy's size for orbital hits.
pub const ORBITAL_TOUCH_PAD: f32 = 8.0;

/// Orbital damage per second is `orbital.damage * ORBITAL_DPS_FACTOR`.
pub const ORBITAL_DPS_FACTOR: f32 = 6.0;

// --- Enemies ---

pub const ENEMY_HURT_SECS: f32 = 0.25;

/// Enemy speed that advances its walk cycle by one unit per second.
pub const ENEMY_WALK_CYCLE_SCALE: f32 = 80.0;

/// Extra radius added to the enemy's size for contact damage.
pub const CONTACT_PAD: f32 = 14.0;

// --- Spawning ---

/// Delay before the first wave (seconds).
pub const SPAWN_INITIAL_DELAY: f32 = 2.0;
pub const SPAWN_INTERVAL_BASE: f32 = 2.0;

/// Interval shrinks by one second every this many seconds of run time.
pub const SPAWN_INTERVAL_DECAY_SECS: f32 = 140.0;
pub const SPAWN_INTERVAL_FLOOR: f32 = 0.6;

/// One extra enemy per wave every this many seconds.
pub const SPAWN_COUNT_STEP_SECS: f32 = 50.0;

/// Run time after which waves get a fixed burst and the roster shifts.
pub const SPAWN_LATE_GAME_SECS: f32 = 300.0;
pub const SPAWN_LATE_BURST: u32 = 2;

/// Difficulty multiplier is `1 + elapsed / SPAWN_DIFFICULTY_DIVISOR`.
pub const SPAWN_DIFFICULTY_DIVISOR: f32 = 160.0;

pub const ELITE_CHANCE: f64 = 0.1;
pub const ELITE_BOOST: f32 = 1.35;

/// Skeleton swarms spawn weaker than the curve.
pub const SKELETON_DIFFICULTY_FACTOR: f32 = 0.8;
pub const MIN_DIFFICULTY: f32 = 0.8;

/// Spawn ring around the player.
pub const SPAWN_RING_MIN: f32 = 460.0;
pub const SPAWN_RING_MAX: f32 = 640.0;

/// Minimum gap between the player's attack radius and the spawn ring.
pub const SPAWN_RING_CLEARANCE: f32 = 40.0;

// --- Boss ---

/// Seconds until the first boss, and between a boss's death and the next.
pub const BOSS_INTERVAL_SECS: f32 = 300.0;
pub const BOSS_SPAWN_DISTANCE: f32 = 520.0;

/// Boss multiplier is `1 + elapsed / BOSS_DIFFICULTY_DIVISOR`.
pub const BOSS_DIFFICULTY_DIVISOR: f32 = 240.0;

// --- Passive effects ---

pub const CHAIN_SPARK_RADIUS: f32 = 160.0;
pub const PULSE_NOVA_INTERVAL: f32 = 4.0;
pub const PULSE_NOVA_RADIUS: f32 = 140.0;

// --- Upgrades ---

/// Number of upgrades offered per level-up.
pub const UPGRADE_CHOICES: usize = 3;
