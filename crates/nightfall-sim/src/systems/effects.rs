//! Passive effect step: advances effect timers and detonates pulses.

use hecs::World;

use crate::effects::PassiveEffects;
use crate::player::Player;
use crate::systems::combat::{self, Kill};

pub fn run(
    world: &World,
    effects: &mut PassiveEffects,
    player: &mut Player,
    dt: f32,
    kills: &mut Vec<Kill>,
) {
    for burst in effects.tick(dt, player) {
        log::trace!("pulse nova: radius {} damage {}", burst.radius, burst.damage);
        let targets = combat::living_targets(world);
        combat::strike_area(world, &targets, player.position, burst.radius, burst.damage, kills);
    }
}
