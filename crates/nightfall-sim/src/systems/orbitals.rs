//! Orbital damage: each orbital hurts enemies touching its current point.

use hecs::World;

use nightfall_core::constants::{ORBITAL_DPS_FACTOR, ORBITAL_TOUCH_PAD};

use crate::player::Player;
use crate::systems::combat::{self, Kill};

pub fn run(world: &World, player: &Player, dt: f32, kills: &mut Vec<Kill>) {
    if player.orbitals.is_empty() {
        return;
    }
    let targets = combat::living_targets(world);
    for orbital in &player.orbitals {
        let point = orbital.point(player.position);
        for target in &targets {
            if target.position.distance(point) < target.size + ORBITAL_TOUCH_PAD
                && combat::is_alive(world, target.entity)
            {
                combat::strike(world, target.entity, orbital.damage * dt * ORBITAL_DPS_FACTOR, kills);
            }
        }
    }
}
