//! Cleanup system: despawns dead enemies and spent projectiles.

use hecs::{Entity, World};

use nightfall_core::components::{Enemy, Projectile};

/// Remove every entity whose alive flag dropped this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, proj) in world.query_mut::<&Projectile>() {
        if !proj.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
