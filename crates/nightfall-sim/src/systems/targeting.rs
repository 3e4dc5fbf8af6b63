//! Auto-targeting: nearest living enemy within the attack radius.

use glam::Vec2;
use hecs::World;

use nightfall_core::components::Enemy;
use nightfall_core::types::Position;

/// Position of the nearest living enemy, if it lies within `radius`. Ties go
/// to the earlier-spawned enemy.
pub fn nearest_in_range(world: &World, from: Vec2, radius: f32) -> Option<Vec2> {
    let mut best: Option<(f32, u64, Vec2)> = None;
    for (_entity, (pos, enemy)) in world.query::<(&Position, &Enemy)>().iter() {
        if !enemy.alive {
            continue;
        }
        let d = from.distance(pos.0);
        let closer = match best {
            None => true,
            Some((bd, bs, _)) => d < bd || (d == bd && enemy.serial < bs),
        };
        if closer {
            best = Some((d, enemy.serial, pos.0));
        }
    }
    best.filter(|(d, _, _)| *d <= radius).map(|(_, _, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightfall_core::enums::EnemyKind;

    use crate::world_setup::spawn_enemy;

    #[test]
    fn test_nearest_within_radius() {
        let mut world = World::new();
        spawn_enemy(&mut world, EnemyKind::Undead, Vec2::new(200.0, 0.0), 1.0, false, 0);
        spawn_enemy(&mut world, EnemyKind::Undead, Vec2::new(0.0, 150.0), 1.0, false, 1);
        assert_eq!(nearest_in_range(&world, Vec2::ZERO, 260.0), Some(Vec2::new(0.0, 150.0)));
        assert_eq!(nearest_in_range(&world, Vec2::ZERO, 100.0), None);
    }

    #[test]
    fn test_empty_world_has_no_target() {
        let world = World::new();
        assert_eq!(nearest_in_range(&world, Vec2::ZERO, 1.0e6), None);
    }
}
