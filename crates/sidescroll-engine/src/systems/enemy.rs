use crate::api::config::GameConfig;
use crate::api::types::{Facing, FrameEvent};
use crate::core::scene::Scene;

/// Per-frame enemy update: death check, chase the player, fall check.
///
/// Enemies walk straight at the player and keep their last heading when
/// level with it. `moving` records that a heading was picked; walls push the
/// enemy back but leave it set.
pub fn update_enemies(scene: &mut Scene, config: &GameConfig, events: &mut Vec<FrameEvent>) {
    let player_x = scene.player().filter(|p| p.alive).map(|p| p.pos.x);
    let fall_line = config.fall_line();

    for enemy in scene.enemies_mut().filter(|e| e.alive) {
        enemy.motion.x_base = enemy.pos.x;

        if enemy.hp <= 0 {
            enemy.alive = false;
            events.push(FrameEvent::EnemyKilled(enemy.id));
            continue;
        }

        if let Some(px) = player_x {
            if enemy.pos.x < px {
                enemy.facing = Facing::Right;
                enemy.moving = true;
            } else if enemy.pos.x > px {
                enemy.facing = Facing::Left;
                enemy.moving = true;
            }
        }
        if enemy.moving {
            enemy.pos.x += enemy.kind.speed() as f32 * enemy.facing.sign();
        }

        if enemy.pos.y > fall_line {
            enemy.alive = false;
            log::debug!("enemy {:?} fell out of the world", enemy.id);
            events.push(FrameEvent::EnemyFell(enemy.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{UnitId, UnitKind};
    use crate::components::platform::Platform;
    use crate::components::unit::Unit;
    use crate::core::camera::ScrollCamera;
    use crate::core::collision::check_for_blockage;
    use crate::core::spatial::PlatformIndex;
    use glam::Vec2;

    fn scene(enemy_x: f32, enemy_y: f32) -> Scene {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Player, Vec2::new(575.0, 500.0)));
        scene.spawn(
            Unit::new(UnitId(2), UnitKind::Enemy, Vec2::new(enemy_x, enemy_y)).with_hp(10),
        );
        scene
    }

    #[test]
    fn enemies_chase_the_player() {
        let config = GameConfig::default();
        let mut left = scene(100.0, 500.0);
        update_enemies(&mut left, &config, &mut Vec::new());
        let e = left.get(UnitId(2)).unwrap();
        assert_eq!(e.pos.x, 101.0);
        assert_eq!(e.facing, Facing::Right);
        assert_eq!(e.motion.x_base, 100.0);

        let mut right = scene(900.0, 500.0);
        update_enemies(&mut right, &config, &mut Vec::new());
        let e = right.get(UnitId(2)).unwrap();
        assert_eq!(e.pos.x, 899.0);
        assert_eq!(e.facing, Facing::Left);
    }

    #[test]
    fn level_enemy_without_heading_stays() {
        let mut s = scene(575.0, 500.0);
        update_enemies(&mut s, &GameConfig::default(), &mut Vec::new());
        assert_eq!(s.get(UnitId(2)).unwrap().pos.x, 575.0);
    }

    #[test]
    fn walled_enemy_level_with_player_keeps_walking() {
        let mut s = scene(574.0, 500.0);
        let enemy = s.get_mut(UnitId(2)).unwrap();
        enemy.facing = Facing::Left;
        enemy.moving = true;
        // The wall's right edge lines up with the player.
        let platforms = PlatformIndex::new(vec![Platform::new(500.0, 480.0, 75.0, 60.0)]);
        let mut cam = ScrollCamera::new(1200.0, 2400.0);

        assert!(check_for_blockage(UnitId(2), &mut s, &platforms, &mut cam));
        let e = s.get(UnitId(2)).unwrap();
        assert_eq!(e.pos.x, 575.0);
        assert!(e.moving);

        update_enemies(&mut s, &GameConfig::default(), &mut Vec::new());
        let e = s.get(UnitId(2)).unwrap();
        assert_eq!(e.facing, Facing::Left);
        assert_eq!(e.pos.x, 574.0);
    }

    #[test]
    fn dead_enemy_is_reported() {
        let mut s = scene(100.0, 500.0);
        s.get_mut(UnitId(2)).unwrap().hp = 0;
        let mut events = Vec::new();
        update_enemies(&mut s, &GameConfig::default(), &mut events);
        let e = s.get(UnitId(2)).unwrap();
        assert!(!e.alive);
        assert_eq!(e.pos.x, 100.0);
        assert_eq!(events, vec![FrameEvent::EnemyKilled(UnitId(2))]);
    }

    #[test]
    fn enemy_below_floor_line_falls_out() {
        let config = GameConfig::default();
        let mut s = scene(100.0, 580.0);
        let mut events = Vec::new();
        update_enemies(&mut s, &config, &mut events);
        assert!(s.get(UnitId(2)).unwrap().alive);

        s.get_mut(UnitId(2)).unwrap().pos.y = 581.0;
        update_enemies(&mut s, &config, &mut events);
        assert!(!s.get(UnitId(2)).unwrap().alive);
        assert_eq!(events, vec![FrameEvent::EnemyFell(UnitId(2))]);
    }
}
