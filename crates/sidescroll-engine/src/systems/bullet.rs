use glam::Vec2;

use crate::api::types::{Facing, UnitKind};
use crate::components::bullet::Bullet;
use crate::components::unit::Unit;
use crate::core::scene::Scene;

/// A bullet leaving `shooter`'s leading edge, vertically centred.
pub fn spawn_bullet(shooter: &Unit) -> Bullet {
    let y = shooter.pos.y + shooter.height() / 2.0;
    let x = match shooter.facing {
        Facing::Right => shooter.pos.x + shooter.width(),
        Facing::Left => shooter.pos.x,
    };
    Bullet::new(Vec2::new(x, y), shooter.facing)
}

/// Move every live bullet and apply hits.
///
/// A bullet found past either screen edge is marked dead but still moves and
/// hits this frame. A bullet that overlaps enemies damages all of them and
/// dies.
pub fn update_bullets(scene: &mut Scene, screen_width: f32) {
    let (bullets, units) = scene.bullets_and_units_mut();
    for bullet in bullets.iter_mut().filter(|b| b.alive) {
        if bullet.pos.x < 0.0 || bullet.pos.x > screen_width {
            bullet.alive = false;
        }
        bullet.pos.x += Bullet::SPEED * bullet.facing.sign();

        let hitbox = bullet.aabb();
        let mut hit = false;
        for enemy in units
            .iter_mut()
            .filter(|u| u.kind == UnitKind::Enemy && u.alive && u.aabb().overlaps(&hitbox))
        {
            enemy.hp -= Bullet::STRENGTH;
            hit = true;
        }
        if hit {
            bullet.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UnitId;

    #[test]
    fn bullet_leaves_leading_edge() {
        let player = Unit::new(UnitId(1), UnitKind::Player, Vec2::new(100.0, 200.0));
        let right = spawn_bullet(&player);
        assert_eq!(right.pos, Vec2::new(150.0, 225.0));
        assert_eq!(right.facing, Facing::Right);

        let left = spawn_bullet(&player.clone().with_facing(Facing::Left));
        assert_eq!(left.pos, Vec2::new(100.0, 225.0));
        assert_eq!(left.facing, Facing::Left);
    }

    #[test]
    fn bullets_travel_and_leave_screen() {
        let mut scene = Scene::new();
        scene.push_bullet(Bullet::new(Vec2::new(10.0, 10.0), Facing::Left));
        scene.push_bullet(Bullet::new(Vec2::new(10.0, 10.0), Facing::Right));

        update_bullets(&mut scene, 1200.0);
        assert_eq!(scene.bullets()[0].pos.x, 5.0);
        assert_eq!(scene.bullets()[1].pos.x, 15.0);

        update_bullets(&mut scene, 1200.0);
        update_bullets(&mut scene, 1200.0);
        // -5 is off screen: dies on the next update.
        assert!(scene.bullets()[0].alive);
        update_bullets(&mut scene, 1200.0);
        assert!(!scene.bullets()[0].alive);
        assert!(scene.bullets()[1].alive);
    }

    #[test]
    fn off_screen_bullet_still_hits_on_its_last_frame() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(2), UnitKind::Enemy, Vec2::new(1160.0, 200.0)).with_hp(10));
        scene.push_bullet(Bullet::new(Vec2::new(1201.0, 220.0), Facing::Left));

        update_bullets(&mut scene, 1200.0);

        let bullet = &scene.bullets()[0];
        assert!(!bullet.alive);
        assert_eq!(bullet.pos.x, 1196.0);
        assert_eq!(scene.get(UnitId(2)).unwrap().hp, 9);
    }

    #[test]
    fn bullet_damages_every_enemy_it_touches() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Player, Vec2::new(0.0, 0.0)));
        scene.spawn(Unit::new(UnitId(2), UnitKind::Enemy, Vec2::new(300.0, 200.0)).with_hp(10));
        scene.spawn(Unit::new(UnitId(3), UnitKind::Enemy, Vec2::new(310.0, 200.0)).with_hp(10));
        scene.push_bullet(Bullet::new(Vec2::new(318.0, 220.0), Facing::Right));

        update_bullets(&mut scene, 1200.0);

        assert!(!scene.bullets()[0].alive);
        assert_eq!(scene.get(UnitId(2)).unwrap().hp, 9);
        assert_eq!(scene.get(UnitId(3)).unwrap().hp, 9);
        // The player is never hit by bullets.
        assert_eq!(scene.get(UnitId(1)).unwrap().hp, 1);
    }
}
