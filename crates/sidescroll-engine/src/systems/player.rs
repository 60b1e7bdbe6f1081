use crate::api::config::GameConfig;
use crate::api::types::{Facing, FrameEvent, KnockDir};
use crate::core::camera::ScrollCamera;
use crate::core::scene::Scene;
use crate::input::queue::Intent;
use crate::systems::bullet::spawn_bullet;

/// Apply one queued intent to the player. Ignored once the player is gone.
pub fn apply_intent(intent: Intent, scene: &mut Scene, events: &mut Vec<FrameEvent>) {
    let Some(player) = scene.player_mut().filter(|p| p.alive) else {
        return;
    };
    match intent {
        Intent::MoveLeft => {
            player.facing = Facing::Left;
            player.moving = true;
        }
        Intent::MoveRight => {
            player.facing = Facing::Right;
            player.moving = true;
        }
        Intent::Stop => player.moving = false,
        Intent::Jump => {
            player.motion.start_jump();
        }
        Intent::Fire => {
            let bullet = spawn_bullet(player);
            scene.push_bullet(bullet);
            events.push(FrameEvent::BulletFired);
        }
    }
}

/// Per-frame player update: immortality timer, death, enemy contact,
/// walking and screen confinement.
pub fn update_player(
    scene: &mut Scene,
    camera: &mut ScrollCamera,
    config: &GameConfig,
    events: &mut Vec<FrameEvent>,
) {
    let immortality_frames = config.immortality_frames();
    let Some(player) = scene.player_mut().filter(|p| p.alive) else {
        return;
    };
    player.motion.x_base = player.pos.x;

    if player.immortal {
        if player.immortality_count == immortality_frames {
            player.immortal = false;
            player.immortality_count = 0;
        } else {
            player.immortality_count += 1;
        }
    }

    if player.hp <= 0 {
        player.alive = false;
        log::info!("player died");
        events.push(FrameEvent::PlayerDied);
        return;
    }

    check_enemy_contact(scene, events);

    let Some(player) = scene.player() else {
        return;
    };
    if player.moving {
        let displacement = player.kind.speed() * player.facing.sign() as i32;
        camera.scroll_pieces(displacement, scene);
    }

    confine_player(scene, config.screen_width);
}

/// Knock the player back from the first enemy touching it, unless the
/// player is still invulnerable from an earlier hit.
fn check_enemy_contact(scene: &mut Scene, events: &mut Vec<FrameEvent>) {
    let Some(player) = scene.player() else {
        return;
    };
    if player.immortal {
        return;
    }
    let hitbox = player.aabb();
    let Some(enemy) = scene.enemies().find(|e| e.alive && e.aabb().overlaps(&hitbox)) else {
        return;
    };
    let (enemy_x, damage) = (enemy.pos.x, enemy.kind.strength());

    let Some(player) = scene.player_mut() else {
        return;
    };
    let dir = if player.pos.x < enemy_x {
        KnockDir::Left
    } else if player.pos.x > enemy_x {
        KnockDir::Right
    } else {
        KnockDir::Up
    };
    player.immortal = true;
    player.hp -= damage;
    let y = player.pos.y;
    player.motion.start_knock_back(y, dir);
    events.push(FrameEvent::PlayerHit {
        damage,
        hp: player.hp,
    });
}

/// Keep the player fully on screen. Hitting an edge stops the walk.
fn confine_player(scene: &mut Scene, screen_width: f32) {
    let Some(player) = scene.player_mut() else {
        return;
    };
    let max_x = screen_width - player.width();
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.moving = false;
    } else if player.pos.x > max_x {
        player.pos.x = max_x;
        player.moving = false;
    }
}
