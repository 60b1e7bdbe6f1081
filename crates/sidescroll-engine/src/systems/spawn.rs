use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::UnitKind;
use crate::systems::rng::Rng;

/// Give up on a spawn after this many unfair positions.
pub const MAX_SPAWN_ATTEMPTS: u32 = 32;

/// Timed enemy spawner.
///
/// While fewer than `spawn_cap` enemies are alive it counts frames, and every
/// `spawn_interval_frames()` it picks a position across the screen that is
/// farther than `spawn_distance` from the player.
#[derive(Debug, Clone)]
pub struct Spawner {
    counter: u32,
    rng: Rng,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            counter: 0,
            rng: Rng::new(seed),
        }
    }

    /// Frames counted toward the next spawn.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance one frame. Returns the top-left corner of a new enemy when
    /// one is due.
    pub fn update(
        &mut self,
        enemy_count: usize,
        player_x: Option<f32>,
        config: &GameConfig,
    ) -> Option<Vec2> {
        if enemy_count >= config.spawn_cap {
            return None;
        }
        if self.counter != config.spawn_interval_frames() {
            self.counter += 1;
            return None;
        }
        self.counter = 0;

        let max_x = config.screen_width.max(0.0) as u32;
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let x = self.rng.next_inclusive(max_x) as f32;
            let fair = player_x.map_or(true, |px| (px - x).abs() > config.spawn_distance);
            if fair {
                return Some(Vec2::new(x, UnitKind::Enemy.height()));
            }
        }
        log::warn!(
            "no spawn position farther than {} px from the player after {} attempts",
            config.spawn_distance,
            MAX_SPAWN_ATTEMPTS
        );
        None
    }
}
