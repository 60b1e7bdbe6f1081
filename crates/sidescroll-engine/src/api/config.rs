use serde::{Deserialize, Serialize};

/// Configuration for the simulation, usually shipped alongside the level files.
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visible screen width in pixels.
    pub screen_width: f32,
    /// Visible screen height in pixels.
    pub screen_height: f32,
    /// Simulation frames per second (default: 100).
    pub clock_tick: u32,
    /// Height of the floor strip; enemies below it have fallen out of the world.
    pub floor_height: f32,
    /// Closest horizontal distance an enemy may spawn from the player.
    pub spawn_distance: f32,
    pub player_hp: i32,
    pub enemy_hp: i32,
    /// Maximum number of enemies alive at once. Zero disables spawning.
    pub spawn_cap: usize,
    /// Seconds between enemy spawns.
    pub spawn_rate_secs: u32,
    /// Seconds of invulnerability after the player is hit.
    pub immortality_secs: u32,
    /// When false, only `FloorPlatform` platforms are loaded from a level.
    pub platforms_enabled: bool,
    /// Cap on frames run by a single `Simulation::advance` call.
    pub max_catchup_frames: u32,
    /// Seed for the spawn position generator.
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 600.0,
            clock_tick: 100,
            floor_height: 20.0,
            spawn_distance: 150.0,
            player_hp: 100,
            enemy_hp: 10,
            spawn_cap: 3,
            spawn_rate_secs: 1,
            immortality_secs: 2,
            platforms_enabled: true,
            max_catchup_frames: 10,
            rng_seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Frames the player stays invulnerable after a hit.
    pub fn immortality_frames(&self) -> u32 {
        self.clock_tick * self.immortality_secs
    }

    /// Frames between two enemy spawns.
    pub fn spawn_interval_frames(&self) -> u32 {
        self.clock_tick * self.spawn_rate_secs
    }

    /// Units whose top edge passes this line are removed.
    pub fn fall_line(&self) -> f32 {
        self.screen_height - self.floor_height
    }
}
