use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{FrameEvent, UnitId, UnitKind};
use crate::bridge::snapshot::FrameSnapshot;
use crate::components::unit::Unit;
use crate::core::camera::ScrollCamera;
use crate::core::physics::PhysicsScheduler;
use crate::core::scene::Scene;
use crate::core::spatial::PlatformIndex;
use crate::core::time::FrameClock;
use crate::input::queue::{Intent, IntentQueue};
use crate::level::Level;
use crate::systems::bullet::update_bullets;
use crate::systems::enemy::update_enemies;
use crate::systems::player::{apply_intent, update_player};
use crate::systems::spawn::Spawner;

/// The whole game state, stepped one frame at a time.
///
/// Owns every collection the systems and the physics scheduler work on and
/// runs them in a fixed order each frame: intents, bullets, spawner, player,
/// enemies, physics, then removal of dead units.
pub struct Simulation {
    config: GameConfig,
    scene: Scene,
    platforms: PlatformIndex,
    camera: ScrollCamera,
    physics: PhysicsScheduler,
    spawner: Spawner,
    intents: IntentQueue,
    clock: FrameClock,
    events: Vec<FrameEvent>,
    background_color: [u8; 3],
    next_id: u32,
    frame: u64,
    score: u32,
    game_over: bool,
}

impl Simulation {
    /// Build a simulation with the player dropped in at the horizontal
    /// centre of the screen.
    pub fn new(config: GameConfig, level: Level) -> Self {
        let camera = ScrollCamera::new(config.screen_width, level.world_width);
        let mut sim = Self {
            scene: Scene::new(),
            platforms: PlatformIndex::new(level.platforms),
            camera,
            physics: PhysicsScheduler::new(),
            spawner: Spawner::new(config.rng_seed),
            intents: IntentQueue::new(),
            clock: FrameClock::new(config.clock_tick, config.max_catchup_frames),
            events: Vec::new(),
            background_color: level.background_color,
            next_id: 1,
            frame: 0,
            score: 0,
            game_over: false,
            config,
        };

        let id = sim.next_id();
        let pos = Vec2::new(sim.camera.center_x(UnitKind::Player.width()), 0.0);
        sim.scene
            .spawn(Unit::new(id, UnitKind::Player, pos).with_hp(sim.config.player_hp));
        log::info!("player spawned at ({}, {})", pos.x, pos.y);
        sim
    }

    fn next_id(&mut self) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue an intent for the next frame.
    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Place an enemy at a screen position. The spawner calls this too.
    pub fn spawn_enemy(&mut self, pos: Vec2) -> UnitId {
        let id = self.next_id();
        self.scene
            .spawn(Unit::new(id, UnitKind::Enemy, pos).with_hp(self.config.enemy_hp));
        log::debug!("enemy {:?} spawned at ({}, {})", id, pos.x, pos.y);
        self.events.push(FrameEvent::EnemySpawned(id));
        id
    }

    /// Run one frame. `events()` afterwards holds what happened in it.
    pub fn step_frame(&mut self) {
        self.events.clear();
        self.run_frame();
    }

    /// Run as many frames as `elapsed` seconds of wall time call for, up to
    /// the catch-up cap. `events()` afterwards holds the events of all of
    /// them. Returns the number of frames run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.events.clear();
        let frames = self.clock.accumulate(elapsed);
        for _ in 0..frames {
            self.run_frame();
        }
        frames
    }

    fn run_frame(&mut self) {
        if self.game_over {
            return;
        }

        for intent in self.intents.drain() {
            apply_intent(intent, &mut self.scene, &mut self.events);
        }

        update_bullets(&mut self.scene, self.config.screen_width);

        let player_x = self.scene.player().map(|p| p.pos.x);
        if let Some(pos) = self
            .spawner
            .update(self.scene.enemy_count(), player_x, &self.config)
        {
            self.spawn_enemy(pos);
        }

        update_player(&mut self.scene, &mut self.camera, &self.config, &mut self.events);
        update_enemies(&mut self.scene, &self.config, &mut self.events);

        // Physics always runs after every other update of the frame.
        self.physics
            .update(&mut self.scene, &self.platforms, &mut self.camera, &mut self.events);

        for unit in self.scene.reap() {
            match unit.kind {
                UnitKind::Enemy => self.score += 1,
                UnitKind::Player => {
                    self.game_over = true;
                    log::info!("game over after {} frames, score {}", self.frame, self.score);
                }
            }
        }
        self.frame += 1;
    }

    /// Render data for the current state.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.scene, &self.platforms, &self.camera, self.frame)
    }

    /// Events of the last `step_frame` or `advance` call.
    pub fn events(&self) -> &[FrameEvent] {
        &self.events
    }

    /// Enemies removed so far, killed or fallen.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &ScrollCamera {
        &self.camera
    }

    pub fn platforms(&self) -> &PlatformIndex {
        &self.platforms
    }

    pub fn background_color(&self) -> [u8; 3] {
        self.background_color
    }
}
