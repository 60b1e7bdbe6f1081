//! Tick-phased physics for every gravity-affected unit.

use crate::api::types::{FrameEvent, UnitId};
use crate::components::unit::Unit;
use crate::core::camera::ScrollCamera;
use crate::core::collision::{check_for_blockage, check_platform_collision, Resolution, VerticalContact};
use crate::core::kinematics::{apply_gravity, knock_back_step};
use crate::core::scene::Scene;
use crate::core::spatial::PlatformIndex;

/// Number of invocations in one scheduler cycle.
pub const CYCLE_LEN: u8 = 5;

const GRAVITY_TICK: u8 = 4;
const KNOCK_BACK_TICK: u8 = 2;

/// Start a free fall if a unit that is not jumping stands on nothing.
/// Returns true when a fall began.
pub fn check_for_free_fall(unit: &mut Unit, platforms: &PlatformIndex, origin_x: f32) -> bool {
    let m = &unit.motion;
    if m.free_fall || m.jumping || m.is_knocked_back() {
        return false;
    }
    if platforms.supports(&unit.aabb(), origin_x) {
        return false;
    }
    unit.motion.start_free_fall();
    true
}

/// Runs one phase of the five-phase physics cycle per call.
///
/// Ticks 0, 1 and 3 only push units out of walls. Tick 2 advances knockbacks.
/// Tick 4 advances jumps and falls for units not being knocked back, then
/// advances knockbacks as on tick 2, and the cycle wraps.
#[derive(Debug, Clone, Default)]
pub struct PhysicsScheduler {
    tick: u8,
}

impl PhysicsScheduler {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    /// Phase the next `update` call will run.
    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn update(
        &mut self,
        scene: &mut Scene,
        platforms: &PlatformIndex,
        camera: &mut ScrollCamera,
        events: &mut Vec<FrameEvent>,
    ) {
        match self.tick {
            GRAVITY_TICK => {
                self.gravity_pass(scene, platforms, camera, events);
                verify_motion(scene);
                self.knock_back_pass(scene, platforms, camera, events);
            }
            KNOCK_BACK_TICK => self.knock_back_pass(scene, platforms, camera, events),
            _ => self.blockage_pass(scene, platforms, camera, events),
        }
        verify_motion(scene);
        self.tick = (self.tick + 1) % CYCLE_LEN;
    }

    fn gravity_pass(
        &self,
        scene: &mut Scene,
        platforms: &PlatformIndex,
        camera: &mut ScrollCamera,
        events: &mut Vec<FrameEvent>,
    ) {
        for id in scene.ids() {
            let Some(unit) = scene.get_mut(id) else {
                continue;
            };
            if unit.motion.is_knocked_back() {
                continue;
            }
            let last_y = unit.pos.y;
            apply_gravity(unit);

            let resolution = check_platform_collision(id, last_y, scene, platforms, camera);
            record(id, resolution, events);

            let origin = camera.origin_x() as f32;
            if let Some(unit) = scene.get_mut(id) {
                check_for_free_fall(unit, platforms, origin);
            }
        }
    }

    fn knock_back_pass(
        &self,
        scene: &mut Scene,
        platforms: &PlatformIndex,
        camera: &mut ScrollCamera,
        events: &mut Vec<FrameEvent>,
    ) {
        for id in scene.ids() {
            let Some(unit) = scene.get_mut(id) else {
                continue;
            };
            if !unit.motion.is_knocked_back() {
                continue;
            }
            let last_y = unit.pos.y;
            if let Some(target_x) = knock_back_step(unit) {
                if unit.is_player() {
                    let displacement = (target_x - unit.pos.x) as i32;
                    camera.scroll_pieces(displacement, scene);
                } else {
                    unit.pos.x = target_x;
                }
            }

            let resolution = check_platform_collision(id, last_y, scene, platforms, camera);
            record(id, resolution, events);
        }
    }

    fn blockage_pass(
        &self,
        scene: &mut Scene,
        platforms: &PlatformIndex,
        camera: &mut ScrollCamera,
        events: &mut Vec<FrameEvent>,
    ) {
        for id in scene.ids() {
            if check_for_blockage(id, scene, platforms, camera) {
                events.push(FrameEvent::Blocked(id));
            }
        }
    }
}

fn record(id: UnitId, resolution: Resolution, events: &mut Vec<FrameEvent>) {
    if resolution.blocked {
        events.push(FrameEvent::Blocked(id));
    }
    match resolution.contact {
        Some(VerticalContact::Landed) => events.push(FrameEvent::Landed(id)),
        Some(VerticalContact::CeilingHit) => events.push(FrameEvent::CeilingHit(id)),
        None => {}
    }
}

fn verify_motion(scene: &Scene) {
    for unit in scene.iter() {
        if let Err(err) = unit.motion.check_exclusive(unit.id) {
            debug_assert!(false, "{err}");
            log::warn!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{KnockDir, UnitKind, VerticalDir};
    use crate::components::platform::Platform;
    use glam::Vec2;

    fn floor() -> PlatformIndex {
        PlatformIndex::new(vec![Platform::new(0.0, 550.0, 2400.0, 50.0)])
    }

    fn run(
        sched: &mut PhysicsScheduler,
        calls: usize,
        scene: &mut Scene,
        platforms: &PlatformIndex,
        cam: &mut ScrollCamera,
    ) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        for _ in 0..calls {
            sched.update(scene, platforms, cam, &mut events);
        }
        events
    }

    #[test]
    fn tick_cycles_through_five_phases() {
        let mut sched = PhysicsScheduler::new();
        let mut scene = Scene::new();
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let platforms = floor();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(sched.tick());
            sched.update(&mut scene, &platforms, &mut cam, &mut Vec::new());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn grounded_unit_stays_put() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 500.0)));
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();
        let events = run(&mut sched, 20, &mut scene, &floor(), &mut cam);

        let unit = scene.get(UnitId(1)).unwrap();
        assert_eq!(unit.pos, Vec2::new(100.0, 500.0));
        assert!(unit.motion.is_grounded());
        assert!(events.is_empty());
    }

    #[test]
    fn unsupported_unit_starts_falling() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 100.0)));
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();
        let platforms = floor();

        run(&mut sched, 5, &mut scene, &platforms, &mut cam);
        let unit = scene.get(UnitId(1)).unwrap();
        assert!(unit.motion.free_fall);
        assert_eq!(unit.motion.gravity_time, 1);
        assert_eq!(unit.motion.y_dir, VerticalDir::Down);
        assert_eq!(unit.pos.y, 100.0);

        run(&mut sched, 5, &mut scene, &platforms, &mut cam);
        assert_eq!(scene.get(UnitId(1)).unwrap().pos.y, 103.0);
    }

    #[test]
    fn falling_unit_lands_on_floor() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 400.0)));
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();
        let events = run(&mut sched, 100, &mut scene, &floor(), &mut cam);

        assert!(events.contains(&FrameEvent::Landed(UnitId(1))));
        let unit = scene.get(UnitId(1)).unwrap();
        assert_eq!(unit.pos.y, 500.0);
        assert!(unit.motion.is_grounded());
    }

    #[test]
    fn jump_arc_comes_back_down() {
        let mut scene = Scene::new();
        let mut enemy = Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 500.0));
        assert!(enemy.motion.start_jump());
        scene.spawn(enemy);
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();
        let platforms = floor();

        // First gravity pass lifts the unit 30 px.
        run(&mut sched, 5, &mut scene, &platforms, &mut cam);
        assert_eq!(scene.get(UnitId(1)).unwrap().pos.y, 470.0);

        // Sixteen more passes: back at the base, then one tick below it.
        let events = run(&mut sched, 80, &mut scene, &platforms, &mut cam);
        assert_eq!(events, vec![FrameEvent::Landed(UnitId(1))]);
        let unit = scene.get(UnitId(1)).unwrap();
        assert_eq!(unit.pos.y, 500.0);
        assert!(!unit.motion.jumping);
        assert_eq!(unit.motion.gravity_time, 0);
    }

    #[test]
    fn knock_back_runs_on_tick_two() {
        let mut scene = Scene::new();
        let mut enemy = Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 500.0));
        enemy.motion.start_knock_back(500.0, KnockDir::Right);
        scene.spawn(enemy);
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();
        let platforms = floor();

        run(&mut sched, 2, &mut scene, &platforms, &mut cam);
        assert_eq!(scene.get(UnitId(1)).unwrap().pos, Vec2::new(100.0, 500.0));

        run(&mut sched, 1, &mut scene, &platforms, &mut cam);
        let unit = scene.get(UnitId(1)).unwrap();
        assert_eq!(unit.pos, Vec2::new(111.0, 487.0));
        assert_eq!(unit.motion.knock_back_time, 2);
    }

    #[test]
    fn knocked_back_centred_player_scrolls_the_world() {
        let mut scene = Scene::new();
        scene.spawn(Unit::new(UnitId(1), UnitKind::Player, Vec2::new(575.0, 500.0)));
        scene.spawn(Unit::new(UnitId(2), UnitKind::Enemy, Vec2::new(900.0, 0.0)));
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        for _ in 0..150 {
            cam.scroll_pieces(4, &mut scene);
        }
        assert_eq!(cam.origin_x(), 600);
        assert_eq!(scene.get(UnitId(2)).unwrap().pos.x, 300.0);

        scene.player_mut().unwrap().motion.start_knock_back(500.0, KnockDir::Left);
        let mut sched = PhysicsScheduler::new();
        run(&mut sched, 3, &mut scene, &floor(), &mut cam);

        // The player holds the centre and the world moves 11 px the other way.
        assert_eq!(cam.origin_x(), 589);
        assert_eq!(scene.player().unwrap().pos, Vec2::new(575.0, 487.0));
        assert_eq!(scene.get(UnitId(2)).unwrap().pos.x, 311.0);
    }

    #[test]
    fn knock_back_ends_on_landing() {
        let mut scene = Scene::new();
        let mut enemy = Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(100.0, 500.0));
        enemy.motion.start_knock_back(500.0, KnockDir::Up);
        scene.spawn(enemy);
        let mut cam = ScrollCamera::new(1200.0, 2400.0);
        let mut sched = PhysicsScheduler::new();

        // Two knockback ticks per cycle; the arc returns to its base at t = 14.
        let events = run(&mut sched, 50, &mut scene, &floor(), &mut cam);
        assert!(events.contains(&FrameEvent::Landed(UnitId(1))));
        let unit = scene.get(UnitId(1)).unwrap();
        assert_eq!(unit.pos, Vec2::new(100.0, 500.0));
        assert!(unit.motion.is_grounded());
    }

    #[test]
    fn free_fall_check_respects_support() {
        let platforms = floor();
        let mut standing = Unit::new(UnitId(1), UnitKind::Enemy, Vec2::new(10.0, 500.0));
        assert!(!check_for_free_fall(&mut standing, &platforms, 0.0));

        let mut jumping = Unit::new(UnitId(2), UnitKind::Enemy, Vec2::new(10.0, 200.0));
        jumping.motion.start_jump();
        assert!(!check_for_free_fall(&mut jumping, &platforms, 0.0));

        let mut floating = Unit::new(UnitId(3), UnitKind::Enemy, Vec2::new(10.0, 200.0));
        assert!(check_for_free_fall(&mut floating, &platforms, 0.0));
        assert!(floating.motion.free_fall);
    }
}
