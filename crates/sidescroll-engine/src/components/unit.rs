use glam::Vec2;

use crate::api::types::{Facing, UnitId, UnitKind};
use crate::components::motion::MotionState;
use crate::core::spatial::Aabb;

/// A gravity-affected, collidable actor: the player or an enemy.
///
/// `pos` is the single source of truth for placement (top-left corner in
/// screen space); the bounding box is derived from it on every read.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub pos: Vec2,
    pub facing: Facing,
    /// Walking intent. Cleared when a wall or the screen edge stops the unit.
    pub moving: bool,
    pub motion: MotionState,
    pub hp: i32,
    pub alive: bool,
    /// Player only: invulnerable after being hit.
    pub immortal: bool,
    pub immortality_count: u32,
}

impl Unit {
    /// Create a unit of the given kind with its top-left corner at `pos`.
    pub fn new(id: UnitId, kind: UnitKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            facing: Facing::Right,
            moving: false,
            motion: MotionState::new(pos.x, pos.y),
            hp: 1,
            alive: true,
            immortal: false,
            immortality_count: 0,
        }
    }

    // -- Builder pattern --

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn width(&self) -> f32 {
        self.kind.width()
    }

    pub fn height(&self) -> f32 {
        self.kind.height()
    }

    /// Current bounding box, derived from `pos`.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width(), self.height()))
    }

    pub fn is_player(&self) -> bool {
        self.kind.is_player()
    }
}
