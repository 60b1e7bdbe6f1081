use glam::Vec2;

use crate::api::types::Facing;
use crate::core::spatial::Aabb;

/// A projectile fired by the player. Scrolls with the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub facing: Facing,
    pub alive: bool,
}

impl Bullet {
    pub const WIDTH: f32 = 6.0;
    pub const HEIGHT: f32 = 3.0;
    pub const SPEED: f32 = 5.0;
    pub const STRENGTH: i32 = 1;

    pub fn new(pos: Vec2, facing: Facing) -> Self {
        Self { pos, facing, alive: true }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(Self::WIDTH, Self::HEIGHT))
    }
}
