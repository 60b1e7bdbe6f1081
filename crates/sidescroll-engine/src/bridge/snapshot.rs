use bytemuck::{Pod, Zeroable};

use crate::api::types::{Facing, UnitKind};
use crate::components::bullet::Bullet;
use crate::components::platform::Platform;
use crate::components::unit::Unit;
use crate::core::camera::ScrollCamera;
use crate::core::scene::Scene;
use crate::core::spatial::PlatformIndex;

/// `UnitInstance::kind` values.
pub const KIND_PLAYER: f32 = 0.0;
pub const KIND_ENEMY: f32 = 1.0;
pub const KIND_BULLET: f32 = 2.0;

/// `UnitInstance::flags` bits.
pub const FLAG_JUMPING: u32 = 1;
pub const FLAG_FREE_FALL: u32 = 1 << 1;
pub const FLAG_KNOCKED_BACK: u32 = 1 << 2;
pub const FLAG_IMMORTAL: u32 = 1 << 3;
pub const FLAG_FACING_LEFT: u32 = 1 << 4;

/// Per-object data for an external renderer, in screen space.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct UnitInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// One of the `KIND_*` constants.
    pub kind: f32,
    /// `FLAG_*` bits, stored as a float.
    pub flags: f32,
    pub hp: f32,
    pub _pad: f32,
}

impl UnitInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_unit(unit: &Unit) -> Self {
        let m = &unit.motion;
        let mut flags = 0;
        if m.jumping {
            flags |= FLAG_JUMPING;
        }
        if m.free_fall {
            flags |= FLAG_FREE_FALL;
        }
        if m.is_knocked_back() {
            flags |= FLAG_KNOCKED_BACK;
        }
        if unit.immortal {
            flags |= FLAG_IMMORTAL;
        }
        if unit.facing == Facing::Left {
            flags |= FLAG_FACING_LEFT;
        }
        Self {
            x: unit.pos.x,
            y: unit.pos.y,
            width: unit.width(),
            height: unit.height(),
            kind: match unit.kind {
                UnitKind::Player => KIND_PLAYER,
                UnitKind::Enemy => KIND_ENEMY,
            },
            flags: flags as f32,
            hp: unit.hp as f32,
            _pad: 0.0,
        }
    }

    pub fn from_bullet(bullet: &Bullet) -> Self {
        let flags = if bullet.facing == Facing::Left { FLAG_FACING_LEFT } else { 0 };
        Self {
            x: bullet.pos.x,
            y: bullet.pos.y,
            width: Bullet::WIDTH,
            height: Bullet::HEIGHT,
            kind: KIND_BULLET,
            flags: flags as f32,
            hp: 0.0,
            _pad: 0.0,
        }
    }

    /// Decoded `flags`.
    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags as u32) & flag != 0
    }
}

/// A platform rectangle with its color, in screen space.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlatformInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Color channels in 0.0..=1.0.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad: f32,
}

impl PlatformInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_platform(platform: &Platform, origin_x: f32) -> Self {
        let rect = platform.screen_rect(origin_x);
        let [r, g, b] = platform.color;
        Self {
            x: rect.left(),
            y: rect.top(),
            width: rect.width(),
            height: rect.height(),
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            _pad: 0.0,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    /// Units in scene order, followed by live bullets.
    pub units: Vec<UnitInstance>,
    pub platforms: Vec<PlatformInstance>,
    pub world_origin_x: i32,
    pub frame: u64,
}

impl FrameSnapshot {
    /// Capture the scene as it is now. Dead units that have not been reaped
    /// yet are left out.
    pub fn capture(
        scene: &Scene,
        platforms: &PlatformIndex,
        camera: &ScrollCamera,
        frame: u64,
    ) -> Self {
        let origin = camera.origin_x() as f32;
        let units = scene
            .iter()
            .filter(|u| u.alive)
            .map(UnitInstance::from_unit)
            .chain(scene.bullets().iter().filter(|b| b.alive).map(UnitInstance::from_bullet))
            .collect();
        let platforms = platforms
            .iter()
            .map(|p| PlatformInstance::from_platform(p, origin))
            .collect();
        Self {
            units,
            platforms,
            world_origin_x: camera.origin_x(),
            frame,
        }
    }

    /// Unit records as raw bytes, ready to copy into a shared buffer.
    pub fn unit_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.units)
    }

    pub fn platform_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.platforms)
    }
}
