use glam::Vec2;

use crate::core::spatial::Aabb;

/// Type tag of the platform that always stays loaded.
pub const FLOOR_PLATFORM: &str = "FloorPlatform";

/// Immutable axis-aligned platform, stored in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Aabb,
    /// Type tag from the platform catalog (e.g. "FloorPlatform").
    pub kind: String,
    pub color: [u8; 3],
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Aabb::new(Vec2::new(x, y), Vec2::new(width, height)),
            kind: String::new(),
            color: [50, 120, 60],
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn is_floor(&self) -> bool {
        self.kind == FLOOR_PLATFORM
    }

    /// The rectangle as it currently appears on screen.
    pub fn screen_rect(&self, origin_x: f32) -> Aabb {
        self.rect.translated(Vec2::new(-origin_x, 0.0))
    }
}
