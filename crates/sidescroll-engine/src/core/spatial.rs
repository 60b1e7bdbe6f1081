//! Spatial queries against the level's platforms.
//!
//! Platforms are stored in world space. Every query takes the camera's
//! `origin_x` and tests against the platform's on-screen rectangle, which is
//! where the units live.

use glam::Vec2;

use crate::components::platform::Platform;

/// Axis-aligned box given by its top-left corner and size. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Boxes with no area never overlap anything.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.min + offset, self.size)
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether `x` (a left edge of something `width` wide) lies strictly
    /// within the horizontal span where the two would overlap.
    pub fn spans_x(&self, x: f32, width: f32) -> bool {
        self.left() - width < x && x < self.right()
    }
}

/// Read-only collection of the level's platforms, in level order.
#[derive(Debug, Clone, Default)]
pub struct PlatformIndex {
    platforms: Vec<Platform>,
}

impl PlatformIndex {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Indices of every platform whose on-screen rectangle overlaps `aabb`.
    /// Returned in level order.
    pub fn find_overlaps(&self, aabb: &Aabb, origin_x: f32) -> Vec<usize> {
        self.platforms
            .iter()
            .enumerate()
            .filter(|(_, p)| p.screen_rect(origin_x).overlaps(aabb))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether some platform's top is exactly at the bottom of `aabb` and
    /// the two overlap horizontally.
    pub fn supports(&self, aabb: &Aabb, origin_x: f32) -> bool {
        self.platforms.iter().any(|p| {
            let rect = p.screen_rect(origin_x);
            aabb.bottom() == rect.top() && rect.spans_x(aabb.left(), aabb.width())
        })
    }
}
