//! Platform collision resolution.
//!
//! Contacts are classified against the unit's y on the previous tick: a unit
//! that was completely above or below a platform has landed on it or hit its
//! underside; a unit that already overlapped it vertically ran into its side.

use crate::api::types::{Facing, UnitId, VerticalDir};
use crate::core::camera::ScrollCamera;
use crate::core::scene::Scene;
use crate::core::spatial::{Aabb, PlatformIndex};

/// How a vertical contact was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    Landed,
    CeilingHit,
}

/// Outcome of one resolution pass for one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    /// A platform stopped the unit horizontally.
    pub blocked: bool,
    pub contact: Option<VerticalContact>,
}

/// True if, at `last_y`, a unit of `unit_height` was entirely above or
/// entirely below `platform`.
pub fn completely_above_or_below(unit_height: f32, last_y: f32, platform: &Aabb) -> bool {
    last_y <= platform.top() - unit_height || last_y >= platform.bottom()
}

/// Nearest surface below `last_y`. Falls back to the first candidate.
fn highest_platform(candidates: &[Aabb], last_y: f32) -> Option<Aabb> {
    candidates
        .iter()
        .filter(|r| r.top() > last_y)
        .min_by(|a, b| a.top().total_cmp(&b.top()))
        .or_else(|| candidates.first())
        .copied()
}

/// Nearest ceiling above `last_y`. Falls back to the first candidate.
fn lowest_platform(candidates: &[Aabb], last_y: f32) -> Option<Aabb> {
    candidates
        .iter()
        .filter(|r| r.top() < last_y)
        .max_by(|a, b| a.top().total_cmp(&b.top()))
        .or_else(|| candidates.first())
        .copied()
}

/// Push a unit out of the side of `rect` (screen space). Returns whether a
/// correction happened.
///
/// Knockback direction wins over facing unless the knockback is straight up.
/// The player's correction goes through the camera so the world scrolls
/// instead of the player sprite moving, and the player stops walking. Enemies
/// keep their heading.
pub fn adjust_for_blockage(
    id: UnitId,
    rect: &Aabb,
    scene: &mut Scene,
    camera: &mut ScrollCamera,
) -> bool {
    let Some(unit) = scene.get_mut(id) else {
        return false;
    };
    if !rect.spans_x(unit.pos.x, unit.width()) {
        return false;
    }

    let direction = if unit.motion.is_knocked_back() {
        unit.motion.knock_dir.facing().unwrap_or(unit.facing)
    } else {
        unit.facing
    };
    let target_x = match direction {
        Facing::Right => rect.left() - unit.width(),
        Facing::Left => rect.right(),
    };

    unit.motion.knock_back_blocked = true;

    if unit.is_player() {
        unit.moving = false;
        // Truncates toward zero; the camera works in whole pixels.
        let displacement = (target_x - unit.pos.x) as i32;
        camera.scroll_pieces(displacement, scene);
    } else {
        unit.pos.x = target_x;
    }
    true
}

/// Side-blockage check against every overlapping platform. Used on ticks with
/// no vertical displacement.
pub fn check_for_blockage(
    id: UnitId,
    scene: &mut Scene,
    platforms: &PlatformIndex,
    camera: &mut ScrollCamera,
) -> bool {
    let Some(unit) = scene.get(id) else {
        return false;
    };
    let hits = platforms.find_overlaps(&unit.aabb(), camera.origin_x() as f32);

    let mut blocked = false;
    for index in hits {
        let Some(platform) = platforms.get(index) else {
            continue;
        };
        let rect = platform.screen_rect(camera.origin_x() as f32);
        blocked |= adjust_for_blockage(id, &rect, scene, camera);
    }
    blocked
}

/// Resolve every platform the unit overlaps after moving from `last_y`.
///
/// Side contacts are corrected one by one in level order. Vertical contacts
/// are resolved once, against the nearest surface in the direction of travel.
pub fn check_platform_collision(
    id: UnitId,
    last_y: f32,
    scene: &mut Scene,
    platforms: &PlatformIndex,
    camera: &mut ScrollCamera,
) -> Resolution {
    let mut resolution = Resolution::default();
    let Some(unit) = scene.get(id) else {
        return resolution;
    };
    let height = unit.height();
    let hits = platforms.find_overlaps(&unit.aabb(), camera.origin_x() as f32);

    // Vertical classification depends on y only, so world rects will do.
    let vertical: Vec<Aabb> = hits
        .iter()
        .filter_map(|&i| platforms.get(i))
        .map(|p| p.rect)
        .filter(|r| completely_above_or_below(height, last_y, r))
        .collect();

    for index in hits {
        let Some(platform) = platforms.get(index) else {
            continue;
        };
        if completely_above_or_below(height, last_y, &platform.rect) {
            if resolution.contact.is_none() {
                resolution.contact = resolve_vertical(id, last_y, &vertical, scene);
            }
        } else {
            let rect = platform.screen_rect(camera.origin_x() as f32);
            resolution.blocked |= adjust_for_blockage(id, &rect, scene, camera);
        }
    }
    resolution
}

fn resolve_vertical(
    id: UnitId,
    last_y: f32,
    candidates: &[Aabb],
    scene: &mut Scene,
) -> Option<VerticalContact> {
    let unit = scene.get_mut(id)?;
    match unit.motion.y_dir {
        VerticalDir::Down => {
            let surface = highest_platform(candidates, last_y)?;
            let y = surface.top() - unit.height();
            unit.pos.y = y;
            unit.motion.land(y);
            log::debug!("unit {:?} landed at y={}", id, y);
            Some(VerticalContact::Landed)
        }
        VerticalDir::Up => {
            let ceiling = lowest_platform(candidates, last_y)?;
            let y = ceiling.bottom();
            unit.pos.y = y;
            unit.motion.bump_head(y);
            log::debug!("unit {:?} hit a ceiling at y={}", id, y);
            Some(VerticalContact::CeilingHit)
        }
    }
}
