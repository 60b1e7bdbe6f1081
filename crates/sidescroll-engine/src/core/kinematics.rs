//! Closed-form vertical and horizontal displacements as functions of elapsed
//! ticks. Displacements are measured upward; screen positions subtract them
//! from the arc's base because y grows downward.
//!
//! Jump and free fall use unrelated curves and share no gravity constant.

use crate::api::types::{KnockDir, VerticalDir};
use crate::components::unit::Unit;

/// Horizontal knockback offset added on top of `sqrt(t)`.
pub const KNOCK_BACK_X: f32 = 10.0;
/// Knockback apex tick; the arc peaks at `KNOCK_BACK_Y^2`.
pub const KNOCK_BACK_Y: i64 = 7;

/// Horizontal shift of the jump parabola: `floor(sqrt(max_jump))`.
pub fn jump_shift(max_jump: u32) -> i64 {
    (max_jump as f64).sqrt().floor() as i64
}

/// Jump arc: `-2 (t - shift)^2 + 2 max_jump`, peaking at `2 max_jump`.
pub fn jump_displacement(t: u32, max_jump: u32) -> f32 {
    let d = t as i64 - jump_shift(max_jump);
    (-2 * d * d + 2 * max_jump as i64) as f32
}

/// Free fall: `-3 t^2`. Steeper than the jump's descent.
pub fn free_fall_displacement(t: u32) -> f32 {
    let t = t as i64;
    (-3 * t * t) as f32
}

/// Vertical knockback arc: `-(t - Ky)^2 + Ky^2`.
pub fn knockback_y(t: u32) -> f32 {
    let d = t as i64 - KNOCK_BACK_Y;
    (-d * d + KNOCK_BACK_Y * KNOCK_BACK_Y) as f32
}

/// Horizontal knockback distance from `x_base`: `sqrt(t) + Kx`.
pub fn knockback_x(t: u32) -> f32 {
    (t as f32).sqrt() + KNOCK_BACK_X
}

/// Advance a jump or free fall by one tick. Returns false when the unit is
/// grounded (`gravity_time == 0`) and nothing moved.
pub fn apply_gravity(unit: &mut Unit) -> bool {
    let m = &mut unit.motion;
    if m.gravity_time == 0 {
        return false;
    }

    let displacement = if m.free_fall {
        free_fall_displacement(m.gravity_time)
    } else {
        let max_jump = unit.kind.max_jump();
        let d = jump_displacement(m.gravity_time, max_jump);
        if d == 2.0 * max_jump as f32 {
            m.y_dir = VerticalDir::Down;
        }
        d
    };

    unit.pos.y = m.y_base - displacement;
    m.gravity_time += 1;
    true
}

/// Advance a knockback by one tick: moves the unit vertically and returns the
/// x the unit should be moved to, if horizontal knockback still applies.
///
/// The caller owns the horizontal move because the player's x has to go
/// through the camera.
pub fn knock_back_step(unit: &mut Unit) -> Option<f32> {
    let m = &mut unit.motion;
    if m.knock_back_time == 0 {
        return None;
    }
    let t = m.knock_back_time;

    if knockback_y(t) == (KNOCK_BACK_Y * KNOCK_BACK_Y) as f32 {
        m.y_dir = VerticalDir::Down;
    }

    let target_x = if m.knock_back_blocked {
        None
    } else {
        match m.knock_dir {
            KnockDir::Left => Some(m.x_base - knockback_x(t)),
            KnockDir::Right => Some(m.x_base + knockback_x(t)),
            KnockDir::Up | KnockDir::None => None,
        }
    };

    unit.pos.y = m.y_base - knockback_y(t);
    m.knock_back_time += 1;
    target_x
}
