use thiserror::Error;

use crate::api::types::{KnockDir, UnitId, VerticalDir};

/// Raised when more than one mechanism drives a unit's vertical motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("unit {unit:?} has {active} active vertical-motion mechanisms")]
    InvariantViolation { unit: UnitId, active: u8 },
}

/// Per-unit kinematic phase and the timers driving the parabolas.
///
/// `y_base` is the y the current arc is measured from; `x_base` is refreshed
/// every frame to the unit's x so a knockback always starts where the unit is.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Ticks elapsed in the current jump or free fall. Zero when grounded.
    pub gravity_time: u32,
    /// Ticks elapsed in the current knockback. Zero when not knocked back.
    pub knock_back_time: u32,
    pub free_fall: bool,
    pub jumping: bool,
    /// Set when a platform stops the knockback horizontally. Vertical
    /// knockback displacement keeps running.
    pub knock_back_blocked: bool,
    pub y_base: f32,
    pub x_base: f32,
    pub y_dir: VerticalDir,
    pub knock_dir: KnockDir,
}

impl MotionState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            gravity_time: 0,
            knock_back_time: 0,
            free_fall: false,
            jumping: false,
            knock_back_blocked: false,
            y_base: y,
            x_base: x,
            y_dir: VerticalDir::Down,
            knock_dir: KnockDir::None,
        }
    }

    pub fn is_knocked_back(&self) -> bool {
        self.knock_back_time > 0
    }

    /// Standing still on a surface: nothing drives vertical motion.
    pub fn is_grounded(&self) -> bool {
        !self.jumping && !self.free_fall && !self.is_knocked_back()
    }

    /// Begin a jump. Refused while jumping, free-falling, or knocked back.
    pub fn start_jump(&mut self) -> bool {
        if self.jumping || self.free_fall || self.is_knocked_back() {
            return false;
        }
        self.gravity_time += 1;
        self.jumping = true;
        self.y_dir = VerticalDir::Up;
        true
    }

    /// Begin a knockback arc from height `y`. Cancels any jump or fall.
    pub fn start_knock_back(&mut self, y: f32, dir: KnockDir) {
        self.knock_back_time += 1;
        self.gravity_time = 0;
        self.jumping = false;
        self.free_fall = false;
        self.y_dir = VerticalDir::Up;
        self.y_base = y;
        self.knock_dir = dir;
    }

    pub fn start_free_fall(&mut self) {
        self.free_fall = true;
        self.gravity_time = 1;
        self.y_dir = VerticalDir::Down;
    }

    /// Snap onto a surface at height `y`; the unit is idle afterwards.
    pub fn land(&mut self, y: f32) {
        self.y_base = y;
        self.gravity_time = 0;
        self.knock_back_time = 0;
        self.knock_back_blocked = false;
        self.free_fall = false;
        self.jumping = false;
    }

    /// Snap below a ceiling at height `y` and start falling right away.
    pub fn bump_head(&mut self, y: f32) {
        self.y_base = y;
        self.gravity_time = 1;
        self.knock_back_time = 0;
        self.knock_back_blocked = false;
        self.free_fall = true;
        self.jumping = false;
        self.y_dir = VerticalDir::Down;
    }

    /// Number of mechanisms currently driving vertical motion.
    pub fn vertical_drivers(&self) -> u8 {
        self.jumping as u8 + self.free_fall as u8 + self.is_knocked_back() as u8
    }

    /// At most one of jumping, free fall and knockback may be active.
    pub fn check_exclusive(&self, unit: UnitId) -> Result<(), MotionError> {
        let active = self.vertical_drivers();
        if active > 1 {
            return Err(MotionError::InvariantViolation { unit, active });
        }
        Ok(())
    }
}
