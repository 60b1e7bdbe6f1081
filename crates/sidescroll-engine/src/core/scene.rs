use crate::api::types::{UnitId, UnitKind};
use crate::components::bullet::Bullet;
use crate::components::unit::Unit;

/// Unit storage using a flat Vec, addressed by `UnitId` handles.
/// Designed for a handful of units (one player, a few enemies).
pub struct Scene {
    units: Vec<Unit>,
    bullets: Vec<Bullet>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            units: Vec::with_capacity(16),
            bullets: Vec::with_capacity(32),
        }
    }

    /// Add a unit to the scene.
    pub fn spawn(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Remove a unit by ID. Returns the removed unit if found.
    pub fn despawn(&mut self, id: UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }

    /// Snapshot of the live units' handles, in spawn order. Phases iterate
    /// over this so a unit dying mid-phase cannot disturb the iteration.
    pub fn ids(&self) -> Vec<UnitId> {
        self.units.iter().filter(|u| u.alive).map(|u| u.id).collect()
    }

    pub fn player(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.kind == UnitKind::Player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.kind == UnitKind::Player)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.kind == UnitKind::Enemy)
    }

    pub fn enemies_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut().filter(|u| u.kind == UnitKind::Enemy)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies().count()
    }

    pub fn push_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Bullets and units together, for passes that need both at once.
    pub fn bullets_and_units_mut(&mut self) -> (&mut [Bullet], &mut [Unit]) {
        (&mut self.bullets, &mut self.units)
    }

    /// Shift every scrolling object horizontally by `dx` screen pixels.
    pub fn shift_scrolling(&mut self, dx: f32) {
        for unit in self.units.iter_mut().filter(|u| u.kind.scrolls()) {
            unit.pos.x += dx;
        }
        for bullet in &mut self.bullets {
            bullet.pos.x += dx;
        }
    }

    /// Drop dead bullets and dead units. Returns the removed units.
    pub fn reap(&mut self) -> Vec<Unit> {
        self.bullets.retain(|b| b.alive);
        let (dead, live): (Vec<Unit>, Vec<Unit>) =
            std::mem::take(&mut self.units).into_iter().partition(|u| !u.alive);
        self.units = live;
        dead
    }

    /// Number of units in the scene.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
