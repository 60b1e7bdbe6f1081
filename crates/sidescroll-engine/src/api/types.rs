/// Handle to a unit stored in the [`Scene`](crate::core::scene::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

/// Horizontal facing of a unit or bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Current vertical trend. Screen y grows downward, so `Up` means y is shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalDir {
    Up,
    #[default]
    Down,
}

/// Direction of an active knockback arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnockDir {
    #[default]
    None,
    Left,
    Right,
    /// Straight up: the arc has no horizontal component.
    Up,
}

impl KnockDir {
    /// Horizontal facing implied by the knockback, if it has one.
    pub fn facing(self) -> Option<Facing> {
        match self {
            KnockDir::Left => Some(Facing::Left),
            KnockDir::Right => Some(Facing::Right),
            KnockDir::None | KnockDir::Up => None,
        }
    }
}

/// Tagged unit variant. Capabilities are derived from the tag instead of
/// testing concrete types: both kinds are gravity-affected and collidable,
/// only enemies scroll with the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Player,
    Enemy,
}

impl UnitKind {
    pub fn width(self) -> f32 {
        match self {
            UnitKind::Player => 50.0,
            UnitKind::Enemy => 50.0,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            UnitKind::Player => 50.0,
            UnitKind::Enemy => 50.0,
        }
    }

    /// Apex parameter of the jump parabola.
    pub fn max_jump(self) -> u32 {
        64
    }

    /// Horizontal pixels moved per frame while walking.
    pub fn speed(self) -> i32 {
        match self {
            UnitKind::Player => 4,
            UnitKind::Enemy => 1,
        }
    }

    /// Damage dealt to the player on contact.
    pub fn strength(self) -> i32 {
        match self {
            UnitKind::Player => 0,
            UnitKind::Enemy => 1,
        }
    }

    /// The player's horizontal motion is routed through the camera.
    pub fn is_player(self) -> bool {
        self == UnitKind::Player
    }

    /// Whether the unit's screen position shifts when the world scrolls.
    pub fn scrolls(self) -> bool {
        self == UnitKind::Enemy
    }
}

/// Notable things that happened during a frame, drained by the game shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    Landed(UnitId),
    CeilingHit(UnitId),
    Blocked(UnitId),
    PlayerHit { damage: i32, hp: i32 },
    PlayerDied,
    EnemySpawned(UnitId),
    EnemyKilled(UnitId),
    EnemyFell(UnitId),
    BulletFired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_follow_kind() {
        assert!(UnitKind::Player.is_player());
        assert!(!UnitKind::Player.scrolls());
        assert!(UnitKind::Enemy.scrolls());
        assert!(!UnitKind::Enemy.is_player());
    }

    #[test]
    fn knock_dir_up_has_no_facing() {
        assert_eq!(KnockDir::Up.facing(), None);
        assert_eq!(KnockDir::None.facing(), None);
        assert_eq!(KnockDir::Left.facing(), Some(Facing::Left));
        assert_eq!(KnockDir::Right.facing(), Some(Facing::Right));
    }
}
