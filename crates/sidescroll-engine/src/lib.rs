pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod input;
pub mod level;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::GameConfig;
pub use api::simulation::Simulation;
pub use api::types::{UnitId, UnitKind, Facing, VerticalDir, KnockDir, FrameEvent};
pub use components::unit::Unit;
pub use components::motion::{MotionState, MotionError};
pub use components::platform::Platform;
pub use components::bullet::Bullet;
pub use core::scene::Scene;
pub use core::spatial::{Aabb, PlatformIndex};
pub use core::camera::ScrollCamera;
pub use core::physics::PhysicsScheduler;
pub use core::collision::Resolution;
pub use core::time::FrameClock;
pub use input::queue::{Intent, IntentQueue};
pub use level::{Level, LevelFile, LevelError, PlatformCatalog};
pub use bridge::snapshot::{FrameSnapshot, UnitInstance, PlatformInstance};
