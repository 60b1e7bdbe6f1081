pub mod scene;
pub mod spatial;
pub mod kinematics;
pub mod camera;
pub mod collision;
pub mod physics;
pub mod time;
