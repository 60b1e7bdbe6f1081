pub mod rng;
pub mod player;
pub mod enemy;
pub mod bullet;
pub mod spawn;
