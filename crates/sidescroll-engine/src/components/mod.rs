pub mod motion;
pub mod unit;
pub mod platform;
pub mod bullet;
