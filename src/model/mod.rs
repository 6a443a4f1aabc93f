// MODEL: Player data and the engine body boundary
pub mod config;
pub mod player;
pub mod body;

pub use config::PlayerConfig;
pub use player::{Animation, MotionState, PlayerState};
pub use body::{ArcadeBody, PlayerBody};
