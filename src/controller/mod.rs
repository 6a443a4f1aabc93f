// CONTROLLER: Input, player logic, and frame loop
pub mod input;
pub mod player_controller;
pub mod lifecycle;
pub mod frame_loop;

pub use input::{InputEvent, InputState, InputProcessor, KeyBindings, Viewport};
pub use player_controller::{LandingOutcome, PlayerController, PlayerInput};
pub use lifecycle::{LandingEffects, LoggingHost, RespawnTimer, SceneHost};
pub use frame_loop::{FrameEvent, GameSession};
