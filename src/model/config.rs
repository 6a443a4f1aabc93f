use glam::Vec2;

/// Tunables for the player character. Units are pixels and seconds,
/// angles in degrees, with y pointing down like the screen.
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    pub max_speed: Vec2,
    pub accel: f32,
    pub jump_impulse: f32,
    pub angle_fail_threshold: f32,
    pub respawn_delay_ms: f32,
    pub spawn: Vec2,
    pub death_tint: u32,
}

impl PlayerConfig {
    pub fn new() -> Self {
        let max_speed = Vec2::new(200.0, 2000.0);
        Self {
            max_speed,
            accel: max_speed.x * 3.0 / 4.0,
            jump_impulse: -330.0,
            angle_fail_threshold: 45.0,
            respawn_delay_ms: 1000.0,
            spawn: Vec2::new(100.0, 450.0),
            death_tint: 0xff0000,
        }
    }

    /// Below this horizontal speed an idle grounded player snaps to rest.
    pub fn half_accel(&self) -> f32 {
        self.accel / 2.0
    }

    /// Braking used when pushing against the current direction of travel.
    pub fn triple_accel(&self) -> f32 {
        self.accel * 3.0
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
