use glam::Vec2;

/// Animation clips the player sprite can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Stand,
    Left,
    Right,
    Jump,
}

impl Animation {
    /// Clip key as registered with the sprite engine
    pub fn key(&self) -> &'static str {
        match self {
            Animation::Stand => "stand",
            Animation::Left => "left",
            Animation::Right => "right",
            Animation::Jump => "jump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionState {
    Grounded,
    Airborne,
}

/// Player kinematic state. Position and velocity are mirrored from the body
/// each frame; acceleration and animation are what the controller last
/// commanded.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub facing_left: bool,
    pub angle: f32,
    pub angular_velocity: f32,
    pub is_grounded: bool,
    pub has_jumped_since_grounded: bool,
    pub is_dead: bool,
    pub current_animation: Animation,
    pub motion: MotionState,
}

impl PlayerState {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            facing_left: false,
            angle: 0.0,
            angular_velocity: 0.0,
            is_grounded: false,
            has_jumped_since_grounded: false,
            is_dead: false,
            current_animation: Animation::Stand,
            motion: MotionState::Airborne,
        }
    }

    /// Put the player back at `spawn` as if the level had just started
    pub fn reset(&mut self, spawn: Vec2) {
        *self = Self::new(spawn);
    }

    pub fn going_left(&self) -> bool {
        self.velocity.x < 0.0
    }

    pub fn going_right(&self) -> bool {
        self.velocity.x > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_death_and_jump_flags() {
        let mut state = PlayerState::new(Vec2::new(10.0, 20.0));
        state.is_dead = true;
        state.has_jumped_since_grounded = true;
        state.angle = 190.0;
        state.velocity = Vec2::new(150.0, -330.0);

        state.reset(Vec2::new(100.0, 450.0));
        assert!(!state.is_dead);
        assert!(!state.has_jumped_since_grounded);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.position, Vec2::new(100.0, 450.0));
    }

    #[test]
    fn test_stationary_is_neither_direction() {
        let state = PlayerState::new(Vec2::ZERO);
        assert!(!state.going_left());
        assert!(!state.going_right());
    }
}
