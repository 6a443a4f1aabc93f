use tracing::{debug, info};

use crate::model::{Animation, MotionState, PlayerBody, PlayerConfig, PlayerState};

/// Raw movement intent for one frame. Any combination may be set; the
/// controller resolves them with jump > left > right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub press_left: bool,
    pub press_right: bool,
    pub press_jump: bool,
}

/// Classification of a ground contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    None,
    Success,
    Fail,
}

/// Turns per-frame input and body feedback into movement commands,
/// animation picks and landing outcomes.
pub struct PlayerController {
    pub config: PlayerConfig,
    pub state: PlayerState,
}

impl PlayerController {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            state: PlayerState::new(config.spawn),
            config,
        }
    }

    /// Run one frame of the movement state machine.
    ///
    /// Must be called after any ground-contact callback for the same frame so
    /// that a death caused by the landing is already visible here.
    pub fn update(&mut self, input: PlayerInput, body: &mut impl PlayerBody) {
        if self.state.is_dead {
            // hold the death pose, no movement
            self.play(body, Animation::Stand);
            return;
        }

        let velocity = body.velocity().unwrap_or_default();
        self.state.velocity = velocity;
        self.state.position = body.position();
        self.state.angle = body.angle();
        self.state.is_grounded = body.is_grounded();

        if self.state.is_grounded {
            self.update_grounded(input, body);
        } else {
            self.update_airborne(body);
        }
    }

    fn update_grounded(&mut self, input: PlayerInput, body: &mut impl PlayerBody) {
        let cfg = self.config;

        self.state.motion = MotionState::Grounded;
        self.state.has_jumped_since_grounded = false;
        self.state.angle = 0.0;
        self.state.angular_velocity = 0.0;
        body.set_angle(0.0);
        body.set_angular_velocity(0.0);

        if input.press_jump {
            let spin = self.state.velocity.x;
            body.set_velocity_y(cfg.jump_impulse);
            body.set_angular_velocity(spin);
            self.state.velocity.y = cfg.jump_impulse;
            self.state.angular_velocity = spin;
            self.state.has_jumped_since_grounded = true;
            self.state.motion = MotionState::Airborne;
            self.play(body, Animation::Jump);
            debug!(vx = spin, "jump");
            return;
        }

        if input.press_left {
            let ax = if self.state.going_right() { -cfg.triple_accel() } else { -cfg.accel };
            self.accelerate(body, ax);
            self.face(body, true);
            self.play(body, Animation::Left);
            return;
        }

        if input.press_right {
            let ax = if self.state.going_left() { cfg.triple_accel() } else { cfg.accel };
            self.accelerate(body, ax);
            self.face(body, false);
            self.play(body, Animation::Right);
            return;
        }

        // No input: snap to rest when slow, otherwise brake against the motion
        if self.state.velocity.x.abs() < cfg.half_accel() {
            self.accelerate(body, 0.0);
            body.set_velocity_x(0.0);
            self.state.velocity.x = 0.0;
            self.play(body, Animation::Stand);
            return;
        }

        if self.state.going_left() {
            self.accelerate(body, cfg.accel);
        } else {
            self.accelerate(body, -cfg.accel);
        }
    }

    fn update_airborne(&mut self, body: &mut impl PlayerBody) {
        // No air control
        self.state.motion = MotionState::Airborne;
        self.accelerate(body, 0.0);
        self.play(body, Animation::Jump);
    }

    /// Judge a ground contact. Called from the engine's collision callback
    /// between the player and a platform.
    pub fn resolve_landing(&self, body: &impl PlayerBody) -> LandingOutcome {
        if self.state.is_dead {
            return LandingOutcome::None;
        }

        let normalized_angle = body.angle().abs() % 360.0;
        if normalized_angle > self.config.angle_fail_threshold && body.is_grounded() {
            info!(angle = normalized_angle, "bad landing");
            return LandingOutcome::Fail;
        }

        if self.state.has_jumped_since_grounded {
            info!(angle = normalized_angle, "clean landing");
            return LandingOutcome::Success;
        }

        LandingOutcome::None
    }

    /// Kill the player. Returns false if the player was already dead, in
    /// which case nothing changes.
    pub fn die(&mut self, body: &mut impl PlayerBody) -> bool {
        if self.state.is_dead {
            return false;
        }
        self.state.is_dead = true;
        body.set_tint(Some(self.config.death_tint));
        body.set_acceleration_x(0.0);
        self.state.acceleration.x = 0.0;
        self.play(body, Animation::Stand);
        info!(x = self.state.position.x, y = self.state.position.y, "player died");
        true
    }

    pub fn resurrect(&mut self, body: &mut impl PlayerBody) {
        self.state.is_dead = false;
        body.set_tint(None);
        info!("player resurrected");
    }

    /// Reset in place for a level restart
    pub fn respawn(&mut self, body: &mut impl PlayerBody) {
        let spawn = self.config.spawn;
        self.state.reset(spawn);
        body.respawn(spawn);
        self.state.is_grounded = body.is_grounded();
        body.play_animation(Animation::Stand, false);
    }

    fn accelerate(&mut self, body: &mut impl PlayerBody, ax: f32) {
        self.state.acceleration.x = ax;
        body.set_acceleration_x(ax);
    }

    fn face(&mut self, body: &mut impl PlayerBody, left: bool) {
        self.state.facing_left = left;
        body.set_flip_x(left);
    }

    fn play(&mut self, body: &mut impl PlayerBody, anim: Animation) {
        self.state.current_animation = anim;
        body.play_animation(anim, true);
    }
}
