use glam::Vec2;
use crate::model::Animation;

/// Boundary to the physics/sprite engine that owns the player's body.
///
/// The controller reads the integrator's results back through this trait and
/// issues commands for the next step. Coordinates are screen space (y down),
/// angles are degrees.
pub trait PlayerBody {
    fn is_grounded(&self) -> bool;

    /// `None` when the engine has no physics data for the body (disabled or
    /// not yet added to the world).
    fn velocity(&self) -> Option<Vec2>;

    fn angle(&self) -> f32;

    fn position(&self) -> Vec2;

    fn set_velocity_x(&mut self, v: f32);
    fn set_velocity_y(&mut self, v: f32);
    fn set_acceleration_x(&mut self, a: f32);
    fn set_angular_velocity(&mut self, w: f32);
    fn set_angle(&mut self, degrees: f32);
    fn set_position(&mut self, pos: Vec2);
    fn play_animation(&mut self, anim: Animation, ignore_if_playing: bool);
    fn set_flip_x(&mut self, flip: bool);
    fn set_tint(&mut self, tint: Option<u32>);

    /// Put the body back at `spawn` at rest, with ground contact recomputed
    /// for the new position.
    fn respawn(&mut self, spawn: Vec2);
}

/// Arcade-style stand-in for an engine body: one infinite floor, gravity,
/// velocity clamping. Used by the native demo, the browser harness and tests.
#[derive(Debug, Clone)]
pub struct ArcadeBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_velocity: Vec2,
    pub angle: f32,
    pub angular_velocity: f32,
    pub gravity: f32,
    pub floor_y: f32,
    pub paused: bool,
    pub enabled: bool,
    pub flip_x: bool,
    pub tint: Option<u32>,
    pub animation: Option<Animation>,
    pub animation_restarts: u32,
    touching_down: bool,
}

impl ArcadeBody {
    pub fn new(spawn: Vec2, max_velocity: Vec2) -> Self {
        Self {
            position: spawn,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            max_velocity,
            angle: 0.0,
            angular_velocity: 0.0,
            gravity: 300.0,
            floor_y: spawn.y,
            paused: false,
            enabled: true,
            flip_x: false,
            tint: None,
            animation: None,
            animation_restarts: 0,
            touching_down: true,
        }
    }

    /// Integrate one step of `dt` seconds. Returns true while the body is
    /// touching the floor after the step, which is when an engine collider
    /// would report ground contact.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.paused || !self.enabled {
            return false;
        }

        let accel = self.acceleration + Vec2::new(0.0, self.gravity);
        self.velocity += accel * dt;
        self.velocity = self.velocity.clamp(-self.max_velocity, self.max_velocity);
        self.position += self.velocity * dt;
        self.angle += self.angular_velocity * dt;

        if self.position.y >= self.floor_y {
            self.position.y = self.floor_y;
            self.velocity.y = self.velocity.y.min(0.0);
            self.touching_down = true;
        } else {
            self.touching_down = false;
        }
        self.touching_down
    }
}

impl PlayerBody for ArcadeBody {
    fn is_grounded(&self) -> bool {
        self.touching_down
    }

    fn velocity(&self) -> Option<Vec2> {
        self.enabled.then_some(self.velocity)
    }

    fn angle(&self) -> f32 {
        self.angle
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_velocity_x(&mut self, v: f32) {
        self.velocity.x = v.clamp(-self.max_velocity.x, self.max_velocity.x);
    }

    fn set_velocity_y(&mut self, v: f32) {
        self.velocity.y = v.clamp(-self.max_velocity.y, self.max_velocity.y);
    }

    fn set_acceleration_x(&mut self, a: f32) {
        self.acceleration.x = a;
    }

    fn set_angular_velocity(&mut self, w: f32) {
        self.angular_velocity = w;
    }

    fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    fn set_position(&mut self, pos: Vec2) {
        self.position = pos;
    }

    fn play_animation(&mut self, anim: Animation, ignore_if_playing: bool) {
        if ignore_if_playing && self.animation == Some(anim) {
            return;
        }
        self.animation = Some(anim);
        self.animation_restarts += 1;
    }

    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }

    fn set_tint(&mut self, tint: Option<u32>) {
        self.tint = tint;
    }

    fn respawn(&mut self, spawn: Vec2) {
        self.position = spawn;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.angle = 0.0;
        self.angular_velocity = 0.0;
        self.tint = None;
        self.flip_x = false;
        self.touching_down = spawn.y >= self.floor_y;
    }
}
