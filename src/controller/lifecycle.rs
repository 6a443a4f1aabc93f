use glam::Vec2;
use tracing::{debug, info};

/// Scene-side half of the death/respawn cycle
pub trait SceneHost {
    fn pause_physics(&mut self);
    fn resume_physics(&mut self);
    fn restart_scene(&mut self);
}

/// Receives landing outcomes. `at` is the player position at the moment of
/// contact, where a sparkle or explosion should be placed.
pub trait LandingEffects {
    fn on_land_success(&mut self, at: Vec2);
    fn on_land_fail(&mut self, at: Vec2);
}

/// One-shot countdown driven by the frame loop. Cancelling it guarantees it
/// never fires.
#[derive(Debug, Clone, Default)]
pub struct RespawnTimer {
    remaining_ms: Option<f32>,
}

impl RespawnTimer {
    pub fn new() -> Self {
        Self { remaining_ms: None }
    }

    /// Arm the timer, replacing any pending countdown
    pub fn schedule(&mut self, delay_ms: f32) {
        debug!(delay_ms, "respawn scheduled");
        self.remaining_ms = Some(delay_ms.max(0.0));
    }

    /// Returns true if a pending countdown was dropped
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.remaining_ms.take().is_some();
        if was_pending {
            debug!("respawn cancelled");
        }
        was_pending
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Advance by `dt_ms`. Returns true on the single call where the
    /// countdown reaches zero.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        let Some(remaining) = self.remaining_ms.as_mut() else {
            return false;
        };
        *remaining -= dt_ms;
        if *remaining <= 0.0 {
            self.remaining_ms = None;
            return true;
        }
        false
    }
}

/// Host and effects that only log. Used where no engine is attached.
#[derive(Debug, Default)]
pub struct LoggingHost {
    pub physics_paused: bool,
}

impl SceneHost for LoggingHost {
    fn pause_physics(&mut self) {
        self.physics_paused = true;
        info!("physics paused");
    }

    fn resume_physics(&mut self) {
        self.physics_paused = false;
        info!("physics resumed");
    }

    fn restart_scene(&mut self) {
        info!("scene restart");
    }
}

impl LandingEffects for LoggingHost {
    fn on_land_success(&mut self, at: Vec2) {
        info!(x = at.x, y = at.y, "sparkle");
    }

    fn on_land_fail(&mut self, at: Vec2) {
        info!(x = at.x, y = at.y, "explosion");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once() {
        let mut timer = RespawnTimer::new();
        timer.schedule(1000.0);
        assert!(!timer.advance(500.0));
        assert!(!timer.advance(499.0));
        assert!(timer.advance(1.0));
        assert!(!timer.advance(1000.0), "Timer must not fire twice");
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = RespawnTimer::new();
        timer.schedule(1000.0);
        assert!(timer.cancel());
        assert!(!timer.advance(5000.0));
        assert!(!timer.cancel());
    }

    #[test]
    fn test_idle_timer_does_nothing() {
        let mut timer = RespawnTimer::new();
        assert!(!timer.is_pending());
        assert!(!timer.advance(16.0));
    }
}
