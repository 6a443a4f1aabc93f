use std::mem;

use tracing::{info, trace};

use crate::controller::lifecycle::{LandingEffects, RespawnTimer, SceneHost};
use crate::controller::player_controller::{LandingOutcome, PlayerController, PlayerInput};
use crate::model::{ArcadeBody, PlayerBody, PlayerConfig};

/// What happened to the player during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    Jumped,
    Landed(LandingOutcome),
    Died,
    Respawned,
}

/// One play session of a level: the player controller plus everything it
/// talks to, and the respawn countdown that must not outlive it.
pub struct GameSession<B: PlayerBody, H: SceneHost, E: LandingEffects> {
    controller: PlayerController,
    body: B,
    host: H,
    effects: E,
    respawn: RespawnTimer,
    physics_paused: bool,
    events: Vec<FrameEvent>,
    frame: u64,
}

impl<B: PlayerBody, H: SceneHost, E: LandingEffects> GameSession<B, H, E> {
    pub fn new(config: PlayerConfig, body: B, host: H, effects: E) -> Self {
        Self {
            controller: PlayerController::new(config),
            body,
            host,
            effects,
            respawn: RespawnTimer::new(),
            physics_paused: false,
            events: Vec::new(),
            frame: 0,
        }
    }

    /// Collision callback between the player and a platform
    pub fn on_ground_contact(&mut self) -> LandingOutcome {
        let outcome = self.controller.resolve_landing(&self.body);
        let at = self.body.position();
        match outcome {
            LandingOutcome::Success => {
                self.effects.on_land_success(at);
                self.events.push(FrameEvent::Landed(outcome));
            }
            LandingOutcome::Fail => {
                self.effects.on_land_fail(at);
                self.events.push(FrameEvent::Landed(outcome));
                self.kill();
            }
            LandingOutcome::None => {}
        }
        outcome
    }

    /// Collision callback between the player and a hazard (bomb)
    pub fn on_hazard_contact(&mut self) {
        info!(frame = self.frame, "hazard hit");
        self.kill();
    }

    fn kill(&mut self) {
        if !self.controller.die(&mut self.body) {
            return;
        }
        self.host.pause_physics();
        self.physics_paused = true;
        self.respawn.schedule(self.controller.config.respawn_delay_ms);
        self.events.push(FrameEvent::Died);
    }

    /// Per-frame update. Runs after this frame's collision callbacks.
    pub fn frame(&mut self, input: PlayerInput, dt_ms: f32) -> Vec<FrameEvent> {
        if self.respawn.advance(dt_ms) {
            self.controller.resurrect(&mut self.body);
            self.controller.respawn(&mut self.body);
            self.host.resume_physics();
            self.physics_paused = false;
            self.host.restart_scene();
            self.events.push(FrameEvent::Respawned);
            info!(frame = self.frame, "respawned");
        }

        self.controller.update(input, &mut self.body);

        let state = &self.controller.state;
        if state.is_grounded && state.has_jumped_since_grounded {
            self.events.push(FrameEvent::Jumped);
        }

        trace!(
            frame = self.frame,
            vx = state.velocity.x,
            ax = state.acceleration.x,
            anim = state.current_animation.key(),
        );
        self.frame += 1;
        mem::take(&mut self.events)
    }

    /// End the session. A pending respawn is dropped and never fires.
    pub fn teardown(&mut self) {
        if self.respawn.cancel() {
            info!(frame = self.frame, "session torn down with respawn pending");
        }
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn is_physics_paused(&self) -> bool {
        self.physics_paused
    }

    pub fn is_respawn_pending(&self) -> bool {
        self.respawn.is_pending()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

impl<H: SceneHost, E: LandingEffects> GameSession<ArcadeBody, H, E> {
    /// Step the reference body, fire its ground contact, then run the frame
    pub fn tick(&mut self, input: PlayerInput, dt_ms: f32) -> Vec<FrameEvent> {
        self.body.paused = self.physics_paused;
        if self.body.step(dt_ms / 1000.0) {
            self.on_ground_contact();
        }
        self.frame(input, dt_ms)
    }
}

impl<B: PlayerBody, H: SceneHost, E: LandingEffects> Drop for GameSession<B, H, E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::lifecycle::LoggingHost;

    fn session() -> GameSession<ArcadeBody, LoggingHost, LoggingHost> {
        let config = PlayerConfig::default();
        let body = ArcadeBody::new(config.spawn, config.max_speed);
        GameSession::new(config, body, LoggingHost::default(), LoggingHost::default())
    }

    #[test]
    fn test_die_then_respawn_after_delay() {
        let mut s = session();
        s.on_hazard_contact();
        assert!(s.controller().state.is_dead);
        assert!(s.host().physics_paused);

        let mut respawns = 0;
        for _ in 0..4 {
            let events = s.frame(PlayerInput::default(), 250.0);
            respawns += events.iter().filter(|e| **e == FrameEvent::Respawned).count();
        }
        assert_eq!(respawns, 1);
        assert!(!s.controller().state.is_dead);
        assert!(!s.host().physics_paused);

        for _ in 0..10 {
            let events = s.frame(PlayerInput::default(), 250.0);
            assert!(!events.contains(&FrameEvent::Respawned));
        }
    }

    #[test]
    fn test_teardown_cancels_respawn() {
        let mut s = session();
        s.on_hazard_contact();
        assert!(s.is_respawn_pending());
        s.teardown();
        assert!(!s.is_respawn_pending());
        let events = s.frame(PlayerInput::default(), 5000.0);
        assert_eq!(events, vec![FrameEvent::Died]);
        assert!(s.controller().state.is_dead);
    }

    #[test]
    fn test_second_hazard_hit_is_ignored() {
        let mut s = session();
        s.on_hazard_contact();
        s.frame(PlayerInput::default(), 500.0);
        s.on_hazard_contact();
        let events = s.frame(PlayerInput::default(), 500.0);
        assert_eq!(events, vec![FrameEvent::Respawned]);
    }
}
