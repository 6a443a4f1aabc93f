//! Platform-agnostic input handling: keyboard plus a single touch pointer
use std::collections::HashSet;
use crate::controller::player_controller::PlayerInput;

/// Largest playfield the touch zones are computed against
pub const MAX_VIEWPORT: (f32, f32) = (1024.0, 768.0);

/// Single-character keys are stored lowercase so that a Shift released
/// before the letter still releases it ("A" down, "a" up).
pub fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Map a DOM mouse event type to a pointer event. Only `mouseup` releases,
/// whatever other buttons are still held.
pub fn pointer_event(kind: &str, x: f32, y: f32) -> InputEvent {
    match kind {
        "mousedown" => InputEvent::PointerDown { x, y },
        "mouseup" => InputEvent::PointerUp,
        _ => InputEvent::PointerMove { x, y },
    }
}

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    // Keyboard events
    KeyDown(String),
    KeyUp(String),

    // Pointer (mouse or first touch) events, viewport coordinates
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,

    // Window events
    FocusLost,
    VisibilityChanged { visible: bool },
    Resize { width: f32, height: f32 },
}

/// Playfield size used for the touch zone split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Clamp a window size to the maximum playfield
    pub fn from_window(width: f32, height: f32) -> Self {
        Self {
            width: width.min(MAX_VIEWPORT.0),
            height: height.min(MAX_VIEWPORT.1),
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_window(800.0, 600.0)
    }
}

pub struct InputState {
    pub pressed_keys: HashSet<String>,
    /// Position of the active pointer while it is held down
    pub pointer: Option<(f32, f32)>,
    pub viewport: Viewport,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pointer: None,
            viewport,
        }
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(normalize_key(key));
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(&normalize_key(key));
            }
            InputEvent::PointerDown { x, y } => {
                self.pointer = Some((*x, *y));
            }
            InputEvent::PointerMove { x, y } => {
                // dragging only matters while held
                if self.pointer.is_some() {
                    self.pointer = Some((*x, *y));
                }
            }
            InputEvent::PointerUp => {
                self.pointer = None;
            }
            InputEvent::FocusLost | InputEvent::VisibilityChanged { .. } => {
                self.clear();
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport::from_window(*width, *height);
            }
        }
    }

    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.pressed_keys.contains(&normalize_key(key))
    }

    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.pointer = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

/// Key mapping configuration. Each action accepts any of its keys; letters
/// match regardless of case.
#[derive(Clone)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |ks: &[&str]| -> Vec<String> { ks.iter().map(|k| k.to_string()).collect() };
        Self {
            left: keys(&["ArrowLeft", "a"]),
            right: keys(&["ArrowRight", "d"]),
            jump: keys(&["ArrowUp", "w", " "]),
        }
    }
}

/// Turns raw input state into per-frame movement intent
#[derive(Clone)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    fn any_pressed(input: &InputState, keys: &[String]) -> bool {
        keys.iter().any(|k| input.is_key_pressed(k))
    }

    pub fn is_pressing_left(&self, input: &InputState) -> bool {
        Self::any_pressed(input, &self.bindings.left)
            || input.pointer.is_some_and(|(x, _)| x <= input.viewport.half_width())
    }

    pub fn is_pressing_right(&self, input: &InputState) -> bool {
        Self::any_pressed(input, &self.bindings.right)
            || input.pointer.is_some_and(|(x, _)| x > input.viewport.half_width())
    }

    pub fn is_pressing_jump(&self, input: &InputState) -> bool {
        Self::any_pressed(input, &self.bindings.jump)
            || input.pointer.is_some_and(|(_, y)| y < input.viewport.half_height())
    }

    pub fn sample(&self, input: &InputState) -> PlayerInput {
        PlayerInput {
            press_left: self.is_pressing_left(input),
            press_right: self.is_pressing_right(input),
            press_jump: self.is_pressing_jump(input),
        }
    }

    /// Keys the page should not scroll on
    pub fn is_game_key(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.bindings
            .left
            .iter()
            .chain(&self.bindings.right)
            .chain(&self.bindings.jump)
            .any(|k| normalize_key(k) == key)
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

pub mod wasm {
    use super::*;
    use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

    pub fn keyboard_event_to_input(e: &KeyboardEvent, is_down: bool) -> InputEvent {
        let key = e.key();
        if is_down {
            InputEvent::KeyDown(key)
        } else {
            InputEvent::KeyUp(key)
        }
    }

    pub fn mouse_event_to_input(e: &MouseEvent) -> InputEvent {
        pointer_event(&e.type_(), e.client_x() as f32, e.client_y() as f32)
    }

    /// First touch point, or a release when no fingers remain
    pub fn touch_event_to_input(e: &TouchEvent) -> InputEvent {
        match e.touches().get(0) {
            Some(t) => InputEvent::PointerDown {
                x: t.client_x() as f32,
                y: t.client_y() as f32,
            },
            None => InputEvent::PointerUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(x: f32, y: f32) -> InputState {
        let mut state = InputState::new(Viewport::from_window(800.0, 600.0));
        state.process_event(&InputEvent::PointerDown { x, y });
        state
    }

    #[test]
    fn test_keyboard_maps_to_intent() {
        let processor = InputProcessor::default();
        let mut state = InputState::default();
        state.process_event(&InputEvent::KeyDown("ArrowLeft".into()));
        state.process_event(&InputEvent::KeyDown(" ".into()));
        let input = processor.sample(&state);
        assert!(input.press_left);
        assert!(input.press_jump);
        assert!(!input.press_right);

        state.process_event(&InputEvent::KeyUp("ArrowLeft".into()));
        assert!(!processor.sample(&state).press_left);
    }

    #[test]
    fn test_shift_released_before_letter() {
        let processor = InputProcessor::default();
        let mut state = InputState::default();
        state.process_event(&InputEvent::KeyDown("A".into()));
        assert!(processor.sample(&state).press_left);

        state.process_event(&InputEvent::KeyUp("a".into()));
        assert!(!processor.sample(&state).press_left, "Left should release after Shift+A");
        assert!(state.pressed_keys.is_empty());
    }

    #[test]
    fn test_named_keys_keep_their_case() {
        assert_eq!(normalize_key("ArrowLeft"), "ArrowLeft");
        assert_eq!(normalize_key("W"), "w");
        assert_eq!(normalize_key(" "), " ");
    }

    #[test]
    fn test_mouseup_releases_even_with_buttons_held() {
        let mut state = InputState::default();
        state.process_event(&pointer_event("mousedown", 100.0, 500.0));
        state.process_event(&pointer_event("mousemove", 120.0, 500.0));
        assert_eq!(state.pointer, Some((120.0, 500.0)));

        state.process_event(&pointer_event("mouseup", 120.0, 500.0));
        assert!(state.pointer.is_none());
    }

    #[test]
    fn test_touch_zones() {
        let processor = InputProcessor::default();

        let bottom_left = processor.sample(&touch(100.0, 500.0));
        assert_eq!(bottom_left, PlayerInput { press_left: true, press_right: false, press_jump: false });

        let top_right = processor.sample(&touch(700.0, 100.0));
        assert_eq!(top_right, PlayerInput { press_left: false, press_right: true, press_jump: true });

        // The midline belongs to the left half
        assert!(processor.sample(&touch(400.0, 300.0)).press_left);
        assert!(!processor.sample(&touch(400.0, 300.0)).press_jump);
    }

    #[test]
    fn test_viewport_is_clamped() {
        let mut state = InputState::default();
        state.process_event(&InputEvent::Resize { width: 1920.0, height: 1080.0 });
        assert_eq!(state.viewport, Viewport { width: 1024.0, height: 768.0 });
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let processor = InputProcessor::default();
        let mut state = touch(100.0, 100.0);
        state.process_event(&InputEvent::KeyDown("d".into()));
        state.process_event(&InputEvent::FocusLost);
        assert_eq!(processor.sample(&state), PlayerInput::default());
    }

    #[test]
    fn test_pointer_move_without_press_is_ignored() {
        let mut state = InputState::default();
        state.process_event(&InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert!(state.pointer.is_none());
    }

    #[test]
    fn test_unknown_keys_are_not_game_keys() {
        let processor = InputProcessor::default();
        assert!(processor.is_game_key("ArrowUp"));
        assert!(processor.is_game_key("W"), "Shifted letters still block scrolling");
        assert!(!processor.is_game_key("Tab"));
    }
}
