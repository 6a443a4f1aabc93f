// Logging setup shared by the wasm entry and the native demo
pub mod logging;

// MVC Architecture
pub mod model;
pub mod controller;

pub use controller::{FrameEvent, GameSession, LandingOutcome, PlayerController, PlayerInput};
pub use model::{Animation, ArcadeBody, PlayerBody, PlayerConfig, PlayerState};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing::{debug, error, info};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
    use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent, Window};

    use crate::controller::input::{self, InputEvent, InputProcessor, InputState, Viewport};
    use crate::controller::{GameSession, LoggingHost};
    use crate::logging;
    use crate::model::{ArcadeBody, PlayerConfig};

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        logging::init();

        let window = web_sys::window().ok_or(js_error("no global `window`"))?;
        let input_state = Rc::new(RefCell::new(InputState::new(window_viewport(&window))));
        setup_input_listeners(&window, input_state.clone())?;

        let config = PlayerConfig::default();
        let body = ArcadeBody::new(config.spawn, config.max_speed);
        let mut session = GameSession::new(config, body, LoggingHost::default(), LoggingHost::default());
        let processor = InputProcessor::default();
        info!("session started");

        let performance = window.performance().ok_or(js_error("no performance on window"))?;
        let mut last_time = performance.now();
        let f = RcCellCallback::new(window.clone(), move || {
            let now = performance.now();
            let dt_ms = (now - last_time).clamp(0.0, 100.0) as f32;
            last_time = now;

            let intent = processor.sample(&input_state.borrow());
            for event in session.tick(intent, dt_ms) {
                debug!(?event, frame = session.frame_count(), "frame event");
            }
        });
        f.start()
    }

    fn window_viewport(window: &Window) -> Viewport {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        Viewport::from_window(w as f32, h as f32)
    }

    /// Attach `f` to `name` events on `target`, ignoring events of another type
    fn listen<E: JsCast + 'static>(
        target: &EventTarget,
        name: &str,
        mut f: impl FnMut(E) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                f(e);
            }
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Keyboard, mouse, touch and window listeners feeding the shared input state
    fn setup_input_listeners(window: &Window, input_state: Rc<RefCell<InputState>>) -> Result<(), JsValue> {
        let document = window.document().ok_or(js_error("no document on window"))?;
        let processor = InputProcessor::default();

        // Keyboard
        {
            let input_state = input_state.clone();
            listen(&document, "keydown", move |e: KeyboardEvent| {
                if processor.is_game_key(&e.key()) {
                    e.prevent_default();
                }
                input_state.borrow_mut().process_event(&input::wasm::keyboard_event_to_input(&e, true));
            })?;
        }
        {
            let input_state = input_state.clone();
            listen(&document, "keyup", move |e: KeyboardEvent| {
                input_state.borrow_mut().process_event(&input::wasm::keyboard_event_to_input(&e, false));
            })?;
        }

        // Mouse acts as a single pointer
        for name in ["mousedown", "mousemove", "mouseup"] {
            let input_state = input_state.clone();
            listen(&document, name, move |e: MouseEvent| {
                input_state.borrow_mut().process_event(&input::wasm::mouse_event_to_input(&e));
            })?;
        }

        // Touch: only the first finger counts
        for name in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            let input_state = input_state.clone();
            listen(&document, name, move |e: TouchEvent| {
                e.prevent_default();
                input_state.borrow_mut().process_event(&input::wasm::touch_event_to_input(&e));
            })?;
        }

        // Focus loss / tab hidden - release everything
        {
            let input_state = input_state.clone();
            listen(window, "blur", move |_e: Event| {
                input_state.borrow_mut().process_event(&InputEvent::FocusLost);
            })?;
        }
        {
            let input_state = input_state.clone();
            let doc = document.clone();
            listen(&document, "visibilitychange", move |_e: Event| {
                let visible = !doc.hidden();
                input_state.borrow_mut().process_event(&InputEvent::VisibilityChanged { visible });
            })?;
        }

        // Resize moves the touch zone midlines
        {
            let win = window.clone();
            listen(window, "resize", move |_e: Event| {
                let viewport = window_viewport(&win);
                input_state.borrow_mut().process_event(&InputEvent::Resize {
                    width: viewport.width,
                    height: viewport.height,
                });
            })?;
        }

        Ok(())
    }

    fn js_error<E: Into<String>>(msg: E) -> JsValue {
        JsValue::from_str(&msg.into())
    }

    struct RcCellCallback {
        inner: Rc<RefCell<Box<dyn FnMut()>>>,
        window: Window,
    }

    impl RcCellCallback {
        fn new(window: Window, f: impl FnMut() + 'static) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Box::new(f))),
                window,
            }
        }

        fn start(self) -> Result<(), JsValue> {
            let inner = self.inner.clone();
            let window = self.window.clone();

            let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
            let callback_clone = callback.clone();

            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                inner.borrow_mut().as_mut()();

                // Recursively schedule next frame
                let cb_ref = callback_clone.borrow();
                if let Some(cb) = cb_ref.as_ref() {
                    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        error!(?e, "requestAnimationFrame failed");
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(cb) = callback.borrow().as_ref() {
                self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            }

            // Leak the closure to keep it alive
            std::mem::forget(callback);
            Ok(())
        }
    }
}
