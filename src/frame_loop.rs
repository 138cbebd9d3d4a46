// Browser host for an animator: drives it from requestAnimationFrame and
// feeds window resizes into it until stopped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, Window};

use crate::animator::Animator;
use crate::error::{Error, Result};
use crate::renderer::CanvasRenderer;
#[cfg(feature = "frame-timing")]
use crate::utils::Timer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameLoop {
    window: Window,
    animator: Rc<RefCell<Animator<CanvasRenderer>>>,
    tick: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

impl FrameLoop {
    pub fn start(window: Window, animator: Animator<CanvasRenderer>) -> Result<FrameLoop> {
        let animator = Rc::new(RefCell::new(animator));
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let on_resize = {
            let animator = animator.clone();
            let window = window.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let (width, height) = viewport_size(&window);
                console::debug_1(&format!("particle field resized to {}x{}", width, height).into());
                if let Err(err) = animator.borrow_mut().resize(width, height) {
                    console::error_1(&err.into());
                }
            })
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(Error::scheduler)?;

        {
            let animator = animator.clone();
            let window = window.clone();
            let next = tick.clone();
            let pending = pending.clone();
            *tick.borrow_mut() = Some(Closure::new(move || {
                pending.set(None);
                let keep_going = {
                    #[cfg(feature = "frame-timing")]
                    let _timer = Timer::new("ParticleField::tick");
                    match animator.borrow_mut().advance_frame() {
                        Ok(keep_going) => keep_going,
                        Err(err) => {
                            // a bad frame is not fatal, try again next refresh
                            console::error_1(&err.into());
                            true
                        }
                    }
                };
                if !keep_going {
                    return;
                }
                if let Some(callback) = next.borrow().as_ref() {
                    match request_animation_frame(&window, callback) {
                        Ok(handle) => pending.set(Some(handle)),
                        Err(err) => console::error_1(&err.into()),
                    }
                }
            }));
        }

        let handle = match tick.borrow().as_ref() {
            Some(callback) => request_animation_frame(&window, callback)?,
            None => return Err(Error::Scheduler("frame callback missing".to_owned())),
        };
        pending.set(Some(handle));

        Ok(FrameLoop {
            window,
            animator,
            tick,
            pending,
            on_resize: Some(on_resize),
        })
    }

    /// Stops the animator, cancels the pending frame and detaches the resize
    /// listener. Safe to call more than once.
    pub fn stop(&mut self) {
        self.animator.borrow_mut().stop();
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }

    pub fn frames(&self) -> u64 {
        self.animator.borrow().frames()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Current `innerWidth` x `innerHeight` of the window, 0 where unavailable.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let read = |value: std::result::Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

fn request_animation_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Result<i32> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(Error::scheduler)
}
