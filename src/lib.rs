//! Ambient particle-field background for the automata landing page.
//!
//! A fixed set of translucent particles drifts across a canvas, wrapping at
//! the edges, with faint lines drawn between any two that come close. The
//! simulation ([`ParticleField`], [`Animator`]) only talks to a [`Surface`], so
//! it runs the same against a browser canvas or a test recorder.

mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod renderer;
pub mod surface;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animator::Animator;
pub use color::Color;
pub use config::FieldConfig;
pub use error::Error;
pub use field::{link_opacity, Link, ParticleField};
pub use frame_loop::FrameLoop;
pub use particle::Particle;
pub use renderer::CanvasRenderer;
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// The running background, as handed to JavaScript.
#[wasm_bindgen]
pub struct ParticleBackground {
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Sizes the canvas with id `canvas_id` to the viewport and starts animating it.
    pub fn start(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        let mut rng = rand::thread_rng();
        Ok(ParticleBackground {
            frame_loop: launch(canvas_id, &mut rng)?,
        })
    }

    /// Same as `start`, with a reproducible particle layout.
    pub fn start_with_seed(
        canvas_id: &str,
        seed: u32,
    ) -> Result<ParticleBackground, JsValue> {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        Ok(ParticleBackground {
            frame_loop: launch(canvas_id, &mut rng)?,
        })
    }

    pub fn stop(&mut self) {
        if self.frame_loop.is_running() {
            console::log_1(
                &format!(
                    "particle field stopped after {} frames",
                    self.frame_loop.frames()
                )
                .into(),
            );
        }
        self.frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn frames(&self) -> f64 {
        self.frame_loop.frames() as f64
    }
}

fn launch<R: Rng + ?Sized>(canvas_id: &str, rng: &mut R) -> error::Result<FrameLoop> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoWindow)?;
    let renderer = CanvasRenderer::from_element_id(&document, canvas_id)?;

    let (width, height) = frame_loop::viewport_size(&window);
    let field = ParticleField::new(width, height, FieldConfig::default(), rng)?;
    let count = field.len();
    let mut animator = Animator::new(field, renderer);
    animator.resize(width, height)?;

    console::log_1(
        &format!(
            "particle field started: {} particles on {}x{}",
            count, width, height
        )
        .into(),
    );
    FrameLoop::start(window, animator)
}
