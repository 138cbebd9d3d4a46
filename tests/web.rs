//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use automata_particles::{CanvasRenderer, ParticleBackground, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn renderer_resizes_canvas_element() {
    let canvas = mount_canvas("renderer-resize");
    let mut renderer = CanvasRenderer::new(canvas).unwrap();

    renderer.resize(320.0, 200.0).unwrap();

    assert_eq!(renderer.canvas().width(), 320);
    assert_eq!(renderer.canvas().height(), 200);
    renderer.clear(320.0, 200.0).unwrap();
    renderer
        .fill_circle([10.0, 10.0], 2.0, automata_particles::Color::TEAL, 0.4)
        .unwrap();
}

#[wasm_bindgen_test]
fn background_starts_and_stops() {
    mount_canvas("particles");
    let mut background = ParticleBackground::start_with_seed("particles", 7).unwrap();
    assert!(background.is_running());

    background.stop();
    assert!(!background.is_running());
    background.stop();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(ParticleBackground::start("no-such-canvas").is_err());
}
