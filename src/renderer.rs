// Canvas 2d renderer. Grabs the 2d context from a canvas on the DOM and turns
// surface calls into path/fill/stroke calls on it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::surface::Surface;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasRenderer> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| Error::ContextUnavailable)?
            .ok_or(Error::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::ContextUnavailable)?;

        Ok(CanvasRenderer { canvas, context })
    }

    pub fn from_element_id(document: &Document, id: &str) -> Result<CanvasRenderer> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| Error::CanvasNotFound(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::CanvasNotFound(id.to_owned()))?;

        CanvasRenderer::new(canvas)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasRenderer {
    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<()> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)
            .map_err(Error::draw)?;
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_rgba(alpha)));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<()> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_rgba(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }
}
