use crate::color::Color;
use crate::error::Result;

/// A 2D drawing target the particle field renders onto.
///
/// The browser implementation is [`CanvasRenderer`](crate::renderer::CanvasRenderer);
/// tests record the calls instead.
pub trait Surface {
    /// Called when the viewport changes size, before the next frame.
    fn resize(&mut self, _width: f64, _height: f64) -> Result<()> {
        Ok(())
    }

    /// Wipes the region `[0, width) x [0, height)`.
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, alpha: f64)
        -> Result<()>;

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        (**self).resize(width, height)
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        (**self).clear(width, height)
    }

    fn fill_circle(
        &mut self,
        center: [f64; 2],
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<()> {
        (**self).fill_circle(center, radius, color, alpha)
    }

    fn stroke_line(
        &mut self,
        from: [f64; 2],
        to: [f64; 2],
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<()> {
        (**self).stroke_line(from, to, width, color, alpha)
    }
}
