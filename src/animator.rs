use crate::error::Result;
use crate::field::ParticleField;
use crate::surface::Surface;

/// Owns a particle field and the surface it draws on, and advances them one
/// frame at a time for whatever scheduler hosts it.
pub struct Animator<S: Surface> {
    field: ParticleField,
    surface: S,
    running: bool,
    frames: u64,
}

impl<S: Surface> Animator<S> {
    pub fn new(field: ParticleField, surface: S) -> Animator<S> {
        Animator {
            field,
            surface,
            running: true,
            frames: 0,
        }
    }

    /// Runs one frame. Returns whether the host should schedule another.
    ///
    /// A stopped animator draws nothing and always returns `false`.
    pub fn advance_frame(&mut self) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }
        self.frames += 1;
        self.field.tick(&mut self.surface)?;
        Ok(true)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.surface.resize(width, height)?;
        self.field.resize(width, height);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
