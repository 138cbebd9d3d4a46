// Tunable constants for a particle field. The defaults are the landing page background.

use crate::color::Color;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Per-axis velocity bound, in units per frame.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Each particle picks one of these with equal probability.
    pub palette: Vec<Color>,
    /// Pairs closer than this get a connection line.
    pub link_distance: f64,
    /// Opacity of a connection between two coincident particles.
    pub max_link_opacity: f64,
    pub link_width: f64,
    pub link_color: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 80;
    pub const MAX_SPEED: f64 = 0.15;
    pub const LINK_DISTANCE: f64 = 120.0;
    pub const MAX_LINK_OPACITY: f64 = 0.06;
    pub const LINK_WIDTH: f64 = 0.5;

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_owned()));

        if !(self.max_speed >= 0.0) {
            return invalid("max_speed must be non-negative");
        }
        if !(self.min_radius > 0.0) || !(self.min_radius <= self.max_radius) {
            return invalid("radius range must be positive with min <= max");
        }
        let opacity_ok = |o: f64| o > 0.0 && o <= 1.0;
        if !opacity_ok(self.min_opacity)
            || !opacity_ok(self.max_opacity)
            || self.min_opacity > self.max_opacity
        {
            return invalid("opacity range must lie in (0, 1] with min <= max");
        }
        if self.palette.is_empty() {
            return invalid("palette must hold at least one color");
        }
        if !(self.link_distance > 0.0) {
            return invalid("link_distance must be positive");
        }
        if !(0.0..=1.0).contains(&self.max_link_opacity) {
            return invalid("max_link_opacity must lie in [0, 1]");
        }
        if !(self.link_width > 0.0) {
            return invalid("link_width must be positive");
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            max_speed: FieldConfig::MAX_SPEED,
            min_radius: 0.5,
            max_radius: 2.0,
            min_opacity: 0.1,
            max_opacity: 0.5,
            palette: vec![Color::VIOLET, Color::TEAL],
            link_distance: FieldConfig::LINK_DISTANCE,
            max_link_opacity: FieldConfig::MAX_LINK_OPACITY,
            link_width: FieldConfig::LINK_WIDTH,
            link_color: Color::VIOLET,
        }
    }
}
