// Simple particle struct to keep track of individual position, velocity, size and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, opacity: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
            color,
        }
    }

    // Random particle somewhere inside a width x height surface
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        width: f64,
        height: f64,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let opacity =
            rng.gen::<f64>() * (config.max_opacity - config.min_opacity) + config.min_opacity;
        let color = config.palette[rng.gen_range(0, config.palette.len())];

        Particle::new(
            [wrap(pos_x, width), wrap(pos_y, height)],
            [vel_x, vel_y],
            radius,
            opacity,
            color,
        )
    }

    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] = wrap(self.pos[0] + self.vel[0], width);
        self.pos[1] = wrap(self.pos[1] + self.vel[1], height);
    }
}

/// Wraps `value` into `[0, extent)`, leaving in-range values untouched.
///
/// A degenerate extent (zero, negative or NaN) collapses the axis to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !(extent > 0.0) {
        return 0.0;
    }
    if value >= 0.0 && value < extent {
        return value;
    }
    let wrapped = if value >= extent && value < extent * 2.0 {
        value - extent
    } else if value < 0.0 && value >= -extent {
        value + extent
    } else {
        value.rem_euclid(extent)
    };
    // -1e-20 + extent rounds to extent
    if wrapped >= extent || wrapped.is_nan() {
        0.0
    } else {
        wrapped
    }
}
