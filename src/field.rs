//! The particle field: a fixed set of drifting particles plus the proximity
//! links drawn between them.

use rand::Rng;
use vecmath::{vec2_len, vec2_sub};

use crate::config::FieldConfig;
use crate::error::Result;
use crate::particle::Particle;
use crate::surface::Surface;

/// A connection between two particles closer than the link distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub opacity: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Populates `config.particle_count` particles inside a `width` x `height` surface.
    pub fn new<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<ParticleField> {
        config.validate()?;
        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::spawn(rng, &config, width, height));
        }

        Ok(ParticleField {
            width,
            height,
            config,
            particles,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Updates the surface dimensions. Particles are left where they are; any
    /// that end up outside the new bounds wrap back in on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Moves every particle by its velocity, wrapping at the edges.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// All pairs `(i, j)` with `i < j` closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        let config = &self.config;
        (0..particles.len()).flat_map(move |i| {
            (i + 1..particles.len()).filter_map(move |j| {
                let distance = vec2_len(vec2_sub(particles[i].pos, particles[j].pos));
                if distance < config.link_distance {
                    Some(Link {
                        from: i,
                        to: j,
                        distance,
                        opacity: link_opacity(
                            distance,
                            config.link_distance,
                            config.max_link_opacity,
                        ),
                    })
                } else {
                    None
                }
            })
        })
    }

    /// One frame: clear, move and draw each particle, then draw the links.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.clear(self.width, self.height)?;

        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
            surface.fill_circle(particle.pos, particle.radius, particle.color, particle.opacity)?;
        }

        self.draw_links(surface)
    }

    /// Draws the current state without moving anything.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.clear(self.width, self.height)?;
        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.radius, particle.color, particle.opacity)?;
        }
        self.draw_links(surface)
    }

    fn draw_links<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.from].pos,
                self.particles[link.to].pos,
                self.config.link_width,
                self.config.link_color,
                link.opacity,
            )?;
        }
        Ok(())
    }
}

/// Opacity of a link between particles `distance` apart: `max_opacity` at 0,
/// falling linearly to 0 at `link_distance` and beyond.
pub fn link_opacity(distance: f64, link_distance: f64, max_opacity: f64) -> f64 {
    if distance >= link_distance {
        0.0
    } else {
        max_opacity * (1.0 - distance / link_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_with(positions: &[[f64; 2]]) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(1);
        let config = FieldConfig {
            particle_count: positions.len(),
            ..FieldConfig::default()
        };
        let mut field = ParticleField::new(800.0, 600.0, config, &mut rng).unwrap();
        for (particle, pos) in field.particles.iter_mut().zip(positions) {
            *particle = Particle::new(*pos, [0.0, 0.0], 1.0, 0.2, Color::TEAL);
        }
        field
    }

    #[test]
    fn link_opacity_falls_off_linearly() {
        assert_eq!(link_opacity(120.0, 120.0, 0.06), 0.0);
        assert_eq!(link_opacity(500.0, 120.0, 0.06), 0.0);
        assert!((link_opacity(60.0, 120.0, 0.06) - 0.03).abs() < 1e-12);
        assert!((link_opacity(0.0, 120.0, 0.06) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn links_only_pairs_within_distance() {
        let field = field_with(&[[0.0, 0.0], [60.0, 0.0], [300.0, 300.0], [0.0, 120.0]]);
        let links: Vec<Link> = field.links().collect();

        assert_eq!(links.len(), 1);
        assert_eq!((links[0].from, links[0].to), (0, 1));
        assert!((links[0].distance - 60.0).abs() < 1e-12);
        assert!((links[0].opacity - 0.03).abs() < 1e-12);
    }

    #[test]
    fn links_cover_every_unordered_pair_once() {
        let field = field_with(&[[10.0, 10.0], [11.0, 10.0], [10.0, 11.0], [11.0, 11.0]]);
        let pairs: Vec<(usize, usize)> = field.links().map(|l| (l.from, l.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn resize_keeps_particles_in_place() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::default(), &mut rng).unwrap();
        let before = field.particles().to_vec();

        field.resize(1024.0, 768.0);
        field.resize(1024.0, 768.0);

        assert_eq!((field.width(), field.height()), (1024.0, 768.0));
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn shrinking_wraps_particles_back_in_on_next_step() {
        let mut field = field_with(&[[700.0, 500.0], [10.0, 10.0]]);
        field.resize(300.0, 200.0);
        field.step();

        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 300.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 200.0);
        }
        assert_eq!(field.particles()[0].pos, [100.0, 100.0]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = FieldConfig {
            palette: Vec::new(),
            ..FieldConfig::default()
        };
        assert!(ParticleField::new(800.0, 600.0, config, &mut rng).is_err());
    }
}
