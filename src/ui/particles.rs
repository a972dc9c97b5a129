// SafetyBoard - ui/particles.rs
//
// Decorative drifting-particle background.
//
// Self-contained: owns its own particles and random source, and shares no
// state with the incident store, theme, or view-model. Stepped once per
// frame by the GUI while enabled.

use crate::core::colour::Colour;
use crate::util::constants;
use rand::Rng;

/// One background particle, in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
    pub colour: Colour,
}

/// A rectangular field of drifting particles that wrap at the edges.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Scatter `count` particles uniformly over a `width` x `height` field.
    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let palette: Vec<Colour> = constants::PARTICLE_COLOURS
            .iter()
            .filter_map(|hex| Colour::from_hex(hex))
            .collect();
        let speed = constants::PARTICLE_MAX_SPEED;

        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * height,
                vx: (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                vy: (rng.gen::<f32>() - 0.5) * 2.0 * speed,
                radius: rng.gen::<f32>() * constants::PARTICLE_MAX_RADIUS,
                opacity: rng.gen::<f32>() * constants::PARTICLE_MAX_OPACITY,
                colour: if palette.is_empty() {
                    Colour::rgb(255, 255, 255)
                } else {
                    palette[rng.gen_range(0..palette.len())]
                },
            })
            .collect();

        tracing::debug!(count, width, height, "Particle field created");
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Change the field size. Particles left outside the new bounds wrap
    /// back in on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by its velocity, wrapping across edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 {
                p.x = w;
            } else if p.x > w {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = h;
            } else if p.y > h {
                p.y = 0.0;
            }
        }
    }

    /// Paint the particles into `rect`, resizing the field to match it.
    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect) {
        if (rect.width(), rect.height()) != self.size() {
            self.resize(rect.width(), rect.height());
        }
        for p in &self.particles {
            let alpha = (p.opacity * 255.0).round() as u8;
            let colour = crate::ui::theme::to_color32(p.colour.with_alpha(alpha));
            painter.circle_filled(
                rect.min + egui::vec2(p.x, p.y),
                p.radius * constants::PARTICLE_DRAW_SCALE,
                colour,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(count: usize) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(42);
        ParticleField::new(&mut rng, count, 200.0, 100.0)
    }

    #[test]
    fn test_particles_within_generation_bounds() {
        let f = field(80);
        assert_eq!(f.particles().len(), 80);
        for p in f.particles() {
            assert!((0.0..=200.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
            assert!(p.radius >= 0.0 && p.radius < constants::PARTICLE_MAX_RADIUS);
            assert!(p.opacity >= 0.0 && p.opacity < constants::PARTICLE_MAX_OPACITY);
            assert!(p.vx.abs() <= constants::PARTICLE_MAX_SPEED);
            assert!(p.vy.abs() <= constants::PARTICLE_MAX_SPEED);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(field(10).particles(), field(10).particles());
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut f = field(1);
        f.particles[0] = Particle {
            x: 50.0,
            y: 50.0,
            vx: 0.05,
            vy: -0.05,
            ..f.particles[0]
        };
        f.step();
        let p = f.particles()[0];
        assert!((p.x - 50.05).abs() < 1e-4);
        assert!((p.y - 49.95).abs() < 1e-4);
    }

    #[test]
    fn test_step_wraps_at_edges() {
        let mut f = field(2);
        f.particles[0] = Particle {
            x: 0.01,
            y: 99.99,
            vx: -0.05,
            vy: 0.05,
            ..f.particles[0]
        };
        f.particles[1] = Particle {
            x: 199.99,
            y: 0.01,
            vx: 0.05,
            vy: -0.05,
            ..f.particles[1]
        };
        f.step();
        assert_eq!((f.particles()[0].x, f.particles()[0].y), (200.0, 0.0));
        assert_eq!((f.particles()[1].x, f.particles()[1].y), (0.0, 100.0));
    }

    #[test]
    fn test_shrink_then_step_rewraps() {
        let mut f = field(1);
        f.particles[0] = Particle {
            x: 150.0,
            y: 20.0,
            vx: 0.01,
            vy: 0.0,
            ..f.particles[0]
        };
        f.resize(100.0, 100.0);
        f.step();
        assert_eq!(f.particles()[0].x, 0.0);
    }

    #[test]
    fn test_empty_field() {
        let mut f = field(0);
        f.step();
        assert!(f.particles().is_empty());
    }
}
