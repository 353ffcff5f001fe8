use crate::collision;
use crate::config::Config;
use crate::particle::Particle;
use crate::proximity;
use crate::surface::Surface;
use rand::Rng;
use sdl2::pixels::Color;

/// Translucent near-black laid over the previous frame, leaving motion trails.
pub const FADE_COLOR: Color = Color::RGBA(10, 10, 20, 26);

/// What one frame did, for trace logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub connections: usize,
    pub collisions: usize,
}

/// The simulation context: surface bounds, configuration and the particle
/// sequence, in insertion order.
pub struct Field {
    width: f32,
    height: f32,
    pub(crate) config: Config,
    pub(crate) particles: Vec<Particle>,
}

impl Field {
    pub fn new<R: Rng>(width: f32, height: f32, config: Config, rng: &mut R) -> Field {
        let mut field = Field {
            width,
            height,
            config,
            particles: Vec::new(),
        };
        field.reinitialize(rng);
        field
    }

    pub fn bounds(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    pub fn config(&self) -> &Config {
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

    pub(crate) fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Discards every particle and samples `particle_count` fresh ones.
    pub fn reinitialize<R: Rng>(&mut self, rng: &mut R) {
        let bounds = self.bounds();
        let config = &self.config;
        self.particles = (0..config.particle_count)
            .map(|_| Particle::new(None, bounds, config, rng))
            .collect();
        log::info!(
            "field reinitialised with {} particles in {}x{}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    /// Appends `particle`, evicting the oldest one if the sequence now
    /// exceeds `particle_count`. Returns the evicted particle.
    pub fn push(&mut self, particle: Particle) -> Option<Particle> {
        self.particles.push(particle);
        if self.particles.len() > self.config.particle_count {
            let evicted = self.particles.remove(0);
            log::debug!("evicted oldest particle at {:?}", evicted.position);
            return Some(evicted);
        }
        None
    }

    /// Runs one frame: fade, connections, integrate and draw, collisions.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let bounds = self.bounds();
        surface.fill_rect([0.0, 0.0], bounds, FADE_COLOR);

        let connections =
            proximity::draw_connections(&self.particles, self.config.connection_distance, surface);

        for particle in self.particles.iter_mut() {
            particle.integrate(bounds);
            particle.draw(surface);
        }

        let collisions = collision::resolve_all(&mut self.particles);

        let stats = FrameStats {
            connections,
            collisions,
        };
        log::trace!("frame: {stats:?}");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn new_field_is_populated() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let field = Field::new(400.0, 300.0, Config::default(), &mut rng);
        assert_eq!(field.len(), 50);
        assert_eq!(field.bounds(), [400.0, 300.0]);
    }

    #[test]
    fn empty_config_gives_empty_field() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let config = Config {
            particle_count: 0,
            ..Config::default()
        };
        let mut field = Field::new(400.0, 300.0, config, &mut rng);
        assert!(field.is_empty());
        let extra = Particle::new(Some([1.0, 1.0]), field.bounds(), &Config::default(), &mut rng);
        // a bound of zero evicts the new particle straight away
        assert_eq!(field.push(extra.clone()), Some(extra));
        assert!(field.is_empty());
    }

    #[test]
    fn push_below_bound_keeps_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let config = Config {
            particle_count: 3,
            ..Config::default()
        };
        let mut field = Field::new(100.0, 100.0, config.clone(), &mut rng);
        field.particles.truncate(1);
        let p = Particle::new(Some([5.0, 5.0]), field.bounds(), &config, &mut rng);
        assert_eq!(field.push(p), None);
        assert_eq!(field.len(), 2);
    }
}
