//! The particle collection.
//!
//! The field is sized from the surface area on every regeneration and then
//! keeps that length: a particle leaving through the top is replaced in its
//! own slot, never removed.

use rand::Rng;

use crate::config::BackgroundConfig;
use crate::particle::{Particle, SpawnPlacement};

/// Ordered collection of particles for one surface size.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    config: BackgroundConfig,
    width: u32,
    height: u32,
}

impl ParticleField {
    /// Creates an empty field. It stays empty until the first regeneration.
    #[must_use]
    pub fn new(config: BackgroundConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
            width: 0,
            height: 0,
        }
    }

    /// Particle count for a surface: `floor(width * height / divisor)`.
    #[must_use]
    pub fn target_count(width: u32, height: u32, divisor: u32) -> usize {
        let area = u64::from(width) * u64::from(height);
        usize::try_from(area / u64::from(divisor.max(1))).unwrap_or(usize::MAX)
    }

    /// Discards every particle and scatters a new set over `width` x `height`.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, width: u32, height: u32, rng: &mut R) {
        self.width = width;
        self.height = height;

        let count = Self::target_count(width, height, self.config.density_divisor);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(
                &self.config,
                width,
                height,
                SpawnPlacement::Scattered,
                rng,
            ));
        }
    }

    /// Draws one new particle for the current surface size.
    pub fn spawn<R: Rng + ?Sized>(&self, placement: SpawnPlacement, rng: &mut R) -> Particle {
        Particle::spawn(&self.config, self.width, self.height, placement, rng)
    }

    /// Moves every particle one frame and respawns the ones past the exit line.
    ///
    /// Returns how many were respawned.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let config = &self.config;
        let (width, height) = (self.width, self.height);
        let mut respawned = 0;

        for particle in &mut self.particles {
            particle.advance(config.rotation_step);
            if particle.y < config.exit_line {
                *particle =
                    Particle::spawn(config, width, height, SpawnPlacement::BelowBottom, rng);
                respawned += 1;
            }
        }
        respawned
    }

    /// Particles in draw order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particles. The length cannot change through it.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true before the first regeneration or on a tiny surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface size the field was generated for.
    #[must_use]
    pub fn extent(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_target_count() {
        assert_eq!(ParticleField::target_count(800, 600, 26_000), 18);
        assert_eq!(ParticleField::target_count(400, 300, 26_000), 4);
        assert_eq!(ParticleField::target_count(0, 600, 26_000), 0);
        assert_eq!(ParticleField::target_count(1920, 1080, 26_000), 79);
    }

    #[test]
    fn test_starts_empty() {
        let field = ParticleField::new(BackgroundConfig::default());
        assert!(field.is_empty());
        assert_eq!(field.extent(), (0, 0));
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut field = ParticleField::new(BackgroundConfig::default());
        field.regenerate(1024, 768, &mut rng);
        let len = field.len();

        let mut respawned = 0;
        for _ in 0..5_000 {
            respawned += field.advance(&mut rng);
            assert_eq!(field.len(), len);
        }
        assert!(respawned > 0, "5000 frames at >=0.1px/frame must recycle something");
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = ParticleField::new(BackgroundConfig::default());
        let mut b = ParticleField::new(BackgroundConfig::default());
        a.regenerate(640, 480, &mut ChaCha8Rng::seed_from_u64(99));
        b.regenerate(640, 480, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.particles(), b.particles());
    }
}
