//! A single drifting glyph.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::BackgroundConfig;

/// Where a new particle is placed vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPlacement {
    /// Anywhere on the surface. Used when the whole field is regenerated.
    Scattered,
    /// Just below the bottom edge, so it drifts into view. Used on respawn.
    BelowBottom,
}

/// One glyph in the field.
///
/// `size`, `opacity` and `speed` are fixed for the particle's lifetime.
/// Only the position and rotation move.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position of the text origin.
    pub x: f32,
    /// Vertical position of the text origin.
    pub y: f32,
    /// Glyph text.
    pub label: String,
    /// Font size in pixels.
    pub size: f32,
    /// Alpha.
    pub opacity: f32,
    /// Upward drift per frame.
    pub speed: f32,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Particle {
    /// Draws a fresh particle for a surface of `width` x `height`.
    pub fn spawn<R: Rng + ?Sized>(
        config: &BackgroundConfig,
        width: u32,
        height: u32,
        placement: SpawnPlacement,
        rng: &mut R,
    ) -> Self {
        let width = width as f32;
        let height = height as f32;

        let x = uniform(rng, width);
        let y = match placement {
            SpawnPlacement::Scattered => uniform(rng, height),
            SpawnPlacement::BelowBottom => height + config.respawn_offset,
        };

        Self {
            x,
            y,
            label: config.glyphs.pick(rng).to_string(),
            size: config.size.sample(rng),
            opacity: config.opacity.sample(rng),
            speed: config.speed.sample(rng),
            rotation: uniform(rng, TAU),
        }
    }

    /// Moves one frame: up by `speed`, rotated by `rotation_step`.
    #[inline]
    pub fn advance(&mut self, rotation_step: f32) {
        self.y -= self.speed;
        self.rotation += rotation_step;
    }
}

/// Uniform in `[0, upper)`; zero when the span is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, upper: f32) -> f32 {
    if upper > 0.0 {
        rng.gen_range(0.0..upper)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_below_bottom_spawn_height() {
        let config = BackgroundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Particle::spawn(&config, 800, 600, SpawnPlacement::BelowBottom, &mut rng);
        assert!((p.y - 620.0).abs() < f32::EPSILON);
        assert!(p.x >= 0.0 && p.x < 800.0);
    }

    #[test]
    fn test_zero_sized_surface() {
        let config = BackgroundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let p = Particle::spawn(&config, 0, 0, SpawnPlacement::Scattered, &mut rng);
        assert!(p.x.abs() < f32::EPSILON);
        assert!(p.y.abs() < f32::EPSILON);
    }

    #[test]
    fn test_advance() {
        let config = BackgroundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut p = Particle::spawn(&config, 100, 100, SpawnPlacement::Scattered, &mut rng);
        let (y, rotation, speed) = (p.y, p.rotation, p.speed);
        p.advance(0.0008);
        assert!((p.y - (y - speed)).abs() < 1e-4);
        assert!((p.rotation - (rotation + 0.0008)).abs() < 1e-6);
    }
}
