//! The render loop.
//!
//! ```text
//!   new ──► resize ──► render            (one draw, first frame requested)
//!                           │
//!   frame fires ──► tick ──►┤ advance ──► render ──► request next frame
//!                           │
//!   window resize ──► resize (regenerate + render)
//!   stop ──► cancel pending frame, all later calls are no-ops
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vitrine_ui::Theme;

use crate::config::BackgroundConfig;
use crate::field::ParticleField;
use crate::particle::{Particle, SpawnPlacement};
use crate::ports::{DrawSurface, FrameScheduler, GlyphDraw, ThemeSource};

/// Drives a [`ParticleField`] over a drawing surface.
///
/// Generic over the host: `S` draws, `T` reports the theme, `F` schedules
/// frames and `R` supplies randomness.
#[derive(Debug)]
pub struct ParticleAnimator<S, T, F, R>
where
    F: FrameScheduler,
{
    surface: Option<S>,
    theme: T,
    scheduler: F,
    rng: R,
    field: ParticleField,
    pending: Option<F::Handle>,
    stopped: bool,
    frames: u64,
}

impl<S, T, F, R> ParticleAnimator<S, T, F, R>
where
    S: DrawSurface,
    T: ThemeSource,
    F: FrameScheduler,
    R: Rng,
{
    /// Attaches to `surface`, draws the first field and requests the first frame.
    ///
    /// With no surface the animator is inert: every operation returns early.
    pub fn new(
        surface: Option<S>,
        theme: T,
        scheduler: F,
        rng: R,
        config: BackgroundConfig,
    ) -> Self {
        let mut animator = Self {
            surface,
            theme,
            scheduler,
            rng,
            field: ParticleField::new(config),
            pending: None,
            stopped: false,
            frames: 0,
        };

        if animator.surface.is_none() {
            tracing::debug!("no drawing surface, background stays inert");
            return animator;
        }

        animator.resize();
        animator.schedule();
        animator
    }

    /// Matches the backing raster to the viewport and regenerates the field.
    pub fn resize(&mut self) {
        if self.stopped {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let (width, height) = surface.viewport_size();
        surface.resize_backing(width, height);
        self.field.regenerate(width, height, &mut self.rng);
        tracing::debug!(width, height, count = self.field.len(), "particle field regenerated");

        self.render();
    }

    /// Draws one particle for the current surface size without adding it.
    pub fn spawn(&mut self, placement: SpawnPlacement) -> Particle {
        self.field.spawn(placement, &mut self.rng)
    }

    /// Clears the surface and draws every particle in order.
    pub fn render(&mut self) {
        if self.stopped {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let ink = Theme::for_mode(self.theme.mode()).glyph_ink;
        let font_family = self.field.config().font_family.as_str();

        surface.clear();
        for particle in self.field.particles() {
            surface.draw_glyph(&GlyphDraw {
                text: &particle.label,
                x: particle.x,
                y: particle.y,
                rotation: particle.rotation,
                font_size: particle.size,
                font_family,
                color: ink.with_alpha(particle.opacity),
            });
        }
    }

    /// One display refresh: advance, redraw, request the next frame.
    pub fn tick(&mut self) {
        if self.stopped || self.surface.is_none() {
            return;
        }

        let respawned = self.field.advance(&mut self.rng);
        if respawned > 0 {
            tracing::trace!(respawned, "particles respawned below the bottom edge");
        }
        self.render();
        self.frames += 1;
        self.schedule();
    }

    /// Cancels the pending frame and ends the loop for good.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.stopped = true;
        tracing::debug!(frames = self.frames, "background animation stopped");
    }

    fn schedule(&mut self) {
        if let Some(stale) = self.pending.take() {
            self.scheduler.cancel_frame(stale);
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            tracing::debug!("frame request refused, background loop ends");
        }
    }
}

impl<S, T, F> ParticleAnimator<S, T, F, ChaCha8Rng>
where
    S: DrawSurface,
    T: ThemeSource,
    F: FrameScheduler,
{
    /// Creates an animator with a `ChaCha8Rng` seeded from `seed`.
    pub fn with_seed(
        surface: Option<S>,
        theme: T,
        scheduler: F,
        seed: u64,
        config: BackgroundConfig,
    ) -> Self {
        Self::new(
            surface,
            theme,
            scheduler,
            ChaCha8Rng::seed_from_u64(seed),
            config,
        )
    }
}

impl<S, T, F, R> ParticleAnimator<S, T, F, R>
where
    F: FrameScheduler,
{
    /// Returns true if there is no surface.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.surface.is_none()
    }

    /// Returns true after [`ParticleAnimator::stop`].
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns true while a frame request is outstanding.
    ///
    /// The animator cannot see the host fire a frame, so a fired handle
    /// still counts here until `tick` runs and swaps it for the next one.
    /// Cancelling a fired handle is a no-op for every scheduler.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticks completed so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The particle field.
    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Mutable access to the particle field.
    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    /// The drawing surface, if attached.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the drawing surface, e.g. to simulate a viewport change.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ManualScheduler, RecordingSurface};
    use vitrine_ui::{Color, RenderCommand, ThemeMode};

    type TestAnimator = ParticleAnimator<RecordingSurface, ThemeMode, ManualScheduler, ChaCha8Rng>;

    fn animator(mode: ThemeMode) -> (TestAnimator, ManualScheduler) {
        let clock = ManualScheduler::new();
        let animator = ParticleAnimator::with_seed(
            Some(RecordingSurface::new(800, 600)),
            mode,
            clock.clone(),
            42,
            BackgroundConfig::default(),
        );
        (animator, clock)
    }

    #[test]
    fn test_startup_draws_once_and_requests_frame() {
        let (animator, clock) = animator(ThemeMode::Dark);
        let surface = animator.surface().expect("surface attached");

        assert_eq!(surface.backing_size(), (800, 600));
        assert_eq!(surface.frame().len(), 1 + 18);
        assert_eq!(surface.clear_count(), 1);
        assert!(clock.is_pending());
        assert_eq!(clock.requested(), 1);
        assert_eq!(animator.frames(), 0);
    }

    #[test]
    fn test_ink_follows_theme() {
        let (dark, _) = animator(ThemeMode::Dark);
        let (light, _) = animator(ThemeMode::Light);

        let ink = |a: &TestAnimator| match &a.surface().expect("surface").frame()[1] {
            RenderCommand::Text { color, .. } => Color::rgb(color.r, color.g, color.b),
            other => panic!("expected text, got {other:?}"),
        };
        assert_eq!(ink(&dark), Color::WHITE);
        assert_eq!(ink(&light), Color::BLACK);
    }

    #[test]
    fn test_tick_reschedules_exactly_once() {
        let (mut animator, clock) = animator(ThemeMode::Dark);
        for _ in 0..10 {
            assert!(clock.fire());
            animator.tick();
            assert!(clock.is_pending());
        }
        assert_eq!(animator.frames(), 10);
        assert_eq!(clock.requested(), 11);
    }

    #[test]
    fn test_fired_handle_stays_pending_until_tick() {
        let (mut animator, clock) = animator(ThemeMode::Dark);
        assert!(clock.fire());
        assert!(!clock.is_pending());
        assert!(animator.has_pending_frame());

        animator.tick();
        assert!(animator.has_pending_frame());
        assert!(clock.is_pending());
        assert_eq!(clock.requested(), 2);
        assert_eq!(clock.cancelled(), 0);
    }

    #[test]
    fn test_stop_cancels_and_freezes() {
        let (mut animator, clock) = animator(ThemeMode::Dark);
        animator.stop();
        assert!(!clock.is_pending());
        assert_eq!(clock.cancelled(), 1);

        let before = animator.surface().expect("surface").mutation_count();
        animator.tick();
        animator.resize();
        animator.render();
        animator.stop();
        assert_eq!(animator.surface().expect("surface").mutation_count(), before);
        assert_eq!(clock.cancelled(), 1);
        assert!(animator.is_stopped());
    }

    #[test]
    fn test_missing_surface_is_inert() {
        let clock = ManualScheduler::new();
        let mut animator: TestAnimator = ParticleAnimator::with_seed(
            None,
            ThemeMode::Dark,
            clock.clone(),
            1,
            BackgroundConfig::default(),
        );
        animator.resize();
        animator.tick();
        animator.stop();
        assert!(animator.is_inert());
        assert!(animator.field().is_empty());
        assert_eq!(clock.requested(), 0);
    }
}
