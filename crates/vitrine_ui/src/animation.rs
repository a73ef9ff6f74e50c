//! Easing curves and tweens for scroll and fade transitions.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-out (fast start, soft landing).
    EaseOutCubic,
    /// Cubic ease-in-out, the curve browsers use for `behavior: 'smooth'`.
    #[default]
    EaseInOutCubic,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single value moving from a start to a target over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween {
    current: f32,
    start: f32,
    target: f32,
    /// Progress (0-1).
    progress: f32,
    /// Duration in seconds.
    duration: f32,
    easing: Easing,
}

impl Tween {
    /// Default transition duration (seconds).
    pub const DEFAULT_DURATION: f32 = 0.5;

    /// Creates a tween resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            start: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts moving from the current value toward `target`.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 || !self.is_complete() {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Jumps to `value` with no transition.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.progress = 1.0;
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn update(&mut self, dt: f32) -> f32 {
        if self.progress >= 1.0 {
            return self.current;
        }

        if self.duration > 0.0 {
            self.progress += dt.max(0.0) / self.duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.progress >= 1.0 {
            self.current = self.target;
        }
        self.current
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0, Easing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert!(easing.apply(0.0).abs() < f32::EPSILON, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON, "{easing:?}");
        }
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0, Easing::EaseInOutCubic).with_duration(0.3);
        tween.set_target(1200.0);

        for _ in 0..30 {
            tween.update(0.016);
        }

        assert!((tween.value() - 1200.0).abs() < 0.01);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut tween = Tween::new(0.0, Easing::Linear).with_duration(1.0);
        tween.set_target(100.0);
        assert!(tween.update(0.0).abs() < f32::EPSILON);
    }
}
