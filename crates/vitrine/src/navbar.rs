//! Navbar scroll state.

/// Tracks whether the page has scrolled past the navbar threshold.
#[derive(Debug, Clone)]
pub struct Navbar {
    threshold: f32,
    scrolled: bool,
}

impl Navbar {
    /// Default threshold in pixels.
    pub const DEFAULT_THRESHOLD: f32 = 20.0;
    /// Class applied while scrolled.
    pub const SCROLLED_CLASS: &'static str = "scrolled";

    /// Creates an unscrolled navbar.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Updates from the window scroll offset. Returns true if the state changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Forces the scrolled state on.
    pub fn add_scroll_class(&mut self) {
        self.scrolled = true;
    }

    /// Forces the scrolled state off.
    pub fn remove_scroll_class(&mut self) {
        self.scrolled = false;
    }

    /// Returns true while scrolled.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut navbar = Navbar::default();
        assert!(!navbar.on_scroll(20.0));
        assert!(!navbar.is_scrolled());
        assert!(navbar.on_scroll(20.5));
        assert!(navbar.is_scrolled());
        assert!(!navbar.on_scroll(300.0));
        assert!(navbar.on_scroll(0.0));
        assert!(!navbar.is_scrolled());
    }
}
