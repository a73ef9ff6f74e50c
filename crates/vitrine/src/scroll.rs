//! Smooth page scrolling for anchor links and the scroll-down button.

use vitrine_ui::{Easing, Rect, Tween};

/// Animated vertical scroll position.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    offset: Tween,
}

impl SmoothScroll {
    /// Creates a scroller resting at `offset`.
    #[must_use]
    pub fn new(offset: f32) -> Self {
        Self {
            offset: Tween::new(offset, Easing::EaseInOutCubic),
        }
    }

    /// Sets the transition length in seconds.
    #[must_use]
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.offset = self.offset.with_duration(seconds);
        self
    }

    /// Starts scrolling to `offset`. Negative offsets clamp to the top.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset.set_target(offset.max(0.0));
    }

    /// Scrolls so that an element's top edge (in viewport coordinates)
    /// reaches the top of the viewport.
    pub fn scroll_to_element(&mut self, element: &Rect) {
        self.scroll_to(self.offset.value() + element.top);
    }

    /// Starts scrolling to the top.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0.0);
    }

    /// Starts scrolling to the bottom of a document `document_height` tall.
    pub fn scroll_to_bottom(&mut self, document_height: f32) {
        self.scroll_to(document_height);
    }

    /// Jumps with no animation, e.g. when the user scrolls by hand.
    pub fn jump_to(&mut self, offset: f32) {
        self.offset.set_immediate(offset.max(0.0));
    }

    /// Advances by `dt` seconds and returns the offset to apply.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.offset.update(dt)
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// Returns true while a scroll is in flight.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        !self.offset.is_complete()
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_reaches_target() {
        let mut scroll = SmoothScroll::default().with_duration(0.4);
        scroll.scroll_to(1200.0);
        assert!(scroll.is_scrolling());

        let mid = scroll.update(0.2);
        assert!(mid > 0.0 && mid < 1200.0);

        assert!((scroll.update(0.3) - 1200.0).abs() < f32::EPSILON);
        assert!(!scroll.is_scrolling());
    }

    #[test]
    fn test_element_and_edges() {
        let mut scroll = SmoothScroll::new(300.0).with_duration(0.0);
        scroll.scroll_to_element(&Rect::new(0.0, 450.0, 100.0, 100.0));
        assert!((scroll.update(0.016) - 750.0).abs() < f32::EPSILON);

        scroll.scroll_to_top();
        assert!(scroll.update(0.016).abs() < f32::EPSILON);

        scroll.scroll_to_bottom(4000.0);
        assert!((scroll.update(0.016) - 4000.0).abs() < f32::EPSILON);

        scroll.scroll_to(-10.0);
        assert!(scroll.update(0.016).abs() < f32::EPSILON);
    }
}
