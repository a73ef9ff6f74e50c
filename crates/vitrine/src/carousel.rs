//! Horizontal project carousel.

use vitrine_ui::Rect;

/// Carousel position and button state.
///
/// A carousel with no cards is inert: navigation does nothing and both
/// buttons stay disabled.
#[derive(Debug, Clone)]
pub struct Carousel {
    total: usize,
    current: usize,
    card_width: f32,
    gap: f32,
    threshold: f32,
}

impl Carousel {
    /// Default gap between cards in pixels.
    pub const DEFAULT_GAP: f32 = 32.0;
    /// Default visible ratio at which a scrolled-in card becomes current.
    pub const DEFAULT_THRESHOLD: f32 = 0.6;

    /// Creates a carousel over `total` cards at index 0.
    #[must_use]
    pub fn new(total: usize, gap: f32, threshold: f32) -> Self {
        Self {
            total,
            current: 0,
            card_width: 0.0,
            gap,
            threshold,
        }
    }

    /// Records the rendered card width. Needed for scroll offsets.
    pub fn set_card_width(&mut self, width: f32) {
        self.card_width = width.max(0.0);
    }

    /// Returns true if there are no cards.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.total == 0
    }

    /// Moves to `index`, clamped to the last card. Returns the new scroll
    /// offset, or `None` when inert.
    pub fn go_to(&mut self, index: usize) -> Option<f32> {
        if self.is_inert() {
            return None;
        }
        self.current = index.min(self.total - 1);
        Some(self.scroll_offset())
    }

    /// Moves one card right. No-op on the last card.
    pub fn next(&mut self) -> Option<f32> {
        if self.is_inert() || self.current + 1 >= self.total {
            return None;
        }
        self.go_to(self.current + 1)
    }

    /// Moves one card left. No-op on the first card.
    pub fn prev(&mut self) -> Option<f32> {
        if self.is_inert() || self.current == 0 {
            return None;
        }
        self.go_to(self.current - 1)
    }

    /// Horizontal scroll position of the track for the current card.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.current as f32 * (self.card_width + self.gap)
    }

    /// Index of the current card.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if the previous button is disabled.
    #[must_use]
    pub fn prev_disabled(&self) -> bool {
        self.is_inert() || self.current == 0
    }

    /// Returns true if the next button is disabled.
    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.is_inert() || self.current + 1 == self.total
    }

    /// Active flag per dot.
    #[must_use]
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.total).map(|i| i == self.current).collect()
    }

    /// The user scrolled the track by hand: a card that is at least
    /// `threshold` visible becomes current. Returns true if adopted.
    pub fn card_visible(&mut self, index: usize, ratio: f32) -> bool {
        if index >= self.total || ratio < self.threshold {
            return false;
        }
        self.current = index;
        true
    }

    /// Checks every card box against the track box after a hand scroll.
    /// The last card over the threshold wins. Returns true if the current
    /// card changed.
    pub fn on_track_scroll(&mut self, track: &Rect, cards: &[Rect]) -> bool {
        let before = self.current;
        for (index, card) in cards.iter().enumerate() {
            self.card_visible(index, card.visible_ratio(track));
        }
        self.current != before
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_GAP, Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(total: usize) -> Carousel {
        let mut carousel = Carousel::new(total, Carousel::DEFAULT_GAP, Carousel::DEFAULT_THRESHOLD);
        carousel.set_card_width(368.0);
        carousel
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = carousel(3);
        assert_eq!(c.go_to(10), Some(800.0));
        assert_eq!(c.current(), 2);
        assert_eq!(c.go_to(0), Some(0.0));
    }

    #[test]
    fn test_buttons_at_ends() {
        let mut c = carousel(3);
        assert!(c.prev_disabled());
        assert!(!c.next_disabled());
        assert_eq!(c.prev(), None);

        assert_eq!(c.next(), Some(400.0));
        assert_eq!(c.next(), Some(800.0));
        assert_eq!(c.next(), None);
        assert!(c.next_disabled());
        assert_eq!(c.dot_states(), vec![false, false, true]);
    }

    #[test]
    fn test_card_visible_threshold() {
        let mut c = carousel(3);
        assert!(!c.card_visible(1, 0.59));
        assert_eq!(c.current(), 0);
        assert!(c.card_visible(1, 0.6));
        assert_eq!(c.current(), 1);
        assert!(!c.card_visible(7, 1.0));
    }

    #[test]
    fn test_track_scroll_adopts_visible_card() {
        let mut c = carousel(3);
        let track = Rect::new(0.0, 0.0, 400.0, 500.0);
        // Second card two thirds in view, first one mostly scrolled out.
        let cards = [
            Rect::new(-300.0, 0.0, 368.0, 500.0),
            Rect::new(100.0, 0.0, 368.0, 500.0),
            Rect::new(500.0, 0.0, 368.0, 500.0),
        ];
        assert!(c.on_track_scroll(&track, &cards));
        assert_eq!(c.current(), 1);
        assert!(!c.on_track_scroll(&track, &cards));
    }

    #[test]
    fn test_empty_is_inert() {
        let mut c = Carousel::default();
        assert!(c.is_inert());
        assert_eq!(c.go_to(0), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert!(c.prev_disabled() && c.next_disabled());
        assert!(c.dot_states().is_empty());
    }
}
