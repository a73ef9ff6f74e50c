//! Element boxes for visibility checks.
//!
//! Same vocabulary as `getBoundingClientRect()`: `left`/`top` plus size,
//! in CSS pixels relative to the viewport.

/// An element's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Distance from the viewport's left edge.
    pub left: f32,
    /// Distance from the viewport's top edge. Negative once scrolled past.
    pub top: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
}

impl Rect {
    /// Empty box at the viewport origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Box at (`left`, `top`) of the given size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `left + width`.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// `top + height`.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Covered area; zero for a collapsed box.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Hit test for a pointer at (`px`, `py`). Right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        (self.left..self.right()).contains(&px) && (self.top..self.bottom()).contains(&py)
    }

    /// The part of this box inside `other`, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let width = self.right().min(other.right()) - left;
        let height = self.bottom().min(other.bottom()) - top;
        (width > 0.0 && height > 0.0).then(|| Self::new(left, top, width, height))
    }

    /// Fraction of this box inside `viewport`, in `[0, 1]`.
    ///
    /// This is the `intersectionRatio` an intersection observer reports.
    #[must_use]
    pub fn visible_ratio(&self, viewport: &Self) -> f32 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.intersection(viewport)
            .map_or(0.0, |visible| (visible.area() / area).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn test_visible_ratio() {
        let inside = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!((inside.visible_ratio(&VIEWPORT) - 1.0).abs() < f32::EPSILON);

        let half = Rect::new(0.0, 550.0, 100.0, 100.0);
        assert!((half.visible_ratio(&VIEWPORT) - 0.5).abs() < 0.001);

        let scrolled_past = Rect::new(0.0, -150.0, 100.0, 100.0);
        assert!(scrolled_past.visible_ratio(&VIEWPORT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let below = Rect::new(0.0, 600.0, 100.0, 100.0);
        assert_eq!(below.intersection(&VIEWPORT), None);
        assert!(Rect::ZERO.visible_ratio(&VIEWPORT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_contains() {
        let card = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert!(card.contains(100.0, 50.0));
        assert!(!card.contains(300.0, 100.0));
        assert!((card.area() - 20_000.0).abs() < f32::EPSILON);
    }
}
