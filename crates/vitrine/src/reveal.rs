//! Fade-in of `.reveal` sections as they scroll into view.
//!
//! Elements are named by id. The host reports their bounding rects on each
//! scroll and applies the `show` class to whatever [`ScrollReveal::on_scroll`]
//! returns. Shown elements stay shown.

use vitrine_ui::Rect;

#[derive(Debug, Clone)]
struct Tracked {
    id: String,
    observed: bool,
    shown: bool,
}

/// Scroll reveal state.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    threshold: f32,
    /// Whether the host can observe intersections at all.
    supported: bool,
    elements: Vec<Tracked>,
}

impl ScrollReveal {
    /// Default visible ratio.
    pub const DEFAULT_THRESHOLD: f32 = 0.1;
    /// Class applied once revealed.
    pub const SHOW_CLASS: &'static str = "show";

    /// Registers `ids` and starts observing them. Without observer support
    /// every element is revealed immediately.
    pub fn new<I, S>(ids: I, threshold: f32, supported: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut reveal = Self {
            threshold,
            supported,
            elements: ids
                .into_iter()
                .map(|id| Tracked {
                    id: id.into(),
                    observed: false,
                    shown: false,
                })
                .collect(),
        };
        reveal.connect();
        reveal
    }

    fn connect(&mut self) {
        if self.supported {
            for element in &mut self.elements {
                element.observed = true;
            }
        } else {
            tracing::debug!("intersection observer unavailable, revealing everything");
            self.reveal_all();
        }
    }

    /// Starts observing `id`, registering it if new.
    pub fn observe(&mut self, id: &str) {
        if !self.supported {
            return;
        }
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => element.observed = true,
            None => self.elements.push(Tracked {
                id: id.to_string(),
                observed: true,
                shown: false,
            }),
        }
    }

    /// Stops observing `id`.
    pub fn unobserve(&mut self, id: &str) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            element.observed = false;
        }
    }

    /// Stops observing everything.
    pub fn disconnect(&mut self) {
        for element in &mut self.elements {
            element.observed = false;
        }
    }

    /// Disconnects and observes every registered element again.
    pub fn refresh(&mut self) {
        self.disconnect();
        self.connect();
    }

    /// Shows every element.
    pub fn reveal_all(&mut self) {
        for element in &mut self.elements {
            element.shown = true;
        }
    }

    /// Checks observed elements against the viewport. Returns the ids shown
    /// by this call.
    pub fn on_scroll<'a>(&mut self, viewport: &Rect, rects: &[(&'a str, Rect)]) -> Vec<&'a str> {
        let mut revealed = Vec::new();
        for (id, rect) in rects {
            let Some(element) = self.elements.iter_mut().find(|e| e.id == *id) else {
                continue;
            };
            if element.observed && !element.shown && rect.visible_ratio(viewport) >= self.threshold
            {
                element.shown = true;
                revealed.push(*id);
            }
        }
        revealed
    }

    /// Returns true once `id` is shown.
    #[must_use]
    pub fn is_shown(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id && e.shown)
    }

    /// Returns true while `id` is observed.
    #[must_use]
    pub fn is_observed(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id && e.observed)
    }

    /// Number of shown elements.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.elements.iter().filter(|e| e.shown).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn test_reveals_at_threshold_and_stays() {
        let mut reveal = ScrollReveal::new(["about", "skills"], 0.1, true);

        let below = Rect::new(0.0, 790.0, 1000.0, 200.0); // 5% visible
        assert!(reveal.on_scroll(&VIEWPORT, &[("about", below)]).is_empty());

        let entering = Rect::new(0.0, 760.0, 1000.0, 200.0); // 20% visible
        assert_eq!(reveal.on_scroll(&VIEWPORT, &[("about", entering)]), vec!["about"]);

        let gone = Rect::new(0.0, -500.0, 1000.0, 200.0);
        assert!(reveal.on_scroll(&VIEWPORT, &[("about", gone)]).is_empty());
        assert!(reveal.is_shown("about"));
        assert!(!reveal.is_shown("skills"));
    }

    #[test]
    fn test_unsupported_reveals_everything() {
        let reveal = ScrollReveal::new(["a", "b", "c"], 0.1, false);
        assert_eq!(reveal.shown_count(), 3);
        assert!(!reveal.is_observed("a"));
    }

    #[test]
    fn test_unobserve_and_refresh() {
        let mut reveal = ScrollReveal::new(["a"], 0.1, true);
        reveal.unobserve("a");
        assert!(reveal.on_scroll(&VIEWPORT, &[("a", VIEWPORT)]).is_empty());

        reveal.refresh();
        assert!(reveal.is_observed("a"));
        assert_eq!(reveal.on_scroll(&VIEWPORT, &[("a", VIEWPORT)]), vec!["a"]);
    }

    #[test]
    fn test_observe_registers_new_elements() {
        let mut reveal = ScrollReveal::new(Vec::<String>::new(), 0.1, true);
        reveal.observe("late");
        assert!(reveal.is_observed("late"));
        reveal.disconnect();
        assert!(!reveal.is_observed("late"));
        reveal.reveal_all();
        assert!(reveal.is_shown("late"));
    }
}
