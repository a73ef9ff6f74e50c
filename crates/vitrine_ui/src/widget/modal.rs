//! Modal dialog component.
//!
//! Opening locks page scroll. Closing drops the `active` class at once and
//! finishes after the CSS fade, at which point the saved body overflow comes
//! back through [`ModalEvent::Closed`].

use crate::input::Key;

use super::base::{WidgetFlags, WidgetId};

/// Modal behavior options.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalOptions {
    /// Close buttons are wired.
    pub closable: bool,
    /// Escape closes the modal.
    pub close_on_escape: bool,
    /// Clicking the overlay (outside the dialog) closes the modal.
    pub close_on_outside_click: bool,
    /// A backdrop element is shown behind the dialog.
    pub backdrop: bool,
    /// Animation name, rendered as `modal-<name>`.
    pub animation: Option<String>,
    /// Duration of the closing transition in seconds.
    pub close_transition: f32,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            closable: true,
            close_on_escape: true,
            close_on_outside_click: true,
            backdrop: true,
            animation: Some("fade".to_string()),
            close_transition: Modal::CLOSE_TRANSITION,
        }
    }
}

/// Where the modal is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalState {
    /// Hidden.
    Closed,
    /// Shown.
    Open,
    /// Fading out. Seconds left until hidden.
    Closing {
        /// Seconds remaining.
        remaining: f32,
    },
}

/// Lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// The modal became visible and page scroll is locked.
    Opened,
    /// The modal is hidden. The body overflow should go back to this value.
    Closed {
        /// Body overflow value saved at open time.
        restore_overflow: String,
    },
}

/// A modal dialog.
#[derive(Debug, Clone)]
pub struct Modal {
    id: WidgetId,
    options: ModalOptions,
    state: ModalState,
    flags: WidgetFlags,
    saved_overflow: String,
    title: String,
    content: String,
}

impl Modal {
    /// Closing transition, matching the CSS fade.
    pub const CLOSE_TRANSITION: f32 = 0.3;
    /// Body overflow while open.
    pub const LOCKED_OVERFLOW: &'static str = "hidden";

    /// Creates a closed modal.
    #[must_use]
    pub fn new(id: impl Into<String>, options: ModalOptions) -> Self {
        let mut flags = WidgetFlags::new();
        flags.clear(WidgetFlags::VISIBLE);
        Self {
            id: WidgetId::new(id),
            options,
            state: ModalState::Closed,
            flags,
            saved_overflow: String::new(),
            title: String::new(),
            content: String::new(),
        }
    }

    /// Returns the widget id.
    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// True while shown or fading out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Sets the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the body content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Opens the modal. `body_overflow` is the page's current overflow value,
    /// restored on close. The modal still counts as open while it fades out,
    /// so an open during the fade is ignored and the fade runs to the end.
    pub fn open(&mut self, body_overflow: &str) -> Option<ModalEvent> {
        match self.state {
            ModalState::Open | ModalState::Closing { .. } => None,
            ModalState::Closed => {
                self.saved_overflow = body_overflow.to_string();
                self.state = ModalState::Open;
                self.flags.set(WidgetFlags::VISIBLE);
                self.flags.set(WidgetFlags::ACTIVE);
                tracing::debug!(modal = self.id.as_str(), "modal opened");
                Some(ModalEvent::Opened)
            }
        }
    }

    /// Starts closing. Returns false if not open.
    pub fn close(&mut self) -> bool {
        if self.state != ModalState::Open {
            return false;
        }
        self.flags.clear(WidgetFlags::ACTIVE);
        self.state = ModalState::Closing {
            remaining: self.options.close_transition,
        };
        true
    }

    /// Toggles between open and closing.
    pub fn toggle(&mut self, body_overflow: &str) -> Option<ModalEvent> {
        if self.state == ModalState::Open {
            self.close();
            None
        } else {
            self.open(body_overflow)
        }
    }

    /// Advances the closing transition by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Option<ModalEvent> {
        let ModalState::Closing { remaining } = self.state else {
            return None;
        };
        let remaining = remaining - dt.max(0.0);
        if remaining > 0.0 {
            self.state = ModalState::Closing { remaining };
            return None;
        }
        self.state = ModalState::Closed;
        self.flags.clear(WidgetFlags::VISIBLE);
        tracing::debug!(modal = self.id.as_str(), "modal closed");
        Some(ModalEvent::Closed {
            restore_overflow: std::mem::take(&mut self.saved_overflow),
        })
    }

    /// Handles a key press. Returns true if it started closing.
    pub fn on_key(&mut self, key: Key) -> bool {
        key == Key::Escape && self.options.close_on_escape && self.close()
    }

    /// Handles a click. `on_overlay` is true when the click target is the
    /// overlay itself rather than something inside the dialog.
    pub fn on_click(&mut self, on_overlay: bool) -> bool {
        on_overlay && self.options.close_on_outside_click && self.close()
    }

    /// Handles a click on a close button.
    pub fn on_close_button(&mut self) -> bool {
        self.options.closable && self.close()
    }

    /// Body overflow the page should have right now, if the modal owns it.
    #[must_use]
    pub fn body_overflow(&self) -> Option<&'static str> {
        self.is_open().then_some(Self::LOCKED_OVERFLOW)
    }

    /// CSS classes for the modal element.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec!["modal".to_string()];
        if let Some(animation) = &self.options.animation {
            classes.push(format!("modal-{animation}"));
        }
        if self.flags.has(WidgetFlags::ACTIVE) {
            classes.push("active".to_string());
        }
        classes
    }

    /// CSS classes for the backdrop, if there is one.
    #[must_use]
    pub fn backdrop_classes(&self) -> Option<Vec<&'static str>> {
        if !self.options.backdrop {
            return None;
        }
        let mut classes = vec!["modal-backdrop"];
        if self.flags.has(WidgetFlags::ACTIVE) {
            classes.push("active");
        }
        Some(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle_restores_overflow() {
        let mut modal = Modal::new("contact", ModalOptions::default());

        assert_eq!(modal.open("auto"), Some(ModalEvent::Opened));
        assert_eq!(modal.body_overflow(), Some("hidden"));
        assert!(modal.classes().contains(&"active".to_string()));

        // Second open is a no-op.
        assert_eq!(modal.open("hidden"), None);

        assert!(modal.close());
        assert!(modal.is_open(), "still fading out");
        assert_eq!(modal.update(0.1), None);
        assert_eq!(
            modal.update(0.25),
            Some(ModalEvent::Closed {
                restore_overflow: "auto".to_string()
            })
        );
        assert!(!modal.is_open());
        assert!(!modal.close());
    }

    #[test]
    fn test_escape_respects_options() {
        let mut modal = Modal::new(
            "m",
            ModalOptions {
                close_on_escape: false,
                ..ModalOptions::default()
            },
        );
        modal.open("");
        assert!(!modal.on_key(Key::Escape));
        assert!(!modal.on_click(false));
        assert!(modal.on_click(true));
    }

    #[test]
    fn test_open_during_fade_is_ignored() {
        let mut modal = Modal::new("m", ModalOptions::default());
        modal.open("scroll");
        modal.close();
        assert_eq!(modal.open("hidden"), None);
        assert!(matches!(modal.state(), ModalState::Closing { .. }));
        assert!(!modal.classes().contains(&"active".to_string()));
        assert_eq!(
            modal.update(0.31),
            Some(ModalEvent::Closed {
                restore_overflow: "scroll".to_string()
            })
        );
        assert!(!modal.is_open());

        // Once hidden it opens normally again.
        assert_eq!(modal.open("auto"), Some(ModalEvent::Opened));
    }

    #[test]
    fn test_backdrop_optional() {
        let modal = Modal::new(
            "m",
            ModalOptions {
                backdrop: false,
                animation: None,
                ..ModalOptions::default()
            },
        );
        assert_eq!(modal.backdrop_classes(), None);
        assert_eq!(modal.classes(), vec!["modal".to_string()]);
    }
}
