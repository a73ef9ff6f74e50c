//! Button component.

use super::base::{WidgetFlags, WidgetId};

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Muted filled button.
    Secondary,
    /// Border only.
    Outline,
    /// Positive action.
    Success,
    /// Destructive action.
    Danger,
    /// Needs attention.
    Warning,
    /// Informational.
    Info,
}

impl ButtonVariant {
    /// CSS class for this variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
            Self::Success => "btn-success",
            Self::Danger => "btn-danger",
            Self::Warning => "btn-warning",
            Self::Info => "btn-info",
        }
    }
}

/// Size of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Compact.
    Small,
    /// Regular.
    #[default]
    Medium,
    /// Hero-sized.
    Large,
}

impl ButtonSize {
    /// CSS class for this size.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Small => "btn-small",
            Self::Medium => "btn-medium",
            Self::Large => "btn-large",
        }
    }
}

/// A button with variant, size, disabled and loading states.
#[derive(Debug, Clone)]
pub struct ButtonWidget {
    id: WidgetId,
    variant: ButtonVariant,
    size: ButtonSize,
    flags: WidgetFlags,
    /// Label shown when not loading.
    label: String,
}

impl ButtonWidget {
    /// Label shown while loading.
    pub const LOADING_LABEL: &'static str = "Loading...";

    /// Creates a primary, medium, enabled button.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(id),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            flags: WidgetFlags::new(),
            label: label.into(),
        }
    }

    /// Sets the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Returns the widget id.
    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Changes the variant.
    pub fn set_variant(&mut self, variant: ButtonVariant) {
        self.variant = variant;
    }

    /// Changes the size.
    pub fn set_size(&mut self, size: ButtonSize) {
        self.size = size;
    }

    /// Enables or disables the button.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.assign(WidgetFlags::ENABLED, !disabled);
    }

    /// Enters or leaves the loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.flags.assign(WidgetFlags::BUSY, loading);
    }

    /// Replaces the label. Ignored while loading.
    pub fn set_text(&mut self, label: impl Into<String>) {
        if !self.is_loading() {
            self.label = label.into();
        }
    }

    /// Returns true if disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.flags.has(WidgetFlags::BUSY)
    }

    /// Text currently displayed.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.is_loading() {
            Self::LOADING_LABEL
        } else {
            &self.label
        }
    }

    /// Value of `aria-busy`, if the attribute should be present.
    #[must_use]
    pub fn aria_busy(&self) -> Option<&'static str> {
        self.is_loading().then_some("true")
    }

    /// Handles a click. Returns true if the click should trigger the action.
    #[must_use]
    pub fn click(&self) -> bool {
        !self.is_disabled() && !self.is_loading()
    }

    /// CSS classes for the current state.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["btn", self.variant.class(), self.size.class()];
        if self.is_disabled() {
            classes.push("btn-disabled");
        }
        if self.is_loading() {
            classes.push("btn-loading");
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let button = ButtonWidget::new("cv", "Download CV");
        assert_eq!(button.classes(), vec!["btn", "btn-primary", "btn-medium"]);
        assert!(button.click());
    }

    #[test]
    fn test_loading_swaps_label_and_blocks_clicks() {
        let mut button = ButtonWidget::new("send", "Send").with_variant(ButtonVariant::Outline);

        button.set_loading(true);
        assert_eq!(button.display_text(), ButtonWidget::LOADING_LABEL);
        assert_eq!(button.aria_busy(), Some("true"));
        assert!(button.classes().contains(&"btn-loading"));
        assert!(!button.click());

        // Label changes during loading are ignored.
        button.set_text("Sent");
        button.set_loading(false);
        assert_eq!(button.display_text(), "Send");
        assert_eq!(button.aria_busy(), None);
    }

    #[test]
    fn test_disabled() {
        let mut button = ButtonWidget::new("x", "X").with_size(ButtonSize::Large);
        button.set_disabled(true);
        assert!(!button.click());
        assert_eq!(button.classes(), vec!["btn", "btn-primary", "btn-large", "btn-disabled"]);
    }
}
