//! Mobile navigation drawer.

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Class on `<body>` while the menu is open.
    pub const BODY_CLASS: &'static str = "menu-open";

    /// Creates a closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the menu.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A menu link was followed.
    pub fn on_link_click(&mut self) {
        self.close();
    }

    /// A click inside the drawer. Only a click on the backdrop itself closes it.
    pub fn on_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    /// Returns true while open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Class to add to `<body>`, if any.
    #[must_use]
    pub fn body_class(&self) -> Option<&'static str> {
        self.open.then_some(Self::BODY_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.body_class(), None);
        menu.open();
        assert_eq!(menu.body_class(), Some("menu-open"));
        menu.on_click(false);
        assert!(menu.is_open());
        menu.on_click(true);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_and_links() {
        let mut menu = MobileMenu::new();
        assert!(menu.toggle());
        menu.on_link_click();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }
}
