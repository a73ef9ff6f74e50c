//! Shared widget identity and state flags.

/// The DOM id a component is mounted on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(pub String);

impl WidgetId {
    /// Wraps an element id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The element id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Component state bits, mirrored onto CSS classes and ARIA attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Rendered (not `display: none`).
    pub const VISIBLE: u32 = 1 << 0;
    /// Accepts clicks and typing.
    pub const ENABLED: u32 = 1 << 1;
    /// Waiting on an async action (`aria-busy`).
    pub const BUSY: u32 = 1 << 2;
    /// Open or pressed (`.active`).
    pub const ACTIVE: u32 = 1 << 3;

    /// Visible and enabled.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED);

    /// Flags of a freshly mounted component.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Tests one bit.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Turns a bit on.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Turns a bit off.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Turns a bit on or off.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_ops() {
        let mut flags = WidgetFlags::new();
        assert!(flags.has(WidgetFlags::ENABLED));

        flags.assign(WidgetFlags::ENABLED, false);
        assert!(!flags.has(WidgetFlags::ENABLED));

        flags.set(WidgetFlags::BUSY);
        assert!(flags.has(WidgetFlags::BUSY));
        assert!(flags.has(WidgetFlags::VISIBLE));
    }
}
