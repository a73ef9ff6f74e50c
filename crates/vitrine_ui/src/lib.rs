//! # VITRINE UI
//!
//! Plain-state building blocks shared by the portfolio page:
//! - Dark/light theme palettes
//! - Recorded draw commands for the background canvas
//! - Easing curves for smooth scrolling and fades
//! - Reusable components (button, input field, modal)
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI PIPELINE                         │
//! ├────────────────────────────────────────────────────────┤
//! │  DOM Events → Component State → Classes / Commands     │
//! │       ↓              ↓                  ↓              │
//! │   Key names     Validation        Browser or recorder  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate touches a browser type. The `vitrine` crate maps
//! component state onto the DOM, and tests read it directly.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Easing, Tween};
pub use input::Key;
pub use layout::Rect;
pub use render::{DrawList, RenderCommand};
pub use style::{Color, Theme, ThemeMode};
pub use widget::{
    ButtonSize, ButtonVariant, ButtonWidget, InputField, Modal, ModalEvent, ModalOptions,
    ModalState, ValidateOn, Validation, Validator, WidgetFlags, WidgetId,
};
