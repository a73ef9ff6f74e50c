//! Reusable page components.
//!
//! Each component is plain state plus the CSS classes that state implies.
//! The browser layer copies classes and attributes onto the element.

mod button;
mod base;
mod input_field;
mod modal;

pub use button::{ButtonSize, ButtonVariant, ButtonWidget};
pub use base::{WidgetFlags, WidgetId};
pub use input_field::{InputField, ValidateOn, Validation, Validator};
pub use modal::{Modal, ModalEvent, ModalOptions, ModalState};
