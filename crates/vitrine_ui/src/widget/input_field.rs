//! Input field with validation.
//!
//! Validation runs on blur, on every input, or only on submit. Once a field
//! is invalid, each input re-validates so the error clears as the user fixes it.

use std::sync::OnceLock;

use regex::Regex;

use super::base::{WidgetFlags, WidgetId};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const PHONE_PATTERN: &str = r"^\+?[\d\s\-\(\)]+$";
const URL_PATTERN: &str = r"^https?://.+";

fn builtin(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn matches_builtin(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    builtin(cell, pattern).is_some_and(|re| re.is_match(value))
}

/// A value check.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Not blank after trimming.
    Required,
    /// Looks like `user@host.tld`.
    Email,
    /// Digits, spaces, dashes, parentheses, optional leading `+`.
    Phone,
    /// Starts with `http://` or `https://`.
    Url,
    /// At least n characters.
    MinLength(usize),
    /// At most n characters.
    MaxLength(usize),
    /// Matches a caller-supplied pattern.
    Pattern(Regex),
}

impl Validator {
    /// Returns true if `value` passes.
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
        static PHONE: OnceLock<Option<Regex>> = OnceLock::new();
        static URL: OnceLock<Option<Regex>> = OnceLock::new();

        match self {
            Self::Required => !value.trim().is_empty(),
            Self::Email => matches_builtin(&EMAIL, EMAIL_PATTERN, value),
            Self::Phone => matches_builtin(&PHONE, PHONE_PATTERN, value),
            Self::Url => matches_builtin(&URL, URL_PATTERN, value),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Pattern(re) => re.is_match(value),
        }
    }
}

/// When validation runs automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidateOn {
    /// When the field loses focus.
    #[default]
    Blur,
    /// On every input event.
    Input,
    /// Only when the form is submitted.
    Submit,
}

/// Validation state of a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validation {
    /// Not validated yet.
    #[default]
    Unvalidated,
    /// Passed.
    Valid,
    /// Failed with a message.
    Invalid(String),
}

/// A text input, textarea or select with validation feedback.
#[derive(Debug, Clone)]
pub struct InputField {
    id: WidgetId,
    value: String,
    required: bool,
    validate_on: ValidateOn,
    validator: Option<Validator>,
    error_message: String,
    success_message: String,
    show_feedback: bool,
    flags: WidgetFlags,
    state: Validation,
}

impl InputField {
    /// Message for a blank required field.
    pub const REQUIRED_MESSAGE: &'static str = "This field is required";
    /// Default message for a failed validator.
    pub const DEFAULT_ERROR: &'static str = "Invalid input";

    /// Creates an optional field validated on blur.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(id),
            value: String::new(),
            required: false,
            validate_on: ValidateOn::default(),
            validator: None,
            error_message: Self::DEFAULT_ERROR.to_string(),
            success_message: String::new(),
            show_feedback: true,
            flags: WidgetFlags::new(),
            state: Validation::Unvalidated,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Sets the message shown when the validator fails.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Sets the message shown when the field is valid.
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Sets when validation runs.
    #[must_use]
    pub fn validate_on(mut self, trigger: ValidateOn) -> Self {
        self.validate_on = trigger;
        self
    }

    /// Hides the feedback message element.
    #[must_use]
    pub fn without_feedback(mut self) -> Self {
        self.show_feedback = false;
        self
    }

    /// Returns the widget id.
    #[must_use]
    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the validation state.
    #[must_use]
    pub fn state(&self) -> &Validation {
        &self.state
    }

    /// Returns `Some(true)`/`Some(false)` once validated.
    #[must_use]
    pub fn is_valid(&self) -> Option<bool> {
        match self.state {
            Validation::Unvalidated => None,
            Validation::Valid => Some(true),
            Validation::Invalid(_) => Some(false),
        }
    }

    /// Handles an input event carrying the new value.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.validate_on == ValidateOn::Input || self.is_valid() == Some(false) {
            self.validate();
        }
    }

    /// Handles the field losing focus.
    pub fn on_blur(&mut self) {
        if self.validate_on == ValidateOn::Blur {
            self.validate();
        }
    }

    /// Sets the value programmatically.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.validate_on == ValidateOn::Input {
            self.validate();
        }
    }

    /// Validates the current value and returns the result.
    pub fn validate(&mut self) -> bool {
        self.state = if self.required && self.value.trim().is_empty() {
            Validation::Invalid(Self::REQUIRED_MESSAGE.to_string())
        } else if self
            .validator
            .as_ref()
            .is_some_and(|validator| !validator.check(&self.value))
        {
            Validation::Invalid(self.error_message.clone())
        } else {
            Validation::Valid
        };
        tracing::trace!(field = self.id.as_str(), state = ?self.state, "input validated");
        self.state == Validation::Valid
    }

    /// Forces an error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = Validation::Invalid(message.into());
    }

    /// Clears any error and marks the field valid.
    pub fn clear_error(&mut self) {
        self.state = Validation::Valid;
    }

    /// Disables the field.
    pub fn disable(&mut self) {
        self.flags.clear(WidgetFlags::ENABLED);
    }

    /// Enables the field.
    pub fn enable(&mut self) {
        self.flags.set(WidgetFlags::ENABLED);
    }

    /// Returns true if disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        !self.flags.has(WidgetFlags::ENABLED)
    }

    /// CSS classes for the input element.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.show_feedback {
            match self.state {
                Validation::Valid => classes.push("input-valid"),
                Validation::Invalid(_) => classes.push("input-invalid"),
                Validation::Unvalidated => {}
            }
        }
        if self.is_disabled() {
            classes.push("input-disabled");
        }
        classes
    }

    /// Feedback message and its CSS class, if the message element is shown.
    #[must_use]
    pub fn feedback(&self) -> Option<(&str, &'static str)> {
        if !self.show_feedback {
            return None;
        }
        match &self.state {
            Validation::Unvalidated => None,
            Validation::Valid => Some((self.success_message.as_str(), "input-validation-success")),
            Validation::Invalid(message) => Some((message.as_str(), "input-validation-error")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validators() {
        assert!(Validator::Email.check("ana@example.com"));
        assert!(!Validator::Email.check("ana@example"));
        assert!(Validator::Phone.check("+55 (11) 9999-0000"));
        assert!(!Validator::Phone.check("call me"));
        assert!(Validator::Url.check("https://github.com"));
        assert!(!Validator::Url.check("ftp://host"));
        assert!(Validator::MinLength(3).check("çãé"));
        assert!(!Validator::MaxLength(2).check("abc"));
        assert!(!Validator::Required.check("   "));
    }

    #[test]
    fn test_required_blank_on_blur() {
        let mut field = InputField::new("name").required();
        field.on_blur();
        assert_eq!(
            field.state(),
            &Validation::Invalid(InputField::REQUIRED_MESSAGE.to_string())
        );
        assert_eq!(field.classes(), vec!["input-invalid"]);
    }

    #[test]
    fn test_invalid_field_revalidates_on_input() {
        let mut field = InputField::new("email")
            .with_validator(Validator::Email)
            .with_error_message("Enter a valid email");

        field.on_input("ana@");
        assert_eq!(field.is_valid(), None, "blur-validated fields wait for blur");

        field.on_blur();
        assert_eq!(field.feedback(), Some(("Enter a valid email", "input-validation-error")));

        field.on_input("ana@example.com");
        assert_eq!(field.is_valid(), Some(true));
    }

    #[test]
    fn test_submit_only() {
        let mut field = InputField::new("msg")
            .validate_on(ValidateOn::Submit)
            .with_validator(Validator::MinLength(10));
        field.on_input("short");
        field.on_blur();
        assert_eq!(field.is_valid(), None);
        assert!(!field.validate());
    }

    #[test]
    fn test_disable_and_errors() {
        let mut field = InputField::new("x").without_feedback();
        field.disable();
        field.set_error("Server rejected");
        assert_eq!(field.classes(), vec!["input-disabled"]);
        assert_eq!(field.feedback(), None);
        field.clear_error();
        field.enable();
        assert_eq!(field.is_valid(), Some(true));
        assert!(!field.is_disabled());
    }
}
