use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

/// Форма бронирования: имя и email, как в диалоге "Book Your Ticket".
#[derive(Debug, Clone, Default, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Email is required")));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new("pattern").with_message(Cow::Borrowed("Invalid email address")));
    }
    Ok(())
}

impl BookingForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Сообщения об ошибках в порядке полей формы.
    pub fn check(&self) -> Result<(), Vec<String>> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();

        let messages: Vec<String> = ["name", "email"]
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .filter_map(|errs| errs.first())
            .map(|err| {
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })
            .collect();

        Err(messages)
    }
}
