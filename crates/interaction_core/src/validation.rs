//! Pure validation of the registration form.

use shared::domain::FormField;

pub const EMPTY_FORM_MESSAGE: &str = "Please fill all fields before registering.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

impl FormFields {
    pub fn new(
        first_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn missing(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    /// Fields left blank. Order carries no meaning.
    Empty(Vec<FormField>),
    InvalidEmail,
    /// The first name exactly as entered.
    Valid(String),
}

impl ValidationVerdict {
    pub fn message(&self) -> String {
        match self {
            Self::Empty(_) => EMPTY_FORM_MESSAGE.to_string(),
            Self::InvalidEmail => INVALID_EMAIL_MESSAGE.to_string(),
            Self::Valid(first_name) => format!("Thanks {}", first_name.trim()),
        }
    }
}

/// Emptiness is checked before the email shape, so an incomplete form with a
/// malformed address still reports `Empty`.
pub fn validate(fields: &FormFields) -> ValidationVerdict {
    let missing = fields.missing();
    if !missing.is_empty() {
        return ValidationVerdict::Empty(missing);
    }

    if !is_valid_email(&fields.email) {
        return ValidationVerdict::InvalidEmail;
    }

    ValidationVerdict::Valid(fields.first_name.clone())
}

/// `local@domain.tld`: one `@`, a non-empty local part, and a dotted domain
/// whose segments are all non-empty. Whitespace is not allowed anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && domain.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
