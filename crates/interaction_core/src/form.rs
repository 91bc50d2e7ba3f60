//! Registration form lifecycle: edit, submit, clear.

use shared::{domain::FormField, protocol::FormView};
use tracing::{debug, info};

use crate::validation::{validate, FormFields, ValidationVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub verdict: ValidationVerdict,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct FormController {
    fields: FormFields,
    message: Option<String>,
    status: FormStatus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Edits never validate and leave the last message on screen.
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.status = FormStatus::Editing;
        debug!(?field, "form field updated");
    }

    pub fn on_clear(&mut self) {
        self.fields = FormFields::default();
        self.message = None;
        self.status = FormStatus::Editing;
        debug!("form cleared");
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        let verdict = validate(&self.fields);
        let message = verdict.message();

        match &verdict {
            ValidationVerdict::Valid(_) => {
                self.status = FormStatus::Accepted;
                info!("registration accepted");
            }
            ValidationVerdict::Empty(missing) => {
                self.status = FormStatus::Editing;
                debug!(?missing, "registration rejected: missing fields");
            }
            ValidationVerdict::InvalidEmail => {
                self.status = FormStatus::Editing;
                debug!("registration rejected: malformed email");
            }
        }

        self.message = Some(message.clone());
        SubmitOutcome { verdict, message }
    }

    pub fn view(&self) -> FormView {
        FormView {
            first_name: self.fields.first_name.clone(),
            email: self.fields.email.clone(),
            phone: self.fields.phone.clone(),
            message: self.message.clone(),
            accepted: self.status == FormStatus::Accepted,
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
