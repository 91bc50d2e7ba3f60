use super::*;
use crate::validation::{EMPTY_FORM_MESSAGE, INVALID_EMAIL_MESSAGE};

fn fill(form: &mut FormController, name: &str, email: &str, phone: &str) {
    form.on_field_change(FormField::FirstName, name);
    form.on_field_change(FormField::Email, email);
    form.on_field_change(FormField::Phone, phone);
}

#[test]
fn starts_empty_without_message() {
    let form = FormController::new();
    assert_eq!(form.fields(), &FormFields::default());
    assert_eq!(form.message(), None);
    assert_eq!(form.status(), FormStatus::Editing);
}

#[test]
fn editing_does_not_validate_or_hide_the_last_message() {
    let mut form = FormController::new();
    form.on_submit();
    form.on_field_change(FormField::FirstName, "John");

    assert_eq!(form.message(), Some(EMPTY_FORM_MESSAGE));
    assert_eq!(form.fields().first_name, "John");
}

#[test]
fn invalid_email_is_reported_and_fields_survive() {
    let mut form = FormController::new();
    fill(&mut form, "John", "Doe", "0701234567");

    let outcome = form.on_submit();
    assert_eq!(outcome.verdict, ValidationVerdict::InvalidEmail);
    assert_eq!(outcome.message, INVALID_EMAIL_MESSAGE);
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(form.fields().email, "Doe");
}

#[test]
fn valid_submission_is_accepted_and_repeatable() {
    let mut form = FormController::new();
    fill(&mut form, "John Doe", "john.doe@email.com", "0701234567");

    let first = form.on_submit();
    let second = form.on_submit();
    assert_eq!(first, second);
    assert_eq!(first.message, "Thanks John Doe");
    assert_eq!(form.status(), FormStatus::Accepted);
    assert!(form.view().accepted);
    assert_eq!(form.fields().first_name, "John Doe");
}

#[test]
fn editing_after_acceptance_returns_to_editing() {
    let mut form = FormController::new();
    fill(&mut form, "John Doe", "john.doe@email.com", "0701234567");
    form.on_submit();

    form.on_field_change(FormField::Phone, "0700000000");
    assert_eq!(form.status(), FormStatus::Editing);
}

#[test]
fn clear_then_submit_is_always_empty() {
    let mut form = FormController::new();
    fill(&mut form, "John Doe", "john.doe@email.com", "0701234567");
    form.on_submit();

    form.on_clear();
    assert_eq!(form.message(), None);
    assert_eq!(form.fields(), &FormFields::default());

    let outcome = form.on_submit();
    assert!(matches!(outcome.verdict, ValidationVerdict::Empty(_)));
    assert_eq!(form.message(), Some(EMPTY_FORM_MESSAGE));
}
