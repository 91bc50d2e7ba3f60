use interaction_core::{
    config::PageSettings,
    host::HostCall,
    InputOutcome, InteractionController, Reaction,
};
use shared::{
    domain::{DialogKind, DialogOutcome, WindowKind},
    protocol::UiInput,
};

fn page() -> InteractionController {
    InteractionController::with_recording_host(PageSettings::default())
}

fn click(target: &str) -> UiInput {
    UiInput::Click {
        target: target.into(),
    }
}

fn fill(target: &str, value: &str) -> UiInput {
    UiInput::Fill {
        target: target.into(),
        value: value.into(),
    }
}

#[test]
fn button_interactions() {
    let mut page = page();

    page.dispatch(UiInput::Hover {
        target: "button#btn-hover".into(),
    });
    assert!(page.snapshot().hover_label.contains("Pointer Detected"));

    page.dispatch(UiInput::ContextMenu {
        target: "button#btn-ctx".into(),
    });
    assert!(page.snapshot().visible_text().contains("Custom Option: Inspect"));

    page.dispatch(UiInput::DoubleClick {
        target: "button#btn-dbl".into(),
    });
    let snapshot = page.snapshot();
    assert_eq!(snapshot.badges.len(), 1);
    assert!(snapshot.badges[0].label.starts_with("Badge at"));
}

#[test]
fn drag_and_drop_then_reset() {
    let mut page = page();

    page.dispatch(UiInput::Drop {
        source: "#drag-card".into(),
        target: "#drop-target".into(),
    });
    assert!(page.snapshot().drop_zone.label.contains("Item: card"));

    page.dispatch(click("button#reset-drop"));
    let drop_zone = page.snapshot().drop_zone;
    assert!(!drop_zone.label.contains("Item: card"));
    assert_eq!(drop_zone.occupant, None);
}

#[test]
fn handling_alert() {
    let mut page = page();
    let outcomes = page.subscribe_dialog_outcomes();

    page.dispatch(click("#native-alert"));
    let (handle, request) = page.pending_dialog().expect("alert shown");
    assert_eq!(request.kind, DialogKind::Alert);
    assert_eq!(request.message, "This is a native alert from the test page.");

    let before = page.snapshot();
    page.dispatch(UiInput::ResolveDialog {
        handle,
        outcome: DialogOutcome::Accepted,
    });
    let after = page.snapshot();

    assert_eq!(after.page_message, before.page_message);
    assert!(after.pending_dialog.is_none());
    let resolution = outcomes.try_recv().expect("outcome delivered");
    assert_eq!(resolution.outcome, DialogOutcome::Accepted);
    assert_eq!(
        resolution.request.message,
        "This is a native alert from the test page."
    );
}

#[test]
fn dismissing_confirm() {
    let mut page = page();

    page.dispatch(click("#native-confirm"));
    let (handle, request) = page.pending_dialog().expect("confirm shown");
    assert_eq!(request.kind, DialogKind::Confirm);

    page.dispatch(UiInput::ResolveDialog {
        handle,
        outcome: DialogOutcome::Dismissed,
    });
    assert_eq!(page.page_message(), Some("User cancelled the confirmation."));
    assert!(page
        .snapshot()
        .visible_text()
        .contains("User cancelled the confirmation."));
}

#[test]
fn popup_opens_and_closes() {
    let mut page = page();

    let InputOutcome::Handled(Reaction::WindowOpened(popup)) = page.dispatch(click("#open-child"))
    else {
        panic!("popup should open");
    };
    let windows = page.snapshot().windows;
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].kind, WindowKind::Popup);

    page.dispatch(UiInput::CloseWindow { window_id: popup });
    assert!(page.snapshot().windows.is_empty());
}

#[test]
fn new_window_shows_child_heading() {
    let mut page = page();
    page.dispatch(click("#open-new-page"));

    let opened = page.host().calls().iter().find_map(|call| match call {
        HostCall::OpenWindow { request, .. } => Some(request.clone()),
        _ => None,
    });
    let request = opened.expect("host asked to open a page");
    assert_eq!(request.kind, WindowKind::NewPage);
    assert_eq!(request.title, "Example Child Page");
}

#[test]
fn handling_form() {
    let mut page = page();

    page.dispatch(click("button#submit-reg"));
    page.dispatch(fill("#first_name", "John"));
    assert_eq!(
        page.form_message(),
        Some("Please fill all fields before registering.")
    );

    page.dispatch(click("button#clear-reg"));
    page.dispatch(fill("#first_name", "John"));
    page.dispatch(fill("#email_addr", "Doe"));
    page.dispatch(fill("#phone", "0701234567"));
    page.dispatch(click("button#submit-reg"));
    assert_eq!(
        page.form_message(),
        Some("Please provide a valid email address.")
    );

    page.dispatch(click("button#clear-reg"));
    page.dispatch(fill("#first_name", "John Doe"));
    page.dispatch(fill("#email_addr", "john.doe@email.com"));
    page.dispatch(fill("#phone", "0701234567"));
    page.dispatch(click("button#submit-reg"));
    assert_eq!(page.form_message(), Some("Thanks John Doe"));
    assert!(page.snapshot().form.accepted);
}

#[test]
fn clear_then_submit_reports_empty() {
    let mut page = page();
    page.dispatch(fill("#first_name", "John Doe"));
    page.dispatch(fill("#email_addr", "john.doe@email.com"));
    page.dispatch(fill("#phone", "0701234567"));

    page.dispatch(click("#clear-reg"));
    assert_eq!(page.form_message(), None);
    page.dispatch(click("#submit-reg"));
    assert_eq!(
        page.form_message(),
        Some("Please fill all fields before registering.")
    );
}
