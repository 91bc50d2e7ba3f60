//! Interaction controller for the widget demo page.
//!
//! [`InteractionController`] is the composition root: it routes raw UI input
//! to the controller owning the affected widget and exposes read-only state
//! for the rendering layer. No failure escapes it; rejected interactions are
//! reported as [`InputOutcome::Rejected`] and kept as the page's last notice.

use chrono::{DateTime, Utc};
use crossbeam_channel::Receiver;
use shared::{
    domain::{DialogHandle, DialogKind, DialogOutcome, WidgetId, WindowId, WindowKind},
    error::{InteractionError, Notice},
    protocol::{DialogRequest, DialogResolution, PageSnapshot, UiInput},
};
use tracing::{debug, warn};

pub mod badges;
pub mod config;
pub mod dialog;
pub mod drag_drop;
pub mod form;
pub mod host;
pub mod peripheral;
pub mod validation;

use badges::{Badge, BadgeList};
use config::PageSettings;
use dialog::DialogBroker;
use drag_drop::{DragDropController, DropOutcome, DropZoneState};
use form::{FormController, SubmitOutcome};
use host::{HostBridge, RecordingHost};
use peripheral::{ContextMenu, HoverState, WindowTracker};
use validation::FormFields;

pub use config::{load_settings, load_settings_from, DialogConflictPolicy};

/// Pointer and keyboard event kinds that target a single widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Hover,
    PointerLeave,
    Click,
    ContextMenu,
    DoubleClick,
    Fill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    HoverChanged,
    ContextMenuOpened,
    ContextMenuClosed,
    BadgeAdded(Badge),
    ItemDropped,
    DropZoneReset,
    DialogRequested(DialogHandle),
    DialogResolved(DialogResolution),
    FieldUpdated,
    Submitted(SubmitOutcome),
    FormCleared,
    WindowOpened(WindowId),
    WindowClosed(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Handled(Reaction),
    /// The input targeted nothing the page reacts to.
    Ignored,
    Rejected(Notice),
}

type Handler<H> = fn(&mut InteractionController<H>, WidgetId, &str) -> HandlerResult;
type HandlerResult = Result<Reaction, InteractionError>;

pub struct InteractionController<H: HostBridge = RecordingHost> {
    settings: PageSettings,
    host: H,
    clock: fn() -> DateTime<Utc>,
    form: FormController,
    drag_drop: DragDropController,
    dialogs: DialogBroker,
    badges: BadgeList,
    hover: HoverState,
    context_menu: ContextMenu,
    windows: WindowTracker,
    page_message: Option<String>,
    last_notice: Option<Notice>,
}

impl InteractionController<RecordingHost> {
    pub fn with_recording_host(settings: PageSettings) -> Self {
        Self::new(settings, RecordingHost::new())
    }
}

impl<H: HostBridge> InteractionController<H> {
    pub fn new(settings: PageSettings, host: H) -> Self {
        Self {
            form: FormController::new(),
            drag_drop: DragDropController::new(&settings),
            dialogs: DialogBroker::new(settings.dialog_conflict_policy),
            badges: BadgeList::default(),
            hover: HoverState::default(),
            context_menu: ContextMenu::default(),
            windows: WindowTracker::new(&settings),
            page_message: None,
            last_notice: None,
            clock: Utc::now,
            settings,
            host,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn dispatch(&mut self, input: UiInput) -> InputOutcome {
        let result = match input {
            UiInput::Hover { target } => self.route(&target, EventKind::Hover, ""),
            UiInput::PointerLeave { target } => self.route(&target, EventKind::PointerLeave, ""),
            UiInput::Click { target } => {
                let menu_was_open = self.context_menu.is_open();
                self.context_menu.close();
                match self.route(&target, EventKind::Click, "") {
                    None if menu_was_open => Some(Ok(Reaction::ContextMenuClosed)),
                    routed => routed,
                }
            }
            UiInput::ContextMenu { target } => self.route(&target, EventKind::ContextMenu, ""),
            UiInput::DoubleClick { target } => self.route(&target, EventKind::DoubleClick, ""),
            UiInput::Fill { target, value } => self.route(&target, EventKind::Fill, &value),
            UiInput::Drop { source, target } => match self.drag_drop.on_drop(&source, &target) {
                DropOutcome::Accepted => Some(Ok(Reaction::ItemDropped)),
                DropOutcome::Ignored => None,
            },
            UiInput::ResolveDialog { handle, outcome } => {
                Some(self.resolve_dialog(handle, outcome).map(Reaction::DialogResolved))
            }
            UiInput::CloseWindow { window_id } => Some(
                self.windows
                    .close(&mut self.host, window_id)
                    .map(|()| Reaction::WindowClosed(window_id)),
            ),
        };

        match result {
            Some(Ok(reaction)) => {
                self.last_notice = None;
                InputOutcome::Handled(reaction)
            }
            None => {
                self.last_notice = None;
                InputOutcome::Ignored
            }
            Some(Err(error)) => {
                warn!(%error, "interaction rejected");
                let notice = Notice::from(error);
                self.last_notice = Some(notice.clone());
                InputOutcome::Rejected(notice)
            }
        }
    }

    fn route(&mut self, target: &str, kind: EventKind, value: &str) -> Option<HandlerResult> {
        let Some(widget) = WidgetId::from_dom_id(target) else {
            debug!(target_id = %target, ?kind, "input on unknown widget ignored");
            return None;
        };
        let Some(handler) = Self::handler_for(widget, kind) else {
            debug!(?widget, ?kind, "widget has no handler for event");
            return None;
        };
        Some(handler(self, widget, value))
    }

    /// The page's dispatch table.
    fn handler_for(widget: WidgetId, kind: EventKind) -> Option<Handler<H>> {
        use EventKind as E;
        use WidgetId as W;

        let handler: Handler<H> = match (widget, kind) {
            (W::HoverButton, E::Hover) => Self::on_hover,
            (W::HoverButton, E::PointerLeave) => Self::on_pointer_leave,
            (W::ContextButton, E::ContextMenu) => Self::on_context_menu,
            (W::DoubleClickButton, E::DoubleClick) => Self::on_double_click,
            (W::ResetDrop, E::Click) => Self::on_reset_drop,
            (W::NativeAlert, E::Click) => Self::on_native_alert,
            (W::NativeConfirm, E::Click) => Self::on_native_confirm,
            (W::OpenChild, E::Click) => Self::on_open_child,
            (W::OpenNewPage, E::Click) => Self::on_open_new_page,
            (W::FirstName | W::EmailAddr | W::Phone, E::Fill) => Self::on_fill,
            (W::SubmitRegistration, E::Click) => Self::on_submit,
            (W::ClearRegistration, E::Click) => Self::on_clear,
            _ => return None,
        };
        Some(handler)
    }

    fn on_hover(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        self.hover.on_enter();
        Ok(Reaction::HoverChanged)
    }

    fn on_pointer_leave(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        self.hover.on_leave();
        Ok(Reaction::HoverChanged)
    }

    fn on_context_menu(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        self.context_menu.open();
        Ok(Reaction::ContextMenuOpened)
    }

    fn on_double_click(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        let badge = self.badges.append((self.clock)()).clone();
        debug!(sequence = badge.sequence, "badge appended");
        Ok(Reaction::BadgeAdded(badge))
    }

    fn on_reset_drop(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        self.drag_drop.on_reset();
        Ok(Reaction::DropZoneReset)
    }

    fn on_native_alert(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        let message = self.settings.alert_message.clone();
        self.dialogs
            .request(&mut self.host, DialogKind::Alert, message, Box::new(|_| None))
            .map(Reaction::DialogRequested)
    }

    fn on_native_confirm(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        let message = self.settings.confirm_message.clone();
        let cancelled = self.settings.confirm_cancelled_message.clone();
        self.dialogs
            .request(
                &mut self.host,
                DialogKind::Confirm,
                message,
                Box::new(move |outcome| (outcome == DialogOutcome::Dismissed).then_some(cancelled)),
            )
            .map(Reaction::DialogRequested)
    }

    fn on_open_child(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        Ok(Reaction::WindowOpened(
            self.windows.open(&mut self.host, WindowKind::Popup),
        ))
    }

    fn on_open_new_page(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        Ok(Reaction::WindowOpened(
            self.windows.open(&mut self.host, WindowKind::NewPage),
        ))
    }

    fn on_fill(&mut self, widget: WidgetId, value: &str) -> HandlerResult {
        if let Some(field) = widget.form_field() {
            self.form.on_field_change(field, value);
        }
        Ok(Reaction::FieldUpdated)
    }

    fn on_submit(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        Ok(Reaction::Submitted(self.form.on_submit()))
    }

    fn on_clear(&mut self, _: WidgetId, _: &str) -> HandlerResult {
        self.form.on_clear();
        Ok(Reaction::FormCleared)
    }

    fn resolve_dialog(
        &mut self,
        handle: DialogHandle,
        outcome: DialogOutcome,
    ) -> Result<DialogResolution, InteractionError> {
        let resolution = self.dialogs.resolve(&mut self.host, handle, outcome)?;
        // Only the confirm flow writes the page-level message slot.
        if resolution.request.kind == DialogKind::Confirm {
            self.page_message = resolution.page_message.clone();
        }
        Ok(resolution)
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn form_fields(&self) -> &FormFields {
        self.form.fields()
    }

    pub fn form_message(&self) -> Option<&str> {
        self.form.message()
    }

    pub fn drop_zone(&self) -> &DropZoneState {
        self.drag_drop.zone()
    }

    pub fn badges(&self) -> &BadgeList {
        &self.badges
    }

    pub fn page_message(&self) -> Option<&str> {
        self.page_message.as_deref()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    pub fn pending_dialog(&self) -> Option<(DialogHandle, &DialogRequest)> {
        self.dialogs.pending()
    }

    pub fn subscribe_dialog_outcomes(&mut self) -> Receiver<DialogResolution> {
        self.dialogs.subscribe()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            hover_label: self.hover.label().to_string(),
            context_menu: self.context_menu.entries(),
            badges: self.badges.views(),
            drop_zone: self.drag_drop.view(),
            form: self.form.view(),
            page_message: self.page_message.clone(),
            pending_dialog: self.dialogs.view(),
            windows: self.windows.views(),
            last_notice: self.last_notice.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
