use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DialogHandle, DialogKind, DialogOutcome, WindowId, WindowKind},
    error::Notice,
};

/// Raw input as delivered by the page. Targets are DOM ids or simple
/// `tag#id` selectors; anything unrecognized is ignored by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum UiInput {
    Hover {
        target: String,
    },
    PointerLeave {
        target: String,
    },
    Click {
        target: String,
    },
    ContextMenu {
        target: String,
    },
    DoubleClick {
        target: String,
    },
    Drop {
        source: String,
        target: String,
    },
    Fill {
        target: String,
        value: String,
    },
    ResolveDialog {
        handle: DialogHandle,
        outcome: DialogOutcome,
    },
    CloseWindow {
        window_id: WindowId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub message: String,
}

/// Delivered to dialog outcome subscribers once a request is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogResolution {
    pub handle: DialogHandle,
    pub request: DialogRequest,
    pub outcome: DialogOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRequest {
    pub kind: WindowKind,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeView {
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropZoneView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub first_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDialogView {
    pub handle: DialogHandle,
    pub request: DialogRequest,
    pub queued: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowView {
    pub window_id: WindowId,
    pub kind: WindowKind,
    pub url: String,
    pub heading: String,
}

/// Read-only view of everything the rendering layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub hover_label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context_menu: Vec<String>,
    pub badges: Vec<BadgeView>,
    pub drop_zone: DropZoneView,
    pub form: FormView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_dialog: Option<PendingDialogView>,
    pub windows: Vec<WindowView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_notice: Option<Notice>,
}

impl PageSnapshot {
    /// Concatenated visible text, the way a page-wide text search sees it.
    pub fn visible_text(&self) -> String {
        let mut parts: Vec<&str> = vec![self.hover_label.as_str()];
        parts.extend(self.context_menu.iter().map(String::as_str));
        parts.extend(self.badges.iter().map(|badge| badge.label.as_str()));
        parts.push(self.drop_zone.label.as_str());
        if let Some(message) = &self.form.message {
            parts.push(message);
        }
        if let Some(message) = &self.page_message {
            parts.push(message);
        }
        parts.join("\n")
    }
}
