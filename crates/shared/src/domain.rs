use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(DialogHandle);
id_newtype!(WindowId);

/// Strips a `#id` / `tag#id` selector down to the bare DOM id.
pub fn selector_id(raw: &str) -> &str {
    let raw = raw.trim();
    raw.rsplit_once('#').map(|(_, id)| id).unwrap_or(raw)
}

/// Every interactive element the page exposes, keyed by its DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetId {
    HoverButton,
    ContextButton,
    DoubleClickButton,
    DragCard,
    DropTarget,
    ResetDrop,
    NativeAlert,
    NativeConfirm,
    OpenChild,
    OpenNewPage,
    FirstName,
    EmailAddr,
    Phone,
    SubmitRegistration,
    ClearRegistration,
}

impl WidgetId {
    pub const ALL: [WidgetId; 15] = [
        WidgetId::HoverButton,
        WidgetId::ContextButton,
        WidgetId::DoubleClickButton,
        WidgetId::DragCard,
        WidgetId::DropTarget,
        WidgetId::ResetDrop,
        WidgetId::NativeAlert,
        WidgetId::NativeConfirm,
        WidgetId::OpenChild,
        WidgetId::OpenNewPage,
        WidgetId::FirstName,
        WidgetId::EmailAddr,
        WidgetId::Phone,
        WidgetId::SubmitRegistration,
        WidgetId::ClearRegistration,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::HoverButton => "btn-hover",
            Self::ContextButton => "btn-ctx",
            Self::DoubleClickButton => "btn-dbl",
            Self::DragCard => "drag-card",
            Self::DropTarget => "drop-target",
            Self::ResetDrop => "reset-drop",
            Self::NativeAlert => "native-alert",
            Self::NativeConfirm => "native-confirm",
            Self::OpenChild => "open-child",
            Self::OpenNewPage => "open-new-page",
            Self::FirstName => "first_name",
            Self::EmailAddr => "email_addr",
            Self::Phone => "phone",
            Self::SubmitRegistration => "submit-reg",
            Self::ClearRegistration => "clear-reg",
        }
    }

    /// Accepts the bare id as well as a `#id` or `tag#id` selector.
    pub fn from_dom_id(raw: &str) -> Option<Self> {
        let id = selector_id(raw);
        Self::ALL.into_iter().find(|widget| widget.dom_id() == id)
    }

    pub fn form_field(self) -> Option<FormField> {
        match self {
            Self::FirstName => Some(FormField::FirstName),
            Self::EmailAddr => Some(FormField::Email),
            Self::Phone => Some(FormField::Phone),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    Email,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::FirstName, FormField::Email, FormField::Phone];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Alert,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogOutcome {
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Popup,
    NewPage,
}
