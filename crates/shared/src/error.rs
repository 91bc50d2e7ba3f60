use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DialogHandle, DialogKind, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    DialogConflict,
    NoPendingDialog,
    StaleDialogHandle,
    UnsupportedResolution,
    UnknownWindow,
}

/// User-facing record of a rejected interaction, kept in page snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("dialog {pending:?} is still pending; request for a new {requested:?} rejected")]
    DialogConflict {
        pending: DialogHandle,
        requested: DialogKind,
    },
    #[error("no dialog is pending")]
    NoPendingDialog,
    #[error("dialog {given:?} is not the pending dialog {pending:?}")]
    StaleDialogHandle {
        given: DialogHandle,
        pending: DialogHandle,
    },
    #[error("{kind:?} dialogs cannot be dismissed")]
    UnsupportedResolution { kind: DialogKind },
    #[error("window {0:?} is not open")]
    UnknownWindow(WindowId),
}

impl InteractionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DialogConflict { .. } => ErrorCode::DialogConflict,
            Self::NoPendingDialog => ErrorCode::NoPendingDialog,
            Self::StaleDialogHandle { .. } => ErrorCode::StaleDialogHandle,
            Self::UnsupportedResolution { .. } => ErrorCode::UnsupportedResolution,
            Self::UnknownWindow(_) => ErrorCode::UnknownWindow,
        }
    }
}

impl From<InteractionError> for Notice {
    fn from(value: InteractionError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
