//! Seam to the host that actually renders native dialogs and windows.

use shared::{
    domain::{DialogHandle, WindowId},
    protocol::{DialogRequest, WindowRequest},
};

pub trait HostBridge {
    fn present_dialog(&mut self, handle: DialogHandle, request: &DialogRequest);
    fn open_window(&mut self, window_id: WindowId, request: &WindowRequest);
    fn close_window(&mut self, window_id: WindowId);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    PresentDialog {
        handle: DialogHandle,
        request: DialogRequest,
    },
    OpenWindow {
        window_id: WindowId,
        request: WindowRequest,
    },
    CloseWindow {
        window_id: WindowId,
    },
}

/// Host that renders nothing and remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn presented_dialogs(&self) -> impl Iterator<Item = (DialogHandle, &DialogRequest)> {
        self.calls.iter().filter_map(|call| match call {
            HostCall::PresentDialog { handle, request } => Some((*handle, request)),
            _ => None,
        })
    }
}

impl HostBridge for RecordingHost {
    fn present_dialog(&mut self, handle: DialogHandle, request: &DialogRequest) {
        self.calls.push(HostCall::PresentDialog {
            handle,
            request: request.clone(),
        });
    }

    fn open_window(&mut self, window_id: WindowId, request: &WindowRequest) {
        self.calls.push(HostCall::OpenWindow {
            window_id,
            request: request.clone(),
        });
    }

    fn close_window(&mut self, window_id: WindowId) {
        self.calls.push(HostCall::CloseWindow { window_id });
    }
}
