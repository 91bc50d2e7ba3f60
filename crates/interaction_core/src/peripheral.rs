//! One-shot widgets: hover label, custom context menu, child windows.

use std::collections::BTreeMap;

use shared::{
    domain::{WindowId, WindowKind},
    error::InteractionError,
    protocol::{WindowRequest, WindowView},
};
use tracing::{debug, info};

use crate::{config::PageSettings, host::HostBridge};

pub const HOVER_IDLE_LABEL: &str = "Hover me";
pub const HOVER_ACTIVE_LABEL: &str = "Pointer Detected";
pub const CONTEXT_MENU_ENTRIES: [&str; 1] = ["Custom Option: Inspect"];

#[derive(Debug, Default)]
pub struct HoverState {
    pointer_inside: bool,
}

impl HoverState {
    pub fn on_enter(&mut self) {
        self.pointer_inside = true;
    }

    pub fn on_leave(&mut self) {
        self.pointer_inside = false;
    }

    pub fn label(&self) -> &'static str {
        if self.pointer_inside {
            HOVER_ACTIVE_LABEL
        } else {
            HOVER_IDLE_LABEL
        }
    }
}

#[derive(Debug, Default)]
pub struct ContextMenu {
    open: bool,
}

impl ContextMenu {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn entries(&self) -> Vec<String> {
        if self.open {
            CONTEXT_MENU_ENTRIES.iter().map(|e| e.to_string()).collect()
        } else {
            Vec::new()
        }
    }
}

#[derive(Debug, Clone)]
struct OpenWindow {
    request: WindowRequest,
}

/// Child windows opened by the page. Closing one is terminal.
#[derive(Debug)]
pub struct WindowTracker {
    child_url: String,
    child_title: String,
    next_id: u64,
    open: BTreeMap<WindowId, OpenWindow>,
}

impl WindowTracker {
    pub fn new(settings: &PageSettings) -> Self {
        Self {
            child_url: settings.child_page_url.clone(),
            child_title: settings.child_page_title.clone(),
            next_id: 1,
            open: BTreeMap::new(),
        }
    }

    pub fn open(&mut self, host: &mut dyn HostBridge, kind: WindowKind) -> WindowId {
        let window_id = WindowId(self.next_id);
        self.next_id += 1;

        let request = WindowRequest {
            kind,
            url: self.child_url.clone(),
            title: self.child_title.clone(),
        };
        host.open_window(window_id, &request);
        info!(window = window_id.0, ?kind, "child window opened");
        self.open.insert(window_id, OpenWindow { request });
        window_id
    }

    pub fn close(
        &mut self,
        host: &mut dyn HostBridge,
        window_id: WindowId,
    ) -> Result<(), InteractionError> {
        self.open
            .remove(&window_id)
            .ok_or(InteractionError::UnknownWindow(window_id))?;
        host.close_window(window_id);
        debug!(window = window_id.0, "child window closed");
        Ok(())
    }

    pub fn is_open(&self, window_id: WindowId) -> bool {
        self.open.contains_key(&window_id)
    }

    pub fn views(&self) -> Vec<WindowView> {
        self.open
            .iter()
            .map(|(window_id, window)| WindowView {
                window_id: *window_id,
                kind: window.request.kind,
                url: window.request.url.clone(),
                heading: window.request.title.clone(),
            })
            .collect()
    }
}
