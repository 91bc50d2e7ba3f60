//! Drop-zone state driven by drag-and-drop of the page's card.

use shared::{domain::selector_id, protocol::DropZoneView};
use tracing::{debug, info};

use crate::config::PageSettings;

pub const EMPTY_DROP_LABEL: &str = "Drop here";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropZoneState {
    occupant: Option<String>,
}

impl DropZoneState {
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Always derived from the occupant, never stored.
    pub fn label(&self) -> String {
        match &self.occupant {
            Some(item) => format!("Item: {item}"),
            None => EMPTY_DROP_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Accepted,
    Ignored,
}

#[derive(Debug)]
pub struct DragDropController {
    source_id: String,
    target_id: String,
    item_name: String,
    zone: DropZoneState,
}

impl DragDropController {
    pub fn new(settings: &PageSettings) -> Self {
        Self {
            source_id: selector_id(&settings.drag_source_id).to_string(),
            target_id: selector_id(&settings.drop_target_id).to_string(),
            item_name: settings.drag_item_name.clone(),
            zone: DropZoneState::default(),
        }
    }

    pub fn zone(&self) -> &DropZoneState {
        &self.zone
    }

    pub fn on_drop(&mut self, source: &str, target: &str) -> DropOutcome {
        if selector_id(source) != self.source_id || selector_id(target) != self.target_id {
            debug!(%source, drop_target = %target, "ignoring drop outside the recognized pair");
            return DropOutcome::Ignored;
        }

        self.zone.occupant = Some(self.item_name.clone());
        info!(item = %self.item_name, "item dropped on target");
        DropOutcome::Accepted
    }

    pub fn on_reset(&mut self) {
        self.zone = DropZoneState::default();
        debug!("drop zone reset");
    }

    pub fn view(&self) -> DropZoneView {
        DropZoneView {
            occupant: self.zone.occupant.clone(),
            label: self.zone.label(),
        }
    }
}
