//! Native alert/confirm mediation.
//!
//! A request is presented through the host and parked together with the
//! caller's continuation. The continuation runs exactly once, when the host
//! reports the user's answer; nothing blocks while the dialog is open.

use std::collections::VecDeque;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::{
    domain::{DialogHandle, DialogKind, DialogOutcome},
    error::InteractionError,
    protocol::{DialogRequest, DialogResolution, PendingDialogView},
};
use tracing::{debug, info, warn};

use crate::{config::DialogConflictPolicy, host::HostBridge};

/// Resolutions held for a subscriber that has not read them yet.
pub const OUTCOME_BUFFER: usize = 64;

/// Runs with the user's answer; may return a page-level message to show.
pub type DialogContinuation = Box<dyn FnOnce(DialogOutcome) -> Option<String>>;

struct PendingDialog {
    handle: DialogHandle,
    request: DialogRequest,
    continuation: DialogContinuation,
}

pub struct DialogBroker {
    policy: DialogConflictPolicy,
    next_handle: u64,
    pending: Option<PendingDialog>,
    queue: VecDeque<PendingDialog>,
    subscribers: Vec<Sender<DialogResolution>>,
}

impl DialogBroker {
    pub fn new(policy: DialogConflictPolicy) -> Self {
        Self {
            policy,
            next_handle: 1,
            pending: None,
            queue: VecDeque::new(),
            subscribers: Vec::new(),
        }
    }

    /// Resolutions arrive in the order the dialogs were requested. A
    /// subscriber that falls [`OUTCOME_BUFFER`] behind misses the overflow.
    pub fn subscribe(&mut self) -> Receiver<DialogResolution> {
        let (tx, rx) = bounded(OUTCOME_BUFFER);
        self.subscribers.push(tx);
        rx
    }

    pub fn pending(&self) -> Option<(DialogHandle, &DialogRequest)> {
        self.pending
            .as_ref()
            .map(|pending| (pending.handle, &pending.request))
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn view(&self) -> Option<PendingDialogView> {
        self.pending.as_ref().map(|pending| PendingDialogView {
            handle: pending.handle,
            request: pending.request.clone(),
            queued: self.queue.len(),
        })
    }

    pub fn request(
        &mut self,
        host: &mut dyn HostBridge,
        kind: DialogKind,
        message: impl Into<String>,
        continuation: DialogContinuation,
    ) -> Result<DialogHandle, InteractionError> {
        if let Some(pending) = &self.pending {
            if self.policy == DialogConflictPolicy::Reject {
                warn!(
                    pending = pending.handle.0,
                    requested = ?kind,
                    "dialog request rejected while another is pending"
                );
                return Err(InteractionError::DialogConflict {
                    pending: pending.handle,
                    requested: kind,
                });
            }
        }

        let handle = DialogHandle(self.next_handle);
        self.next_handle += 1;
        let dialog = PendingDialog {
            handle,
            request: DialogRequest {
                kind,
                message: message.into(),
            },
            continuation,
        };

        if self.pending.is_some() {
            debug!(handle = handle.0, queued = self.queue.len() + 1, "dialog queued");
            self.queue.push_back(dialog);
        } else {
            self.present(host, dialog);
        }
        Ok(handle)
    }

    pub fn accept(
        &mut self,
        host: &mut dyn HostBridge,
        handle: DialogHandle,
    ) -> Result<DialogResolution, InteractionError> {
        self.resolve(host, handle, DialogOutcome::Accepted)
    }

    pub fn dismiss(
        &mut self,
        host: &mut dyn HostBridge,
        handle: DialogHandle,
    ) -> Result<DialogResolution, InteractionError> {
        self.resolve(host, handle, DialogOutcome::Dismissed)
    }

    /// Invalid resolutions leave the pending dialog untouched.
    pub fn resolve(
        &mut self,
        host: &mut dyn HostBridge,
        handle: DialogHandle,
        outcome: DialogOutcome,
    ) -> Result<DialogResolution, InteractionError> {
        let current = self
            .pending
            .as_ref()
            .ok_or(InteractionError::NoPendingDialog)?;
        if current.handle != handle {
            return Err(InteractionError::StaleDialogHandle {
                given: handle,
                pending: current.handle,
            });
        }
        if current.request.kind == DialogKind::Alert && outcome == DialogOutcome::Dismissed {
            return Err(InteractionError::UnsupportedResolution {
                kind: DialogKind::Alert,
            });
        }

        let Some(dialog) = self.pending.take() else {
            return Err(InteractionError::NoPendingDialog);
        };
        let page_message = (dialog.continuation)(outcome);
        let resolution = DialogResolution {
            handle: dialog.handle,
            request: dialog.request,
            outcome,
            page_message,
        };
        info!(
            handle = resolution.handle.0,
            kind = ?resolution.request.kind,
            ?outcome,
            "dialog resolved"
        );

        self.notify(&resolution);
        if let Some(next) = self.queue.pop_front() {
            self.present(host, next);
        }
        Ok(resolution)
    }

    fn present(&mut self, host: &mut dyn HostBridge, dialog: PendingDialog) {
        debug!(handle = dialog.handle.0, kind = ?dialog.request.kind, "presenting dialog");
        host.present_dialog(dialog.handle, &dialog.request);
        self.pending = Some(dialog);
    }

    fn notify(&mut self, resolution: &DialogResolution) {
        self.subscribers
            .retain(|tx| match tx.try_send(resolution.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        handle = resolution.handle.0,
                        "dialog outcome subscriber is full; skipping"
                    );
                    true
                }
                Err(TrySendError::Disconnected(_)) => {
                    debug!("dropping disconnected dialog outcome subscriber");
                    false
                }
            });
    }
}

#[cfg(test)]
#[path = "tests/dialog_tests.rs"]
mod tests;
