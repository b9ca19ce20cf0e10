//! Events delivered from the backend worker to the UI thread.

use client_core::{CancellationOutcome, PendingCancellation};

#[derive(Debug)]
pub enum UiEvent {
    CancellationResolved {
        ticket: PendingCancellation,
        outcome: CancellationOutcome,
    },
    BackendUnavailable(String),
}
