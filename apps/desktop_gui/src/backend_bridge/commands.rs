//! Backend commands queued from UI to backend worker.

use client_core::PendingCancellation;

#[derive(Debug)]
pub enum BackendCommand {
    CancelBooking { ticket: PendingCancellation },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CancelBooking { .. } => "cancel_booking",
        }
    }
}
