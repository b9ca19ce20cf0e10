//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. An undeliverable command is handed
/// back so the caller can resolve whatever it was waiting on.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), BackendCommand> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            *status = "UI command queue is full; please retry".to_string();
            Err(cmd)
        }
        Err(TrySendError::Disconnected(cmd)) => {
            *status = "Backend worker disconnected; restart the application".to_string();
            Err(cmd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::PendingCancellation;
    use crossbeam_channel::bounded;
    use shared::domain::BookingId;

    fn cancel_command() -> BackendCommand {
        BackendCommand::CancelBooking {
            ticket: PendingCancellation {
                attempt: 1,
                booking_id: BookingId::parse("BK1").expect("id"),
            },
        }
    }

    #[test]
    fn queues_command_when_capacity_available() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, cancel_command(), &mut status).is_ok());
        assert!(status.is_empty());
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::CancelBooking { .. })
        ));
    }

    #[test]
    fn hands_back_command_when_queue_full() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, cancel_command(), &mut status).expect("first fits");
        let returned = dispatch_backend_command(&tx, cancel_command(), &mut status);
        assert!(returned.is_err());
        assert!(status.contains("full"));
    }

    #[test]
    fn hands_back_command_when_worker_gone() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        drop(rx);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, cancel_command(), &mut status).is_err());
        assert!(status.contains("disconnected"));
    }
}
