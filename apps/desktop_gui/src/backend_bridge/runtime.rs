//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    run_cancellation, CancellationOutcome, ClientSettings, HttpBookingService, PendingCancellation,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let service = match HttpBookingService::new(&settings) {
            Ok(service) => Arc::new(service),
            Err(err) => {
                tracing::error!("failed to build booking service: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "booking service unavailable: {err}"
                )));
                return;
            }
        };
        tracing::info!(base_url = %settings.base_url, "backend worker ready");

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::CancelBooking { ticket } => {
                        let service = Arc::clone(&service);
                        let ui_tx = ui_tx.clone();
                        // Requests run concurrently; the controller orders their outcomes.
                        tokio::spawn(async move {
                            let outcome = run_cancellation(service.as_ref(), &ticket).await;
                            deliver_resolution(ui_tx, ticket, outcome).await;
                        });
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

/// The controller waits on every issued ticket, so resolutions block for queue
/// space instead of being dropped like informational events.
async fn deliver_resolution(
    ui_tx: Sender<UiEvent>,
    ticket: PendingCancellation,
    outcome: CancellationOutcome,
) {
    let attempt = ticket.attempt;
    let delivered = tokio::task::spawn_blocking(move || {
        ui_tx.send(UiEvent::CancellationResolved { ticket, outcome })
    })
    .await;
    match delivered {
        Ok(Ok(())) => {}
        Ok(Err(_)) => {
            tracing::error!(attempt, "ui event queue disconnected; cancellation result lost")
        }
        Err(err) => tracing::error!(attempt, "failed to deliver cancellation result: {err}"),
    }
}
