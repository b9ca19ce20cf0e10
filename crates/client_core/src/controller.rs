//! Cancellation form state machine: input, submission, and the single active outcome.

use std::collections::BTreeSet;

use shared::domain::BookingId;
use tracing::{info, warn};

use crate::{
    outcome::{classify, CancellationOutcome, CancellationReceipt},
    transport::BookingService,
};

/// Issued when a submission passes validation and a request should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCancellation {
    pub attempt: u64,
    pub booking_id: BookingId,
}

#[derive(Debug, Default)]
pub struct CancellationController {
    identifier_input: String,
    active_outcome: Option<CancellationOutcome>,
    next_attempt: u64,
    in_flight: BTreeSet<u64>,
}

impl CancellationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier_input(&self) -> &str {
        &self.identifier_input
    }

    /// Mutable access for widgets that edit the input in place.
    pub fn identifier_input_mut(&mut self) -> &mut String {
        &mut self.identifier_input
    }

    pub fn update_identifier(&mut self, text: impl Into<String>) {
        self.identifier_input = text.into();
    }

    pub fn active_outcome(&self) -> Option<&CancellationOutcome> {
        self.active_outcome.as_ref()
    }

    pub fn success_dialog(&self) -> Option<&CancellationReceipt> {
        match &self.active_outcome {
            Some(CancellationOutcome::Success(receipt)) => Some(receipt),
            _ => None,
        }
    }

    pub fn error_dialog(&self) -> Option<&CancellationOutcome> {
        self.active_outcome
            .as_ref()
            .filter(|outcome| outcome.is_error())
    }

    pub fn is_request_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Validates the input. An empty identifier sets the validation outcome and
    /// yields no ticket; otherwise the returned ticket must be completed with
    /// [`complete_submission`](Self::complete_submission).
    pub fn begin_submission(&mut self) -> Option<PendingCancellation> {
        let booking_id = match BookingId::parse(&self.identifier_input) {
            Ok(booking_id) => booking_id,
            Err(_) => {
                self.active_outcome = Some(CancellationOutcome::validation_failed());
                return None;
            }
        };

        self.next_attempt += 1;
        let attempt = self.next_attempt;
        if !self.in_flight.is_empty() {
            warn!(
                attempt,
                outstanding = self.in_flight.len(),
                "cancellation submitted while a previous request is still outstanding"
            );
        }
        self.in_flight.insert(attempt);
        info!(attempt, booking_id = %booking_id, "submitting booking cancellation");

        Some(PendingCancellation {
            attempt,
            booking_id,
        })
    }

    /// Applies the outcome of an issued ticket. Outcomes are applied in the
    /// order they resolve, so a slower earlier attempt replaces a newer one.
    /// Returns `false` for tickets that were never issued or already completed.
    pub fn complete_submission(
        &mut self,
        ticket: &PendingCancellation,
        outcome: CancellationOutcome,
    ) -> bool {
        if !self.in_flight.remove(&ticket.attempt) {
            warn!(attempt = ticket.attempt, "ignoring completion for unknown attempt");
            return false;
        }
        if ticket.attempt < self.next_attempt {
            warn!(
                attempt = ticket.attempt,
                latest = self.next_attempt,
                "stale cancellation outcome replaces the active one"
            );
        }

        match &outcome {
            CancellationOutcome::Success(receipt) => info!(
                attempt = ticket.attempt,
                booking_id = %ticket.booking_id,
                status = %receipt.status,
                "booking cancellation confirmed"
            ),
            CancellationOutcome::HttpError {
                status_code,
                detail,
            } => warn!(
                attempt = ticket.attempt,
                booking_id = %ticket.booking_id,
                status_code,
                detail = %detail,
                "booking cancellation rejected"
            ),
            _ => warn!(
                attempt = ticket.attempt,
                booking_id = %ticket.booking_id,
                "booking cancellation failed"
            ),
        }

        self.active_outcome = Some(outcome);
        true
    }

    pub async fn submit_cancellation<S>(&mut self, service: &S)
    where
        S: BookingService + ?Sized,
    {
        let Some(ticket) = self.begin_submission() else {
            return;
        };
        let outcome = run_cancellation(service, &ticket).await;
        self.complete_submission(&ticket, outcome);
    }

    pub fn dismiss_success(&mut self) {
        if self.success_dialog().is_some() {
            self.active_outcome = None;
        }
    }

    pub fn dismiss_error(&mut self) {
        if self.error_dialog().is_some() {
            self.active_outcome = None;
        }
    }
}

/// Performs the network step for a ticket and classifies its result.
pub async fn run_cancellation<S>(service: &S, ticket: &PendingCancellation) -> CancellationOutcome
where
    S: BookingService + ?Sized,
{
    classify(service.cancel_booking(&ticket.booking_id).await)
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
