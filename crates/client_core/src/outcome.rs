//! Classification of a cancellation attempt into the single outcome shown to the user.

use std::collections::BTreeMap;

use shared::{
    error::EMPTY_BOOKING_ID_MESSAGE,
    protocol::{CancelBookingResponse, CancellationStatus, RegionCancellation},
};

use crate::{error::ServiceError, transport::CancelReply};

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error occurred";

pub const SUCCESS_DIALOG_TITLE: &str = "Booking Cancellation";
pub const ERROR_DIALOG_TITLE: &str = "Unable to Cancel Booking";
pub const ERROR_BADGE: &str = "Cancellation Failed";

/// What the server confirmed on a 2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationReceipt {
    pub status: String,
    pub booking_id: Option<String>,
    pub message: Option<String>,
    pub total_segments_cancelled: Option<u64>,
    pub total_segments_freed: Option<u64>,
    pub regions: BTreeMap<String, RegionCancellation>,
}

impl CancellationReceipt {
    pub fn cancellation_status(&self) -> CancellationStatus {
        CancellationStatus::from_wire(&self.status)
    }
}

impl From<CancelBookingResponse> for CancellationReceipt {
    fn from(body: CancelBookingResponse) -> Self {
        Self {
            status: body.status.unwrap_or_default(),
            booking_id: body.booking_id,
            message: body.message,
            total_segments_cancelled: body.total_segments_cancelled,
            total_segments_freed: body.total_segments_freed,
            regions: body.regions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancellationOutcome {
    Success(CancellationReceipt),
    ValidationError { message: String },
    HttpError { status_code: u16, detail: String },
    NetworkError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Success,
    Error,
}

/// Colouring hint: a partial cancellation is still a success dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTone {
    Confirmed,
    Partial,
    Failed,
}

/// Text for whichever dialog an outcome selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub kind: DialogKind,
    pub tone: DialogTone,
    pub title: &'static str,
    pub badge: String,
    pub lines: Vec<String>,
}

impl CancellationOutcome {
    pub fn validation_failed() -> Self {
        Self::ValidationError {
            message: EMPTY_BOOKING_ID_MESSAGE.to_string(),
        }
    }

    pub fn network_failed() -> Self {
        Self::NetworkError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn dialog_kind(&self) -> DialogKind {
        if self.is_success() {
            DialogKind::Success
        } else {
            DialogKind::Error
        }
    }

    pub fn dialog_content(&self) -> DialogContent {
        match self {
            Self::Success(receipt) => {
                let status = receipt.cancellation_status();
                let mut lines = Vec::new();
                if let Some(booking_id) = &receipt.booking_id {
                    lines.push(format!("Booking ID: {booking_id}"));
                }
                if let Some(message) = &receipt.message {
                    lines.push(message.clone());
                }
                if let Some(cancelled) = receipt.total_segments_cancelled {
                    lines.push(format!("Segments cancelled: {cancelled}"));
                }
                if let Some(freed) = receipt.total_segments_freed {
                    lines.push(format!("Segments freed: {freed}"));
                }
                for (region, result) in &receipt.regions {
                    let region_status = result.status.as_deref().unwrap_or("unknown");
                    match &result.message {
                        Some(message) => {
                            lines.push(format!("{region}: {region_status} ({message})"))
                        }
                        None => lines.push(format!("{region}: {region_status}")),
                    }
                }
                DialogContent {
                    kind: DialogKind::Success,
                    tone: if status.is_partial() {
                        DialogTone::Partial
                    } else {
                        DialogTone::Confirmed
                    },
                    title: SUCCESS_DIALOG_TITLE,
                    badge: status.label().to_string(),
                    lines,
                }
            }
            Self::HttpError { detail, .. } => DialogContent {
                kind: DialogKind::Error,
                tone: DialogTone::Failed,
                title: ERROR_DIALOG_TITLE,
                badge: ERROR_BADGE.to_string(),
                lines: vec![format!("Reason: {detail}")],
            },
            Self::ValidationError { message } | Self::NetworkError { message } => DialogContent {
                kind: DialogKind::Error,
                tone: DialogTone::Failed,
                title: ERROR_DIALOG_TITLE,
                badge: ERROR_BADGE.to_string(),
                lines: vec![message.clone()],
            },
        }
    }
}

/// Maps the network step's result onto exactly one outcome. Transport and
/// decode failures never escape as errors.
pub fn classify(result: Result<CancelReply, ServiceError>) -> CancellationOutcome {
    match result {
        Err(err) => {
            tracing::warn!(error = %err, "cancellation request did not complete");
            CancellationOutcome::network_failed()
        }
        Ok(reply) if reply.is_success() => CancellationOutcome::Success(reply.body.into()),
        Ok(reply) => CancellationOutcome::HttpError {
            status_code: reply.status_code,
            detail: reply
                .body
                .status
                .unwrap_or_else(|| UNKNOWN_ERROR_DETAIL.to_string()),
        },
    }
}
