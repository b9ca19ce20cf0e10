use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body returned by `POST /cancel_booking/{booking_id}` on success and failure alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_segments_cancelled: Option<u64>,
    #[serde(default)]
    pub total_segments_freed: Option<u64>,
    #[serde(default)]
    pub regions: BTreeMap<String, RegionCancellation>,
}

/// Per-region result reported by the central manager when a booking spans regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCancellation {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub segments_cancelled: u64,
    #[serde(default)]
    pub segments_freed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancellationStatus {
    Cancelled,
    PartiallyCancelled,
    AlreadyCancelled,
    Other(String),
}

impl CancellationStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "cancelled" => Self::Cancelled,
            "partially_cancelled" => Self::PartiallyCancelled,
            "already_cancelled" => Self::AlreadyCancelled,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Self::PartiallyCancelled)
    }

    /// Badge text; unrecognized statuses are shown as the server sent them.
    pub fn label(&self) -> &str {
        match self {
            Self::Cancelled => "Booking cancelled",
            Self::PartiallyCancelled => "Partially cancelled",
            Self::AlreadyCancelled => "Already cancelled",
            Self::Other(status) => status,
        }
    }
}
