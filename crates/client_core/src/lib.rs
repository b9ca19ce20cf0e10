//! Client-side core for the road booking service: configuration, the HTTP
//! booking service, outcome classification, the cancellation controller and
//! navigation highlighting.

pub mod config;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod outcome;
pub mod transport;

pub use config::{load_settings, ClientSettings, ConfigError};
pub use controller::{run_cancellation, CancellationController, PendingCancellation};
pub use error::ServiceError;
pub use navigation::{active_link, is_active, NavLink, Router, NAV_LINKS};
pub use outcome::{
    classify, CancellationOutcome, CancellationReceipt, DialogContent, DialogKind,
    DialogTone,
};
pub use transport::{BookingService, CancelReply, HttpBookingService};

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod transport_tests;
