//! UI layer for desktop GUI: navigation bar, pages and cancellation dialogs.

pub mod app;

pub use app::BookingGuiApp;
