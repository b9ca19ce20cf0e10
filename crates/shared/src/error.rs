use thiserror::Error;

pub const EMPTY_BOOKING_ID_MESSAGE: &str = "Please enter the Booking ID to cancel your booking.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingIdError {
    #[error("{}", EMPTY_BOOKING_ID_MESSAGE)]
    Empty,
}
