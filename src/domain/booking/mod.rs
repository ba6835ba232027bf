//! Cylinder-refill bookings and the delivery lifecycle.

mod aggregate;
mod cylinder;
mod status;

pub use aggregate::Booking;
pub use cylinder::Cylinder;
pub use status::BookingStatus;

/// Default days between booking and expected delivery.
pub const DEFAULT_DELIVERY_LEAD_DAYS: i64 = 3;
