//! Statement builders, one function per SQL statement the menu issues.
//!
//! Builders are pure: they take already-validated values and return a
//! [`Statement`](crate::db::Statement) with every value bound positionally.
//!
//! Casts follow the assumed schema: integer ids bind as `i32`, status and
//! gender bind as `text` so they coerce into their domain columns, and dates
//! bind as text parsed server-side with [`DATE_FORMAT`].

pub mod appointment;
pub mod booking;
pub mod doctor;
pub mod maintenance;
pub mod patient;
pub mod reports;

/// `to_date` template matching the date validator's shape.
pub const DATE_FORMAT: &str = "MM/DD/YYYY";
