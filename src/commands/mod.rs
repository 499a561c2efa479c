//! Menu actions and their implementations.
//!
//! Each action is defined in its own module with:
//! - The action struct and its doc comment (`mod.rs`)
//! - The `Execute` implementation and its tests (`execute.rs`)
//!
//! Actions prompt for their fields in a fixed order, validate them, run their
//! statements through the session's backend and print the outcome. Any error
//! abandons the action; the dispatcher in [`menu`] reports it and shows the
//! menu again.

mod add_appointment;
mod add_doctor;
mod add_patient;
mod appointment_counts;
mod appointment_details;
mod available_appointments;
mod doctor_appointments;
mod doctor_requests;
mod hospital_departments;
mod make_appointment;
pub mod menu;
mod patient_counts;
mod staff_requests;

pub use add_appointment::AddAppointment;
pub use add_doctor::AddDoctor;
pub use add_patient::AddPatient;
pub use appointment_counts::AppointmentCounts;
pub use appointment_details::AppointmentDetails;
pub use available_appointments::AvailableAppointments;
pub use doctor_appointments::DoctorAppointments;
pub use doctor_requests::DoctorRequests;
pub use hospital_departments::HospitalDepartments;
pub use make_appointment::MakeAppointment;
pub use patient_counts::PatientCounts;
pub use staff_requests::StaffRequests;

use std::io;

use thiserror::Error;

use crate::console::Console;
use crate::db::{query_and_print, DatabaseBackend, DbError, Statement};
use crate::validate::ValidationError;

/// Why a menu action was abandoned.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("ERROR: The {entity} id {id} is not in our database, please retry")]
    NotFound { entity: &'static str, id: i32 },

    #[error(transparent)]
    Query(#[from] DbError),

    #[error("Input closed")]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Trait for running a menu action against the session.
pub trait Execute {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError>;
}

/// Confirmation printed after an insert succeeds.
pub(crate) const SAVED: &str = "\tYour entered data has successfully update";

/// Prompt once. End of input abandons the action.
pub(crate) fn ask(console: &mut Console<'_>, text: &str) -> Result<String, ActionError> {
    console.prompt(text)?.ok_or(ActionError::InputClosed)
}

/// Prompt until `check` accepts the answer, printing why each rejected
/// answer was refused.
pub(crate) fn ask_until_valid<T>(
    console: &mut Console<'_>,
    text: &str,
    check: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<T, ActionError> {
    loop {
        let raw = ask(console, text)?;
        match check(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => console.say(&format!("Invalid input. {}", err))?,
        }
    }
}

/// Print a report table followed by its row total.
pub(crate) fn print_report(
    db: &mut dyn DatabaseBackend,
    console: &mut Console<'_>,
    statement: &Statement,
) -> Result<usize, ActionError> {
    let rows = query_and_print(db, statement, console.out())?;
    console.say(&format!("total row(s): {}", rows))?;
    Ok(rows)
}
