use super::DoctorAppointments;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;
use crate::validate::parse_int;

impl Execute for DoctorAppointments {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let doctor_id = parse_int("doctor id", &ask(console, "\tPlease enter doctor id: ")?)?;
        let first = ask(console, "\tPlease enter first date of date range of the appt (MM/DD/YYYY): ")?;
        let second = ask(console, "\tPlease enter second date of date range of the appt (MM/DD/YYYY): ")?;

        print_report(db, console, &reports::doctor_appointments_between(doctor_id, &first, &second))?;
        Ok(())
    }
}
