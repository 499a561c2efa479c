use super::AppointmentDetails;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;
use crate::validate::parse_id;

impl Execute for AppointmentDetails {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let appointment_id = parse_id("appointment id", &ask(console, "\tPlease enter appointment id: ")?)?;
        print_report(db, console, &reports::appointment_details(appointment_id))?;
        Ok(())
    }
}
