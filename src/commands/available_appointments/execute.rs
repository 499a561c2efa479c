use super::AvailableAppointments;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;

impl Execute for AvailableAppointments {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let department = ask(console, "\tPlease enter department name: ")?;
        let date = ask(console, "\tPlease enter the specific date: (MM/DD/YYYY) ")?;

        print_report(db, console, &reports::available_in_department(&department, &date))?;
        Ok(())
    }
}
