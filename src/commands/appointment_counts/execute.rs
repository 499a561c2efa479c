use super::AppointmentCounts;
use crate::commands::{print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;

impl Execute for AppointmentCounts {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        print_report(db, console, &reports::appointments_per_doctor_by_status())?;
        Ok(())
    }
}
