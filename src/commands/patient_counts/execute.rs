use super::PatientCounts;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;
use crate::validate::validate_status;

impl Execute for PatientCounts {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let status = validate_status(&ask(console, "\tPlease enter appointment status ex:(AC, AV, PA, WL): ")?)?;

        print_report(db, console, &reports::patients_per_doctor_with_status(status))?;
        Ok(())
    }
}
