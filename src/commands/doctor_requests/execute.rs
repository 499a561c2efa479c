use super::DoctorRequests;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::maintenance;

impl Execute for DoctorRequests {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let name = ask(console, "\tPlease enter doctor name: ")?;
        print_report(db, console, &maintenance::requests_by_doctor(&name))?;
        Ok(())
    }
}
