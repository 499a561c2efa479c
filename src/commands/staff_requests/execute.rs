use super::StaffRequests;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::maintenance;
use crate::validate::parse_int;

impl Execute for StaffRequests {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let staff_id = parse_int("staff id", &ask(console, "\tPlease enter staff id: ")?)?;
        print_report(db, console, &maintenance::requests_by_staff(staff_id))?;
        Ok(())
    }
}
