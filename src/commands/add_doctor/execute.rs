use super::AddDoctor;
use crate::commands::{ask, ActionError, Execute, SAVED};
use crate::console::Console;
use crate::db::{execute_update, query_and_print, DatabaseBackend};
use crate::queries::doctor::{self, NewDoctor};
use crate::validate::{parse_id, parse_int};

impl Execute for AddDoctor {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let doctor_id = parse_id("doctor id", &ask(console, "\tPlease enter doctorid: ")?)?;
        let name = ask(console, "\tPlease enter doctor name: ")?;
        let specialty = ask(console, "\tPlease enter doctor specialty: ")?;
        let department_id = parse_int("department id", &ask(console, "\tPlease enter doctor departmentid: ")?)?;

        let new_doctor = NewDoctor {
            doctor_id,
            name,
            specialty,
            department_id,
        };
        execute_update(db, &doctor::insert(&new_doctor))?;
        console.say(SAVED)?;
        query_and_print(db, &doctor::select_by_id(doctor_id), console.out())?;
        Ok(())
    }
}
