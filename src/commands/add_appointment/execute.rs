use super::AddAppointment;
use crate::commands::{ask, ActionError, Execute, SAVED};
use crate::console::Console;
use crate::db::{execute_update, query_and_print, DatabaseBackend};
use crate::queries::appointment::{self, NewAppointment};
use crate::validate::{parse_id, validate_date, validate_time_slot};

impl Execute for AddAppointment {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let appointment_id = parse_id("appointment id", &ask(console, "\tPlease enter appointment id: ")?)?;

        let date = ask(console, "\tPlease enter appointment date ex:(MM/DD/YYYY): ")?;
        validate_date(&date)?;

        let time_slot = ask(console, "\tPlease enter appointment time slot ex:(12:00-14:00): ")?;
        validate_time_slot(&time_slot)?;

        let status = ask(console, "\tPlease enter appointment status ex:(AC, AV, PA, WL): ")?;

        let new_appointment = NewAppointment {
            appointment_id,
            date,
            time_slot,
            status,
        };
        execute_update(db, &appointment::insert(&new_appointment))?;
        console.say(SAVED)?;
        query_and_print(db, &appointment::select_by_id(appointment_id), console.out())?;
        Ok(())
    }
}
