use super::AddPatient;
use crate::commands::{ask, ActionError, Execute, SAVED};
use crate::console::Console;
use crate::db::{execute_update, query_and_print, DatabaseBackend};
use crate::queries::patient::{self, NewPatient};
use crate::validate::{parse_id, validate_gender};

impl Execute for AddPatient {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        create_patient(db, console).map(|_| ())
    }
}

/// Prompt for a patient, insert it and print the stored row. Returns the new id.
pub(crate) fn create_patient(db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<i32, ActionError> {
    let patient_id = parse_id("patient id", &ask(console, "\tPlease enter patientid: ")?)?;
    let name = ask(console, "\tPlease enter patient name: ")?;
    let gender = validate_gender(&ask(
        console,
        "\tPlease enter patient gender: M for Male, F for female, Other for other ",
    )?)?;
    let age = parse_id("age", &ask(console, "\tPlease enter patient age: ")?)?;
    let address = ask(console, "\tPlease enter patient address: ")?;
    let number_of_appts = parse_id(
        "number of appointments",
        &ask(console, "\tPlease enter patient number_of_appts: ")?,
    )?;

    let new_patient = NewPatient {
        patient_id,
        name,
        gender,
        age,
        address,
        number_of_appts,
    };
    execute_update(db, &patient::insert(&new_patient))?;
    console.say(SAVED)?;
    query_and_print(db, &patient::select_by_id(patient_id), console.out())?;
    Ok(patient_id)
}
