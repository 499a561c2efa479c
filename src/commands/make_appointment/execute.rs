use tracing::debug;

use super::MakeAppointment;
use crate::commands::add_patient::create_patient;
use crate::commands::{ask_until_valid, ActionError, Execute};
use crate::console::Console;
use crate::db::{execute_update, existence_count, query_and_collect, query_and_print, with_transaction, DatabaseBackend};
use crate::queries::{appointment, booking, doctor, patient};
use crate::types::Booking;
use crate::validate::{parse_id, validate_status};

impl Execute for MakeAppointment {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let mut patient_id = ask_until_valid(
            console,
            "\tPlease enter patient id for adding or changing an appointment: ",
            |raw| parse_id("patient id", raw),
        )?;
        if existence_count(db, &patient::exists(patient_id))? == 0 {
            console.say("The patient is not in our database, you will need to create a new patient information")?;
            patient_id = create_patient(db, console)?;
        } else {
            console.say("The patient already exists in the database, going to next step")?;
        }

        let doctor_id = ask_until_valid(
            console,
            "\tPlease enter doctor id for searching his/her appointment: ",
            |raw| parse_id("doctor id", raw),
        )?;
        if existence_count(db, &doctor::exists(doctor_id))? == 0 {
            return Err(ActionError::NotFound { entity: "doctor", id: doctor_id });
        }

        let appointment_id =
            ask_until_valid(console, "\tPlease enter appointment id: ", |raw| parse_id("appointment id", raw))?;
        if existence_count(db, &appointment::exists(appointment_id))? == 0 {
            return Err(ActionError::NotFound {
                entity: "appointment",
                id: appointment_id,
            });
        }

        let booked = with_transaction(db, |tx| book(tx, patient_id, doctor_id, appointment_id))?;

        console.say(booked.confirmation())?;
        console.say("Your chosen appointment:")?;
        query_and_print(db, &booking::summary(doctor_id, appointment_id), console.out())?;
        Ok(())
    }
}

/// Link the appointment to the doctor if needed, then apply the status
/// transition. Runs inside the caller's transaction.
fn book(
    db: &mut dyn DatabaseBackend,
    patient_id: i32,
    doctor_id: i32,
    appointment_id: i32,
) -> Result<Booking, ActionError> {
    if existence_count(db, &booking::link_exists(doctor_id, appointment_id))? == 0 {
        execute_update(db, &booking::insert_link(doctor_id, appointment_id))?;
    }

    let rows = query_and_collect(db, &booking::status_for_update(appointment_id))?;
    let Some(Some(raw_status)) = rows.into_iter().next().and_then(|row| row.into_iter().next()) else {
        return Err(ActionError::NotFound {
            entity: "appointment",
            id: appointment_id,
        });
    };
    // status is CHAR(2) in some schemas; padding is not part of the code
    let booked = validate_status(raw_status.trim())?.book();
    debug!(appointment_id, from = booked.from.code(), to = booked.to.code(), "booking");

    if booked.changes_status() {
        execute_update(db, &booking::set_status(appointment_id, booked.to))?;
    }
    if booked.counts_booking {
        execute_update(db, &patient::increment_appointments(patient_id))?;
    }
    Ok(booked)
}
