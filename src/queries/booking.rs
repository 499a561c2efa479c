//! Statements behind the "Make an Appointment" transition.

use crate::db::Statement;
use crate::types::AppointmentStatus;

pub fn link_exists(doctor_id: i32, appointment_id: i32) -> Statement {
    Statement::new("SELECT appt_id FROM has_appointment WHERE doctor_id = $1 AND appt_id = $2")
        .bind(doctor_id)
        .bind(appointment_id)
}

pub fn insert_link(doctor_id: i32, appointment_id: i32) -> Statement {
    Statement::new("INSERT INTO has_appointment (appt_id, doctor_id) VALUES ($1, $2)")
        .bind(appointment_id)
        .bind(doctor_id)
}

/// Current status, row-locked until the surrounding transaction ends.
pub fn status_for_update(appointment_id: i32) -> Statement {
    Statement::new("SELECT status FROM Appointment WHERE appnt_ID = $1 FOR UPDATE").bind(appointment_id)
}

pub fn set_status(appointment_id: i32, status: AppointmentStatus) -> Statement {
    Statement::new("UPDATE Appointment SET status = $1::text WHERE appnt_ID = $2")
        .bind(status.code())
        .bind(appointment_id)
}

/// The booked appointment as shown back to the user.
pub fn summary(doctor_id: i32, appointment_id: i32) -> Statement {
    Statement::new(
        "SELECT A.appnt_ID, A.adate, A.time_slot, A.status \
         FROM Appointment A, has_appointment H \
         WHERE A.appnt_ID = H.appt_id AND H.doctor_id = $1 AND A.appnt_ID = $2",
    )
    .bind(doctor_id)
    .bind(appointment_id)
}
