use crate::db::Statement;

/// An appointment row ready for insertion.
///
/// Date and status stay raw: the date is parsed by the server, and the
/// status is checked by the schema's domain constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub appointment_id: i32,
    pub date: String,
    pub time_slot: String,
    pub status: String,
}

pub fn insert(appointment: &NewAppointment) -> Statement {
    Statement::new(format!(
        "INSERT INTO Appointment (appnt_ID, adate, time_slot, status) \
         VALUES ($1, to_date($2, '{}'), $3, $4::text)",
        super::DATE_FORMAT
    ))
    .bind(appointment.appointment_id)
    .bind(appointment.date.as_str())
    .bind(appointment.time_slot.as_str())
    .bind(appointment.status.as_str())
}

pub fn select_by_id(appointment_id: i32) -> Statement {
    Statement::new("SELECT * FROM Appointment WHERE appnt_ID = $1").bind(appointment_id)
}

pub fn exists(appointment_id: i32) -> Statement {
    Statement::new("SELECT appnt_ID FROM Appointment WHERE appnt_ID = $1").bind(appointment_id)
}
