//! Staff maintenance log lookups. Read-only.

use crate::db::Statement;

pub fn requests_by_staff(staff_id: i32) -> Statement {
    Statement::new(
        "SELECT R.sid, R.did, R.dept_name, R.patient_per_hour, R.time_slot \
         FROM request_maintenance R \
         WHERE R.sid = $1",
    )
    .bind(staff_id)
}

pub fn requests_by_doctor(doctor_name: &str) -> Statement {
    Statement::new(
        "SELECT D.name, R.sid, R.did, R.dept_name, R.patient_per_hour, R.time_slot \
         FROM request_maintenance R, Doctor D \
         WHERE R.did = D.doctor_ID AND D.name = $1",
    )
    .bind(doctor_name)
}
