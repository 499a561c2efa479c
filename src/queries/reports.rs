//! Read-only reporting statements over appointments, departments and hospitals.

use crate::db::Statement;
use crate::types::AppointmentStatus;

use super::DATE_FORMAT;

/// Active or available appointments of a doctor within an inclusive date range.
pub fn doctor_appointments_between(doctor_id: i32, first: &str, second: &str) -> Statement {
    Statement::new(format!(
        "SELECT A.appnt_ID, A.adate, A.time_slot, A.status \
         FROM Appointment A, has_appointment H \
         WHERE A.appnt_ID = H.appt_id \
         AND (A.status = 'AC' OR A.status = 'AV') \
         AND H.doctor_id = $1 \
         AND A.adate BETWEEN to_date($2, '{DATE_FORMAT}') AND to_date($3, '{DATE_FORMAT}')"
    ))
    .bind(doctor_id)
    .bind(first)
    .bind(second)
}

/// Distinct available appointments on a date in a department.
pub fn available_in_department(department: &str, date: &str) -> Statement {
    Statement::new(format!(
        "SELECT DISTINCT A.appnt_ID, A.adate, A.time_slot \
         FROM Appointment A, has_appointment H, Doctor D, Department DEPT \
         WHERE A.status = 'AV' \
         AND A.appnt_ID = H.appt_id \
         AND H.doctor_id = D.doctor_ID \
         AND D.did = DEPT.dept_ID \
         AND DEPT.name = $1 \
         AND A.adate = to_date($2, '{DATE_FORMAT}')"
    ))
    .bind(department)
    .bind(date)
}

pub fn appointments_per_doctor_by_status() -> Statement {
    Statement::new(
        "SELECT D.doctor_ID, A.status, COUNT(*) AS nappnt \
         FROM Appointment A, has_appointment H, Doctor D \
         WHERE A.appnt_ID = H.appt_id AND H.doctor_id = D.doctor_ID \
         GROUP BY D.doctor_ID, A.status \
         ORDER BY nappnt DESC",
    )
}

pub fn patients_per_doctor_with_status(status: AppointmentStatus) -> Statement {
    Statement::new(
        "SELECT H.doctor_id, COUNT(DISTINCT S.pid) AS npatient \
         FROM Appointment A, has_appointment H, searches S \
         WHERE S.aid = A.appnt_ID AND A.appnt_ID = H.appt_id AND A.status = $1::text \
         GROUP BY H.doctor_id",
    )
    .bind(status.code())
}

pub fn departments_of_hospital(hospital: &str) -> Statement {
    Statement::new(
        "SELECT DEPT.dept_ID, DEPT.name \
         FROM Department DEPT, Hospital HOS \
         WHERE DEPT.hid = HOS.hospital_ID AND HOS.name = $1",
    )
    .bind(hospital)
}

pub fn appointment_details(appointment_id: i32) -> Statement {
    Statement::new(
        "SELECT D.name AS doctor_name, A.time_slot, DEPT.name AS department_name \
         FROM Appointment A, has_appointment H, Doctor D, Department DEPT \
         WHERE A.appnt_ID = $1 \
         AND H.appt_id = A.appnt_ID \
         AND H.doctor_id = D.doctor_ID \
         AND D.did = DEPT.dept_ID",
    )
    .bind(appointment_id)
}
