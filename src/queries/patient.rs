use crate::db::Statement;
use crate::types::Gender;

/// A patient row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub patient_id: i32,
    pub name: String,
    pub gender: Gender,
    pub age: i32,
    pub address: String,
    pub number_of_appts: i32,
}

pub fn insert(patient: &NewPatient) -> Statement {
    Statement::new(
        "INSERT INTO Patient (patient_ID, name, gtype, age, address, number_of_appts) \
         VALUES ($1, $2, $3::text, $4, $5, $6)",
    )
    .bind(patient.patient_id)
    .bind(patient.name.as_str())
    .bind(patient.gender.code())
    .bind(patient.age)
    .bind(patient.address.as_str())
    .bind(patient.number_of_appts)
}

pub fn select_by_id(patient_id: i32) -> Statement {
    Statement::new("SELECT * FROM Patient WHERE patient_ID = $1").bind(patient_id)
}

pub fn exists(patient_id: i32) -> Statement {
    Statement::new("SELECT patient_ID FROM Patient WHERE patient_ID = $1").bind(patient_id)
}

/// Count one more booking against the patient.
pub fn increment_appointments(patient_id: i32) -> Statement {
    Statement::new("UPDATE Patient SET number_of_appts = number_of_appts + 1 WHERE patient_ID = $1")
        .bind(patient_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqlParam;

    #[test]
    fn test_insert_binds_gender_code() {
        let stmt = insert(&NewPatient {
            patient_id: 12,
            name: "Ana".to_string(),
            gender: Gender::Other,
            age: 41,
            address: "1 Main St".to_string(),
            number_of_appts: 0,
        });

        assert_eq!(stmt.params.len(), 6);
        assert_eq!(stmt.params[2], SqlParam::Text("Other".to_string()));
        assert!(stmt.sql.contains("$3::text"));
    }

    #[test]
    fn test_increment_targets_one_patient() {
        let stmt = increment_appointments(12);
        assert!(stmt.sql.contains("number_of_appts = number_of_appts + 1"));
        assert_eq!(stmt.params, vec![SqlParam::Int(12)]);
    }
}
