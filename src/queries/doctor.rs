use crate::db::Statement;

/// A doctor row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub doctor_id: i32,
    pub name: String,
    pub specialty: String,
    pub department_id: i32,
}

pub fn insert(doctor: &NewDoctor) -> Statement {
    Statement::new("INSERT INTO Doctor (doctor_ID, name, specialty, did) VALUES ($1, $2, $3, $4)")
        .bind(doctor.doctor_id)
        .bind(doctor.name.as_str())
        .bind(doctor.specialty.as_str())
        .bind(doctor.department_id)
}

pub fn select_by_id(doctor_id: i32) -> Statement {
    Statement::new("SELECT * FROM Doctor WHERE doctor_ID = $1").bind(doctor_id)
}

pub fn exists(doctor_id: i32) -> Statement {
    Statement::new("SELECT doctor_ID FROM Doctor WHERE doctor_ID = $1").bind(doctor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqlParam;

    #[test]
    fn test_insert_binds_all_four_columns() {
        let stmt = insert(&NewDoctor {
            doctor_id: 7,
            name: "Smith".to_string(),
            specialty: "Cardiology".to_string(),
            department_id: 3,
        });

        assert!(stmt.sql.starts_with("INSERT INTO Doctor (doctor_ID, name, specialty, did)"));
        assert_eq!(
            stmt.params,
            vec![
                SqlParam::Int(7),
                SqlParam::Text("Smith".to_string()),
                SqlParam::Text("Cardiology".to_string()),
                SqlParam::Int(3),
            ]
        );
    }

    #[test]
    fn test_quotes_in_names_stay_in_params() {
        let stmt = insert(&NewDoctor {
            doctor_id: 1,
            name: "O'Brien".to_string(),
            specialty: "ENT".to_string(),
            department_id: 1,
        });
        assert!(!stmt.sql.contains("O'Brien"));
    }
}
