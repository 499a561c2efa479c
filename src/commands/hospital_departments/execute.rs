use super::HospitalDepartments;
use crate::commands::{ask, print_report, ActionError, Execute};
use crate::console::Console;
use crate::db::DatabaseBackend;
use crate::queries::reports;

impl Execute for HospitalDepartments {
    fn execute(&self, db: &mut dyn DatabaseBackend, console: &mut Console<'_>) -> Result<(), ActionError> {
        let hospital = ask(console, "\tPlease enter hospital name: ")?;
        print_report(db, console, &reports::departments_of_hospital(&hospital))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{result_of, run_action, ScriptedBackend};
    use rstest::rstest;

    crate::report_test! {
        test_name: test_hospital_departments_by_name,
        action: HospitalDepartments,
        input: "General\n",
        result: result_of(
            &["dept_id", "name"],
            &[vec!["3", "Cardiology"], vec!["4", "Radiology"]],
        ),
        expected_params: ["General"],
        expected_rows: 2,
    }

    #[rstest]
    fn test_hospital_departments_query_failure_prints_nothing() {
        let mut db = ScriptedBackend::new();
        db.push_error("relation \"hospital\" does not exist");

        let (outcome, out, _) = run_action(&HospitalDepartments, &mut db, "General\n");

        match outcome {
            Err(ActionError::Query(err)) => assert!(err.to_string().contains("does not exist")),
            other => panic!("Expected query error, got {:?}", other),
        }
        assert!(!out.contains("total row(s)"));
    }
}
