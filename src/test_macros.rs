//! Declarative macros for generating menu action tests.
//!
//! This module provides macros to reduce boilerplate in action tests.
//! Instead of wiring a scripted backend and console by hand in every test,
//! you declare the stdin text, the scripted query results and the assertions,
//! and let the macro generate the actual test code.

/// Generate a test that runs one action against a `ScriptedBackend`.
///
/// `results` are replayed to the action's queries in order. The assertion
/// block receives the action outcome, the backend, stdout and stderr.
#[macro_export]
macro_rules! action_test {
    (
        test_name: $test_name:ident,
        action: $action:expr,
        input: $input:expr,
        results: [$($result:expr),* $(,)?],
        assertions: |$outcome:ident, $db:ident, $out:ident, $err:ident| $body:block $(,)?
    ) => {
        #[rstest]
        #[allow(unused_variables)]
        fn $test_name() {
            let mut $db = $crate::test_utils::ScriptedBackend::new();
            $( $db.push_result($result); )*
            let ($outcome, $out, $err) = $crate::test_utils::run_action(&$action, &mut $db, $input);
            $body
        }
    };
}

/// Generate a test asserting that an action fails validation before any
/// statement reaches the database.
#[macro_export]
macro_rules! action_rejects_input_test {
    (
        test_name: $test_name:ident,
        action: $action:expr,
        input: $input:expr,
        error: $pattern:pat $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let mut db = $crate::test_utils::ScriptedBackend::new();
            let (outcome, _out, _err) = $crate::test_utils::run_action(&$action, &mut db, $input);
            match outcome {
                Err($crate::commands::ActionError::Validation($pattern)) => {}
                other => panic!("Expected validation error, got {:?}", other),
            }
            assert!(db.executes().is_empty(), "No statement should run on invalid input");
        }
    };
}

/// Generate a test for an action that prints one result table and a
/// `total row(s)` footer.
#[macro_export]
macro_rules! report_test {
    (
        test_name: $test_name:ident,
        action: $action:expr,
        input: $input:expr,
        result: $result:expr,
        expected_params: [$($param:expr),* $(,)?],
        expected_rows: $rows:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let mut db = $crate::test_utils::ScriptedBackend::new();
            db.push_result($result);
            let (outcome, out, _err) = $crate::test_utils::run_action(&$action, &mut db, $input);

            assert!(outcome.is_ok(), "Report failed: {:?}", outcome);
            let queries = db.queries();
            assert_eq!(queries.len(), 1);
            let expected: Vec<$crate::db::SqlParam> = vec![$($param.into()),*];
            assert_eq!(queries[0].params, expected);
            assert!(
                out.contains(&format!("total row(s): {}", $rows)),
                "Missing row total in output:\n{}",
                out
            );
        }
    };
}
