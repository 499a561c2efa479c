//! Query execution utilities.
//!
//! These are the session's connection-manager operations. Each one takes the
//! backend explicitly, so the handle's lifetime stays with the caller.

use std::io::Write;

use tracing::warn;

use super::backend::{DatabaseBackend, Row, Statement};
use super::DbError;
use crate::output::print_result;

/// Run a statement that returns no rows (INSERT, UPDATE, DELETE).
pub fn execute_update(db: &mut dyn DatabaseBackend, statement: &Statement) -> Result<u64, DbError> {
    db.execute(statement)
}

/// Run a query, print it as a tab-separated table and return the row count.
pub fn query_and_print(
    db: &mut dyn DatabaseBackend,
    statement: &Statement,
    out: &mut dyn Write,
) -> Result<usize, DbError> {
    let result = db.query(statement)?;
    Ok(print_result(&result, out)?)
}

/// Run a query and return its rows in order.
pub fn query_and_collect(db: &mut dyn DatabaseBackend, statement: &Statement) -> Result<Vec<Row>, DbError> {
    Ok(db.query(statement)?.rows)
}

/// Existence probe: 1 when the query yields a first row, 0 otherwise.
///
/// Never counts past the first row; callers treat the result as a boolean.
pub fn existence_count(db: &mut dyn DatabaseBackend, statement: &Statement) -> Result<usize, DbError> {
    let result = db.query(statement)?;
    Ok(usize::from(!result.rows.is_empty()))
}

/// Current value of a sequence in this session, or -1 when nothing comes back.
pub fn current_sequence_value(db: &mut dyn DatabaseBackend, sequence: &str) -> Result<i64, DbError> {
    let statement = Statement::new("SELECT currval($1::text::regclass)").bind(sequence);
    let rows = query_and_collect(db, &statement)?;

    match rows.first().and_then(|row| row.first()) {
        Some(Some(value)) => value.trim().parse().map_err(|_| DbError::QueryFailed {
            message: format!("sequence '{}' returned a non-integer value '{}'", sequence, value),
        }),
        _ => Ok(-1),
    }
}

/// Run `f` inside a transaction: commit on success, roll back on any error.
pub fn with_transaction<T, E, F>(db: &mut dyn DatabaseBackend, f: F) -> Result<T, E>
where
    E: From<DbError>,
    F: FnOnce(&mut dyn DatabaseBackend) -> Result<T, E>,
{
    db.begin()?;
    match f(&mut *db) {
        Ok(value) => {
            db.commit()?;
            Ok(value)
        }
        Err(err) => {
            let backend = db.backend_name();
            match db.rollback() {
                Ok(()) => warn!(backend, "transaction rolled back"),
                Err(rollback_err) => warn!(backend, error = %rollback_err, "rollback failed"),
            }
            Err(err)
        }
    }
}
