//! Database backend trait and the values that cross it.

use super::DbError;

/// A result row: one rendered cell per column, `None` for SQL NULL.
pub type Row = Vec<Option<String>>;

/// A positional statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

/// A SQL statement with `$n` placeholders and the values bound to them.
///
/// Caller-supplied values only ever appear in `params`, never in `sql`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append the value bound to the next placeholder.
    pub fn bind(mut self, param: impl Into<SqlParam>) -> Self {
        self.params.push(param.into());
        self
    }
}

/// Result of a query execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Trait for database backends that can execute statements.
///
/// Everything runs on one connection owned by the backend. Statements are
/// auto-committed unless the caller opened a transaction with [`begin`].
///
/// [`begin`]: DatabaseBackend::begin
pub trait DatabaseBackend {
    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Run a statement that returns no rows. Returns the affected row count.
    fn execute(&mut self, statement: &Statement) -> Result<u64, DbError>;

    /// Run a statement and return its column names and rendered rows.
    fn query(&mut self, statement: &Statement) -> Result<QueryResult, DbError>;

    /// Run parameterless SQL, one or more statements separated by `;`.
    fn batch_execute(&mut self, script: &str) -> Result<(), DbError>;

    /// Release the connection. Safe to call more than once.
    fn close(&mut self);

    fn begin(&mut self) -> Result<(), DbError> {
        self.batch_execute("BEGIN")
    }

    fn commit(&mut self) -> Result<(), DbError> {
        self.batch_execute("COMMIT")
    }

    fn rollback(&mut self) -> Result<(), DbError> {
        self.batch_execute("ROLLBACK")
    }
}
