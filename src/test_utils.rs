//! Shared test utilities for command and query tests.
//!
//! This module provides a scripted in-memory backend and helpers to run a
//! menu action against it with canned terminal input.

use std::collections::VecDeque;
use std::io::Cursor;

use crate::commands::{ActionError, Execute};
use crate::console::Console;
use crate::db::{DatabaseBackend, DbError, QueryResult, Statement};

/// One call made against the [`ScriptedBackend`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Execute(Statement),
    Query(Statement),
    Batch(String),
}

/// In-memory backend that records every call and replays scripted results.
///
/// Queries consume scripted results in FIFO order and return an empty result
/// once the script runs out. Executes succeed with one affected row unless
/// an execute error was scripted.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub calls: Vec<Call>,
    pub closed: bool,
    results: VecDeque<Result<QueryResult, String>>,
    execute_results: VecDeque<Result<u64, String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_result(&mut self, result: QueryResult) {
        self.results.push_back(Ok(result));
    }

    pub fn push_error(&mut self, message: &str) {
        self.results.push_back(Err(message.to_string()));
    }

    pub fn push_execute_ok(&mut self, affected: u64) {
        self.execute_results.push_back(Ok(affected));
    }

    pub fn push_execute_error(&mut self, message: &str) {
        self.execute_results.push_back(Err(message.to_string()));
    }

    pub fn queries(&self) -> Vec<&Statement> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Query(stmt) => Some(stmt),
                _ => None,
            })
            .collect()
    }

    pub fn executes(&self) -> Vec<&Statement> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Execute(stmt) => Some(stmt),
                _ => None,
            })
            .collect()
    }

    pub fn batches(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Batch(sql) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DatabaseBackend for ScriptedBackend {
    fn backend_name(&self) -> &'static str {
        "Scripted"
    }

    fn execute(&mut self, statement: &Statement) -> Result<u64, DbError> {
        if self.closed {
            return Err(DbError::Closed);
        }
        self.calls.push(Call::Execute(statement.clone()));
        match self.execute_results.pop_front() {
            Some(Ok(affected)) => Ok(affected),
            Some(Err(message)) => Err(DbError::QueryFailed { message }),
            None => Ok(1),
        }
    }

    fn query(&mut self, statement: &Statement) -> Result<QueryResult, DbError> {
        if self.closed {
            return Err(DbError::Closed);
        }
        self.calls.push(Call::Query(statement.clone()));
        match self.results.pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(DbError::QueryFailed { message }),
            None => Ok(QueryResult::default()),
        }
    }

    fn batch_execute(&mut self, script: &str) -> Result<(), DbError> {
        if self.closed {
            return Err(DbError::Closed);
        }
        self.calls.push(Call::Batch(script.to_string()));
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Build a result table from string cells.
pub fn result_of(headers: &[&str], rows: &[Vec<&str>]) -> QueryResult {
    QueryResult {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| Some(cell.to_string())).collect())
            .collect(),
    }
}

/// A one-row, one-column result, as returned by existence probes.
pub fn one_row(header: &str, value: &str) -> QueryResult {
    result_of(&[header], &[vec![value]])
}

/// An empty result with a single header.
pub fn no_rows(header: &str) -> QueryResult {
    result_of(&[header], &[])
}

/// Run an action with `input` as stdin. Returns the outcome, stdout and stderr.
pub fn run_action<A: Execute>(
    action: &A,
    db: &mut ScriptedBackend,
    input: &str,
) -> (Result<(), ActionError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = {
        let mut console = Console::new(Cursor::new(input.to_string()), &mut out, &mut err);
        action.execute(db, &mut console)
    };
    (
        outcome,
        String::from_utf8(out).expect("stdout is utf-8"),
        String::from_utf8(err).expect("stderr is utf-8"),
    )
}
