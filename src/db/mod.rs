//! Database connection and query utilities for PostgreSQL.
//!
//! This module provides the database layer for the CLI tool:
//! - Connection management (one blocking `postgres::Client` per session)
//! - Statement execution with positional parameter binding
//! - Result rows rendered as strings for the terminal
//!
//! # Architecture
//!
//! Menu actions never talk to `postgres` directly. They build a [`Statement`]
//! and hand it to the operations in [`query`], which run it through the
//! [`DatabaseBackend`] trait. Production uses [`PostgresBackend`]; unit tests
//! use a scripted in-memory backend.
//!
//! # Type Decisions
//!
//! **Why `Option<String>` cells instead of typed columns?**
//! Every result is printed or compared as text. Rendering happens once, in
//! [`value::CellText`], so callers never match on Postgres types.
//!
//! **Why only two parameter kinds?**
//! The schema has integer ids and text columns. Dates travel as text and are
//! parsed server-side with `to_date`, so no date type crosses the wire.

mod backend;
mod connection;
pub mod query;
mod value;

pub use backend::{DatabaseBackend, QueryResult, Row, SqlParam, Statement};
pub use connection::{ConnectionConfig, PostgresBackend, DEFAULT_HOST};
pub use query::{
    current_sequence_value, execute_update, existence_count, query_and_collect,
    query_and_print, with_transaction,
};
pub use value::CellText;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to '{target}': {message}")]
    ConnectFailed { target: String, message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("The database connection is closed")]
    Closed,

    #[error("Failed to write query output: {0}")]
    Output(#[from] std::io::Error),
}
