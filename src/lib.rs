//! hospital_db library - Interactive hospital scheduling client
//!
//! Provides the PostgreSQL session, input validation, statement builders and
//! the menu actions behind the `hospital_db` terminal program.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod logging;
pub mod output;
pub mod queries;
pub mod types;
pub mod validate;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
