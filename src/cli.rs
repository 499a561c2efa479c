//! CLI argument definitions.
//!
//! The three positional arguments name the database to open. Everything else
//! about the connection can come from flags, the config file or the environment.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive hospital scheduling database client", long_about = None)]
pub struct Args {
    /// Name of the PostgreSQL database
    pub database: String,

    /// Port the PostgreSQL server listens on
    pub port: u16,

    /// Database user to connect as
    pub user: String,

    /// Host of the PostgreSQL server [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Path to an optional JSON config file
    #[arg(short, long, default_value = ".hospital_db.json")]
    pub config: PathBuf,
}
