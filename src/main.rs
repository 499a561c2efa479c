use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use hospital_db::cli::Args;
use hospital_db::commands::menu::run_menu;
use hospital_db::config::{self, ConfigFile, PASSWORD_ENV};
use hospital_db::console::Console;
use hospital_db::db::{DatabaseBackend, PostgresBackend};
use hospital_db::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    let file = match ConfigFile::load_from(&args.config) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let connection = config::resolve(&args, file.as_ref(), std::env::var(PASSWORD_ENV).ok());

    print!("Connecting to database...");
    println!("Connection URL: {}\n", connection.display_url());
    let mut db = match PostgresBackend::connect(&connection) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error - Unable to Connect to Database: {}", e);
            println!("Make sure you started postgres on this machine");
            return ExitCode::FAILURE;
        }
    };
    println!("Done");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), io::stderr());
    let session = run_menu(&mut db, &mut console);

    print!("Disconnecting from database...");
    db.close();
    println!("Done\n\nBye !");

    match session {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}
