//! CLI binary for `flowstate`.
//!
//! This binary is a thin wrapper that sets up logging and delegates to the library.

use std::process::ExitCode;

use clap::Parser;
use flowstate::cli::{run, Cli};
use flowstate::{logging, paths, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(data_dir) = cli.resolve_data_dir() {
        if let Err(e) = logging::init(&paths::log_path(&data_dir)) {
            eprintln!("Warning: could not open log file: {e}");
        }
        logging::set_debug(Config::load_or_default(&data_dir).debug_logging);
    }
    logging::install_panic_hook();

    let output = run(cli);

    for line in output.stdout {
        println!("{line}");
    }
    for msg in output.stderr {
        eprintln!("{msg}");
    }

    output.exit_code
}
