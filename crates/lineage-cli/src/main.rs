//! Lineage CLI entry point.

use std::process;

use clap::Parser;
use log::{debug, error, info};

use lineage_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    // An unknown --log-level is a usage error reported by clap.
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_level)
        .init();

    info!(log_level:? = args.log_level; "Starting Lineage");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = lineage_cli::run(&args) {
        error!("{}", error_adapter::render_report(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}
