#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ricky — query characters, locations and episodes of the Rick and Morty API.

mod api;
mod cli;
mod commands;
mod types;
mod universe;

use clap::Parser;

use cli::{Cli, OutputCtx, init_logger, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);

    if let Err(err) = commands::dispatch(&cli, &ctx) {
        tracing::debug!(error = ?err, "command failed");
        let error_output = ErrorOutput::from_error(&err);
        write_error(&error_output, cli.output, cli.json);
        std::process::exit(err.exit_code());
    }
}
