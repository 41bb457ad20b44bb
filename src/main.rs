use std::process::ExitCode;

use clap::Parser;
use sso_creds::{cli::Cli, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    cli.execute().await
}
