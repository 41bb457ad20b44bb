use std::{io, process::ExitCode};

use clap::{ArgAction, Parser};

use crate::commands::{ExportCommand, export::report_error};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sso-creds",
    version,
    about = "Print AWS SSO credentials of the default profile as shell exports",
    long_about = "Print AWS SSO credentials of the default profile as shell exports.\n\n\
                  Usage: eval \"$(sso-creds)\""
)]
pub struct Cli {
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
}

impl Cli {
    pub async fn execute(self) -> ExitCode {
        match ExportCommand.execute().await {
            Ok(code) => code,
            Err(e) => report_error(&e, io::stderr().lock()),
        }
    }
}
