use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};

use crate::{
    aws::AwsCliIdentityCheck,
    constants::DEFAULT_PROFILE,
    exporter::{Exporter, Outcome},
};

/// Prints export statements for the default profile
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportCommand;

impl ExportCommand {
    pub async fn execute(self) -> Result<ExitCode> {
        #[cfg(feature = "sdk")]
        let source = crate::aws::ProfileCredentialSource;
        #[cfg(not(feature = "sdk"))]
        let source = crate::aws::Unavailable;

        let exporter = Exporter::new(AwsCliIdentityCheck::default(), source, DEFAULT_PROFILE);
        let outcome = exporter.run().await?;

        report(&outcome, io::stdout().lock(), io::stderr().lock())
    }
}

/// Write the outcome of a run and map it to the process exit status
///
/// Exports go to `out`, the not-authenticated diagnostic goes to `err`.
pub fn report(outcome: &Outcome, out: impl Write, mut err: impl Write) -> Result<ExitCode> {
    match outcome {
        Outcome::Exported(exports) => {
            exports.write_to(out)?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NotAuthenticated => {
            writeln!(err, "Error: Not authenticated with AWS SSO")
                .and_then(|()| {
                    writeln!(err, "Please run: aws sso login --profile={DEFAULT_PROFILE}")
                })
                .context("Failed to write diagnostic")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Report an unexpected failure, the last stop for every error
pub fn report_error(error: &anyhow::Error, mut err: impl Write) -> ExitCode {
    // Nothing is left to tell if stderr itself is gone
    let _ = writeln!(err, "Error: {error:#}");
    ExitCode::FAILURE
}
