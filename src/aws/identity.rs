use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info};

use super::IdentityCheck;
use crate::constants::AWS_CLI_PROGRAM;

/// Identity check backed by `aws sts get-caller-identity`
#[derive(Debug, Clone)]
pub struct AwsCliIdentityCheck {
    program: String,
}

impl AwsCliIdentityCheck {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for AwsCliIdentityCheck {
    fn default() -> Self {
        Self::new(AWS_CLI_PROGRAM)
    }
}

impl IdentityCheck for AwsCliIdentityCheck {
    async fn verify(&self, profile: &str) -> Result<bool> {
        info!("Verifying AWS identity for profile: {}", profile);

        // The CLI output is captured so that only export lines reach stdout
        let output = Command::new(&self.program)
            .args(["sts", "get-caller-identity", "--profile", profile])
            .env("AWS_SDK_LOAD_CONFIG", "1")
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to run `{} sts get-caller-identity`", self.program))?;

        debug!("Identity check exited with: {}", output.status);
        if !output.status.success() {
            debug!(
                "Identity check stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.status.success())
    }
}
