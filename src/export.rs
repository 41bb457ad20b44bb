use std::{fmt, io::Write};

use anyhow::{Context, Result};

use crate::{
    aws::CredentialSet,
    constants::{DEFAULT_AWS_REGION, DEFAULT_PROFILE},
};

/// Ordered set of environment variables to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exports {
    vars: Vec<(&'static str, String)>,
}

impl Exports {
    /// Literal credentials resolved through the SDK
    pub fn from_credentials(creds: &CredentialSet) -> Self {
        let mut vars = vec![
            ("AWS_ACCESS_KEY_ID", creds.access_key_id.clone()),
            ("AWS_SECRET_ACCESS_KEY", creds.secret_access_key.clone()),
        ];
        if let Some(token) = creds.session_token.as_deref().filter(|t| !t.is_empty()) {
            vars.push(("AWS_SESSION_TOKEN", token.to_string()));
        }
        vars.push(("AWS_DEFAULT_REGION", creds.region.clone()));

        Self { vars }
    }

    /// Profile reference for tools that resolve the SSO session themselves
    pub fn profile_reference() -> Self {
        Self {
            vars: vec![
                ("AWS_PROFILE", DEFAULT_PROFILE.to_string()),
                ("AWS_SDK_LOAD_CONFIG", "1".to_string()),
                ("AWS_DEFAULT_REGION", DEFAULT_AWS_REGION.to_string()),
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Write every export line in a single buffered write
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        out.write_all(self.to_string().as_bytes())
            .and_then(|()| out.flush())
            .context("Failed to write exports")
    }
}

impl fmt::Display for Exports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.vars {
            writeln!(f, "export {name}={}", shell_quote(value))?;
        }
        Ok(())
    }
}

/// Single-quote a value for POSIX shells
///
/// `'` cannot appear inside single quotes, so it is closed, escaped and reopened.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
