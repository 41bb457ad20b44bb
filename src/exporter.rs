//! Credential export flow.
//!
//! Verifies that the profile has a live session, then exports either literal
//! credentials or, when none can be resolved, a reference to the profile.

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    aws::{CredentialSource, IdentityCheck, Resolution},
    config::{self, ProfileConfig},
    constants,
    export::Exports,
};

/// Result of a complete export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exported(Exports),
    NotAuthenticated,
}

pub struct Exporter<I, C> {
    identity: I,
    source: C,
    profile: String,
}

impl<I: IdentityCheck, C: CredentialSource> Exporter<I, C> {
    pub fn new(identity: I, source: C, profile: impl Into<String>) -> Self {
        Self {
            identity,
            source,
            profile: profile.into(),
        }
    }

    pub async fn run(&self) -> Result<Outcome> {
        if !self.identity.verify(&self.profile).await? {
            return Ok(Outcome::NotAuthenticated);
        }

        if let Some(cache_dir) = constants::get_aws_cli_cache_dir() {
            debug!("AWS CLI cache directory: {}", cache_dir.display());
        }
        report_profile(&self.profile, config::load(&self.profile));

        let exports = match self.source.resolve(&self.profile).await? {
            Resolution::Resolved(credentials) => {
                info!("Exporting resolved credentials");
                Exports::from_credentials(&credentials)
            }
            Resolution::Unavailable => {
                info!("No literal credentials available, exporting profile reference");
                Exports::profile_reference()
            }
        };

        Ok(Outcome::Exported(exports))
    }
}

/// Log what the AWS config file says about the profile
///
/// Informational only, a successful export stays silent at the default level.
fn report_profile(profile: &str, loaded: Result<Option<ProfileConfig>>) {
    match loaded {
        Ok(Some(ProfileConfig {
            sso_session: Some(session),
            ..
        })) => info!("Profile '{}' uses SSO session '{}'", profile, session),
        Ok(Some(config)) if config.is_sso() => {
            info!("Profile '{}' uses legacy SSO configuration", profile)
        }
        Ok(Some(_)) => info!("Profile '{}' has no SSO settings", profile),
        Ok(None) => info!("Profile '{}' not found in AWS config file", profile),
        Err(e) => info!("Could not read AWS config file: {:#}", e),
    }
}
