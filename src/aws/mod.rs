use std::future::Future;

use anyhow::Result;
use aws_smithy_types::DateTime;

pub mod credentials;
pub mod identity;

/// AWS temporary credentials structure
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialSet {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
    pub expiration: Option<DateTime>,
}

/// Outcome of asking a [`CredentialSource`] for credentials
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(CredentialSet),
    /// No literal credentials can be produced for the profile
    Unavailable,
}

/// Something that can turn a profile name into literal credentials
pub trait CredentialSource {
    fn resolve(&self, profile: &str) -> impl Future<Output = Result<Resolution>>;
}

/// Something that can tell whether a profile has a live session
pub trait IdentityCheck {
    /// `Ok(false)` means the check ran and reported the caller as unauthenticated
    fn verify(&self, profile: &str) -> impl Future<Output = Result<bool>>;
}

// Re-export commonly used types (functions should be accessed via module path)
pub use credentials::Unavailable;
#[cfg(feature = "sdk")]
pub use credentials::ProfileCredentialSource;
pub use identity::AwsCliIdentityCheck;
