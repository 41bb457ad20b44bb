use anyhow::Result;
use tracing::debug;

use super::{CredentialSource, Resolution};

/// Source used when the crate is built without the AWS SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl CredentialSource for Unavailable {
    async fn resolve(&self, profile: &str) -> Result<Resolution> {
        debug!(
            "Built without SDK support, no credentials resolved for profile: {}",
            profile
        );
        Ok(Resolution::Unavailable)
    }
}

#[cfg(feature = "sdk")]
pub use sdk::ProfileCredentialSource;

#[cfg(feature = "sdk")]
mod sdk {
    use anyhow::{Context, Result};
    use aws_config::profile::ProfileFileCredentialsProvider;
    use aws_credential_types::{
        Credentials,
        provider::{ProvideCredentials, error::CredentialsError},
    };
    use aws_smithy_types::{DateTime, date_time::Format};
    use tracing::{debug, info};

    use crate::{
        aws::{CredentialSet, CredentialSource, Resolution},
        constants::DEFAULT_AWS_REGION,
    };

    /// Resolves credentials the way the AWS SDK does for a named profile
    ///
    /// Covers SSO sessions, role chaining and static keys from the shared
    /// config and credentials files.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ProfileCredentialSource;

    impl CredentialSource for ProfileCredentialSource {
        async fn resolve(&self, profile: &str) -> Result<Resolution> {
            info!("Resolving credentials for profile: {}", profile);

            let provider = ProfileFileCredentialsProvider::builder()
                .profile_name(profile)
                .build();

            match provider.provide_credentials().await {
                Ok(credentials) => Ok(to_resolution(&credentials)),
                Err(CredentialsError::CredentialsNotLoaded(reason)) => {
                    debug!("No credentials loaded for profile {}: {:?}", profile, reason);
                    Ok(Resolution::Unavailable)
                }
                Err(e) => Err(e)
                    .with_context(|| format!("Failed to resolve credentials for profile '{profile}'")),
            }
        }
    }

    fn to_resolution(credentials: &Credentials) -> Resolution {
        if credentials.access_key_id().is_empty() {
            debug!("Provider returned an empty access key");
            return Resolution::Unavailable;
        }

        let expiration = credentials.expiry().map(DateTime::from);
        if let Some(expiration) = expiration {
            info!(
                "Credentials expire at: {}",
                expiration
                    .fmt(Format::DateTime)
                    .unwrap_or_else(|_| "unknown".to_string())
            );
        }

        Resolution::Resolved(CredentialSet {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials
                .session_token()
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            region: DEFAULT_AWS_REGION.to_string(),
            expiration,
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::time::{Duration, UNIX_EPOCH};

        #[test]
        fn test_resolution_with_session_token() {
            let expiry = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
            let credentials = Credentials::new(
                "ASIAEXAMPLE",
                "secret",
                Some("token".to_string()),
                Some(expiry),
                "test",
            );

            match to_resolution(&credentials) {
                Resolution::Resolved(set) => {
                    assert_eq!(set.access_key_id, "ASIAEXAMPLE");
                    assert_eq!(set.secret_access_key, "secret");
                    assert_eq!(set.session_token.as_deref(), Some("token"));
                    assert_eq!(set.region, DEFAULT_AWS_REGION);
                    assert_eq!(set.expiration, Some(DateTime::from(expiry)));
                }
                Resolution::Unavailable => panic!("Expected resolved credentials"),
            }
        }

        #[test]
        fn test_resolution_without_session_token() {
            let credentials = Credentials::new("AKIAEXAMPLE", "secret", None, None, "test");

            match to_resolution(&credentials) {
                Resolution::Resolved(set) => {
                    assert_eq!(set.session_token, None);
                    assert_eq!(set.expiration, None);
                }
                Resolution::Unavailable => panic!("Expected resolved credentials"),
            }
        }

        #[test]
        fn test_empty_session_token_is_dropped() {
            let credentials =
                Credentials::new("AKIAEXAMPLE", "secret", Some(String::new()), None, "test");

            match to_resolution(&credentials) {
                Resolution::Resolved(set) => assert_eq!(set.session_token, None),
                Resolution::Unavailable => panic!("Expected resolved credentials"),
            }
        }

        #[test]
        fn test_empty_access_key_is_unavailable() {
            let credentials = Credentials::new("", "", None, None, "test");
            assert_eq!(to_resolution(&credentials), Resolution::Unavailable);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_source() {
        let resolution = Unavailable.resolve("default").await.unwrap();
        assert_eq!(resolution, Resolution::Unavailable);
    }
}
