use crate::constants;
use anyhow::{Context, Result};
use ini::{Ini, Properties};
use std::path::Path;

/// Settings of one profile in the AWS config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    pub region: Option<String>,
    pub sso_session: Option<String>,
    pub sso_start_url: Option<String>,
    pub sso_region: Option<String>,
    pub sso_account_id: Option<String>,
    pub sso_role_name: Option<String>,
}

impl ProfileConfig {
    fn from_ini_section(section: &Properties) -> Self {
        let get = |key: &str| {
            section
                .get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            region: get("region"),
            sso_session: get("sso_session"),
            sso_start_url: get("sso_start_url"),
            sso_region: get("sso_region"),
            sso_account_id: get("sso_account_id"),
            sso_role_name: get("sso_role_name"),
        }
    }

    /// Whether the profile is backed by IAM Identity Center
    pub fn is_sso(&self) -> bool {
        self.sso_session.is_some() || self.sso_start_url.is_some()
    }
}

/// Section name the AWS CLI uses for a profile in the config file
fn section_name(profile: &str) -> String {
    if profile == "default" {
        profile.to_string()
    } else {
        format!("profile {profile}")
    }
}

/// Load a profile from the AWS config file at `path`
///
/// Returns `Ok(None)` when the file or the profile section does not exist.
pub fn load_from(path: &Path, profile: &str) -> Result<Option<ProfileConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let ini = Ini::load_from_file(path)
        .with_context(|| format!("Failed to parse AWS config file {}", path.display()))?;

    Ok(ini
        .section(Some(section_name(profile)))
        .map(ProfileConfig::from_ini_section))
}

/// Load a profile from the AWS config file in its standard location
pub fn load(profile: &str) -> Result<Option<ProfileConfig>> {
    let path = constants::get_aws_config_path().context("Failed to determine AWS config path")?;
    load_from(&path, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, path::PathBuf, process};

    fn write_temp_config(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("sso-creds-{}-{name}", process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_section_name() {
        assert_eq!(section_name("default"), "default");
        assert_eq!(section_name("dev"), "profile dev");
    }

    #[test]
    fn test_config_from_ini_section() {
        let mut props = Properties::new();
        props.insert("sso_start_url", "https://example.awsapps.com/start");
        props.insert("sso_region", "eu-west-1");
        props.insert("sso_account_id", "123456789012");
        props.insert("sso_role_name", "Developer");
        props.insert("region", "eu-central-1");

        let config = ProfileConfig::from_ini_section(&props);

        assert_eq!(
            config.sso_start_url.as_deref(),
            Some("https://example.awsapps.com/start")
        );
        assert_eq!(config.sso_region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.sso_account_id.as_deref(), Some("123456789012"));
        assert_eq!(config.sso_role_name.as_deref(), Some("Developer"));
        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
        assert_eq!(config.sso_session, None);
        assert!(config.is_sso());
    }

    #[test]
    fn test_config_from_empty_section() {
        let config = ProfileConfig::from_ini_section(&Properties::new());
        assert_eq!(config, ProfileConfig::default());
        assert!(!config.is_sso());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut props = Properties::new();
        props.insert("sso_session", "   ");

        let config = ProfileConfig::from_ini_section(&props);
        assert_eq!(config.sso_session, None);
        assert!(!config.is_sso());
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = env::temp_dir().join("sso-creds-does-not-exist/config");
        assert_eq!(load_from(&path, "default").unwrap(), None);
    }

    #[test]
    fn test_load_from_reads_default_section() {
        let path = write_temp_config(
            "default",
            "[default]\nsso_session = corp\nsso_account_id = 123456789012\n\n\
             [profile dev]\nregion = eu-west-1\n",
        );

        let config = load_from(&path, "default").unwrap().unwrap();
        assert_eq!(config.sso_session.as_deref(), Some("corp"));
        assert!(config.is_sso());

        let dev = load_from(&path, "dev").unwrap().unwrap();
        assert_eq!(dev.region.as_deref(), Some("eu-west-1"));
        assert!(!dev.is_sso());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_from_missing_section() {
        let path = write_temp_config("missing-section", "[profile other]\nregion = us-west-2\n");

        assert_eq!(load_from(&path, "default").unwrap(), None);

        fs::remove_file(path).unwrap();
    }
}
