use std::{env, path::PathBuf};

/// AWS profile whose session is exported
pub const DEFAULT_PROFILE: &str = "default";

/// Region exported alongside the credentials
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// AWS CLI executable used for the identity check
pub const AWS_CLI_PROGRAM: &str = "aws";

/// AWS configuration directory name
pub const AWS_CONFIG_DIR_NAME: &str = ".aws";

/// AWS configuration file name
pub const AWS_CONFIG_FILE_NAME: &str = "config";

/// Get the AWS config file path
/// Respects AWS_CONFIG_FILE environment variable if set
pub fn get_aws_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("AWS_CONFIG_FILE") {
        return Some(PathBuf::from(path));
    }

    dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join(AWS_CONFIG_FILE_NAME))
}

/// Get the AWS CLI credential cache directory (~/.aws/cli/cache)
///
/// Only reported in diagnostics, the exporter never reads from it.
pub fn get_aws_cli_cache_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(AWS_CONFIG_DIR_NAME).join("cli").join("cache"))
}
