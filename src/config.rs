use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ReleaseError, Result};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "dirrelease.toml";

/// Represents the complete configuration for dir-release.
///
/// Contains the publishing behavior and how the release host is reached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub host: HostConfig,
}

/// Returns the default settling delay, in seconds.
fn default_settle_delay_secs() -> u64 {
    30
}

/// Returns the default release host program.
fn default_program() -> String {
    "gh".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for the publishing sequence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Seconds to wait after deleting a release before creating it again.
    ///
    /// GitHub leaves a release recreated right after its deletion stuck as
    /// a draft; waiting works around it.
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,
}

impl PublishConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            settle_delay_secs: default_settle_delay_secs(),
        }
    }
}

/// Configuration for the GitHub CLI used as release host.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HostConfig {
    /// Program invoked for `release create` / `release delete`
    #[serde(default = "default_program")]
    pub program: String,

    /// `owner/name` passed as `--repo`; the CLI infers it when unset
    #[serde(default)]
    pub repo: Option<String>,

    /// Also delete the git tag when deleting a release
    #[serde(default = "default_true")]
    pub cleanup_tag: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            program: default_program(),
            repo: None,
            cleanup_tag: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `dirrelease.toml` in current directory
/// 3. `.dirrelease.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path)
        .map_err(|e| ReleaseError::config(format!("{}: {}", path.display(), e)))?;
    parse_config(&config_str).map_err(|e| match e {
        ReleaseError::Config(msg) => ReleaseError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ReleaseError::config(e.message()))
}
