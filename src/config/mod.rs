//! Configuration management for the nbjrnlctl application.
//!
//! This module loads the NetBox connection settings. Values come from
//! environment variables first and from an optional JSON config file second.
//!
//! # Environment Variables
//!
//! - `NETBOX_URL`: Root URL of the NetBox instance (required)
//! - `NETBOX_API_TOKEN`: API token used for every request (required)
//! - `NBJRNLCTL_CONFIG`: Config file location (defaults to ~/.nbjrnlctl/config.json)
//! - `HOME`: Used for expanding the default config file path
//!
//! # Config File
//!
//! ```json
//! {
//!   "netbox_url": "https://netbox.example.com",
//!   "api_token": "0123456789abcdef"
//! }
//! ```

use crate::constants::{
    DEFAULT_CONFIG_PATH, ENV_VAR_CONFIG_PATH, ENV_VAR_HOME, ENV_VAR_NETBOX_API_TOKEN,
    ENV_VAR_NETBOX_URL, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppResult, ConfigError};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Connection settings for the NetBox API.
///
/// # Examples
///
/// Loading from an explicit set of variables:
/// ```
/// use nbjrnlctl::Config;
///
/// let config = Config::load_from(|key| match key {
///     "NETBOX_URL" => Some("https://netbox.example.com/".to_string()),
///     "NETBOX_API_TOKEN" => Some("abc123".to_string()),
///     "NBJRNLCTL_CONFIG" => Some("/nonexistent/nbjrnlctl.json".to_string()),
///     _ => None,
/// });
/// # let _ = config;
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the NetBox instance, without a trailing slash.
    pub netbox_url: String,

    /// API token sent as `Authorization: Token <token>`.
    pub api_token: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("netbox_url", &self.netbox_url)
            .field("api_token", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

/// Shape of the optional config file. Both keys may be absent.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    netbox_url: Option<String>,
    #[serde(default)]
    api_token: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment and the config file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `NETBOX_URL` or `NETBOX_API_TOKEN` has no value in any source (all
    ///   missing names are reported together)
    /// - the URL is not an http(s) URL
    /// - the config file exists but cannot be read or parsed
    pub fn load() -> AppResult<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the process environment.
    ///
    /// Environment values take precedence over config file values; blank
    /// values count as missing.
    pub fn load_from<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = read_config_file(&lookup)?.unwrap_or_default();

        let netbox_url = non_blank(lookup(ENV_VAR_NETBOX_URL)).or(non_blank(file.netbox_url));
        let api_token = non_blank(lookup(ENV_VAR_NETBOX_API_TOKEN)).or(non_blank(file.api_token));

        let mut missing = Vec::new();
        if netbox_url.is_none() {
            missing.push(ENV_VAR_NETBOX_URL.to_string());
        }
        if api_token.is_none() {
            missing.push(ENV_VAR_NETBOX_API_TOKEN.to_string());
        }

        match (netbox_url, api_token) {
            (Some(netbox_url), Some(api_token)) => {
                let config = Config {
                    netbox_url: netbox_url.trim_end_matches('/').to_string(),
                    api_token,
                };
                config.validate()?;
                debug!("Loaded configuration: {:?}", config);
                Ok(config)
            }
            _ => Err(ConfigError::MissingSettings(missing).into()),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a value is blank or the URL scheme is
    /// not http(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use nbjrnlctl::Config;
    ///
    /// let config = Config {
    ///     netbox_url: "netbox.example.com".to_string(),
    ///     api_token: "abc".to_string(),
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        let mut missing = Vec::new();
        if self.netbox_url.trim().is_empty() {
            missing.push(ENV_VAR_NETBOX_URL.to_string());
        }
        if self.api_token.trim().is_empty() {
            missing.push(ENV_VAR_NETBOX_API_TOKEN.to_string());
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingSettings(missing).into());
        }

        if !(self.netbox_url.starts_with("http://") || self.netbox_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.netbox_url.clone()).into());
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads the config file, if there is one.
///
/// A missing file at the default location is not an error; a missing file at
/// an explicitly configured location is.
fn read_config_file<F>(lookup: &F) -> Result<Option<FileConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = non_blank(lookup(ENV_VAR_CONFIG_PATH));
    let raw_path = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let expanded = shellexpand::full_with_context(
        &raw_path,
        || lookup(ENV_VAR_HOME),
        |var| Ok::<Option<String>, env::VarError>(lookup(var)),
    )
    .map_err(|_| ConfigError::PathExpansion(raw_path.clone()))?;
    let path = PathBuf::from(expanded.into_owned());

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            debug!("No config file at {:?}", path);
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::File { path, source }),
    };

    let file = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!("Read config file {:?}", path);
    Ok(Some(file))
}
