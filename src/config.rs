//! User configuration.
//!
//! Settings come from an optional `config.toml` in the configuration
//! directory. Every key is optional and a missing file means defaults, which
//! reproduce the stock behavior: ipinfo.io and ipify endpoints, no request
//! timeout, deny-list interface filtering, public address lookup on.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::constants;
use crate::error::ConfigError;
use crate::state::InterfaceFilter;

/// On-disk shape of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    lookup_url: Option<String>,
    public_ip_url: Option<String>,
    token: Option<String>,
    timeout_secs: Option<u64>,
    filter: Option<InterfaceFilter>,
    skip_link_local: Option<bool>,
    show_public: Option<bool>,
    color: Option<bool>,
}

/// Resolved settings used by the commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the metadata service; the address is appended as a path segment.
    pub lookup_url: String,
    /// Plain-text public address service.
    pub public_ip_url: String,
    /// API token sent as a query parameter to the metadata service.
    pub token: Option<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub filter: InterfaceFilter,
    /// Explicit link-local setting; `None` defers to the active filter.
    pub skip_link_local: Option<bool>,
    pub show_public: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_url: constants::LOOKUP_API_BASE.to_string(),
            public_ip_url: constants::PUBLIC_IP_API.to_string(),
            token: None,
            timeout: None,
            filter: InterfaceFilter::default(),
            skip_link_local: None,
            show_public: true,
            color: true,
        }
    }
}

impl FileConfig {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            lookup_url: self
                .lookup_url
                .map_or(defaults.lookup_url, |url| url.trim_end_matches('/').to_string()),
            public_ip_url: self.public_ip_url.unwrap_or(defaults.public_ip_url),
            token: self.token.filter(|t| !t.trim().is_empty()),
            timeout: self.timeout_secs.map(Duration::from_secs),
            filter: self.filter.unwrap_or(defaults.filter),
            skip_link_local: self.skip_link_local,
            show_public: self.show_public.unwrap_or(defaults.show_public),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

impl Config {
    /// Whether link-local and empty addresses are dropped under `filter`.
    #[must_use]
    pub fn skips_link_local(&self, filter: InterfaceFilter) -> bool {
        self.skip_link_local
            .unwrap_or_else(|| filter.skips_link_local_by_default())
    }
}

/// Platform configuration directory for ipinfo (e.g. `~/.config/ipinfo`).
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR_NAME))
}

/// Loads `config.toml` from `dir`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_from(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(constants::CONFIG_FILE_NAME);
    if !path.is_file() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Loaded config from {}", path.display());
    Ok(file.into_config())
}

/// Loads the configuration, falling back to defaults on any problem.
///
/// Configuration trouble never changes the exit code; it is logged instead.
#[must_use]
pub fn load_or_default(dir: Option<&Path>) -> Config {
    let dir = match dir.map(Path::to_path_buf).or_else(default_config_dir) {
        Some(dir) => dir,
        None => {
            debug!("No configuration directory available, using defaults");
            return Config::default();
        }
    };

    load_from(&dir).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        Config::default()
    })
}
