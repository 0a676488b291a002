//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! The client secret is loaded from TWITCH_CLIENT_SECRET or
//! client_secret_file, never stored in the TOML directly.

use common::Secret;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use twitch_auth::constants::TWITCH_BASE_URL;
use twitch_auth::{Endpoints, Scope};

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub client: ClientConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Registered application settings
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub client_id: String,
    /// Only the client credentials flow works without one.
    #[serde(default)]
    pub redirect_uri: Option<String>,
    #[serde(default)]
    pub force_verify: bool,
    /// Unknown scope names fail deserialization.
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub state: String,
    #[serde(skip)]
    pub client_secret: Option<Secret<String>>,
    /// Path to a file containing the client secret (alternative to
    /// TWITCH_CLIENT_SECRET)
    #[serde(default)]
    pub client_secret_file: Option<PathBuf>,
}

/// Identity provider location
#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ProviderConfig {
    /// Provider endpoints derived from `base_url`.
    pub fn endpoints(&self) -> common::Result<Endpoints> {
        Endpoints::from_base_url(&self.base_url)
            .map_err(|e| common::Error::Config(format!("base_url: {e}")))
    }
}

fn default_base_url() -> String {
    TWITCH_BASE_URL.to_owned()
}

fn default_timeout() -> u64 {
    60
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment variables.
    ///
    /// Client secret resolution order:
    /// 1. TWITCH_CLIENT_SECRET env var
    /// 2. client_secret_file path from config
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;

        config.provider.endpoints()?;

        if config.provider.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if config.client.client_id.trim().is_empty() {
            return Err(common::Error::Config("client_id must not be empty".into()));
        }

        if let Ok(secret) = std::env::var("TWITCH_CLIENT_SECRET") {
            config.client.client_secret = Some(Secret::new(secret));
        } else if let Some(ref secret_file) = config.client.client_secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            let secret = secret.trim().to_owned();
            if !secret.is_empty() {
                config.client.client_secret = Some(Secret::new(secret));
            }
        }

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("twitch-token.toml")
    }

    pub fn client_secret(&self) -> common::Result<&str> {
        self.client
            .client_secret
            .as_ref()
            .map(|s| s.expose().as_str())
            .ok_or_else(|| {
                common::Error::Config(
                    "no client secret: set TWITCH_CLIENT_SECRET or client_secret_file".into(),
                )
            })
    }

    pub fn redirect_uri(&self) -> common::Result<&str> {
        self.client
            .redirect_uri
            .as_deref()
            .ok_or_else(|| {
                common::Error::Config("redirect_uri is required for this command".into())
            })
    }
}
