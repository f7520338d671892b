use std::env;
use std::net::SocketAddr;

use crate::shared::errors::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Process-wide configuration, resolved once at startup and injected into
/// the upstream clients. Nothing reads the environment past this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the species catalog, including the API path prefix.
    pub pokeapi_url: String,
    /// Base URL of the translation provider, including the API path prefix.
    pub funtranslations_url: String,
    /// Address the gateway listens on.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the environment. Both provider base URLs are
    /// required; a missing one is fatal at startup, never a per-request error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let pokeapi_url = require_var("POKEAPI_URL")?;
        let funtranslations_url = require_var("FUNTRANSLATIONS_URL")?;

        let raw_bind = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_bind.parse().map_err(|_| ConfigError::InvalidVar {
            name: "BIND_ADDR",
            value: raw_bind.clone(),
        })?;

        Ok(Self {
            pokeapi_url,
            funtranslations_url,
            bind_addr,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
