//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `BIND_ADDR` is set but is not an IP address.
    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),

    /// The Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let ip = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

/// Load Leptos options from `[package.metadata.leptos]` / `LEPTOS_*` env.
///
/// # Errors
///
/// Returns an error if the configuration is missing or malformed.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
