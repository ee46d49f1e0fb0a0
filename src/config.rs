//! Host configuration parsed from environment variables.

use std::num::ParseIntError;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors that stop the host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    /// Leptos options could not be read from Cargo metadata or `LEPTOS_*` vars.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Build host config from the environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|source| HostError::InvalidPort { value: value.to_owned(), source }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
