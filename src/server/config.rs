use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server listens on when `LISTEN_ADDRESS` is not set
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub pin_file_path: String,
    pub listen_address: SocketAddr,
}

impl Config {
    /// Reads the configuration from environment variables
    ///
    /// `DATABASE_URL` and `PIN_FILE_PATH` are required, `LISTEN_ADDRESS` defaults to
    /// [`DEFAULT_LISTEN_ADDRESS`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_address = std::env::var("LISTEN_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string());
        let listen_address =
            listen_address
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                    var: "LISTEN_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            pin_file_path: required_var("PIN_FILE_PATH")?,
            listen_address,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
