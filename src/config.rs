//! Server configuration loaded from environment variables.

use std::env;

use crate::errors::{Result, SnaplinkError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CODE_LENGTH: usize = 6;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub random_code_length: usize,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables: `SERVER_HOST`, `SERVER_PORT`,
    /// `RANDOM_CODE_LENGTH`. Unset variables fall back to defaults;
    /// set-but-invalid values are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| {
                SnaplinkError::config(format!("invalid SERVER_PORT value: {value}"))
            })?,
            None => DEFAULT_PORT,
        };

        let random_code_length = match lookup("RANDOM_CODE_LENGTH") {
            Some(value) => {
                let length = value.parse::<usize>().map_err(|_| {
                    SnaplinkError::config(format!("invalid RANDOM_CODE_LENGTH value: {value}"))
                })?;
                if length == 0 {
                    return Err(SnaplinkError::config(
                        "RANDOM_CODE_LENGTH must be at least 1",
                    ));
                }
                length
            }
            None => DEFAULT_CODE_LENGTH,
        };

        Ok(Config {
            server_host,
            server_port,
            random_code_length,
        })
    }
}
