use crate::error::{Error, Result};
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// # Server Configuration
///
/// Runtime settings read from the process environment (a `.env` file is
/// loaded first by `main`, if present).
///
/// ## Variables
/// - `APP_HOST`: bind address (default `0.0.0.0`)
/// - `APP_PORT`: bind port (default `5000`)
/// - `APP_DEBUG`: development mode, raises the default log level to `debug`
/// - `LOG_JSON`: emit logs as JSON lines
/// - `APP_WORKERS`: number of HTTP workers (defaults to actix's choice)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_json: bool,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_json: false,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("APP_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("APP_PORT={raw:?}: {e}")))?,
            None => defaults.port,
        };

        let debug = parse_flag("APP_DEBUG", lookup("APP_DEBUG"))?.unwrap_or(defaults.debug);
        let log_json = parse_flag("LOG_JSON", lookup("LOG_JSON"))?.unwrap_or(defaults.log_json);

        let workers = match lookup("APP_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    return Err(Error::Config(format!(
                        "APP_WORKERS={raw:?}: expected a positive integer"
                    )));
                }
            },
            None => None,
        };

        Ok(Self {
            host,
            port,
            debug,
            log_json,
            workers,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<Option<bool>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
        _ => Err(Error::Config(format!("{key}={raw:?}: expected a boolean"))),
    }
}
