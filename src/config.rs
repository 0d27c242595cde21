//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default cache budget: 1 MiB of keys and values
const DEFAULT_MAX_SIZE: usize = 1024 * 1024;
const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache capacity in bytes (sum of key and value lengths)
    pub max_size: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Cache capacity in bytes (default: 1048576)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            max_size: env::var("CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            server_port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_size, 1024 * 1024);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("CACHE_MAX_SIZE", "4096");
        env::set_var("SERVER_PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.max_size, 4096);
        assert_eq!(config.server_port, 3000);

        env::remove_var("CACHE_MAX_SIZE");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_size, 1024 * 1024);
        assert_eq!(config.server_port, 3000);
    }
}
