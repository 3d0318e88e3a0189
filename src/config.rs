use crate::error::ConfigError;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub robot_name: String,
    pub jitter_seed: Option<u64>,
    /// `None` disables the log file; stdout logging is always on.
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. An empty `LOG_DIR`
    /// turns file logging off.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let jitter_seed = match lookup("JITTER_SEED") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "JITTER_SEED",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Config {
            server_address: lookup("SERVER_ADDRESS").unwrap_or(defaults.server_address),
            robot_name: lookup("ROBOT_NAME").unwrap_or(defaults.robot_name),
            jitter_seed,
            log_dir: match lookup("LOG_DIR") {
                Some(dir) if dir.trim().is_empty() => None,
                Some(dir) => Some(dir),
                None => defaults.log_dir,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "127.0.0.1:8443".to_string(),
            robot_name: "Test Robot".to_string(),
            jitter_seed: None,
            log_dir: Some("./logs".to_string()),
        }
    }
}
