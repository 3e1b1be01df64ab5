use std::env;
use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {source}")]
    InvalidEnvVar {
        key: &'static str,
        #[source]
        source: env::VarError,
    },

    #[error("invalid bind address `{value}`: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_address: SocketAddr,
    log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `LL1_BIND` and `LL1_LOG`, falling back to the defaults when unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Same as [`ServerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, env::VarError>,
    {
        let bind = read_var(&lookup, "LL1_BIND", DEFAULT_BIND)?;
        let bind_address = parse_bind_address(&bind)?;
        let log_level = read_var(&lookup, "LL1_LOG", DEFAULT_LOG_LEVEL)?;

        Ok(Self {
            bind_address,
            log_level,
        })
    }

    pub fn with_bind_address(mut self, bind_address: SocketAddr) -> Self {
        self.bind_address = bind_address;
        self
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

pub fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidBindAddress {
            value: value.to_string(),
            source,
        })
}

fn read_var<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(env::VarError::NotPresent) => Ok(default.to_string()),
        Err(err) => Err(ConfigError::InvalidEnvVar { key, source: err }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address().to_string(), DEFAULT_BIND);
        assert_eq!(config.log_level(), "info");
    }

    fn lookup(
        vars: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&'static str) -> Result<String, env::VarError> {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address().to_string(), DEFAULT_BIND);
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn blank_variables_use_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("LL1_BIND", "   "), ("LL1_LOG", "")])).unwrap();
        assert_eq!(config.bind_address().to_string(), DEFAULT_BIND);
        assert_eq!(config.log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn values_are_trimmed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LL1_BIND", " 0.0.0.0:8080 "),
            ("LL1_LOG", " debug "),
        ]))
        .unwrap();
        assert_eq!(config.bind_address(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn invalid_bind_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("LL1_BIND", "localhost")])).unwrap_err();
        match err {
            ConfigError::InvalidBindAddress { value, .. } => assert_eq!(value, "localhost"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_unicode_variable() {
        let err = ServerConfig::from_lookup(|key| {
            if key == "LL1_LOG" {
                Err(env::VarError::NotUnicode(Default::default()))
            } else {
                Err(env::VarError::NotPresent)
            }
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { key: "LL1_LOG", .. }
        ));
    }

    #[test]
    fn bind_address_parsing() {
        assert_eq!(
            parse_bind_address("0.0.0.0:8080").unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert!(matches!(
            parse_bind_address("localhost"),
            Err(ConfigError::InvalidBindAddress { .. })
        ));
    }
}
