//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Environment variable holding the address the server binds to.
pub const ADDR_ENV: &str = "COMPENSATION_ENGINE_ADDR";

/// Environment variable holding an optional rule file path.
pub const RULES_PATH_ENV: &str = "COMPENSATION_RULES_PATH";

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// The socket address to listen on.
    pub addr: SocketAddr,
    /// Rule file to load; the standard tables are used when `None`.
    pub rules_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Reads settings from the process environment.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| EngineError::InvalidConfig {
                message: format!("{} '{}' is not a socket address: {}", ADDR_ENV, raw_addr, e),
            })?;

        let rules_path = lookup(RULES_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, rules_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.addr, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(settings.rules_path, None);
    }

    #[test]
    fn test_reads_addr_and_rules_path() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            (ADDR_ENV, "127.0.0.1:8080"),
            (RULES_PATH_ENV, "./config/rules.yaml"),
        ]))
        .unwrap();

        assert_eq!(settings.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(settings.rules_path, Some(PathBuf::from("./config/rules.yaml")));
    }

    #[test]
    fn test_blank_rules_path_is_ignored() {
        let settings =
            ServerSettings::from_lookup(lookup_from(&[(RULES_PATH_ENV, "  ")])).unwrap();
        assert_eq!(settings.rules_path, None);
    }

    #[test]
    fn test_bad_addr_is_invalid_config() {
        let result = ServerSettings::from_lookup(lookup_from(&[(ADDR_ENV, "not-an-addr")]));
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
