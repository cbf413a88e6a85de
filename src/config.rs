//! Server configuration from environment variables, optionally overridden by positional arguments.

use crate::error::ConfigError;
use regex::Regex;
use std::net::SocketAddr;

/// `DATABASE_URL` value that selects the in-process store.
pub const MEMORY_DATASOURCE: &str = "memory";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4567;
const DEFAULT_SCHEMA: &str = "public";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Postgres URL, or `memory`.
    pub database_url: String,
    /// Schema holding the `courses` and `reviews` tables.
    pub schema: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            database_url: MEMORY_DATASOURCE.into(),
            schema: DEFAULT_SCHEMA.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `COURSES_HOST`, `COURSES_PORT`, `DATABASE_URL`, `COURSES_SCHEMA`, `DB_MAX_CONNECTIONS`
    /// and `MAX_BODY_BYTES`, after loading a `.env` file if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            host: lookup("COURSES_HOST").unwrap_or(defaults.host),
            port: parse_or("COURSES_PORT", lookup("COURSES_PORT"), defaults.port)?,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            schema: lookup("COURSES_SCHEMA").unwrap_or(defaults.schema),
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), defaults.max_body_bytes)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply positional process arguments `[port] [datasource]`.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        if let Some(port) = args.next() {
            self.port = parse_or("port argument", Some(port.as_ref().to_string()), self.port)?;
        }
        if let Some(datasource) = args.next() {
            self.database_url = datasource.as_ref().to_string();
        }
        Ok(self)
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATASOURCE
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "COURSES_HOST",
                value: self.host.clone(),
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map_err(|_| ConfigError::InvalidSchema(self.schema.clone()))?;
        if !ident.is_match(&self.schema) {
            return Err(ConfigError::InvalidSchema(self.schema.clone()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        Ok(())
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_memory_store_on_4567() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 4567);
        assert!(config.uses_memory_store());
        assert_eq!(config.schema, "public");
    }

    #[test]
    fn reads_environment_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("COURSES_PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/courses"),
            ("COURSES_SCHEMA", "treehouse"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.schema, "treehouse");
        assert!(!config.uses_memory_store());
    }

    #[test]
    fn rejects_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("COURSES_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "COURSES_PORT", .. }));
    }

    #[test]
    fn rejects_schema_that_is_not_an_identifier() {
        let err = ServerConfig::from_lookup(lookup(&[("COURSES_SCHEMA", "a; DROP TABLE x")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSchema(_)));
    }

    #[test]
    fn positional_args_override_port_and_datasource() {
        let config = ServerConfig::default()
            .with_args(["0", "postgres://localhost/testing"])
            .unwrap();
        assert_eq!(config.port, 0);
        assert_eq!(config.database_url, "postgres://localhost/testing");
    }

    #[test]
    fn builds_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }
}
