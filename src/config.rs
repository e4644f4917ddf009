use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TABLE_NAME: &str = "comments";
pub const DEFAULT_REGION: &str = "local";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:comments.db?mode=rwc";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// `DATABASE_URL` value that selects the in-process store.
pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub table_name: String,
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub store_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            store_timeout: Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let region = lookup("STORE_REGION").unwrap_or(defaults.region);
        let table_name = lookup("STORE_TABLE_NAME").unwrap_or(defaults.table_name);
        validate_table_name(&table_name)?;
        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let host = match lookup("HOST") {
            Some(value) => parse("HOST", value)?,
            None => defaults.host,
        };
        let port = match lookup("PORT") {
            Some(value) => parse("PORT", value)?,
            None => defaults.port,
        };
        let store_timeout = match lookup("STORE_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = parse("STORE_TIMEOUT_SECS", value.clone())?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "STORE_TIMEOUT_SECS",
                        value,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.store_timeout,
        };

        Ok(Self {
            region,
            table_name,
            database_url,
            host,
            port,
            store_timeout,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }
}

fn parse<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

// The table name is spliced into SQL, so only plain identifiers are allowed.
fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            name: "STORE_TABLE_NAME",
            value: name.to_string(),
            reason: "expected letters, digits and underscores".to_string(),
        })
    }
}
