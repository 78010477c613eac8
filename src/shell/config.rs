use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub employee_seed_path: PathBuf,
    pub store_timeout: Duration,
    /// `None` disables the scheduled worker.
    pub counter_interval: Option<Duration>,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let employee_seed_path = lookup("EMPLOYEE_SEED_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/employees.json"));
        let store_timeout_ms = parse_or(&lookup, "STORE_TIMEOUT_MS", 2000u64)?;
        if store_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "STORE_TIMEOUT_MS",
                value: "0".into(),
            });
        }
        let counter_interval_secs = parse_or(&lookup, "COUNTER_INTERVAL_SECS", 5u64)?;

        Ok(Self {
            host,
            port,
            employee_seed_path,
            store_timeout: Duration::from_millis(store_timeout_ms),
            counter_interval: (counter_interval_secs > 0)
                .then(|| Duration::from_secs(counter_interval_secs)),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
