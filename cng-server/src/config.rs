//! Process configuration from environment variables.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Number of stations generated when `CNG_STATION_COUNT` is unset.
pub const DEFAULT_STATION_COUNT: i64 = 30;

/// Listen address when `CNG_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Error returned when an environment variable holds a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {variable}: {value:?}")]
pub struct ConfigError {
    variable: &'static str,
    value: String,
}

/// Startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How many mock stations to generate. Validated by the repository,
    /// so a negative value is carried through and rejected there.
    pub station_count: i64,

    /// Seed for all mock randomness. `None` picks a fresh seed per run.
    pub seed: Option<u64>,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    /// Read `CNG_STATION_COUNT`, `CNG_SEED` and `CNG_LISTEN_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let station_count =
            parse_var(&lookup, "CNG_STATION_COUNT")?.unwrap_or(defaults.station_count);
        let seed = parse_var(&lookup, "CNG_SEED")?;
        let listen_addr = parse_var(&lookup, "CNG_LISTEN_ADDR")?.unwrap_or(defaults.listen_addr);

        Ok(Self {
            station_count,
            seed,
            listen_addr,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            station_count: DEFAULT_STATION_COUNT,
            seed: None,
            listen_addr: DEFAULT_LISTEN_ADDR,
        }
    }
}

/// Parse a variable if present. Blank values count as unset.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(variable) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError {
            variable,
            value: raw.clone(),
        })
}
