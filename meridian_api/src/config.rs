use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result, ensure};
use meridian_table::plugin::DEFAULT_MAX_LOCATIONS;

pub const NETWORK_PATH_KEY: &str = "MERIDIAN_NETWORK_PATH";
pub const MAX_TABLE_LOCATIONS_KEY: &str = "MERIDIAN_MAX_TABLE_LOCATIONS";
pub const BIND_ADDRESS_KEY: &str = "MERIDIAN_BIND_ADDRESS";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub network_path: PathBuf,
    pub max_table_locations: usize,
    pub bind_address: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network_path = lookup(NETWORK_PATH_KEY)
            .map(PathBuf::from)
            .with_context(|| format!("{} is not set", NETWORK_PATH_KEY))?;

        let max_table_locations = match lookup(MAX_TABLE_LOCATIONS_KEY) {
            Some(value) => value
                .parse()
                .with_context(|| format!("{} must be a positive integer", MAX_TABLE_LOCATIONS_KEY))?,
            None => DEFAULT_MAX_LOCATIONS,
        };
        ensure!(
            max_table_locations > 0,
            "{} must be a positive integer",
            MAX_TABLE_LOCATIONS_KEY
        );

        let bind_address = lookup(BIND_ADDRESS_KEY)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .with_context(|| format!("{} is not a socket address", BIND_ADDRESS_KEY))?;

        Ok(ServerConfig {
            network_path,
            max_table_locations,
            bind_address,
        })
    }
}
