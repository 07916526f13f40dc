//! Service configuration.

use std::path::PathBuf;

use clap::Parser;
use daylog_core::store::DEFAULT_ID_LENGTH;
use daylog_core::StoreConfig;

use crate::error::Error;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "daylog_server=info,daylog_core=info";

/// Daylog service configuration.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Entity store settings.
    pub store: StoreConfig,

    /// JSON fixtures loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load fixtures from a JSON file.
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    /// Set the length of generated identifiers.
    pub fn with_id_length(mut self, length: usize) -> Self {
        self.store.id_length = length;
        self
    }

    /// Make generated identifiers deterministic.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.store = self.store.with_rng_seed(seed);
        self
    }

    /// Check the configuration for values the store cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.store.id_length == 0 {
            return Err(Error::Config("id length must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "daylog-server")]
#[command(version, about = "Daylog activity service", long_about = None)]
pub struct Args {
    /// JSON file with users and activities to load at startup.
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Length of generated identifiers.
    #[arg(long, default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,

    /// Seed for the id generator (for reproducible runs).
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

impl Args {
    /// Convert command-line arguments to service configuration.
    pub fn into_config(self) -> ServiceConfig {
        let mut store = StoreConfig::new();
        store.id_length = self.id_length;
        store.rng_seed = self.rng_seed;

        ServiceConfig {
            store,
            seed_path: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.store.id_length, DEFAULT_ID_LENGTH);
        assert!(config.seed_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ServiceConfig::new()
            .with_seed_path("/tmp/seed.json")
            .with_id_length(8)
            .with_rng_seed(1);

        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.store.id_length, 8);
        assert_eq!(config.store.rng_seed, Some(1));
    }

    #[test]
    fn test_zero_id_length_rejected() {
        let err = ServiceConfig::new().with_id_length(0).validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "daylog-server",
            "--seed",
            "fixtures.json",
            "--id-length",
            "12",
            "--rng-seed",
            "99",
        ]);
        let config = args.into_config();

        assert_eq!(config.seed_path, Some(PathBuf::from("fixtures.json")));
        assert_eq!(config.store.id_length, 12);
        assert_eq!(config.store.rng_seed, Some(99));
    }

    #[test]
    fn test_args_defaults() {
        let config = Args::parse_from(["daylog-server"]).into_config();
        assert!(config.seed_path.is_none());
        assert_eq!(config.store.id_length, DEFAULT_ID_LENGTH);
        assert!(config.store.rng_seed.is_none());
    }
}
