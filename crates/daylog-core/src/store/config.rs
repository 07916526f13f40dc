//! Store configuration.

/// Default length of generated identifiers.
pub const DEFAULT_ID_LENGTH: usize = 21;

/// Configuration for an [`EntityStore`](super::EntityStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Length of generated identifiers.
    pub id_length: usize,

    /// Seed for the id generator. None draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl StoreConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            rng_seed: None,
        }
    }

    /// Set the identifier length. Values below 1 are raised to 1.
    pub fn with_id_length(mut self, length: usize) -> Self {
        self.id_length = length.max(1);
        self
    }

    /// Make id generation deterministic.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
