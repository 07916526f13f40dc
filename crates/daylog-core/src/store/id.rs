//! Identifier generation.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::StoreConfig;

/// URL-safe alphabet, same set nanoid uses.
const ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Consecutive collisions tolerated before ids grow by one character.
const MAX_ATTEMPTS: usize = 32;

/// Random identifier generator that never hands out the same id twice.
///
/// Every issued or registered id is remembered for the lifetime of the
/// generator, including ids of entities that were later deleted.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
    length: usize,
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Create a generator from store configuration.
    pub fn new(config: &StoreConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            length: config.id_length.max(1),
            issued: HashSet::new(),
        }
    }

    /// Produce a fresh identifier.
    pub fn next_id(&mut self) -> String {
        loop {
            for _ in 0..MAX_ATTEMPTS {
                let candidate = self.random_token();
                if self.issued.insert(candidate.clone()) {
                    return candidate;
                }
            }

            self.length += 1;
            tracing::warn!(length = self.length, "id space crowded, growing id length");
        }
    }

    /// Record an externally supplied id. Returns false if it was already known.
    pub fn register(&mut self, id: &str) -> bool {
        self.issued.insert(id.to_string())
    }

    fn random_token(&mut self) -> String {
        (0..self.length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
