//! Entity store: ordered in-memory collections with CRUD primitives.

mod config;
mod engine;
mod id;
mod seed;

pub use config::{StoreConfig, DEFAULT_ID_LENGTH};
pub use engine::EntityStore;
pub use id::IdGenerator;
pub use seed::Seed;
