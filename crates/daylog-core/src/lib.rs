//! Daylog Core - entity store and relationship resolution.
//!
//! This crate holds the in-memory user and activity collections and derives
//! the associations between them on demand.

pub mod error;
pub mod model;
pub mod relation;
pub mod store;

pub use error::{EntityKind, Error, Result};
pub use model::{
    Activity, ActivityPatch, DeleteAllPayload, NewActivity, NewUser, Note, TodoItem, User,
    UserPatch,
};
pub use store::{EntityStore, IdGenerator, Seed, StoreConfig};
