//! Entity types held by the store.
//!
//! - [`User`]: a registered person
//! - [`Activity`]: one day's log, pointing at its owner by `user_id`
//! - [`TodoItem`] / [`Note`]: items owned by a single activity
//!
//! Each entity comes with a creation input and a partial-update patch.

mod activity;
mod user;

pub use activity::{Activity, ActivityPatch, NewActivity, Note, TodoItem};
pub use user::{NewUser, User, UserPatch};

use serde::{Deserialize, Serialize};

/// Result of clearing the activity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllPayload {
    /// Number of activities removed.
    pub count: usize,
}
