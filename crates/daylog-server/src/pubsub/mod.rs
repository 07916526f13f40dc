//! Pub-sub infrastructure for change notifications.
//!
//! Mutation handlers publish on named topics; every live subscriber of a
//! topic gets its own ordered copy of each payload.

mod manager;
mod subscription;

pub use manager::{PubSubManager, SharedPubSubManager};
pub use subscription::{Subscription, SubscriptionInfo};
