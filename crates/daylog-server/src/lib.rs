//! Daylog Server library.
//!
//! This crate provides the operation surface over the Daylog store:
//! queries, mutations that publish activity events, and per-topic
//! subscription streams.

pub mod config;
pub mod error;
pub mod mutation;
pub mod pubsub;
pub mod query;
pub mod service;
pub mod subscription;
pub mod topic;

pub use config::{Args, ServiceConfig};
pub use error::Error;
pub use mutation::MutationExecutor;
pub use pubsub::{PubSubManager, SharedPubSubManager, Subscription, SubscriptionInfo};
pub use query::QueryExecutor;
pub use service::{DaylogService, SharedStore};
pub use subscription::ActivityStream;
pub use topic::ActivityTopic;
