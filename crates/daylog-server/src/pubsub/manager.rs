//! Pub-sub manager for handling subscriptions and publishing events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::subscription::{Subscription, SubscriptionEntry, SubscriptionInfo, Tables};
use crate::error::Error;

/// Topic-based publish/subscribe broker.
///
/// Every subscriber owns an unbounded FIFO channel. `publish` pushes the
/// payload into each channel registered on the topic before returning, so
/// delivery is synchronous with the publisher and never blocks it.
/// Subscribers that register after a publish do not see it.
pub struct PubSubManager<T> {
    tables: Arc<Mutex<Tables<T>>>,
    next_subscription_id: AtomicU64,
}

impl<T: Clone> PubSubManager<T> {
    /// Create a new pub-sub manager.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::new())),
            next_subscription_id: AtomicU64::new(1),
        }
    }

    /// Subscribe to a topic.
    pub fn subscribe(&self, topic: &str) -> Subscription<T> {
        let subscription_id = self.next_subscription_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::unbounded_channel();

        self.tables
            .lock()
            .insert(SubscriptionEntry::new(subscription_id, topic, tx));

        tracing::debug!(subscription_id, topic, "subscription created");

        Subscription::new(subscription_id, topic, rx, Arc::downgrade(&self.tables))
    }

    /// Remove a subscription. Its handle sees the end of its stream.
    pub fn unsubscribe(&self, subscription_id: u64) -> Result<(), Error> {
        let entry = self
            .tables
            .lock()
            .remove(subscription_id)
            .ok_or(Error::SubscriptionNotFound(subscription_id))?;

        tracing::debug!(
            subscription_id,
            topic = %entry.topic,
            events_sent = entry.events_sent,
            "subscription removed"
        );

        Ok(())
    }

    /// Publish a payload to every subscriber of `topic`.
    ///
    /// Returns the number of subscribers that received it. Subscribers whose
    /// handle has been dropped are pruned.
    pub fn publish(&self, topic: &str, payload: T) -> usize {
        let mut tables = self.tables.lock();

        let subscription_ids = match tables.topic_index.get(topic) {
            Some(ids) => ids.clone(),
            None => return 0, // No subscriptions for this topic
        };

        let mut delivered = 0;
        let mut closed = Vec::new();
        for subscription_id in subscription_ids {
            let Some(entry) = tables.subscriptions.get_mut(&subscription_id) else {
                continue;
            };
            if entry.deliver(payload.clone()) {
                delivered += 1;
            } else {
                closed.push(subscription_id);
            }
        }

        for subscription_id in closed {
            tables.remove(subscription_id);
            tracing::debug!(subscription_id, topic, "pruned closed subscription");
        }

        tracing::trace!(topic, delivered, "published event");
        delivered
    }

    /// Get the number of active subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.tables.lock().subscriptions.len()
    }

    /// Get subscriptions for a specific topic.
    pub fn subscriptions_for_topic(&self, topic: &str) -> Vec<u64> {
        self.tables
            .lock()
            .topic_index
            .get(topic)
            .cloned()
            .unwrap_or_default()
    }

    /// Get a subscription by ID.
    pub fn get_subscription(&self, subscription_id: u64) -> Option<SubscriptionInfo> {
        self.tables
            .lock()
            .subscriptions
            .get(&subscription_id)
            .map(SubscriptionEntry::info)
    }
}

impl<T: Clone> Default for PubSubManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared pub-sub manager handle.
pub type SharedPubSubManager<T> = Arc<PubSubManager<T>>;
