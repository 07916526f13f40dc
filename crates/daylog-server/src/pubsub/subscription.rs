//! Subscription tracking and the subscriber-side handle.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Weak;
use std::task::{Context, Poll};
use std::time::Instant;

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Registry state shared between the manager and its handles.
pub(crate) struct Tables<T> {
    /// Active subscriptions keyed by subscription ID.
    pub(crate) subscriptions: HashMap<u64, SubscriptionEntry<T>>,
    /// Subscription IDs per topic, in registration order.
    pub(crate) topic_index: HashMap<String, Vec<u64>>,
}

impl<T> Tables<T> {
    pub(crate) fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            topic_index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, entry: SubscriptionEntry<T>) {
        self.topic_index
            .entry(entry.topic.clone())
            .or_default()
            .push(entry.id);
        self.subscriptions.insert(entry.id, entry);
    }

    /// Drop a subscription from both maps. Dropping the entry closes its channel.
    pub(crate) fn remove(&mut self, subscription_id: u64) -> Option<SubscriptionEntry<T>> {
        let entry = self.subscriptions.remove(&subscription_id)?;

        if let Some(ids) = self.topic_index.get_mut(&entry.topic) {
            ids.retain(|&id| id != subscription_id);
            if ids.is_empty() {
                self.topic_index.remove(&entry.topic);
            }
        }

        Some(entry)
    }
}

/// A subscription entry tracking an active subscriber.
pub(crate) struct SubscriptionEntry<T> {
    pub(crate) id: u64,
    pub(crate) topic: String,
    pub(crate) sender: mpsc::UnboundedSender<T>,
    pub(crate) created_at: Instant,
    pub(crate) events_sent: u64,
}

impl<T> SubscriptionEntry<T> {
    pub(crate) fn new(id: u64, topic: impl Into<String>, sender: mpsc::UnboundedSender<T>) -> Self {
        Self {
            id,
            topic: topic.into(),
            sender,
            created_at: Instant::now(),
            events_sent: 0,
        }
    }

    /// Hand `payload` to the subscriber. Returns false if the receiver is gone.
    pub(crate) fn deliver(&mut self, payload: T) -> bool {
        if self.sender.send(payload).is_err() {
            return false;
        }
        self.events_sent += 1;
        true
    }

    pub(crate) fn info(&self) -> SubscriptionInfo {
        SubscriptionInfo {
            id: self.id,
            topic: self.topic.clone(),
            created_at: self.created_at,
            events_sent: self.events_sent,
        }
    }
}

/// Snapshot of an active subscription.
#[derive(Debug, Clone)]
pub struct SubscriptionInfo {
    /// Unique subscription ID.
    pub id: u64,
    /// Topic being watched.
    pub topic: String,
    /// When the subscription was created.
    pub created_at: Instant,
    /// Number of events delivered so far.
    pub events_sent: u64,
}

/// Subscriber-side handle yielding payloads published on one topic.
///
/// The handle stays registered until it is cancelled or dropped. It refers to
/// the hub only weakly, so it never keeps the hub alive. If the hub goes away
/// the stream ends.
pub struct Subscription<T> {
    id: u64,
    topic: String,
    rx: mpsc::UnboundedReceiver<T>,
    tables: Weak<Mutex<Tables<T>>>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(
        id: u64,
        topic: impl Into<String>,
        rx: mpsc::UnboundedReceiver<T>,
        tables: Weak<Mutex<Tables<T>>>,
    ) -> Self {
        Self {
            id,
            topic: topic.into(),
            rx,
            tables,
        }
    }

    /// Subscription ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Topic this handle listens on.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Wait for the next payload. Returns None once the subscription is closed.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Take a payload that has already been delivered, without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Stop listening and release the hub's entry.
    pub fn cancel(self) {
        drop(self);
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let Some(tables) = self.tables.upgrade() else {
            return;
        };

        let removed = tables.lock().remove(self.id);
        if let Some(entry) = removed {
            tracing::debug!(
                subscription_id = self.id,
                topic = %self.topic,
                events_sent = entry.events_sent,
                "subscription cancelled"
            );
        }
    }
}

impl<T> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}
