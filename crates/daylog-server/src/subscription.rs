//! Subscription facade: per-topic activity event streams.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use daylog_core::Activity;

use crate::pubsub::Subscription;
use crate::service::DaylogService;
use crate::topic::ActivityTopic;

/// Lazy, unbounded stream of activity events for one topic.
///
/// The stream does not complete on its own. It ends when the caller drops or
/// cancels it, or when the service that produced it is gone.
#[derive(Debug)]
pub struct ActivityStream {
    topic: ActivityTopic,
    inner: Subscription<Activity>,
}

impl ActivityStream {
    /// Topic this stream follows.
    pub fn topic(&self) -> ActivityTopic {
        self.topic
    }

    /// Subscription ID in the hub.
    pub fn id(&self) -> u64 {
        self.inner.id()
    }

    /// Wait for the next event.
    pub async fn next_event(&mut self) -> Option<Activity> {
        self.inner.recv().await
    }

    /// Take an already delivered event without waiting.
    pub fn try_next_event(&mut self) -> Option<Activity> {
        self.inner.try_recv()
    }

    /// Stop the stream and release its registration.
    pub fn cancel(self) {
        self.inner.cancel();
    }
}

impl Stream for ActivityStream {
    type Item = Activity;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Activity>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }
}

impl DaylogService {
    /// Open a stream on `topic`.
    pub fn subscribe(&self, topic: ActivityTopic) -> ActivityStream {
        ActivityStream {
            topic,
            inner: self.pubsub().subscribe(topic.as_str()),
        }
    }

    /// Activities as they are created.
    pub fn activity_created(&self) -> ActivityStream {
        self.subscribe(ActivityTopic::Created)
    }

    /// Activities as they are updated.
    pub fn activity_updated(&self) -> ActivityStream {
        self.subscribe(ActivityTopic::Updated)
    }

    /// Activities as they are deleted.
    pub fn activity_deleted(&self) -> ActivityStream {
        self.subscribe(ActivityTopic::Deleted)
    }
}
