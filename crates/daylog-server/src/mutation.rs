//! Mutation executor for write operations.

use daylog_core::{
    Activity, ActivityPatch, DeleteAllPayload, EntityStore, NewActivity, NewUser, User, UserPatch,
};

use crate::error::Error;
use crate::pubsub::PubSubManager;
use crate::topic::ActivityTopic;

/// Executes mutations against the store and publishes activity changes.
///
/// Events are published only after the store change succeeded. A failed
/// mutation leaves the store as it was and publishes nothing.
pub struct MutationExecutor<'a> {
    store: &'a mut EntityStore,
    pubsub: &'a PubSubManager<Activity>,
}

impl<'a> MutationExecutor<'a> {
    /// Create a new mutation executor.
    pub fn new(store: &'a mut EntityStore, pubsub: &'a PubSubManager<Activity>) -> Self {
        Self { store, pubsub }
    }

    pub fn register(&mut self, input: NewUser) -> User {
        self.store.create_user(input)
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User, Error> {
        Ok(self.store.update_user(id, patch)?)
    }

    pub fn create_activity(&mut self, input: NewActivity) -> Activity {
        let activity = self.store.create_activity(input);
        self.publish(ActivityTopic::Created, &activity);
        activity
    }

    pub fn update_activity(&mut self, id: &str, patch: ActivityPatch) -> Result<Activity, Error> {
        let activity = self.store.update_activity(id, patch)?;
        self.publish(ActivityTopic::Updated, &activity);
        Ok(activity)
    }

    pub fn delete_activity(&mut self, id: &str) -> Result<Activity, Error> {
        let activity = self.store.delete_activity(id)?;
        self.publish(ActivityTopic::Deleted, &activity);
        Ok(activity)
    }

    /// Clear all activities. No per-activity event is published.
    pub fn delete_all_activities(&mut self) -> DeleteAllPayload {
        self.store.delete_all_activities()
    }

    fn publish(&self, topic: ActivityTopic, activity: &Activity) {
        let delivered = self.pubsub.publish(topic.as_str(), activity.clone());
        tracing::debug!(%topic, activity_id = %activity.id, delivered, "activity event published");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylog_core::StoreConfig;

    #[test]
    fn test_each_mutation_publishes_on_its_topic() {
        let mut store = EntityStore::new(StoreConfig::new().with_rng_seed(9));
        let pubsub = PubSubManager::new();
        let mut created = pubsub.subscribe("activityCreated");
        let mut updated = pubsub.subscribe("activityUpdated");
        let mut deleted = pubsub.subscribe("activityDeleted");

        let mut executor = MutationExecutor::new(&mut store, &pubsub);
        let activity = executor.create_activity(NewActivity::new("u1", "2024-01-01"));
        let changed = executor
            .update_activity(&activity.id, ActivityPatch::default().with_water(2.0))
            .unwrap();
        let removed = executor.delete_activity(&activity.id).unwrap();

        assert_eq!(created.try_recv(), Some(activity));
        assert_eq!(updated.try_recv(), Some(changed.clone()));
        assert_eq!(deleted.try_recv(), Some(removed.clone()));
        assert_eq!(removed, changed);
    }

    #[test]
    fn test_failed_mutation_publishes_nothing() {
        let mut store = EntityStore::default();
        let pubsub = PubSubManager::new();
        let mut updated = pubsub.subscribe("activityUpdated");
        let mut deleted = pubsub.subscribe("activityDeleted");

        let mut executor = MutationExecutor::new(&mut store, &pubsub);
        assert!(executor
            .update_activity("missing", ActivityPatch::default().with_date("x"))
            .unwrap_err()
            .is_not_found());
        assert!(executor.delete_activity("missing").unwrap_err().is_not_found());

        assert!(updated.try_recv().is_none());
        assert!(deleted.try_recv().is_none());
    }

    #[test]
    fn test_delete_all_is_silent() {
        let mut store = EntityStore::default();
        let pubsub = PubSubManager::new();
        let mut deleted = pubsub.subscribe("activityDeleted");

        let mut executor = MutationExecutor::new(&mut store, &pubsub);
        executor.create_activity(NewActivity::new("u1", "2024-01-01"));
        executor.create_activity(NewActivity::new("u1", "2024-01-02"));

        assert_eq!(executor.delete_all_activities().count, 2);
        assert!(deleted.try_recv().is_none());
    }
}
