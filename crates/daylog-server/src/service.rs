//! Query/mutation facade called by the request dispatcher.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use daylog_core::{
    Activity, ActivityPatch, DeleteAllPayload, EntityStore, NewActivity, NewUser, Seed, User,
    UserPatch,
};

use crate::config::ServiceConfig;
use crate::error::Error;
use crate::mutation::MutationExecutor;
use crate::pubsub::{PubSubManager, SharedPubSubManager};
use crate::query::QueryExecutor;

/// Shared store handle.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// Operation surface for users, activities and activity subscriptions.
///
/// Every operation runs under the store lock from start to finish, so each
/// one is atomic with respect to the others. Mutations publish while still
/// holding the write lock, which keeps event order on a topic identical to
/// mutation order. Clones share the same store and hub.
#[derive(Clone)]
pub struct DaylogService {
    store: SharedStore,
    pubsub: SharedPubSubManager<Activity>,
}

impl DaylogService {
    /// Create a service around an existing store.
    pub fn new(store: EntityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            pubsub: Arc::new(PubSubManager::new()),
        }
    }

    /// Build a service from configuration, loading seed fixtures if set.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, Error> {
        config.validate()?;

        let store = match &config.seed_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let seed = Seed::from_json_str(&json)?;
                let store = EntityStore::from_seed(seed, config.store.clone())?;
                info!(
                    path = %path.display(),
                    users = store.users().len(),
                    activities = store.activities().len(),
                    "seed fixtures loaded"
                );
                store
            }
            None => EntityStore::new(config.store.clone()),
        };

        Ok(Self::new(store))
    }

    /// Get the shared store.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Get the pub-sub manager.
    pub fn pubsub(&self) -> &SharedPubSubManager<Activity> {
        &self.pubsub
    }

    fn read<R>(&self, f: impl FnOnce(QueryExecutor<'_>) -> R) -> R {
        let store = self.store.read();
        f(QueryExecutor::new(&store))
    }

    fn write<R>(&self, f: impl FnOnce(MutationExecutor<'_>) -> R) -> R {
        let mut store = self.store.write();
        f(MutationExecutor::new(&mut store, &self.pubsub))
    }

    // Queries

    pub fn users(&self) -> Vec<User> {
        self.read(|q| q.users())
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.read(|q| q.user(id))
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.read(|q| q.activities())
    }

    /// First activity for `date`, or None. Duplicate dates are not an error.
    pub fn activity(&self, date: &str) -> Option<Activity> {
        self.read(|q| q.activity(date))
    }

    /// Resolve `User.activities` against the current store.
    pub fn user_activities(&self, user: &User) -> Vec<Activity> {
        self.read(|q| q.user_activities(user))
    }

    /// Resolve `Activity.user` against the current store.
    pub fn activity_user(&self, activity: &Activity) -> Option<User> {
        self.read(|q| q.activity_user(activity))
    }

    // Mutations

    pub fn register(&self, input: NewUser) -> User {
        self.write(|mut m| m.register(input))
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, Error> {
        self.write(|mut m| m.update_user(id, patch))
    }

    /// Create an activity and publish it on `activityCreated`.
    pub fn create_activity(&self, input: NewActivity) -> Activity {
        self.write(|mut m| m.create_activity(input))
    }

    /// Merge into an activity and publish it on `activityUpdated`.
    pub fn update_activity(&self, id: &str, patch: ActivityPatch) -> Result<Activity, Error> {
        self.write(|mut m| m.update_activity(id, patch))
    }

    /// Remove an activity and publish it on `activityDeleted`.
    pub fn delete_activity(&self, id: &str) -> Result<Activity, Error> {
        self.write(|mut m| m.delete_activity(id))
    }

    pub fn delete_all_activities(&self) -> DeleteAllPayload {
        self.write(|mut m| m.delete_all_activities())
    }
}

impl Default for DaylogService {
    fn default() -> Self {
        Self::new(EntityStore::default())
    }
}
