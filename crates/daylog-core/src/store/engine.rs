//! In-memory entity store.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{
    Activity, ActivityPatch, DeleteAllPayload, NewActivity, NewUser, User, UserPatch,
};
use crate::relation;

use super::config::StoreConfig;
use super::id::IdGenerator;
use super::seed::Seed;

/// Holds the user and activity collections.
///
/// Both collections keep insertion order. Every operation either applies in
/// full or returns an error with the collections untouched.
#[derive(Debug)]
pub struct EntityStore {
    users: Vec<User>,
    activities: Vec<Activity>,
    ids: IdGenerator,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            users: Vec::new(),
            activities: Vec::new(),
            ids: IdGenerator::new(&config),
        }
    }

    /// Create a store pre-populated with fixtures.
    ///
    /// Fixture ids are kept as given and reserved so the generator never
    /// hands them out. Empty or duplicate ids are rejected.
    pub fn from_seed(seed: Seed, config: StoreConfig) -> Result<Self> {
        let mut store = Self::new(config);

        for user in seed.users {
            store.reserve_seed_id(&user.id)?;
            store.users.push(user);
        }
        for activity in seed.activities {
            store.reserve_seed_id(&activity.id)?;
            store.activities.push(activity);
        }

        debug!(
            users = store.users.len(),
            activities = store.activities.len(),
            "store seeded"
        );
        Ok(store)
    }

    fn reserve_seed_id(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::InvalidSeed("empty id".to_string()));
        }
        if !self.ids.register(id) {
            return Err(Error::InvalidSeed(format!("duplicate id {}", id)));
        }
        Ok(())
    }

    // Users

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Register a new user.
    pub fn create_user(&mut self, input: NewUser) -> User {
        let user = input.into_user(self.ids.next_id());
        self.users.push(user.clone());

        debug!(id = %user.id, "user created");
        user
    }

    /// Merge `patch` into the user with `id`.
    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User> {
        let Some(user) = self.users.iter_mut().find(|user| user.id == id) else {
            debug!(id, "update of unknown user");
            return Err(Error::user_not_found(id));
        };

        let fields = patch.changed_fields();
        patch.apply_to(user);

        debug!(id, ?fields, "user updated");
        Ok(user.clone())
    }

    // Activities

    /// All activities in insertion order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Look up an activity by id.
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// First activity with the given date.
    ///
    /// Dates are not unique; the earliest inserted match wins.
    pub fn activity_by_date(&self, date: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.date == date)
    }

    /// Create an activity. The owning user is not checked.
    pub fn create_activity(&mut self, input: NewActivity) -> Activity {
        let activity = input.into_activity(self.ids.next_id());
        self.activities.push(activity.clone());

        debug!(id = %activity.id, user_id = %activity.user_id, "activity created");
        activity
    }

    /// Merge `patch` into the activity with `id`.
    pub fn update_activity(&mut self, id: &str, patch: ActivityPatch) -> Result<Activity> {
        let Some(activity) = self.activities.iter_mut().find(|activity| activity.id == id) else {
            debug!(id, "update of unknown activity");
            return Err(Error::activity_not_found(id));
        };

        let fields = patch.changed_fields();
        patch.apply_to(activity);

        debug!(id, ?fields, "activity updated");
        Ok(activity.clone())
    }

    /// Remove the first activity with `id` and return it.
    pub fn delete_activity(&mut self, id: &str) -> Result<Activity> {
        let Some(index) = self.activities.iter().position(|activity| activity.id == id) else {
            debug!(id, "delete of unknown activity");
            return Err(Error::activity_not_found(id));
        };

        let removed = self.activities.remove(index);
        debug!(id, user_id = %removed.user_id, "activity deleted");
        Ok(removed)
    }

    /// Remove every activity. Returns how many were removed.
    pub fn delete_all_activities(&mut self) -> DeleteAllPayload {
        let count = self.activities.len();
        self.activities.clear();

        debug!(count, "activities cleared");
        DeleteAllPayload { count }
    }

    // Relations

    /// Activities owned by `user`, recomputed from the current collection.
    pub fn activities_of(&self, user: &User) -> Vec<&Activity> {
        relation::activities_for_user(&self.activities, user).collect()
    }

    /// Owner of `activity`, if the foreign key resolves.
    pub fn owner_of(&self, activity: &Activity) -> Option<&User> {
        relation::user_for_activity(&self.users, activity)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
