//! Query executor for read operations.

use daylog_core::relation::{ACTIVITY_USER, USER_ACTIVITIES};
use daylog_core::{Activity, EntityStore, User};

/// Executes read operations against the store.
///
/// Results are cloned out so callers hold no borrow of the store.
pub struct QueryExecutor<'a> {
    store: &'a EntityStore,
}

impl<'a> QueryExecutor<'a> {
    /// Create a new query executor.
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    pub fn users(&self) -> Vec<User> {
        self.store.users().to_vec()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.store.user(id).cloned()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.store.activities().to_vec()
    }

    /// First activity logged for `date`.
    pub fn activity(&self, date: &str) -> Option<Activity> {
        self.store.activity_by_date(date).cloned()
    }

    /// Resolve `User.activities`.
    pub fn user_activities(&self, user: &User) -> Vec<Activity> {
        let activities: Vec<Activity> = self
            .store
            .activities_of(user)
            .into_iter()
            .cloned()
            .collect();

        tracing::trace!(
            relation = %USER_ACTIVITIES,
            user_id = %user.id,
            count = activities.len(),
            "resolved relation"
        );
        activities
    }

    /// Resolve `Activity.user`. None when the owner does not exist.
    pub fn activity_user(&self, activity: &Activity) -> Option<User> {
        let user = self.store.owner_of(activity).cloned();

        tracing::trace!(
            relation = %ACTIVITY_USER,
            activity_id = %activity.id,
            found = user.is_some(),
            "resolved relation"
        );
        user
    }
}
