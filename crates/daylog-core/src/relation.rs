//! Relationship resolution between users and activities.
//!
//! The association is never stored. Both directions are derived on every call
//! by matching `Activity::user_id` against `User::id`, so there are no
//! back-pointers to keep in sync and no ownership cycles between the two
//! collections. Each lookup is a linear scan.

use std::fmt;

use crate::model::{Activity, User};

/// Cardinality of a derived relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// One user has many activities.
    OneToMany,
    /// Many activities point at one user.
    ManyToOne,
}

/// A named relation between the two collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationDef {
    /// Field name exposed on the source entity.
    pub name: &'static str,
    /// Source entity name.
    pub from_entity: &'static str,
    /// Target entity name.
    pub to_entity: &'static str,
    /// Relation cardinality.
    pub cardinality: Cardinality,
}

impl fmt::Display for RelationDef {
    /// Renders as a field signature, e.g. `User.activities: [Activity]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cardinality {
            Cardinality::OneToMany => {
                write!(f, "{}.{}: [{}]", self.from_entity, self.name, self.to_entity)
            }
            Cardinality::ManyToOne => {
                write!(f, "{}.{}: {}", self.from_entity, self.name, self.to_entity)
            }
        }
    }
}

/// `User.activities`
pub const USER_ACTIVITIES: RelationDef = RelationDef {
    name: "activities",
    from_entity: "User",
    to_entity: "Activity",
    cardinality: Cardinality::OneToMany,
};

/// `Activity.user`
pub const ACTIVITY_USER: RelationDef = RelationDef {
    name: "user",
    from_entity: "Activity",
    to_entity: "User",
    cardinality: Cardinality::ManyToOne,
};

/// Activities owned by `user`, in store order.
pub fn activities_for_user<'a, 'u>(
    activities: &'a [Activity],
    user: &'u User,
) -> impl Iterator<Item = &'a Activity> + 'u
where
    'a: 'u,
{
    activities
        .iter()
        .filter(move |activity| activity.user_id == user.id)
}

/// The owner of `activity`, or None when the foreign key dangles.
pub fn user_for_activity<'a>(users: &'a [User], activity: &Activity) -> Option<&'a User> {
    users.iter().find(|user| user.id == activity.user_id)
}
