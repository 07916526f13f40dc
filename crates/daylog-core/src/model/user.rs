//! User entity and its inputs.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Users own activities only by back-reference: an activity names its owner
/// through `user_id`, and the user holds no list of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields supplied when registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    /// Create registration input from first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub(crate) fn into_user(self, id: String) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Partial user update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserPatch {
    /// Set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Names of the fields this patch overwrites.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.first_name.is_some() {
            fields.push("firstName");
        }
        if self.last_name.is_some() {
            fields.push("lastName");
        }
        fields
    }

    /// Merge the present fields into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        NewUser::new("Ada", "Lovelace").into_user("u1".to_string())
    }

    #[test]
    fn test_patch_only_overwrites_present_fields() {
        let mut user = ada();
        UserPatch::default().with_last_name("Byron").apply_to(&mut user);

        assert_eq!(user.id, "u1");
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Byron");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut user = ada();
        let patch = UserPatch::default();
        assert!(patch.changed_fields().is_empty());

        patch.apply_to(&mut user);
        assert_eq!(user, ada());
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");

        let patch: UserPatch = serde_json::from_str(r#"{"firstName":"Grace"}"#).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Grace"));
        assert!(patch.last_name.is_none());
    }
}
