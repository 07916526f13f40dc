//! Activity entity, its owned items, and its inputs.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo entry owned by an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, todo: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            todo: Some(todo.into()),
        }
    }
}

/// A free-form note owned by an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Note {
    pub fn new(id: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            note: Some(note.into()),
        }
    }
}

/// One day's log for a user.
///
/// `user_id` is a foreign key into the user collection. It is not checked
/// on write; a dangling key resolves to no owner on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    /// Free-form date. Used as a lookup key but not unique.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_up_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_you_eat_healthy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_you_do_sport: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub litres_of_drinking_water: Option<f64>,
    #[serde(default)]
    pub todo_list: Vec<TodoItem>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Fields supplied when creating an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub user_id: String,
    pub date: String,
    #[serde(default)]
    pub wake_up_time: Option<String>,
    #[serde(default)]
    pub did_you_eat_healthy: Option<bool>,
    #[serde(default)]
    pub did_you_do_sport: Option<bool>,
    #[serde(default)]
    pub litres_of_drinking_water: Option<f64>,
    #[serde(default)]
    pub todo_list: Vec<TodoItem>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl NewActivity {
    /// Create input with only the required fields set.
    pub fn new(user_id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            date: date.into(),
            wake_up_time: None,
            did_you_eat_healthy: None,
            did_you_do_sport: None,
            litres_of_drinking_water: None,
            todo_list: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_wake_up_time(mut self, time: impl Into<String>) -> Self {
        self.wake_up_time = Some(time.into());
        self
    }

    pub fn with_ate_healthy(mut self, value: bool) -> Self {
        self.did_you_eat_healthy = Some(value);
        self
    }

    pub fn with_did_sport(mut self, value: bool) -> Self {
        self.did_you_do_sport = Some(value);
        self
    }

    pub fn with_water(mut self, litres: f64) -> Self {
        self.litres_of_drinking_water = Some(litres);
        self
    }

    pub fn with_todo(mut self, item: TodoItem) -> Self {
        self.todo_list.push(item);
        self
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub(crate) fn into_activity(self, id: String) -> Activity {
        Activity {
            id,
            user_id: self.user_id,
            date: self.date,
            wake_up_time: self.wake_up_time,
            did_you_eat_healthy: self.did_you_eat_healthy,
            did_you_do_sport: self.did_you_do_sport,
            litres_of_drinking_water: self.litres_of_drinking_water,
            todo_list: self.todo_list,
            notes: self.notes,
        }
    }
}

/// Partial activity update.
///
/// This is a shallow merge. An absent key keeps the stored value. For the
/// optional fields a present `null` clears the value, and a null `todoList`
/// or `notes` empties the list. A present list replaces the whole list.
/// `userId` and `date` are required on the entity, so a null there is
/// ignored. The id is not part of the patch and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub wake_up_time: Option<Option<String>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub did_you_eat_healthy: Option<Option<bool>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub did_you_do_sport: Option<Option<bool>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub litres_of_drinking_water: Option<Option<f64>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub todo_list: Option<Option<Vec<TodoItem>>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<Vec<Note>>>,
}

/// Marks a key as present, so `null` becomes `Some(None)`. A missing key
/// never reaches this and falls back to the field default, `None`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ActivityPatch {
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_wake_up_time(mut self, time: impl Into<String>) -> Self {
        self.wake_up_time = Some(Some(time.into()));
        self
    }

    pub fn with_ate_healthy(mut self, value: bool) -> Self {
        self.did_you_eat_healthy = Some(Some(value));
        self
    }

    pub fn with_did_sport(mut self, value: bool) -> Self {
        self.did_you_do_sport = Some(Some(value));
        self
    }

    pub fn with_water(mut self, litres: f64) -> Self {
        self.litres_of_drinking_water = Some(Some(litres));
        self
    }

    pub fn with_todo_list(mut self, items: Vec<TodoItem>) -> Self {
        self.todo_list = Some(Some(items));
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = Some(Some(notes));
        self
    }

    /// Clear the wake-up time.
    pub fn without_wake_up_time(mut self) -> Self {
        self.wake_up_time = Some(None);
        self
    }

    /// Names of the fields this patch overwrites or clears.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let present = [
            ("userId", self.user_id.is_some()),
            ("date", self.date.is_some()),
            ("wakeUpTime", self.wake_up_time.is_some()),
            ("didYouEatHealthy", self.did_you_eat_healthy.is_some()),
            ("didYouDoSport", self.did_you_do_sport.is_some()),
            ("litresOfDrinkingWater", self.litres_of_drinking_water.is_some()),
            ("todoList", self.todo_list.is_some()),
            ("notes", self.notes.is_some()),
        ];
        present
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| name)
            .collect()
    }

    /// Merge the present fields into `activity`.
    pub fn apply_to(self, activity: &mut Activity) {
        if let Some(user_id) = self.user_id {
            activity.user_id = user_id;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }
        if let Some(time) = self.wake_up_time {
            activity.wake_up_time = time;
        }
        if let Some(value) = self.did_you_eat_healthy {
            activity.did_you_eat_healthy = value;
        }
        if let Some(value) = self.did_you_do_sport {
            activity.did_you_do_sport = value;
        }
        if let Some(litres) = self.litres_of_drinking_water {
            activity.litres_of_drinking_water = litres;
        }
        if let Some(items) = self.todo_list {
            activity.todo_list = items.unwrap_or_default();
        }
        if let Some(notes) = self.notes {
            activity.notes = notes.unwrap_or_default();
        }
    }
}
