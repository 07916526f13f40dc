//! Seed fixtures for a fresh store.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Activity, User};

/// Users and activities loaded into a store at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Seed {
    /// Parse fixtures from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidSeed(e.to_string()))
    }
}
