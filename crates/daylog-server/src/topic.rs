//! Topics activity mutations publish on.

use std::fmt;
use std::str::FromStr;

/// Activity change topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityTopic {
    Created,
    Updated,
    Deleted,
}

impl ActivityTopic {
    /// All topics, in declaration order.
    pub const ALL: [ActivityTopic; 3] = [
        ActivityTopic::Created,
        ActivityTopic::Updated,
        ActivityTopic::Deleted,
    ];

    /// Wire name of the topic.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTopic::Created => "activityCreated",
            ActivityTopic::Updated => "activityUpdated",
            ActivityTopic::Deleted => "activityDeleted",
        }
    }
}

impl fmt::Display for ActivityTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityTopic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| format!("unknown topic: {}", s))
    }
}
