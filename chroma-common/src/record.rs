use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::now;

/// One accepted vote. Never mutated once the store has it.
///
/// On the wire the fields are `color` and `timestamp` (RFC 3339).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    #[serde(rename = "color")]
    pub option_name: String,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

impl VoteRecord {
    /// A record for `option_name` stamped with the current time.
    pub fn new(option_name: impl Into<String>) -> Self {
        Self {
            option_name: option_name.into(),
            submitted_at: now(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
