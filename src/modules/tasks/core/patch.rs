// Incoming task payload for create and update.
//
// Purpose
// - Carry exactly the recognized fields a client sent, and nothing else.
//
// Responsibilities
// - Distinguish "field absent" from "field present". For the nullable fields an explicit
//   `null` is `Some(None)` and clears the stored value; absence is `None` and preserves it.
// - Drop unrecognized fields during decoding.
// - Keep the raw client `updatedAt` so the conflict resolver can judge it, including malformed values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub image_path: Option<Option<Value>>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<Value>>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(Some)
}

impl TaskPatch {
    /// Client supplied id, with an empty string treated as absent.
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
