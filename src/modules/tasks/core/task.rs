use crate::modules::tasks::core::patch::TaskPatch;
use crate::modules::tasks::core::timestamp::iso_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored task record.
///
/// `created_at` is fixed at first insertion. `updated_at` moves forward on every accepted mutation.
/// `image_path` and `location` are opaque to the server and passed through as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub image_path: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
}

impl Task {
    /// Build a fresh record from a payload. Client timestamps and client id are ignored.
    pub fn create(id: impl Into<String>, payload: TaskPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: payload.title.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            is_completed: payload.is_completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
            image_path: payload.image_path.flatten(),
            location: payload.location.flatten(),
        }
    }

    /// Overwrite every recognized field present in `payload`, keep the rest.
    /// `id` and `created_at` never change; `updated_at` is set by the caller.
    pub fn merged(&self, payload: TaskPatch, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: payload.title.unwrap_or_else(|| self.title.clone()),
            description: payload
                .description
                .unwrap_or_else(|| self.description.clone()),
            is_completed: payload.is_completed.unwrap_or(self.is_completed),
            created_at: self.created_at,
            updated_at,
            image_path: payload
                .image_path
                .unwrap_or_else(|| self.image_path.clone()),
            location: payload.location.unwrap_or_else(|| self.location.clone()),
        }
    }
}
