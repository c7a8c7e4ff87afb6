// Pure conflict resolution for task updates.
//
// Purpose
// - Given the stored record (if any) and an incoming payload, decide the resulting record
//   and whether the update is accepted.
//
// Responsibilities
// - ServerAuthoritative: always accept, server clock wins.
// - LastWriteWins: accept only when the client `updatedAt` is strictly newer than the stored one.
//   Equal, older, missing or malformed client timestamps are rejected as conflicts.
// - Absent records are created (or reported missing when upsert on miss is disabled).
// - Never perform input or output.

use crate::modules::tasks::core::patch::TaskPatch;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::core::timestamp::{advance, parse_client_timestamp, to_iso_millis};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Merge every update and stamp it with the server clock. No rejection path.
    ServerAuthoritative,
    /// Reject updates whose client `updatedAt` is not strictly newer than the stored one.
    #[default]
    LastWriteWins,
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "merge" | "server-authoritative" => Ok(Self::ServerAuthoritative),
            "lww" | "last-write-wins" => Ok(Self::LastWriteWins),
            other => Err(format!("unknown conflict policy `{other}`, expected `lww` or `merge`")),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServerAuthoritative => f.write_str("merge"),
            Self::LastWriteWins => f.write_str("lww"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRules {
    pub policy: ConflictPolicy,
    pub upsert_on_miss: bool,
}

impl Default for UpdateRules {
    fn default() -> Self {
        Self {
            policy: ConflictPolicy::default(),
            upsert_on_miss: true,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConflictReason {
    #[error("incoming updatedAt {incoming} is not newer than stored {stored}")]
    Stale { incoming: String, stored: String },

    #[error("incoming updatedAt is missing or not a valid timestamp")]
    InvalidTimestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Created(Task),
    Updated(Task),
    Conflict(ConflictReason),
    NotFound,
}

pub fn resolve_update(
    existing: Option<&Task>,
    id: &str,
    payload: TaskPatch,
    now: DateTime<Utc>,
    rules: UpdateRules,
) -> Resolution {
    let Some(existing) = existing else {
        if !rules.upsert_on_miss {
            return Resolution::NotFound;
        }
        return Resolution::Created(Task::create(id, payload, now));
    };

    if rules.policy == ConflictPolicy::LastWriteWins {
        let Some(incoming) = payload.updated_at.as_ref().and_then(parse_client_timestamp) else {
            return Resolution::Conflict(ConflictReason::InvalidTimestamp);
        };
        if incoming <= existing.updated_at {
            return Resolution::Conflict(ConflictReason::Stale {
                incoming: to_iso_millis(&incoming),
                stored: to_iso_millis(&existing.updated_at),
            });
        }
    }

    let updated_at = advance(existing.updated_at, now);
    Resolution::Updated(existing.merged(payload, updated_at))
}
