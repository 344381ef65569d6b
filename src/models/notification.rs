use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

/// A single member-facing event record (contribution reminder, loan decision,
/// meeting announcement, ...) with read/unread state and optional role-scoped
/// visibility via `metadata.audience`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,

    pub priority: Option<Priority>,
    pub action_url: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

/// Wire shape of `GET /api/notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
}

impl Notification {
    pub fn new(request: CreateNotificationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            message: request.message,
            read: false,
            created_at: Utc::now(),
            priority: request.priority.unwrap_or_default(),
            action_url: request.action_url,
            metadata: request.metadata.unwrap_or_default(),
        }
    }

    /// Role this notification is restricted to, if any. An empty string is
    /// treated the same as an absent tag: visible to everyone.
    pub fn audience(&self) -> Option<&str> {
        self.metadata
            .get("audience")
            .and_then(Value::as_str)
            .filter(|audience| !audience.is_empty())
    }

    pub fn visible_to(&self, viewer_role: &str) -> bool {
        match self.audience() {
            Some(audience) => audience == viewer_role,
            None => true,
        }
    }
}
