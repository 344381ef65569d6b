use std::sync::Arc;
use tokio::sync::RwLock;
use serde_json::json;

use crate::models::notification::{CreateNotificationRequest, Notification, NotificationFeed, Priority};

/// Server-side notification registry backing the HTTP contract.
///
/// Deliberately non-persistent: notifications live in memory for the
/// lifetime of the process, matching the mock-data character of the rest of
/// the API. The registry is the authority the client-session store
/// reconciles against on fetch.
#[derive(Clone, Default)]
pub struct NotificationRegistry {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with demo chama notifications, used by the server
    /// binary so a fresh instance has something to serve.
    pub fn with_demo_data() -> Self {
        let demo = vec![
            Notification::new(CreateNotificationRequest {
                title: "Monthly contribution due".to_string(),
                message: "Your KSh 5000 contribution for this cycle is due by Friday.".to_string(),
                priority: Some(Priority::High),
                action_url: Some("/contributions/pay".to_string()),
                ..Default::default()
            }),
            Notification::new(CreateNotificationRequest {
                title: "Meeting scheduled".to_string(),
                message: "The next group meeting is on Saturday at 10:00.".to_string(),
                action_url: Some("/meetings".to_string()),
                ..Default::default()
            }),
            Notification::new(CreateNotificationRequest {
                title: "Loan application received".to_string(),
                message: "A member submitted a loan application awaiting review.".to_string(),
                priority: Some(Priority::Medium),
                action_url: Some("/admin/loans".to_string()),
                metadata: Some(
                    json!({ "audience": "admin" })
                        .as_object()
                        .cloned()
                        .unwrap_or_default(),
                ),
                ..Default::default()
            }),
        ];

        Self {
            notifications: Arc::new(RwLock::new(demo)),
        }
    }

    /// Full feed, most-recent-first, with the unread count the clients seed
    /// their session counters from.
    pub async fn feed(&self) -> NotificationFeed {
        let notifications = self.notifications.read().await;
        let unread_count = notifications.iter().filter(|n| !n.read).count() as u32;
        NotificationFeed {
            notifications: notifications.clone(),
            unread_count,
        }
    }

    /// Returns false when the id is unknown.
    pub async fn mark_read(&self, id: &str) -> bool {
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub async fn mark_all_read(&self) {
        let mut notifications = self.notifications.write().await;
        for notification in notifications.iter_mut() {
            notification.read = true;
        }
    }

    /// Returns false when the id is unknown.
    pub async fn delete(&self, id: &str) -> bool {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        notifications.len() != before
    }

    /// Create a notification with a registry-assigned id and insert it at
    /// the head. Clients that created the same notification optimistically
    /// will see this rendition, under this id, on their next fetch.
    pub async fn create(&self, request: CreateNotificationRequest) -> Notification {
        let notification = Notification::new(request);
        let mut notifications = self.notifications.write().await;
        notifications.insert(0, notification.clone());
        notification
    }
}
