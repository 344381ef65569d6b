use std::sync::Arc;

use crate::models::notification::{CreateNotificationRequest, Notification};
use crate::services::remote::NotificationApi;

/// Session-scoped cache of the member's notifications.
///
/// Holds the list most-recent-first together with the unread count sourced
/// from the remote service. Every mutation applies its local effect first
/// (optimistic) and then pushes the change to the remote service on a
/// spawned task; remote failures are logged and never rolled back. The next
/// [`fetch_notifications`](Self::fetch_notifications) reconciles by full
/// replacement, so unsynced local changes can be lost — an accepted
/// tradeoff inherited from the product design.
///
/// The store is exclusively owned by one session; all mutation goes through
/// the methods below. Mutations spawn onto the ambient tokio runtime, so a
/// store must live inside one.
pub struct NotificationStore {
    api: Arc<dyn NotificationApi>,
    notifications: Vec<Notification>,
    unread_count: u32,
    loading: bool,
}

impl NotificationStore {
    pub fn new(api: Arc<dyn NotificationApi>) -> Self {
        Self {
            api,
            notifications: Vec::new(),
            unread_count: 0,
            loading: false,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Replace local state wholesale with the remote feed. Any failure
    /// (unreachable, rejected, malformed) falls back to an empty list and
    /// zero count so the UI keeps rendering; the error is only logged.
    pub async fn fetch_notifications(&mut self) {
        self.loading = true;

        match self.api.fetch_all().await {
            Ok(feed) => {
                self.notifications = feed.notifications;
                self.unread_count = feed.unread_count;
            }
            Err(err) => {
                log::error!("Failed to fetch notifications: {}", err);
                self.notifications = Vec::new();
                self.unread_count = 0;
            }
        }

        self.loading = false;
    }

    /// Flip a notification to read and push the change remotely.
    ///
    /// Absent or already-read ids are a complete no-op, which keeps the
    /// incrementally-maintained unread count consistent with the read flags.
    pub fn mark_as_read(&mut self, id: &str) {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if notification.read {
            return;
        }

        notification.read = true;
        self.unread_count = self.unread_count.saturating_sub(1);

        let api = Arc::clone(&self.api);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(err) = api.mark_read(&id).await {
                log::error!("Failed to mark notification {} as read remotely: {}", id, err);
            }
        });
    }

    pub fn mark_all_as_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread_count = 0;

        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.mark_all_read().await {
                log::error!("Failed to mark all notifications as read remotely: {}", err);
            }
        });
    }

    /// Remove a notification locally and push the delete remotely.
    ///
    /// The unread-count adjustment reads the entity's read flag at removal
    /// time, so a delete following a mark-as-read of the same id accounts
    /// correctly. Unknown ids are a no-op.
    pub fn delete_notification(&mut self, id: &str) {
        let Some(position) = self.notifications.iter().position(|n| n.id == id) else {
            return;
        };

        let removed = self.notifications.remove(position);
        if !removed.read {
            self.unread_count = self.unread_count.saturating_sub(1);
        }

        let api = Arc::clone(&self.api);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(err) = api.delete(&id).await {
                log::error!("Failed to delete notification {} remotely: {}", id, err);
            }
        });
    }

    /// Construct a notification locally, insert it at the head of the list
    /// and fire a best-effort create to the remote service. The caller gets
    /// the constructed entity back immediately and never waits on the
    /// remote call.
    ///
    /// The remote service assigns its own id on create and the store never
    /// reconciles it with the one generated here; a later fetch simply
    /// replaces this entity with the remote rendition.
    pub fn add_notification(&mut self, request: CreateNotificationRequest) -> Notification {
        let mut notification = Notification::new(request);
        while self.notifications.iter().any(|n| n.id == notification.id) {
            notification.id = uuid::Uuid::new_v4().to_string();
        }

        self.notifications.insert(0, notification.clone());
        self.unread_count += 1;

        let api = Arc::clone(&self.api);
        let created = notification.clone();
        tokio::spawn(async move {
            if let Err(err) = api.create(&created).await {
                log::error!("Failed to persist notification {} remotely: {}", created.id, err);
            }
        });

        notification
    }
}
