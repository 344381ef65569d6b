use serde::Serialize;

use crate::models::notification::Notification;

/// Viewer-visible slice of a notification list plus its unread count, as
/// consumed by the badge in the navigation bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleNotifications {
    pub visible: Vec<Notification>,
    pub visible_unread_count: u32,
}

/// Derive the subset of `notifications` visible to `viewer_role`.
///
/// A notification is visible when its `metadata.audience` tag is absent (or
/// empty) or matches the viewer's role. Input ordering is preserved and the
/// inputs are never mutated; the derivation is deterministic.
pub fn visible_for(notifications: &[Notification], viewer_role: &str) -> VisibleNotifications {
    let visible: Vec<Notification> = notifications
        .iter()
        .filter(|n| n.visible_to(viewer_role))
        .cloned()
        .collect();

    let visible_unread_count = visible.iter().filter(|n| !n.read).count() as u32;

    VisibleNotifications {
        visible,
        visible_unread_count,
    }
}
