//! Notification subsystem for the chama member application.
//!
//! The library side is what the presentation layer consumes: a session-owned
//! [`NotificationStore`](services::store::NotificationStore) with optimistic
//! local mutations synced best-effort to the remote notification service,
//! and the pure [`visible_for`](services::audience::visible_for) audience
//! derivation. The binary (`main.rs`) serves the remote contract itself from
//! an in-memory registry.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
