use reqwest::{Client, StatusCode};
use async_trait::async_trait;
use thiserror::Error;
use std::time::Duration;

use crate::config::RemoteConfig;
use crate::models::notification::{Notification, NotificationFeed};

/// Failure modes of the remote notification service. The store treats all
/// three the same way (log and carry on), but handlers and diagnostics get
/// to see which one happened.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("notification service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("notification service rejected the request with status {0}")]
    Rejected(StatusCode),

    #[error("malformed response from notification service: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Remote notification service as seen by the client-session store.
///
/// Tests substitute an in-memory double; production uses [`HttpNotificationApi`].
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn fetch_all(&self) -> Result<NotificationFeed, RemoteError>;
    async fn mark_read(&self, id: &str) -> Result<(), RemoteError>;
    async fn mark_all_read(&self) -> Result<(), RemoteError>;
    async fn delete(&self, id: &str) -> Result<(), RemoteError>;
    async fn create(&self, notification: &Notification) -> Result<(), RemoteError>;
}

pub struct HttpNotificationApi {
    client: Client,
    base_url: String,
}

impl HttpNotificationApi {
    pub fn new(config: RemoteConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/notifications{}", self.base_url, path)
    }

    fn acknowledge(&self, response: reqwest::Response) -> Result<(), RemoteError> {
        if response.status().is_success() {
            // Acknowledgement bodies are ignored per the service contract.
            Ok(())
        } else {
            Err(RemoteError::Rejected(response.status()))
        }
    }
}

#[async_trait]
impl NotificationApi for HttpNotificationApi {
    async fn fetch_all(&self) -> Result<NotificationFeed, RemoteError> {
        let response = self
            .client
            .get(self.url(""))
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        if !response.status().is_success() {
            return Err(RemoteError::Rejected(response.status()));
        }

        response.json().await.map_err(RemoteError::Malformed)
    }

    async fn mark_read(&self, id: &str) -> Result<(), RemoteError> {
        let response = self
            .client
            .patch(self.url(&format!("/{}/read", id)))
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        self.acknowledge(response)
    }

    async fn mark_all_read(&self) -> Result<(), RemoteError> {
        let response = self
            .client
            .patch(self.url("/read-all"))
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        self.acknowledge(response)
    }

    async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let response = self
            .client
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        self.acknowledge(response)
    }

    async fn create(&self, notification: &Notification) -> Result<(), RemoteError> {
        let response = self
            .client
            .post(self.url(""))
            .json(notification)
            .send()
            .await
            .map_err(RemoteError::Unreachable)?;

        self.acknowledge(response)
    }
}
