//! Outbound plot-entry notifications.
//!
//! Delivery is fire-and-forget: failures are logged and never reach the move
//! handler that triggered them.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::host::BoxFuture;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("endpoint answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Something that can deliver a line of text off-server.
pub trait Notifier: Send + Sync {
    fn send<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), NotifyError>>;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Posts `{"content": text}` to a Discord-style webhook URL.
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Notifier for DiscordWebhook {
    fn send<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.url)
                .header(CONTENT_TYPE, "application/json")
                .json(&WebhookPayload { content: text })
                .send()
                .await
                .map_err(|e| NotifyError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(NotifyError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(())
        })
    }
}

/// Chat line announcing an entry.
#[must_use]
pub fn enter_broadcast(player: &str, owner: &str) -> String {
    format!("{player} has entered a plot owned by {owner}")
}

/// Webhook line announcing an entry (Discord markdown).
#[must_use]
pub fn enter_webhook(player: &str, owner: &str) -> String {
    format!("**{player}** has entered a plot owned by **{owner}**")
}

/// Send `text` in the background on `runtime`.
pub fn dispatch(runtime: &Handle, notifier: Arc<dyn Notifier>, text: String) -> JoinHandle<()> {
    runtime.spawn(async move {
        if let Err(e) = notifier.send(&text).await {
            log::warn!("homeboundaries: Failed to send webhook: {e}");
        }
    })
}
