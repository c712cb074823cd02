use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde_json::json;

use crate::error::{Error, Result};

/// Outbound mail collaborator. Both calls are best-effort; the engine
/// logs failures instead of propagating them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;

    async fn send_with_attachment(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        file_bytes: &[u8],
        filename: &str,
    ) -> Result<()>;
}

/// Delivers mail through an HTTP gateway. Attachment bytes travel
/// base64-encoded in the JSON payload.
#[derive(Clone)]
pub struct HttpMailDispatcher {
    client: Client,
    gateway_url: String,
    sender: String,
}

impl HttpMailDispatcher {
    pub fn new(client: Client, gateway_url: String, sender: String) -> Self {
        Self {
            client,
            gateway_url,
            sender,
        }
    }

    async fn post(&self, payload: serde_json::Value) -> Result<()> {
        let resp = self
            .client
            .post(format!("{}/send", self.gateway_url))
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::Internal(format!(
                "Mail gateway returned {}",
                resp.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MailDispatcher for HttpMailDispatcher {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        self.post(json!({
            "from": self.sender,
            "to": to,
            "subject": subject,
            "body": body,
        }))
        .await
    }

    async fn send_with_attachment(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        file_bytes: &[u8],
        filename: &str,
    ) -> Result<()> {
        self.post(json!({
            "from": self.sender,
            "to": to,
            "subject": subject,
            "body": body,
            "attachment": {
                "filename": filename,
                "content": BASE64.encode(file_bytes),
            },
        }))
        .await
    }
}
