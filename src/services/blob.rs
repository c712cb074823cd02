use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::error::{Error, Result};

/// Read-only handle on the external blob store holding resume files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch_bytes(&self, key: &str) -> Result<Bytes>;
}

#[derive(Clone)]
pub struct HttpBlobStore {
    client: Client,
    base_url: String,
}

impl HttpBlobStore {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn fetch_bytes(&self, key: &str) -> Result<Bytes> {
        let resp = self
            .client
            .get(format!("{}/{}", self.base_url.trim_end_matches('/'), key))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("Blob not found: {}", key)));
        }
        if !resp.status().is_success() {
            return Err(Error::Internal(format!(
                "Blob store returned {}",
                resp.status()
            )));
        }
        Ok(resp.bytes().await?)
    }
}
