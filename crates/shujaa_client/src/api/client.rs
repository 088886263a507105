//! HTTP client for the Shujaa backend

use std::time::Duration;

use async_trait::async_trait;
use chat_core::Config;
use log::{debug, warn};
use reqwest::Client;

use crate::api::models::{ChatReply, ChatRequest, HealthStatus, HistoryRecord};
use crate::client_trait::ShujaaClientTrait;
use crate::error::{ClientError, Result};

/// Typed client for the chat backend.
#[derive(Debug, Clone)]
pub struct ShujaaClient {
    client: Client,
    base_url: String,
}

impl ShujaaClient {
    /// Build a client from configuration. The request timeout bounds every
    /// call, so a send can never leave the session pending indefinitely.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Probe `GET /api/health`. Not consulted by the dispatcher;
    /// connectivity is derived from send settlement only.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.api_url("health")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ShujaaClientTrait for ShujaaClient {
    async fn fetch_history(&self, user_id: &str) -> Result<Vec<HistoryRecord>> {
        if user_id.is_empty() {
            return Err(ClientError::EmptyIdentity);
        }

        let url = self.api_url(&format!("chat/history/{user_id}"));
        debug!("fetching chat history from {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("history endpoint returned {status}");
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }

    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = self.api_url("chat");
        debug!("sending chat message for {}", request.user_id);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("chat endpoint returned {status}");
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(response.json().await?)
    }
}
