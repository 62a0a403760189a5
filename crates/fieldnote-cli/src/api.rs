//! Fieldnote API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API Client for Fieldnote
pub struct FieldnoteClient {
    client: Client,
    base_url: String,
    api_token: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
    pub target_id: i64,
    pub target_type: String,
    pub actor: String,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub message: String,
    pub target_id: i64,
    pub target_type: String,
}

impl FieldnoteClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Send a message to a target
    pub async fn send_message(
        &self,
        message: &str,
        target_type: &str,
        target_id: i64,
    ) -> Result<MessageResponse> {
        let url = format!("{}/fieldnote/messaging", self.base_url);

        let request = CreateMessageRequest {
            message: message.to_string(),
            target_id,
            target_type: target_type.to_string(),
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Fieldnote API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let message: MessageResponse = resp.json().await.context("Failed to parse response")?;

        Ok(message)
    }

    /// List messages for a target, newest first
    pub async fn list_messages(
        &self,
        target_type: &str,
        target_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<MessageResponse>> {
        let url = format!("{}/fieldnote/messaging", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("target_type", target_type.to_string()),
            ("target_id", target_id.to_string()),
        ];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .header("Authorization", format!("Token {}", self.api_token))
            .send()
            .await
            .context("Failed to connect to Fieldnote API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let messages: Vec<MessageResponse> =
            resp.json().await.context("Failed to parse response")?;

        Ok(messages)
    }

    /// Fetch a single message by id
    pub async fn get_message(&self, id: Uuid) -> Result<MessageResponse> {
        let url = format!("{}/fieldnote/messaging/{}", self.base_url, id);

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.api_token))
            .send()
            .await
            .context("Failed to connect to Fieldnote API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let message: MessageResponse = resp.json().await.context("Failed to parse response")?;

        Ok(message)
    }
}
