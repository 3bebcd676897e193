use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::Notifier;

/// Posts messages to a Slack incoming-webhook URL.
pub struct SlackNotifier {
    http: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(SlackNotifier {
            http,
            webhook_url: webhook_url.to_string(),
        })
    }
}

fn payload(message: &str) -> serde_json::Value {
    serde_json::json!({ "text": message })
}

#[async_trait]
impl Notifier for SlackNotifier {
    fn name(&self) -> &str {
        "slack"
    }

    async fn notify(&self, message: &str) -> Result<()> {
        debug!("Posting {} chars to Slack webhook", message.len());

        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&payload(message))
            .send()
            .await
            .context("Slack webhook request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Slack webhook error: {}", resp.status());
        }
        Ok(())
    }
}
