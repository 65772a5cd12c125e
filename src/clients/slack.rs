use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::{
        message::RenderedMessage,
        slack::{ChatMessage, ChatResponse},
    },
};

pub struct SlackClient {
    http_client: Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.slack_api_url, "Slack client initialized");

        Ok(Self {
            http_client,
            token: config.slack_token.clone(),
            base_url: config.slack_api_url.clone(),
        })
    }

    // One logical dispatch for the whole channel list. chat.postMessage
    // addresses a single channel, so delivery iterates the list in order.
    pub async fn post_message(
        &self,
        channels: &[String],
        message: &RenderedMessage,
    ) -> Result<(), Error> {
        for channel in channels {
            self.post_to_channel(channel, message).await?;
        }

        Ok(())
    }

    async fn post_to_channel(&self, channel: &str, message: &RenderedMessage) -> Result<(), Error> {
        debug!(channel, "Posting message to Slack");

        let payload = ChatMessage {
            channel: channel.to_string(),
            text: message.text.clone(),
            attachments: vec![message.attachment.clone()],
        };

        let url = format!("{}/chat.postMessage", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("Slack request failed: {}", error_text));
        }

        let body = response.json::<ChatResponse>().await?;

        if !body.ok {
            return Err(anyhow!(
                "Slack API error: {}",
                body.error.as_deref().unwrap_or("unknown_error")
            ));
        }

        info!(channel, "Slack message delivered");

        Ok(())
    }
}
