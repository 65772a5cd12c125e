use anyhow::{Error, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    clients::slack::SlackClient,
    config::Config,
    models::{event::BuildEvent, message::RenderedMessage, settings::NotificationSettings},
};

pub struct SlackNotifier {
    slack: SlackClient,
}

impl SlackNotifier {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            slack: SlackClient::new(config)?,
        })
    }

    // Stateless one-shot pipeline. Every gate short-circuits with Ok(());
    // only a transport failure reaches the caller.
    pub async fn notify(&self, payload: Value) -> Result<(), Error> {
        let event = match BuildEvent::from_value(payload) {
            Some(event) => event,
            None => {
                debug!("Event does not satisfy the notification contract, skipping");
                return Ok(());
            }
        };

        if event.settings.is_empty() {
            debug!(
                repo = %event.pipeline.scm_repo.name,
                "Pipeline has no notification settings, skipping"
            );
            return Ok(());
        }

        let settings = match NotificationSettings::from_raw(&event.settings) {
            Some(settings) => settings,
            None => {
                debug!(
                    repo = %event.pipeline.scm_repo.name,
                    "Slack settings are missing or malformed, skipping"
                );
                return Ok(());
            }
        };

        if !settings.statuses.contains(&event.status) {
            debug!(
                status = %event.status,
                "Status not configured for notification, skipping"
            );
            return Ok(());
        }

        let message = match RenderedMessage::render(&event, &settings) {
            Some(message) => message,
            None => {
                debug!(
                    build_id = event.build.id,
                    "Event is missing commit details required for rendering, skipping"
                );
                return Ok(());
            }
        };

        info!(
            status = %event.status,
            build_id = event.build.id,
            channel_count = settings.channels.len(),
            "Dispatching build notification"
        );

        self.slack.post_message(&settings.channels, &message).await
    }
}
