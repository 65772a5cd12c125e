use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{
    status::{BuildStatus, DEFAULT_STATUSES},
    validation::validate_channel,
};

// The three accepted shapes under the `slack` settings key: a single channel
// string, a list of channel strings, or the full structured form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SlackSettings {
    Channel(String),
    Channels(Vec<String>),
    Structured {
        channels: Vec<String>,
        statuses: Option<Vec<BuildStatus>>,
        minimized: Option<bool>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSettings {
    pub channels: Vec<String>,
    pub statuses: Vec<BuildStatus>,
    pub minimized: bool,
}

impl SlackSettings {
    pub fn normalize(self) -> Option<NotificationSettings> {
        let (channels, statuses, minimized) = match self {
            SlackSettings::Channel(channel) => (vec![channel], None, false),
            SlackSettings::Channels(channels) => (channels, None, false),
            SlackSettings::Structured {
                channels,
                statuses,
                minimized,
            } => (channels, statuses, minimized.unwrap_or(false)),
        };

        if channels.is_empty() {
            return None;
        }

        for channel in &channels {
            validate_channel(channel).ok()?;
        }

        Some(NotificationSettings {
            channels,
            statuses: statuses.unwrap_or_else(|| DEFAULT_STATUSES.to_vec()),
            minimized,
        })
    }
}

impl NotificationSettings {
    pub fn from_raw(settings: &Map<String, Value>) -> Option<Self> {
        let raw = settings.get("slack")?;

        let parsed = serde_json::from_value::<SlackSettings>(raw.clone()).ok()?;

        parsed.normalize()
    }
}
