use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Aborted,
    Running,
    Queued,
}

pub const DEFAULT_STATUSES: [BuildStatus; 1] = [BuildStatus::Failure];

impl BuildStatus {
    pub fn color(self) -> &'static str {
        match self {
            BuildStatus::Success => "good",
            BuildStatus::Failure => "danger",
            BuildStatus::Aborted => "danger",
            BuildStatus::Running => "warning",
            BuildStatus::Queued => "warning",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            BuildStatus::Success => ":sunny:",
            BuildStatus::Failure => ":umbrella:",
            BuildStatus::Aborted => ":cloud:",
            BuildStatus::Running => ":runner:",
            BuildStatus::Queued => ":cyclone:",
        }
    }
}

impl Display for BuildStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BuildStatus::Success => write!(f, "SUCCESS"),
            BuildStatus::Failure => write!(f, "FAILURE"),
            BuildStatus::Aborted => write!(f, "ABORTED"),
            BuildStatus::Running => write!(f, "RUNNING"),
            BuildStatus::Queued => write!(f, "QUEUED"),
        }
    }
}
