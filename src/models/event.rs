use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::{status::BuildStatus, validation::validate_event};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEvent {
    pub status: BuildStatus,
    pub pipeline: Pipeline,
    pub job_name: Option<String>,
    pub build: Build,
    pub build_link: String,
    pub event: Option<CommitEvent>,
    pub settings: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub scm_repo: ScmRepo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScmRepo {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitEvent {
    pub sha: String,
    pub commit: Commit,
    pub cause_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub message: String,
    pub url: String,
}

impl BuildEvent {
    // An event that does not satisfy the contract is dropped, never raised.
    pub fn from_value(payload: Value) -> Option<Self> {
        let event = serde_json::from_value::<Self>(payload).ok()?;

        validate_event(&event).ok()?;

        Some(event)
    }
}
