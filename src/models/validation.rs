use anyhow::{Result, anyhow};

use crate::models::event::BuildEvent;

pub fn validate_event(event: &BuildEvent) -> Result<()> {
    if event.pipeline.scm_repo.name.is_empty() {
        return Err(anyhow!("Repository name cannot be empty"));
    }

    if event.build_link.is_empty() {
        return Err(anyhow!("Build link cannot be empty"));
    }

    Ok(())
}

pub fn validate_channel(channel: &str) -> Result<()> {
    if channel.is_empty() {
        return Err(anyhow!("Channel identifier cannot be empty"));
    }

    if channel.chars().any(char::is_whitespace) {
        return Err(anyhow!("Channel identifier cannot contain whitespace"));
    }

    Ok(())
}
