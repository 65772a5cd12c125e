use serde::Serialize;

use crate::models::{event::BuildEvent, settings::NotificationSettings};

const COMMIT_MESSAGE_CUTOFF: usize = 150;
const SHA_DISPLAY_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    pub text: String,
    pub attachment: MessageAttachment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageAttachment {
    pub fallback: String,
    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<AttachmentField>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl RenderedMessage {
    pub fn render(event: &BuildEvent, settings: &NotificationSettings) -> Option<Self> {
        let status = event.status;
        let repo_name = &event.pipeline.scm_repo.name;
        let pipeline_link = pipeline_link(&event.build_link);

        if settings.minimized {
            let target = match event.job_name.as_deref() {
                Some(job_name) => format!("{}#{}", repo_name, job_name),
                None => repo_name.clone(),
            };

            return Some(Self {
                text: format!("<{}|{}> *{}*", pipeline_link, target, status),
                attachment: MessageAttachment {
                    fallback: String::new(),
                    color: status.color().to_string(),
                    title: None,
                    title_link: None,
                    text: None,
                    fields: Some(vec![AttachmentField {
                        title: "Build".to_string(),
                        value: format!("<{}|#{}>", event.build_link, event.build.id),
                        short: true,
                    }]),
                },
            });
        }

        // The rich layout needs the originating commit; an event without it
        // does not satisfy the contract.
        let commit_event = event.event.as_ref()?;

        let target = match event.job_name.as_deref() {
            Some(job_name) => format!("{} {}", repo_name, job_name),
            None => repo_name.clone(),
        };

        let commit_message = truncate_commit_message(&commit_event.commit.message);
        let truncated_sha = truncate_sha(&commit_event.sha);

        Some(Self {
            text: format!(
                "*{}* {} <{}|{}>",
                status,
                status.emoji(),
                pipeline_link,
                target
            ),
            attachment: MessageAttachment {
                fallback: String::new(),
                color: status.color().to_string(),
                title: Some(format!("#{}", event.build.id)),
                title_link: Some(event.build_link.clone()),
                text: Some(format!(
                    "{} (<{}|{}>)\n{}",
                    commit_message, commit_event.commit.url, truncated_sha, commit_event.cause_message
                )),
                fields: None,
            },
        })
    }
}

fn pipeline_link(build_link: &str) -> &str {
    build_link.split("/builds").next().unwrap_or(build_link)
}

fn truncate_commit_message(message: &str) -> String {
    match message.char_indices().nth(COMMIT_MESSAGE_CUTOFF) {
        Some((cutoff, _)) => format!("{}...", &message[..cutoff]),
        None => message.to_string(),
    }
}

fn truncate_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHA_DISPLAY_LENGTH) {
        Some((cutoff, _)) => &sha[..cutoff],
        None => sha,
    }
}
