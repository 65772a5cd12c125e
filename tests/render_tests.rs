use anyhow::Result;
use serde_json::{Value, json};
use slack_notifier::models::{
    event::BuildEvent,
    message::RenderedMessage,
    settings::NotificationSettings,
    status::BuildStatus,
};

fn event_payload(status: &str, commit_message: &str) -> Value {
    json!({
        "status": status,
        "pipeline": { "scmRepo": { "name": "org/component" } },
        "jobName": "publish",
        "build": { "id": 1234 },
        "buildLink": "http://cd.example.com/pipelines/12/builds/1234",
        "event": {
            "sha": "1234567890abcdeffedcba0987654321aabbccdd",
            "commit": {
                "message": commit_message,
                "url": "https://github.com/org/component/commit/1234567890abcdef"
            },
            "causeMessage": "Merged by octocat"
        },
        "settings": { "slack": "#general" }
    })
}

fn build_event(status: &str, commit_message: &str) -> BuildEvent {
    BuildEvent::from_value(event_payload(status, commit_message))
        .expect("event should satisfy the contract")
}

fn settings(statuses: Vec<BuildStatus>, minimized: bool) -> NotificationSettings {
    NotificationSettings {
        channels: vec!["#general".to_string()],
        statuses,
        minimized,
    }
}

/// Test: Rich header carries status, emoji, and the stripped pipeline link
#[test]
fn test_rich_header_layout() -> Result<()> {
    let event = build_event("FAILURE", "fix: handle empty payloads");
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false))
        .expect("rich event should render");

    assert_eq!(
        message.text,
        "*FAILURE* :umbrella: <http://cd.example.com/pipelines/12|org/component publish>"
    );

    Ok(())
}

/// Test: Rich attachment links the build and carries the commit body
#[test]
fn test_rich_attachment_layout() -> Result<()> {
    let event = build_event("FAILURE", "fix: handle empty payloads");
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false))
        .expect("rich event should render");

    assert_eq!(message.attachment.color, "danger");
    assert_eq!(message.attachment.title.as_deref(), Some("#1234"));
    assert_eq!(
        message.attachment.title_link.as_deref(),
        Some("http://cd.example.com/pipelines/12/builds/1234")
    );
    assert_eq!(
        message.attachment.text.as_deref(),
        Some(
            "fix: handle empty payloads \
             (<https://github.com/org/component/commit/1234567890abcdef|123456>)\n\
             Merged by octocat"
        )
    );
    assert!(message.attachment.fields.is_none());

    Ok(())
}

/// Test: Minimized layout carries a single Build field linking the build number
#[test]
fn test_minimized_layout() -> Result<()> {
    let event = build_event("SUCCESS", "fix: handle empty payloads");
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Success], true))
        .expect("minimized event should render");

    assert_eq!(
        message.text,
        "<http://cd.example.com/pipelines/12|org/component#publish> *SUCCESS*"
    );
    assert_eq!(message.attachment.color, "good");
    assert!(message.attachment.title.is_none());
    assert!(message.attachment.text.is_none());

    let fields = message
        .attachment
        .fields
        .as_ref()
        .expect("minimized attachment should carry fields");

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].title, "Build");
    assert_eq!(
        fields[0].value,
        "<http://cd.example.com/pipelines/12/builds/1234|#1234>"
    );
    assert!(fields[0].short);

    Ok(())
}

/// Test: Commit messages over 150 characters are truncated with an ellipsis
#[test]
fn test_long_commit_message_is_truncated() -> Result<()> {
    let long_message = "a".repeat(151);
    let event = build_event("FAILURE", &long_message);
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false))
        .expect("rich event should render");

    let body = message.attachment.text.expect("attachment should carry text");
    let expected_prefix = format!("{}...", "a".repeat(150));

    assert!(
        body.starts_with(&expected_prefix),
        "Body should start with the truncated message"
    );
    assert!(!body.starts_with(&"a".repeat(151)));

    Ok(())
}

/// Test: Commit messages up to 150 characters pass through unchanged
#[test]
fn test_short_commit_message_is_unchanged() -> Result<()> {
    let exact_message = "b".repeat(150);
    let event = build_event("FAILURE", &exact_message);
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false))
        .expect("rich event should render");

    let body = message.attachment.text.expect("attachment should carry text");

    assert!(body.starts_with(&format!("{} (", exact_message)));
    assert!(!body.contains("..."));

    Ok(())
}

/// Test: Rendering is pure, two renders of the same event are identical
#[test]
fn test_rendering_is_idempotent() -> Result<()> {
    let event = build_event("ABORTED", "chore: bump versions");
    let render_settings = settings(vec![BuildStatus::Aborted], false);

    let first = RenderedMessage::render(&event, &render_settings);
    let second = RenderedMessage::render(&event, &render_settings);

    assert_eq!(first, second);

    Ok(())
}

/// Test: Rich rendering without commit details yields nothing
#[test]
fn test_rich_render_without_commit_yields_nothing() -> Result<()> {
    let payload = json!({
        "status": "FAILURE",
        "pipeline": { "scmRepo": { "name": "org/component" } },
        "jobName": "publish",
        "build": { "id": 1234 },
        "buildLink": "http://cd.example.com/pipelines/12/builds/1234",
        "settings": { "slack": "#general" }
    });

    let event = BuildEvent::from_value(payload).expect("event should satisfy the contract");
    let message = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false));

    assert!(message.is_none());

    Ok(())
}

/// Test: A missing job name renders the repository name alone
#[test]
fn test_missing_job_name_renders_repo_alone() -> Result<()> {
    let payload = json!({
        "status": "FAILURE",
        "pipeline": { "scmRepo": { "name": "org/component" } },
        "build": { "id": 1234 },
        "buildLink": "http://cd.example.com/pipelines/12/builds/1234",
        "event": {
            "sha": "1234567890abcdeffedcba0987654321aabbccdd",
            "commit": {
                "message": "fix: handle empty payloads",
                "url": "https://github.com/org/component/commit/1234567890abcdef"
            },
            "causeMessage": "Merged by octocat"
        },
        "settings": { "slack": "#general" }
    });

    let event = BuildEvent::from_value(payload).expect("event should satisfy the contract");

    let rich = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], false))
        .expect("rich event should render");
    assert_eq!(
        rich.text,
        "*FAILURE* :umbrella: <http://cd.example.com/pipelines/12|org/component>"
    );

    let minimized = RenderedMessage::render(&event, &settings(vec![BuildStatus::Failure], true))
        .expect("minimized event should render");
    assert_eq!(
        minimized.text,
        "<http://cd.example.com/pipelines/12|org/component> *FAILURE*"
    );

    Ok(())
}
