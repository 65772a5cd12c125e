use std::io::Read;

use anyhow::{Error, Result};
use slack_notifier::{config::Config, notifier::SlackNotifier};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let notifier = SlackNotifier::new(&config)?;

    let mut payload = String::new();
    std::io::stdin().read_to_string(&mut payload)?;

    let event = serde_json::from_str(&payload)?;

    notifier.notify(event).await?;

    Ok(())
}
