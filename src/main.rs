use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod config;
mod models;
mod notify;
mod schedule;
mod state;
mod tracker;

use config::{Config, NotifyMethod};
use notify::{ConsoleNotifier, Notifier, SlackNotifier};
use schedule::NaverSchedule;
use state::FileStateStore;
use tracker::GameTracker;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let notifier: Arc<dyn Notifier> = match config.notify {
        NotifyMethod::Slack => {
            // validate() guarantees the URL is present
            let url = config.slack_webhook_url.as_deref().unwrap_or_default();
            Arc::new(SlackNotifier::new(url)?)
        }
        NotifyMethod::Console => Arc::new(ConsoleNotifier),
    };

    let store = Arc::new(FileStateStore::new(&config.state_dir)?);
    let provider = Arc::new(NaverSchedule::new(
        &config.api_url,
        &config.league,
        &config.team,
    )?);

    info!(
        "Checking {} ({}) game updates, notifying via {}",
        config.team,
        config.league,
        notifier.name()
    );

    let tracker = GameTracker::new(provider, store, notifier);
    tracker.check_game_update().await?;

    Ok(())
}
