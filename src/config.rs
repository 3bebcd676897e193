use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifyMethod {
    Slack,
    Console,
}

/// KBO game notifier: one poll-compare-notify cycle per run
#[derive(Parser, Debug, Clone)]
#[command(name = "kbo-game-bot", version, about)]
pub struct Config {
    /// Notification method
    #[arg(long, value_enum, default_value = "console")]
    pub notify: NotifyMethod,

    /// Slack incoming-webhook URL (required with --notify slack)
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    pub slack_webhook_url: Option<String>,

    /// Naver Sports API base URL
    #[arg(
        long,
        env = "SPORTS_API_URL",
        default_value = "https://api-gw.sports.naver.com"
    )]
    pub api_url: String,

    /// League category to match in the schedule
    #[arg(long, env = "LEAGUE_ID", default_value = "kbo")]
    pub league: String,

    /// Team name (substring match against home/away names)
    #[arg(long, env = "TEAM_NAME", default_value = "한화")]
    pub team: String,

    /// Directory for the per-day state files
    #[arg(long, env = "STATE_DIR", default_value = ".")]
    pub state_dir: String,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.notify == NotifyMethod::Slack && self.slack_webhook_url.is_none() {
            anyhow::bail!(
                "SLACK_WEBHOOK_URL is required with --notify slack. Use --notify console otherwise."
            );
        }
        if self.team.trim().is_empty() {
            anyhow::bail!("team must not be empty");
        }
        Ok(())
    }
}
