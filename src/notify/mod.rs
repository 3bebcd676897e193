pub mod console;
pub mod slack;

pub use console::ConsoleNotifier;
pub use slack::SlackNotifier;

use anyhow::Result;
use async_trait::async_trait;

/// Sink for game update messages. One of these is selected at startup via
/// the `--notify` flag.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<()>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
