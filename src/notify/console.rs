use anyhow::Result;
use async_trait::async_trait;

use super::Notifier;

/// Prints messages to stdout. The default sink, handy for cron logs and
/// local runs.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn notify(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }
}
