use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::GameSnapshot;

/// Trait that every game-schedule provider must implement.
#[async_trait]
pub trait GameProvider: Send + Sync {
    /// Return the tracked team's game on the given date, if one is scheduled.
    async fn fetch_game(&self, date: NaiveDate) -> Result<Option<GameSnapshot>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
