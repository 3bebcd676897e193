pub mod file;
#[cfg(test)]
pub mod memory;

pub use file::FileStateStore;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::GameStatus;

/// Durable last-known game state, keyed by calendar date.
///
/// Every accessor treats an absent value as `None` rather than an error;
/// the tracker reads absence as "no prior state". Values are written on
/// first sight and overwritten on each transition, never deleted.
pub trait StateStore: Send + Sync {
    fn previous_score(&self, date: NaiveDate) -> Result<Option<String>>;
    fn set_previous_score(&self, date: NaiveDate, score: &str) -> Result<()>;

    fn game_status(&self, date: NaiveDate) -> Result<Option<GameStatus>>;
    fn set_game_status(&self, date: NaiveDate, status: GameStatus) -> Result<()>;

    fn game_date_time(&self, date: NaiveDate) -> Result<Option<NaiveDateTime>>;
    fn set_game_date_time(&self, date: NaiveDate, at: NaiveDateTime) -> Result<()>;
}
