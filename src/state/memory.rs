use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::GameStatus;
use super::StateStore;

/// In-memory state store used as a test double for the tracker.
#[derive(Default)]
pub struct MemoryStateStore {
    scores: Mutex<HashMap<NaiveDate, String>>,
    statuses: Mutex<HashMap<NaiveDate, GameStatus>>,
    schedules: Mutex<HashMap<NaiveDate, NaiveDateTime>>,
}

impl StateStore for MemoryStateStore {
    fn previous_score(&self, date: NaiveDate) -> Result<Option<String>> {
        Ok(self.scores.lock().unwrap().get(&date).cloned())
    }

    fn set_previous_score(&self, date: NaiveDate, score: &str) -> Result<()> {
        self.scores.lock().unwrap().insert(date, score.to_string());
        Ok(())
    }

    fn game_status(&self, date: NaiveDate) -> Result<Option<GameStatus>> {
        Ok(self.statuses.lock().unwrap().get(&date).copied())
    }

    fn set_game_status(&self, date: NaiveDate, status: GameStatus) -> Result<()> {
        self.statuses.lock().unwrap().insert(date, status);
        Ok(())
    }

    fn game_date_time(&self, date: NaiveDate) -> Result<Option<NaiveDateTime>> {
        Ok(self.schedules.lock().unwrap().get(&date).copied())
    }

    fn set_game_date_time(&self, date: NaiveDate, at: NaiveDateTime) -> Result<()> {
        self.schedules.lock().unwrap().insert(date, at);
        Ok(())
    }
}
