use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::GameStatus;
use super::StateStore;

/// Flat-file state store: one text file per value per day, each holding a
/// single trimmed scalar. Survives process restarts, which is the whole
/// point — the bot runs once per cron tick.
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create state dir {}", dir.display()))?;
        Ok(FileStateStore { dir })
    }

    fn path(&self, prefix: &str, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}_{}.txt", prefix, date.format("%Y-%m-%d")))
    }

    fn read(&self, prefix: &str, date: NaiveDate) -> Result<Option<String>> {
        let path = self.path(prefix, date);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn write(&self, prefix: &str, date: NaiveDate, value: &str) -> Result<()> {
        let path = self.path(prefix, date);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl StateStore for FileStateStore {
    fn previous_score(&self, date: NaiveDate) -> Result<Option<String>> {
        self.read("previous_score", date)
    }

    fn set_previous_score(&self, date: NaiveDate, score: &str) -> Result<()> {
        self.write("previous_score", date, score)
    }

    fn game_status(&self, date: NaiveDate) -> Result<Option<GameStatus>> {
        Ok(self
            .read("game_status", date)?
            .map(|s| GameStatus::from_code(&s)))
    }

    fn set_game_status(&self, date: NaiveDate, status: GameStatus) -> Result<()> {
        self.write("game_status", date, status.as_code())
    }

    fn game_date_time(&self, date: NaiveDate) -> Result<Option<NaiveDateTime>> {
        match self.read("game_date_time", date)? {
            Some(s) => {
                let at = s
                    .parse::<NaiveDateTime>()
                    .with_context(|| format!("Invalid game_date_time for {}: {}", date, s))?;
                Ok(Some(at))
            }
            None => Ok(None),
        }
    }

    fn set_game_date_time(&self, date: NaiveDate, at: NaiveDateTime) -> Result<()> {
        self.write("game_date_time", date, &at.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}
