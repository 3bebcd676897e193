use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::models::GameStatus;
use crate::notify::Notifier;
use crate::schedule::GameProvider;
use crate::state::StateStore;

/// Runs one poll-compare-notify cycle per invocation.
///
/// Persisted status only moves forward: absent → STARTED → RESULT, or
/// straight to RESULT on cancellation. Once a day's status is RESULT the
/// tracker never fetches again for that day, so a cron schedule can fire
/// as often as it likes without re-notifying.
pub struct GameTracker {
    provider: Arc<dyn GameProvider>,
    store: Arc<dyn StateStore>,
    notifier: Arc<dyn Notifier>,
}

impl GameTracker {
    pub fn new(
        provider: Arc<dyn GameProvider>,
        store: Arc<dyn StateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        GameTracker {
            provider,
            store,
            notifier,
        }
    }

    /// Check today's game against persisted state and notify on a
    /// transition. At most one notification per call.
    pub async fn check_game_update(&self) -> Result<()> {
        self.run_at(Local::now().naive_local()).await
    }

    pub(crate) async fn run_at(&self, now: NaiveDateTime) -> Result<()> {
        let today = now.date();

        // Terminal state for the day, skip the API entirely.
        if self.store.game_status(today)? == Some(GameStatus::Result) {
            debug!("Game on {} already finished, nothing to do", today);
            return Ok(());
        }

        // Known start time still ahead, skip pre-game polling.
        if let Some(start) = self.store.game_date_time(today)? {
            if now < start {
                debug!("Game on {} starts at {}, too early to poll", today, start);
                return Ok(());
            }
        }

        let Some(game) = self.provider.fetch_game(today).await? else {
            debug!("No tracked game on {} ({})", today, self.provider.name());
            return Ok(());
        };

        if self.store.game_date_time(today)?.is_none() {
            self.store.set_game_date_time(today, game.game_date_time)?;
        }

        let prev_status = self.store.game_status(today)?;
        let score = game.score_line();
        // Post-fetch writes key off the record's own date, which matches
        // `today` except for games listed across midnight.
        let game_day = game.date;

        if game.cancelled {
            self.send(&format!("경기 취소: {}", game.matchup())).await?;
            self.store.set_game_status(game_day, GameStatus::Result)?;
        } else if game.status == GameStatus::Started && prev_status.is_none() {
            self.send(&format!("경기 시작: {}\n점수: {}", game.matchup(), score))
                .await?;
            self.store.set_game_status(game_day, GameStatus::Started)?;
            self.store.set_previous_score(game_day, &score)?;
        } else if game.status == GameStatus::Started && prev_status == Some(GameStatus::Started) {
            if self.store.previous_score(today)?.as_deref() != Some(score.as_str()) {
                self.send(&format!(
                    "점수 변동: {}\n{}\n점수: {}",
                    game.matchup(),
                    game.status_text,
                    score
                ))
                .await?;
                self.store.set_previous_score(game_day, &score)?;
            }
        } else if game.status == GameStatus::Result && prev_status == Some(GameStatus::Started) {
            self.send(&format!("경기 종료: {}\n최종 점수: {}", game.matchup(), score))
                .await?;
            self.store.set_game_status(game_day, GameStatus::Result)?;
            self.store.set_previous_score(game_day, &score)?;
        }
        // BEFORE/READY, and RESULT observed without a prior STARTED, are
        // deliberately silent.

        Ok(())
    }

    async fn send(&self, message: &str) -> Result<()> {
        info!("Notifying via {}: {}", self.notifier.name(), message);
        self.notifier.notify(message).await
    }
}
