use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use crate::models::{GameSnapshot, GameStatus};
use super::provider::GameProvider;

/// Field list the today-games endpoint expects; trimming it changes which
/// keys come back in each game record.
const FIELDS: &str = "basic,superCategoryId,categoryName,upperCategoryId,upperCategoryName,stadium,statusNum,gameOnAir,hasVideo,title,specialMatchInfo,roundCode,seriesOutcome,seriesGameNo,homeStarterName,awayStarterName,winPitcherName,losePitcherName,homeCurrentPitcherName,awayCurrentPitcherName,broadChannel,matchRound,roundTournamentInfo,phaseCode,groupName,leg,hasPtSore,homePtScore,awayPtScore,league,leagueName,aggregateWinner,neutralGround,postponed,conference,round,groupName,round,generalInfo3";

/// Schedule provider backed by the Naver Sports gateway API.
pub struct NaverSchedule {
    http: Client,
    /// Base URL for overriding in tests
    base_url: String,
    league: String,
    team: String,
}

impl NaverSchedule {
    pub fn new(base_url: &str, league: &str, team: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(NaverSchedule {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            league: league.to_string(),
            team: team.to_string(),
        })
    }
}

#[async_trait]
impl GameProvider for NaverSchedule {
    fn name(&self) -> &str {
        "NaverSports"
    }

    async fn fetch_game(&self, date: NaiveDate) -> Result<Option<GameSnapshot>> {
        let url = format!("{}/schedule/today-games", self.base_url);
        let date_param = date.format("%Y-%m-%d").to_string();
        debug!("Fetching today's games from {} for {}", url, date_param);

        let resp = self
            .http
            .get(&url)
            .query(&[("fields", FIELDS), ("date", date_param.as_str())])
            .send()
            .await
            .context("Naver Sports request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Naver Sports error: {}", resp.status());
        }

        let raw: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse Naver Sports response")?;

        Ok(find_team_game(&raw, &self.league, &self.team))
    }
}

/// Scan the response for the first game in the given league category that
/// involves the tracked team. Records missing a required field are skipped.
fn find_team_game(raw: &serde_json::Value, league: &str, team: &str) -> Option<GameSnapshot> {
    let games = raw["result"]["games"].as_array()?;

    games.iter().find_map(|game| {
        if game["categoryId"].as_str() != Some(league) {
            return None;
        }
        let home_team = game["homeTeamName"].as_str()?.to_string();
        let away_team = game["awayTeamName"].as_str()?.to_string();
        if !home_team.contains(team) && !away_team.contains(team) {
            return None;
        }

        let date: NaiveDate = game["gameDate"].as_str()?.parse().ok()?;
        let game_date_time = game["gameDateTime"].as_str()?.parse().ok()?;

        Some(GameSnapshot {
            date,
            game_date_time,
            home_team,
            away_team,
            home_score: score_field(&game["homeTeamScore"]),
            away_score: score_field(&game["awayTeamScore"]),
            status: GameStatus::from_code(game["statusCode"].as_str().unwrap_or("BEFORE")),
            status_text: game["statusInfo"].as_str().unwrap_or_default().to_string(),
            cancelled: game["cancel"].as_bool().unwrap_or(false),
        })
    })
}

/// Scores arrive as strings on some leagues and numbers on others; absent
/// before the first pitch.
fn score_field(v: &serde_json::Value) -> i32 {
    v.as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| v.as_i64().map(|n| n as i32))
        .unwrap_or(0)
}
