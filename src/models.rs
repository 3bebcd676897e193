use chrono::{NaiveDate, NaiveDateTime};

/// Lifecycle stage of a game as reported by the schedule API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Before,
    Ready,
    Started,
    Result,
}

impl GameStatus {
    /// Parse an API/persistence status code. Codes this version does not
    /// know are treated as pre-game, which the tracker ignores.
    pub fn from_code(code: &str) -> GameStatus {
        match code {
            "READY" => GameStatus::Ready,
            "STARTED" => GameStatus::Started,
            "RESULT" => GameStatus::Result,
            _ => GameStatus::Before,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            GameStatus::Before => "BEFORE",
            GameStatus::Ready => "READY",
            GameStatus::Started => "STARTED",
            GameStatus::Result => "RESULT",
        }
    }
}

/// One fetched representation of a game's current state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub date: NaiveDate,
    /// Scheduled first pitch, local time.
    pub game_date_time: NaiveDateTime,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: GameStatus,
    /// Human-readable progress text, e.g. "5회말".
    pub status_text: String,
    pub cancelled: bool,
}

impl GameSnapshot {
    /// Scoreline in the "home:away" form used for change detection
    /// and persistence.
    pub fn score_line(&self) -> String {
        format!("{}:{}", self.home_score, self.away_score)
    }

    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_roundtrip() {
        for status in [
            GameStatus::Before,
            GameStatus::Ready,
            GameStatus::Started,
            GameStatus::Result,
        ] {
            assert_eq!(GameStatus::from_code(status.as_code()), status);
        }
    }

    #[test]
    fn test_unknown_code_is_pregame() {
        assert_eq!(GameStatus::from_code("SUSPENDED"), GameStatus::Before);
    }
}
