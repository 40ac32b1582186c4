use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
}

/// A match lives in exactly one of two persisted collections:
/// `upcomingMatches` while `status != completed`, `completedMatches` once a
/// winner is entered. The move is one-way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team1: Team,
    pub team2: Team,
    /// Preformatted display date, e.g. "Apr 10, 2025". Derived at creation.
    pub date: String,
    /// Preformatted display time, e.g. "7:30 PM". Derived at creation.
    pub time: String,
    pub venue: String,
    /// Epoch milliseconds.
    pub start_timestamp: i64,
    pub status: MatchStatus,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_team: Option<Team>,
}

impl Match {
    /// `live` is a read-time presentation status, never persisted: an
    /// upcoming match whose start has passed shows as live in responses.
    pub fn display_status(&self, now_ms: i64) -> MatchStatus {
        match self.status {
            MatchStatus::Completed => MatchStatus::Completed,
            _ if now_ms >= self.start_timestamp => MatchStatus::Live,
            _ => MatchStatus::Scheduled,
        }
    }

    pub fn has_started(&self, now_ms: i64) -> bool {
        now_ms >= self.start_timestamp
    }

    pub fn has_team(&self, team_id: &str) -> bool {
        self.team1.id == team_id || self.team2.id == team_id
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatch {
    #[validate(length(min = 1, message = "team1Id is required"))]
    pub team1_id: String,
    #[validate(length(min = 1, message = "team2Id is required"))]
    pub team2_id: String,
    #[validate(length(min = 1, message = "venue is required"))]
    pub venue: String,
    #[validate(range(min = 1, message = "startTimestamp is required"))]
    pub start_timestamp: i64,
    pub visible: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMatch {
    pub winner_team_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetVisibility {
    pub visible: bool,
}

/// The bulk-transfer document: export emits it, import requires BOTH fields
/// present and array-typed before anything is replaced.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchArchive {
    pub upcoming_matches: Vec<Match>,
    pub completed_matches: Vec<Match>,
}

/// "Apr 10, 2025"
pub fn format_display_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// "7:30 PM"
pub fn format_display_time(at: DateTime<Utc>) -> String {
    at.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::find_team;
    use chrono::TimeZone;

    fn scheduled_match(start_timestamp: i64) -> Match {
        Match {
            id: "match-1".to_string(),
            team1: find_team("MI").unwrap(),
            team2: find_team("CSK").unwrap(),
            date: "Apr 10, 2025".to_string(),
            time: "7:30 PM".to_string(),
            venue: "Wankhede Stadium, Mumbai".to_string(),
            start_timestamp,
            status: MatchStatus::Scheduled,
            visible: true,
            winner: None,
            winner_team: None,
        }
    }

    #[test]
    fn started_match_displays_as_live() {
        let m = scheduled_match(1_000);
        assert_eq!(m.display_status(999), MatchStatus::Scheduled);
        assert_eq!(m.display_status(1_000), MatchStatus::Live);
        assert_eq!(m.display_status(2_000), MatchStatus::Live);
    }

    #[test]
    fn completed_match_stays_completed() {
        let mut m = scheduled_match(1_000);
        m.status = MatchStatus::Completed;
        assert_eq!(m.display_status(0), MatchStatus::Completed);
    }

    #[test]
    fn display_formats_match_the_stored_documents() {
        let at = Utc.with_ymd_and_hms(2025, 4, 10, 19, 30, 0).unwrap();
        assert_eq!(format_display_date(at), "Apr 10, 2025");
        assert_eq!(format_display_time(at), "7:30 PM");
    }

    #[test]
    fn match_serializes_with_camel_case_keys() {
        let m = scheduled_match(1_000);
        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("startTimestamp").is_some());
        assert_eq!(value["status"], "scheduled");
        // Unset winner fields stay off the wire entirely.
        assert!(value.get("winner").is_none());
        assert!(value.get("winnerTeam").is_none());
    }
}
