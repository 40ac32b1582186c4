use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::engine::ranking::LEADERBOARD_PAGE_SIZE;
use crate::engine::{build_leaderboard, Leaderboard};
use crate::errors::Result;
use crate::models::leaderboard::LeaderboardResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Case-insensitive substring filter on user names.
    pub search: Option<String>,
    pub limit: Option<usize>,
    /// Email of the viewing user; their row gets the `isCurrentUser` flag.
    pub viewer: Option<String>,
}

/// Full recompute on every read: users, predictions and completed matches
/// are snapshotted and folded from scratch, so there is nothing to go stale.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    let users = state.store.users().await?;
    let predictions = state.store.predictions().await?;
    let completed = state.store.completed_matches().await?;

    let board = build_leaderboard(
        &users,
        &predictions,
        &completed,
        query.viewer.as_deref(),
        query.search.as_deref(),
        query.limit.unwrap_or(LEADERBOARD_PAGE_SIZE),
    );

    let response = match board {
        Leaderboard::NoPredictions => LeaderboardResponse {
            success: true,
            no_predictions: true,
            total_ranked: 0,
            entries: Vec::new(),
        },
        Leaderboard::Ranked { total, entries } => LeaderboardResponse {
            success: true,
            no_predictions: false,
            total_ranked: total,
            entries,
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matches::{Match, MatchStatus};
    use crate::models::prediction::{Prediction, PredictionResult};
    use crate::models::team::find_team;
    use crate::models::user::sample_users;
    use crate::store::Store;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Store::new(Arc::new(MemoryStorage::new())))
    }

    fn query(search: Option<&str>, viewer: Option<&str>) -> LeaderboardQuery {
        LeaderboardQuery {
            search: search.map(str::to_string),
            limit: None,
            viewer: viewer.map(str::to_string),
        }
    }

    fn completed_match(id: &str, winner: &str) -> Match {
        Match {
            id: id.to_string(),
            team1: find_team("MI").unwrap(),
            team2: find_team("CSK").unwrap(),
            date: "Apr 10, 2025".to_string(),
            time: "7:30 PM".to_string(),
            venue: "Wankhede Stadium, Mumbai".to_string(),
            start_timestamp: 1_000,
            status: MatchStatus::Completed,
            visible: true,
            winner: Some(winner.to_string()),
            winner_team: find_team(winner),
        }
    }

    fn prediction(match_id: &str, user_id: &str, team1_points: u8) -> Prediction {
        Prediction {
            id: format!("pred-{}-{}", match_id, user_id),
            match_id: match_id.to_string(),
            user_id: user_id.to_string(),
            team1_points,
            team2_points: 10 - team1_points,
            result: PredictionResult::Pending,
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn empty_predictions_report_the_reset_state() {
        let state = test_state();
        state
            .store
            .save_users(&sample_users(0))
            .await
            .unwrap();

        let body = get_leaderboard(State(state), Query(query(None, None)))
            .await
            .unwrap()
            .0;

        assert!(body.no_predictions);
        assert!(body.entries.is_empty());
        assert_eq!(body.total_ranked, 0);
    }

    #[tokio::test]
    async fn ranked_read_orders_flags_and_counts() {
        let state = test_state();
        state.store.save_users(&sample_users(0)).await.unwrap();
        state
            .store
            .save_completed_matches(&[completed_match("m1", "MI")])
            .await
            .unwrap();
        state
            .store
            .save_predictions(&[
                prediction("m1", "john@example.com", 4),
                prediction("m1", "jane@example.com", 9),
            ])
            .await
            .unwrap();

        let body = get_leaderboard(
            State(state),
            Query(query(None, Some("john@example.com"))),
        )
        .await
        .unwrap()
        .0;

        assert!(!body.no_predictions);
        assert_eq!(body.total_ranked, 5);
        assert_eq!(body.entries[0].email, "jane@example.com");
        assert_eq!(body.entries[0].total_points, 9);
        assert_eq!(body.entries[0].rank, 1);
        assert_eq!(body.entries[1].email, "john@example.com");
        assert!(body.entries[1].is_current_user);
    }

    #[tokio::test]
    async fn search_keeps_full_total_for_the_empty_match_case() {
        let state = test_state();
        state.store.save_users(&sample_users(0)).await.unwrap();
        state
            .store
            .save_predictions(&[prediction("m1", "john@example.com", 4)])
            .await
            .unwrap();

        let body = get_leaderboard(
            State(state),
            Query(query(Some("zzz-no-such-user"), None)),
        )
        .await
        .unwrap()
        .0;

        // "Search matched nobody" is distinguishable from "nobody predicted".
        assert!(!body.no_predictions);
        assert_eq!(body.total_ranked, 5);
        assert!(body.entries.is_empty());
    }
}
