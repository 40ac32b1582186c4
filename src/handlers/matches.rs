use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::matches::{
    format_display_date, format_display_time, CompleteMatch, CreateMatch, Match, MatchArchive,
    MatchStatus, SetVisibility,
};
use crate::models::team::find_team;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    /// `visible=true` narrows to the player view: visible matches that have
    /// not started yet. Without it the full admin list comes back.
    pub visible: Option<bool>,
}

pub async fn list_upcoming(
    State(state): State<AppState>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Value>> {
    let now_ms = Utc::now().timestamp_millis();
    let mut matches = state.store.upcoming_matches().await?;

    if query.visible == Some(true) {
        matches.retain(|m| m.visible && !m.has_started(now_ms));
    }

    matches.sort_by_key(|m| m.start_timestamp);
    for m in matches.iter_mut() {
        m.status = m.display_status(now_ms);
    }

    Ok(Json(json!({
        "success": true,
        "count": matches.len(),
        "matches": matches,
    })))
}

pub async fn list_completed(State(state): State<AppState>) -> Result<Json<Value>> {
    let matches = state.store.completed_matches().await?;
    Ok(Json(json!({
        "success": true,
        "count": matches.len(),
        "matches": matches,
    })))
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let upcoming = state.store.upcoming_matches().await?;
    let completed = state.store.completed_matches().await?;

    let mut m = upcoming
        .into_iter()
        .chain(completed)
        .find(|m| m.id == id)
        .ok_or(AppError::MatchNotFound)?;
    m.status = m.display_status(Utc::now().timestamp_millis());

    Ok(Json(json!({
        "success": true,
        "match": m,
    })))
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<CreateMatch>,
) -> Result<Json<Value>> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if payload.team1_id == payload.team2_id {
        return Err(AppError::invalid_data("a match needs two different teams"));
    }

    let team1 = find_team(&payload.team1_id)
        .ok_or_else(|| AppError::invalid_data(format!("unknown team: {}", payload.team1_id)))?;
    let team2 = find_team(&payload.team2_id)
        .ok_or_else(|| AppError::invalid_data(format!("unknown team: {}", payload.team2_id)))?;

    let start = Utc
        .timestamp_millis_opt(payload.start_timestamp)
        .single()
        .ok_or_else(|| AppError::invalid_data("startTimestamp is not a valid timestamp"))?;

    let m = Match {
        id: format!("match-{}", Uuid::new_v4()),
        team1,
        team2,
        date: format_display_date(start),
        time: format_display_time(start),
        venue: payload.venue,
        start_timestamp: payload.start_timestamp,
        status: MatchStatus::Scheduled,
        visible: payload.visible.unwrap_or(true),
        winner: None,
        winner_team: None,
    };

    let mut matches = state.store.upcoming_matches().await?;
    matches.push(m.clone());
    state.store.save_upcoming_matches(&matches).await?;

    tracing::info!("🏏 Created match {} ({} vs {})", m.id, m.team1.code, m.team2.code);
    Ok(Json(json!({
        "success": true,
        "match": m,
    })))
}

/// Only upcoming matches can be deleted; completed matches are history.
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let mut matches = state.store.upcoming_matches().await?;
    let before = matches.len();
    matches.retain(|m| m.id != id);

    if matches.len() == before {
        return Err(AppError::MatchNotFound);
    }

    state.store.save_upcoming_matches(&matches).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Match deleted",
    })))
}

pub async fn set_visibility(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetVisibility>,
) -> Result<Json<Value>> {
    let mut matches = state.store.upcoming_matches().await?;
    let m = matches
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(AppError::MatchNotFound)?;

    m.visible = payload.visible;
    let updated = m.clone();
    state.store.save_upcoming_matches(&matches).await?;

    Ok(Json(json!({
        "success": true,
        "match": updated,
    })))
}

/// The one-way transition out of the upcoming set. Both collections move in
/// a single atomic write; predictions referencing the match resolve lazily
/// on the next scoring read.
pub async fn complete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CompleteMatch>,
) -> Result<Json<Value>> {
    let mut upcoming = state.store.upcoming_matches().await?;

    let position = upcoming
        .iter()
        .position(|m| m.id == id)
        .ok_or(AppError::MatchNotFound)?;

    if !upcoming[position].has_team(&payload.winner_team_id) {
        return Err(AppError::invalid_data(format!(
            "winner {} is not playing in match {}",
            payload.winner_team_id, id
        )));
    }

    let mut m = upcoming.remove(position);
    m.status = MatchStatus::Completed;
    m.winner_team = find_team(&payload.winner_team_id);
    m.winner = Some(payload.winner_team_id);

    let mut completed = state.store.completed_matches().await?;
    completed.push(m.clone());

    state
        .store
        .replace_match_collections(&upcoming, &completed)
        .await?;

    tracing::info!("🏆 Match {} completed, winner {}", m.id, m.winner.as_deref().unwrap_or("?"));
    Ok(Json(json!({
        "success": true,
        "match": m,
    })))
}

pub async fn export_matches(State(state): State<AppState>) -> Result<Json<MatchArchive>> {
    Ok(Json(MatchArchive {
        upcoming_matches: state.store.upcoming_matches().await?,
        completed_matches: state.store.completed_matches().await?,
    }))
}

/// Wholesale replacement of both match collections. The document must carry
/// BOTH fields as arrays of well-formed matches; any failure rejects the
/// whole import and leaves state untouched.
pub async fn import_matches(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Result<Json<Value>> {
    for field in ["upcomingMatches", "completedMatches"] {
        if !document.get(field).map(Value::is_array).unwrap_or(false) {
            return Err(AppError::invalid_data(format!(
                "import document must contain an array-typed {} field",
                field
            )));
        }
    }

    let archive: MatchArchive = serde_json::from_value(document)
        .map_err(|e| AppError::invalid_data(format!("malformed match in import: {}", e)))?;

    state
        .store
        .replace_match_collections(&archive.upcoming_matches, &archive.completed_matches)
        .await?;

    tracing::info!(
        "📦 Imported {} upcoming / {} completed matches",
        archive.upcoming_matches.len(),
        archive.completed_matches.len()
    );
    Ok(Json(json!({
        "success": true,
        "upcomingCount": archive.upcoming_matches.len(),
        "completedCount": archive.completed_matches.len(),
    })))
}

pub async fn clear_completed(State(state): State<AppState>) -> Result<Json<Value>> {
    state.store.save_completed_matches(&[]).await?;
    tracing::warn!("🗑️ Cleared all completed matches");
    Ok(Json(json!({
        "success": true,
        "message": "Completed matches cleared",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(Store::new(Arc::new(MemoryStorage::new())))
    }

    fn create_payload(team1: &str, team2: &str) -> CreateMatch {
        CreateMatch {
            team1_id: team1.to_string(),
            team2_id: team2.to_string(),
            venue: "Wankhede Stadium, Mumbai".to_string(),
            start_timestamp: Utc::now().timestamp_millis() + 3_600_000,
            visible: Some(true),
        }
    }

    async fn created_match_id(state: &AppState, team1: &str, team2: &str) -> String {
        create_match(State(state.clone()), Json(create_payload(team1, team2)))
            .await
            .unwrap();
        state
            .store
            .upcoming_matches()
            .await
            .unwrap()
            .last()
            .unwrap()
            .id
            .clone()
    }

    #[tokio::test]
    async fn create_derives_display_date_and_time() {
        let state = test_state();
        created_match_id(&state, "MI", "CSK").await;

        let matches = state.store.upcoming_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
        assert!(!matches[0].date.is_empty());
        assert!(matches[0].time.ends_with("AM") || matches[0].time.ends_with("PM"));
        assert_eq!(matches[0].status, MatchStatus::Scheduled);
    }

    #[tokio::test]
    async fn create_rejects_same_team_twice() {
        let state = test_state();
        let result = create_match(State(state), Json(create_payload("MI", "MI"))).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn create_rejects_unknown_team() {
        let state = test_state();
        let result = create_match(State(state), Json(create_payload("MI", "NOPE"))).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn complete_moves_match_between_collections() {
        let state = test_state();
        let id = created_match_id(&state, "MI", "CSK").await;

        complete_match(
            State(state.clone()),
            Path(id.clone()),
            Json(CompleteMatch {
                winner_team_id: "MI".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(state.store.upcoming_matches().await.unwrap().is_empty());
        let completed = state.store.completed_matches().await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, id);
        assert_eq!(completed[0].status, MatchStatus::Completed);
        assert_eq!(completed[0].winner.as_deref(), Some("MI"));
        assert_eq!(completed[0].winner_team.as_ref().unwrap().code, "MI");
    }

    #[tokio::test]
    async fn complete_rejects_a_team_not_in_the_match() {
        let state = test_state();
        let id = created_match_id(&state, "MI", "CSK").await;

        let result = complete_match(
            State(state.clone()),
            Path(id),
            Json(CompleteMatch {
                winner_team_id: "RCB".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        // Nothing moved.
        assert_eq!(state.store.upcoming_matches().await.unwrap().len(), 1);
        assert!(state.store.completed_matches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn complete_unknown_match_is_a_reported_no_op() {
        let state = test_state();
        let result = complete_match(
            State(state),
            Path("match-missing".to_string()),
            Json(CompleteMatch {
                winner_team_id: "MI".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::MatchNotFound)));
    }

    #[tokio::test]
    async fn delete_only_touches_upcoming() {
        let state = test_state();
        let id = created_match_id(&state, "MI", "CSK").await;
        complete_match(
            State(state.clone()),
            Path(id.clone()),
            Json(CompleteMatch {
                winner_team_id: "CSK".to_string(),
            }),
        )
        .await
        .unwrap();

        // The match now only exists in the completed set and cannot be deleted.
        let result = delete_match(State(state.clone()), Path(id)).await;
        assert!(matches!(result, Err(AppError::MatchNotFound)));
        assert_eq!(state.store.completed_matches().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn import_rejects_missing_field_and_leaves_state_untouched() {
        let state = test_state();
        created_match_id(&state, "MI", "CSK").await;

        let result = import_matches(
            State(state.clone()),
            Json(json!({ "upcomingMatches": [] })),
        )
        .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(state.store.upcoming_matches().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn import_rejects_malformed_elements() {
        let state = test_state();
        created_match_id(&state, "MI", "CSK").await;

        let result = import_matches(
            State(state.clone()),
            Json(json!({
                "upcomingMatches": [{ "id": "match-broken" }],
                "completedMatches": [],
            })),
        )
        .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(state.store.upcoming_matches().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn export_import_replaces_both_collections() {
        let source = test_state();
        created_match_id(&source, "MI", "CSK").await;
        let archive = export_matches(State(source)).await.unwrap().0;

        let target = test_state();
        created_match_id(&target, "RR", "GT").await;
        import_matches(
            State(target.clone()),
            Json(serde_json::to_value(&archive).unwrap()),
        )
        .await
        .unwrap();

        let upcoming = target.store.upcoming_matches().await.unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].team1.code, "MI");
    }

    #[tokio::test]
    async fn visible_query_hides_hidden_and_started_matches() {
        let state = test_state();
        let id = created_match_id(&state, "MI", "CSK").await;
        created_match_id(&state, "RR", "GT").await;

        set_visibility(
            State(state.clone()),
            Path(id),
            Json(SetVisibility { visible: false }),
        )
        .await
        .unwrap();

        let body = list_upcoming(
            State(state),
            Query(UpcomingQuery {
                visible: Some(true),
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.0["count"], 1);
        assert_eq!(body.0["matches"][0]["team1"]["code"], "RR");
    }
}
