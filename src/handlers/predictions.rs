use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::engine::scoring::score_prediction;
use crate::errors::{AppError, Result};
use crate::models::matches::Match;
use crate::models::prediction::{
    Prediction, PredictionResult, SetPredictionsLock, SubmitPrediction, TOTAL_POINTS_PER_MATCH,
};
use crate::state::AppState;

pub async fn submit_prediction(
    State(state): State<AppState>,
    Json(payload): Json<SubmitPrediction>,
) -> Result<Json<Value>> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    if state.store.predictions_locked().await? {
        return Err(AppError::PredictionsLocked);
    }

    let now_ms = Utc::now().timestamp_millis();
    let upcoming = state.store.upcoming_matches().await?;
    let m = upcoming
        .iter()
        .find(|m| m.id == payload.match_id)
        .ok_or(AppError::MatchNotFound)?;

    if !m.visible {
        return Err(AppError::MatchHidden);
    }
    if m.has_started(now_ms) {
        return Err(AppError::MatchAlreadyStarted);
    }

    let prediction = Prediction {
        id: format!("pred-{}", Uuid::new_v4()),
        match_id: payload.match_id,
        user_id: payload.user_id,
        team1_points: payload.team1_points,
        team2_points: TOTAL_POINTS_PER_MATCH - payload.team1_points,
        result: PredictionResult::Pending,
        created_at: now_ms,
    };

    // Upsert keyed by (matchId, userId): a re-submission replaces the prior
    // record wholesale at its existing position, never accumulates history.
    let mut predictions = state.store.predictions().await?;
    match predictions
        .iter()
        .position(|p| p.match_id == prediction.match_id && p.user_id == prediction.user_id)
    {
        Some(index) => predictions[index] = prediction.clone(),
        None => predictions.push(prediction.clone()),
    }
    state.store.save_predictions(&predictions).await?;

    Ok(Json(json!({
        "success": true,
        "prediction": prediction,
    })))
}

/// One row of the per-user predictions view: the stored split joined with
/// its match, result and points computed lazily from the match state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionView {
    pub id: String,
    pub match_id: String,
    pub user_id: String,
    pub team1_points: u8,
    pub team2_points: u8,
    pub created_at: i64,
    #[serde(rename = "match")]
    pub fixture: Match,
    pub result: PredictionResult,
    pub points_earned: u32,
}

pub async fn user_predictions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>> {
    let now_ms = Utc::now().timestamp_millis();
    let predictions = state.store.predictions().await?;
    let upcoming = state.store.upcoming_matches().await?;
    let completed = state.store.completed_matches().await?;

    // Predictions whose match vanished from both collections drop out of the
    // view; they still count as attempts in the leaderboard.
    let views: Vec<PredictionView> = predictions
        .into_iter()
        .filter(|p| p.user_id == user_id)
        .filter_map(|p| {
            if let Some(m) = completed.iter().find(|m| m.id == p.match_id) {
                let (points_earned, result) = score_prediction(&p, m);
                return Some(build_view(p, m.clone(), result, points_earned));
            }
            let m = upcoming.iter().find(|m| m.id == p.match_id)?;
            let mut fixture = m.clone();
            fixture.status = fixture.display_status(now_ms);
            Some(build_view(p, fixture, PredictionResult::Pending, 0))
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "count": views.len(),
        "predictions": views,
    })))
}

fn build_view(
    p: Prediction,
    fixture: Match,
    result: PredictionResult,
    points_earned: u32,
) -> PredictionView {
    PredictionView {
        id: p.id,
        match_id: p.match_id,
        user_id: p.user_id,
        team1_points: p.team1_points,
        team2_points: p.team2_points,
        created_at: p.created_at,
        fixture,
        result,
        points_earned,
    }
}

pub async fn get_lock(State(state): State<AppState>) -> Result<Json<Value>> {
    Ok(Json(json!({
        "success": true,
        "locked": state.store.predictions_locked().await?,
    })))
}

pub async fn set_lock(
    State(state): State<AppState>,
    Json(payload): Json<SetPredictionsLock>,
) -> Result<Json<Value>> {
    state.store.set_predictions_locked(payload.locked).await?;
    tracing::info!(
        "🔒 Predictions {}",
        if payload.locked { "locked" } else { "unlocked" }
    );
    Ok(Json(json!({
        "success": true,
        "locked": payload.locked,
    })))
}

/// Clears every prediction; accounts and match history stay. The next
/// leaderboard read reports the distinguished "no predictions" state.
pub async fn reset_leaderboard(State(state): State<AppState>) -> Result<Json<Value>> {
    state.store.save_predictions(&[]).await?;
    tracing::warn!("🧹 Leaderboard reset, all predictions cleared");
    Ok(Json(json!({
        "success": true,
        "message": "Leaderboard reset",
    })))
}
