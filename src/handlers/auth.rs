use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, Result};
use crate::models::user::{LoginUser, RegisterUser, UpdateProfile, User, UserResponse};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<Json<Value>> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut users = state.store.users().await?;

    if users.iter().any(|u| u.email == payload.email) {
        return Err(AppError::DuplicateEmail);
    }

    let user = User {
        id: format!("user-{}", Uuid::new_v4()),
        name: payload.name,
        email: payload.email,
        // Plaintext on purpose, these are demo accounts.
        password: payload.password,
        profile_picture: None,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    let response = UserResponse::from(&user);
    users.push(user);
    state.store.save_users(&users).await?;

    tracing::info!("👤 Registered user {}", response.email);
    Ok(Json(json!({
        "success": true,
        "user": response,
    })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<Value>> {
    let users = state.store.users().await?;

    // One error for both unknown email and wrong password.
    let user = users
        .iter()
        .find(|u| u.email == payload.email && u.password == payload.password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(json!({
        "success": true,
        "user": UserResponse::from(user),
    })))
}

pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Value>> {
    let users = state.store.users().await?;
    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

    Ok(Json(json!({
        "success": true,
        "count": users.len(),
        "users": users,
    })))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfile>,
) -> Result<Json<Value>> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut users = state.store.users().await?;
    let user = users
        .iter_mut()
        .find(|u| u.email == payload.email)
        .ok_or(AppError::UserNotFound)?;

    user.name = payload.name;
    if let Some(picture) = payload.profile_picture {
        user.profile_picture = Some(picture);
    }
    let response = UserResponse::from(&*user);

    state.store.save_users(&users).await?;
    Ok(Json(json!({
        "success": true,
        "user": response,
    })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let mut users = state.store.users().await?;
    let before = users.len();
    users.retain(|u| u.id != id);

    if users.len() == before {
        return Err(AppError::UserNotFound);
    }

    state.store.save_users(&users).await?;
    tracing::info!("🗑️ Deleted user {}", id);
    Ok(Json(json!({
        "success": true,
        "message": "User deleted",
    })))
}

pub async fn delete_all_users(State(state): State<AppState>) -> Result<Json<Value>> {
    state.store.save_users(&[]).await?;
    tracing::warn!("🗑️ Deleted ALL users");
    Ok(Json(json!({
        "success": true,
        "message": "All users deleted",
    })))
}
