use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(crate::handlers::auth::register))
        .route("/login", post(crate::handlers::auth::login))
        .route("/users", get(crate::handlers::auth::get_all_users))
        .route("/profile", put(crate::handlers::auth::update_profile))
}
