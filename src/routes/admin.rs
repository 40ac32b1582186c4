use axum::{
    routing::{delete, post},
    Router,
};

use crate::state::AppState;

// No auth on the admin surface; session security is out of scope for a
// demo deployment.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard/reset", post(crate::handlers::predictions::reset_leaderboard))
        .route("/matches/completed", delete(crate::handlers::matches::clear_completed))
        .route("/users/:id", delete(crate::handlers::auth::delete_user))
        .route("/users", delete(crate::handlers::auth::delete_all_users))
}
