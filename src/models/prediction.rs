use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionResult {
    Pending,
    Correct,
    Incorrect,
}

/// One confidence-point split per (matchId, userId) pair. Re-submitting for
/// the same pair replaces the record wholesale; history is never kept.
///
/// `user_id` holds the predicting user's EMAIL, not `User.id`. Predictions
/// join to accounts on email; that foreign key is kept as-is rather than
/// normalized onto the surrogate id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub match_id: String,
    pub user_id: String,
    pub team1_points: u8,
    pub team2_points: u8,
    /// Stored as `pending`; correct/incorrect is computed lazily on read.
    pub result: PredictionResult,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// The API takes only one side of the split; the other is derived as
/// `10 - team1Points` so the two can never drift apart.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPrediction {
    #[validate(length(min = 1, message = "matchId is required"))]
    pub match_id: String,
    #[validate(email(message = "userId must be the user's email"))]
    pub user_id: String,
    #[validate(range(max = 10, message = "team1Points must be between 0 and 10"))]
    pub team1_points: u8,
}

pub const TOTAL_POINTS_PER_MATCH: u8 = 10;

#[derive(Debug, Deserialize)]
pub struct SetPredictionsLock {
    pub locked: bool,
}
