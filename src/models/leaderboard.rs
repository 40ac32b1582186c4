use serde::{Deserialize, Serialize};

/// Derived per-user aggregate, recomputed in full on every leaderboard read
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub id: String,
    pub name: String,
    pub email: String,
    pub total_points: u32,
    pub correct_predictions: u32,
    pub total_predictions: u32,
    /// 1-based row-number rank against the FULL sorted list; 0 until ranked.
    pub rank: u32,
    /// Display-only viewer flag; never affects ordering.
    pub is_current_user: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub success: bool,
    /// Distinguishes "nobody has predicted yet" (the post-reset state) from
    /// "your search matched nobody".
    pub no_predictions: bool,
    /// Size of the full ranked list, before search and truncation.
    pub total_ranked: usize,
    pub entries: Vec<UserScore>,
}
