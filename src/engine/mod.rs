// The pure core: scoring fold plus ranking, assembled into the leaderboard
// read. Everything here works over in-memory snapshots and never touches
// storage.

pub mod ranking;
pub mod scoring;

use crate::models::leaderboard::UserScore;
use crate::models::matches::Match;
use crate::models::prediction::Prediction;
use crate::models::user::User;

/// The leaderboard read has one state an empty list cannot express: after an
/// administrator resets the leaderboard there are no predictions at all, and
/// the UI shows "nobody has predicted yet" instead of an empty ranking.
#[derive(Debug, PartialEq)]
pub enum Leaderboard {
    NoPredictions,
    Ranked {
        /// Full ranked size, before search and truncation.
        total: usize,
        entries: Vec<UserScore>,
    },
}

pub fn build_leaderboard(
    users: &[User],
    predictions: &[Prediction],
    completed_matches: &[Match],
    viewer_email: Option<&str>,
    search: Option<&str>,
    limit: usize,
) -> Leaderboard {
    if predictions.is_empty() {
        return Leaderboard::NoPredictions;
    }

    let scores = scoring::compute_scores(users, predictions, completed_matches);
    let mut ranked = ranking::rank(scores);
    ranking::mark_viewer(&mut ranked, viewer_email);

    let total = ranked.len();
    let entries = ranking::filter_and_truncate(&ranked, search, limit);

    Leaderboard::Ranked { total, entries }
}
