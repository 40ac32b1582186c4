use crate::models::leaderboard::UserScore;

/// The leaderboard shows at most this many rows per read.
pub const LEADERBOARD_PAGE_SIZE: usize = 15;

/// Stable sort descending by `total_points` only, then assign 1-based
/// row-number ranks. Ties keep their relative input order (which follows the
/// users collection); there is deliberately no secondary sort key, so equal
/// scores get consecutive ranks rather than sharing one.
pub fn rank(mut scores: Vec<UserScore>) -> Vec<UserScore> {
    scores.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (index, score) in scores.iter_mut().enumerate() {
        score.rank = (index + 1) as u32;
    }
    scores
}

/// Case-insensitive substring filter on `name`, then top-N truncation. Both
/// run AFTER ranking, so the rank on every surviving row still reflects the
/// full sorted list, never the filtered view.
pub fn filter_and_truncate(
    ranked: &[UserScore],
    query: Option<&str>,
    limit: usize,
) -> Vec<UserScore> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    ranked
        .iter()
        .filter(|score| match query {
            Some(q) => score.name.to_lowercase().contains(&q.to_lowercase()),
            None => true,
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Flags the row belonging to the viewing user, joined on email. Display
/// only; the sort never looks at it.
pub fn mark_viewer(scores: &mut [UserScore], viewer_email: Option<&str>) {
    if let Some(email) = viewer_email {
        for score in scores.iter_mut() {
            score.is_current_user = score.email == email;
        }
    }
}
