use crate::models::leaderboard::UserScore;
use crate::models::matches::Match;
use crate::models::prediction::{Prediction, PredictionResult};
use crate::models::user::User;

/// Points a prediction earned from a completed match, and whether it counts
/// as correct. The winning side's allocation is what scores; correctness
/// requires a STRICT majority on the winning side, so an even 5/5 split
/// earns 5 points but is never "correct". A winner id matching neither team
/// resolves nothing.
pub fn score_prediction(prediction: &Prediction, m: &Match) -> (u32, PredictionResult) {
    let Some(winner) = m.winner.as_deref() else {
        return (0, PredictionResult::Pending);
    };

    if winner == m.team1.id {
        let result = if prediction.team1_points > prediction.team2_points {
            PredictionResult::Correct
        } else {
            PredictionResult::Incorrect
        };
        (u32::from(prediction.team1_points), result)
    } else if winner == m.team2.id {
        let result = if prediction.team2_points > prediction.team1_points {
            PredictionResult::Correct
        } else {
            PredictionResult::Incorrect
        };
        (u32::from(prediction.team2_points), result)
    } else {
        (0, PredictionResult::Pending)
    }
}

/// The scoring fold: one `UserScore` per input user, `rank` left 0 for the
/// ranking step. Pure over its three snapshots; nothing is mutated and the
/// output order follows the input user order.
///
/// Per prediction:
/// - the owning accumulator is found by `prediction.user_id == user.email`;
///   predictions with no matching user are silently ignored;
/// - `total_predictions` counts the attempt unconditionally, whether or not
///   the match is known or resolved;
/// - points and correctness come from `score_prediction` only when the match
///   is found among the completed set.
pub fn compute_scores(
    users: &[User],
    predictions: &[Prediction],
    completed_matches: &[Match],
) -> Vec<UserScore> {
    let mut scores: Vec<UserScore> = users
        .iter()
        .map(|user| UserScore {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            total_points: 0,
            correct_predictions: 0,
            total_predictions: 0,
            rank: 0,
            is_current_user: false,
        })
        .collect();

    for prediction in predictions {
        let Some(score) = scores.iter_mut().find(|s| s.email == prediction.user_id) else {
            continue;
        };

        score.total_predictions += 1;

        let Some(m) = completed_matches.iter().find(|m| m.id == prediction.match_id) else {
            continue;
        };

        let (points, result) = score_prediction(prediction, m);
        score.total_points += points;
        if result == PredictionResult::Correct {
            score.correct_predictions += 1;
        }
    }

    scores
}
