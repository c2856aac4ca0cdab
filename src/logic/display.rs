//! Score lines for a persisted result, match winner first.

use crate::logic::tiebreak::loser_points;
use crate::models::{EngineError, PersistedResult};

/// One display string per set in play order, then the super tiebreak if any.
///
/// Regular sets are flipped when the match winner lost them ("6-4" lost set shows as
/// "4-6"). Tiebreak sets render as "7-6(N)" or "6-7(N)" with N the loser's points.
/// Sets with neither score nor tiebreak are skipped.
pub fn score_lines(result: &PersistedResult) -> Result<Vec<String>, EngineError> {
    let match_winner = result.winner_identity()?;
    let mut lines = Vec::with_capacity(result.sets.len() + 1);

    for (index, set) in result.sets.iter().enumerate() {
        let won_by_match_winner = result.set_winner_identity(index)? == match_winner;
        match (set.score, set.tiebreak_score) {
            (_, Some(tiebreak)) => {
                let games = if won_by_match_winner { "7-6" } else { "6-7" };
                lines.push(format!("{}({})", games, loser_points(tiebreak)));
            }
            (Some(score), None) => {
                let oriented = if won_by_match_winner { score } else { score.reversed() };
                lines.push(oriented.to_string());
            }
            (None, None) => {}
        }
    }

    if let Some(score) = result.super_tiebreak.as_ref().and_then(|st| st.score) {
        lines.push(score.to_string());
    }
    Ok(lines)
}

/// All score lines on one line, e.g. "6-4, 3-6, 10-8".
pub fn score_line(result: &PersistedResult) -> Result<String, EngineError> {
    Ok(score_lines(result)?.join(", "))
}
