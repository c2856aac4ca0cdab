//! Default set scores proposed once set winners are known.

use crate::logic::format_policy::set_plan;
use crate::models::{EngineError, MatchFormat, ResultCode, ScorePair, Side};

/// Suggested score for a set, set-winner first.
pub const DEFAULT_SET_SCORE: ScorePair = ScorePair::new(6, 4);

/// Proposed score per set, aligned with `set_winners`.
///
/// Sets with a winner get "6-4"; sets without one get nothing. A set replaced by
/// the super tiebreak produces no entry at all.
pub fn suggest_set_scores(
    set_winners: &[Option<Side>],
    format: MatchFormat,
    code: ResultCode,
) -> Result<Vec<Option<ScorePair>>, EngineError> {
    let plan = set_plan(format, code)?;
    Ok(set_winners
        .iter()
        .enumerate()
        .filter(|(index, _)| !plan.is_suppressed(*index))
        .map(|(_, winner)| winner.map(|_| DEFAULT_SET_SCORE))
        .collect())
}
