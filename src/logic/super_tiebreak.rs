//! The deciding super tiebreak of the amateur format.

use crate::logic::format_policy::set_plan;
use crate::models::{MatchFormat, ResultCode, Side, SuperTiebreak};

/// Amateur format with a split-set code. Illegal codes are never applicable.
pub fn is_applicable(format: MatchFormat, code: ResultCode) -> bool {
    set_plan(format, code)
        .map(|plan| plan.third_set_is_super_tiebreak)
        .unwrap_or(false)
}

/// Keep, open or drop the super tiebreak slot for the current selection.
///
/// When applicable the slot exists and its winner is the match winner; any entered
/// score is kept. Otherwise the slot is discarded.
pub fn synchronize(
    current: Option<SuperTiebreak>,
    format: MatchFormat,
    code: Option<ResultCode>,
    winner: Option<Side>,
) -> Option<SuperTiebreak> {
    match code {
        Some(code) if is_applicable(format, code) => Some(SuperTiebreak {
            score: current.and_then(|st| st.score),
            winner,
        }),
        _ => None,
    }
}
