//! Initial per-set winners for a chosen result code.

use crate::logic::format_policy::set_plan;
use crate::models::{EngineError, MatchFormat, ResultCode, Side};

/// One entry per set record the code implies.
///
/// Straight sets: every set goes to `winner`. Split sets: every entry is unset,
/// the operator assigns each set by hand.
pub fn derive_set_winners(
    format: MatchFormat,
    winner: Side,
    code: ResultCode,
) -> Result<Vec<Option<Side>>, EngineError> {
    if code.winner() != Some(winner) {
        return Err(EngineError::InvalidResultCode(code.to_string()));
    }
    let plan = set_plan(format, code)?;
    let fill = plan.is_straight_sets.then_some(winner);
    Ok(vec![fill; plan.set_record_count()])
}
