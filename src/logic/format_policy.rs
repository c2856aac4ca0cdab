//! Per-format rules: how many sets a result code implies and which of them are played.

use crate::logic::catalog::is_legal;
use crate::models::{EngineError, MatchFormat, ResultCode};
use serde::Serialize;

/// What a result code means for the set records of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct SetPlan {
    /// Sets played, counting a super tiebreak as the third set.
    pub set_count: usize,
    pub is_straight_sets: bool,
    pub third_set_is_super_tiebreak: bool,
}

impl SetPlan {
    /// Number of regular set records. The super tiebreak replaces the third one.
    pub fn set_record_count(&self) -> usize {
        if self.third_set_is_super_tiebreak {
            self.set_count - 1
        } else {
            self.set_count
        }
    }

    /// Whether set `index` (zero-based) gets no record at all.
    pub fn is_suppressed(&self, index: usize) -> bool {
        index >= self.set_record_count()
    }
}

/// Rules for `code` in `format`. Fails with `InvalidResultCode` for a code the
/// format does not allow.
pub fn set_plan(format: MatchFormat, code: ResultCode) -> Result<SetPlan, EngineError> {
    if !is_legal(format, code) {
        return Err(EngineError::InvalidResultCode(code.to_string()));
    }
    Ok(SetPlan {
        set_count: code.total_sets(),
        is_straight_sets: code.is_straight_sets(),
        third_set_is_super_tiebreak: format == MatchFormat::AmateurSuperTiebreak
            && code.winner_sets() == 2
            && code.loser_sets() == 1,
    })
}
