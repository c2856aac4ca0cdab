//! Tiebreak sub-scores for 7-6 sets.

use crate::models::{EngineError, ScorePair, SetEntry};

/// Points the tiebreak winner reaches; the loser's count is recorded against it.
pub const TIEBREAK_POINTS: u8 = 7;

/// Set score of a set decided by a tiebreak, set-winner first.
pub const TIEBREAK_SET_SCORE: ScorePair = ScorePair::new(7, 6);

/// True iff the set went to a tiebreak (7-6 either way).
pub fn is_tiebreak_set(score: ScorePair) -> bool {
    matches!((score.first, score.second), (7, 6) | (6, 7))
}

/// Indices of sets whose current score calls for a tiebreak sub-score.
pub fn tiebreak_set_indices(sets: &[SetEntry]) -> Vec<usize> {
    sets.iter()
        .enumerate()
        .filter(|(_, set)| set.score.map(is_tiebreak_set).unwrap_or(false))
        .map(|(index, _)| index)
        .collect()
}

/// Sub-score for a tiebreak the set winner took with the loser on `loser_points` (0..=6).
pub fn tiebreak_from_loser_points(loser_points: u8) -> Result<ScorePair, EngineError> {
    if loser_points >= TIEBREAK_POINTS {
        return Err(EngineError::MalformedScore(format!(
            "{}-{}",
            TIEBREAK_POINTS, loser_points
        )));
    }
    Ok(ScorePair::new(TIEBREAK_POINTS, loser_points))
}

/// Accept a raw sub-score ("7-3" or "3-7"): one side 7, the other 0..=6.
/// Returned winner first.
pub fn normalize_tiebreak(raw: ScorePair) -> Result<ScorePair, EngineError> {
    if raw.high() != TIEBREAK_POINTS || raw.low() >= TIEBREAK_POINTS {
        return Err(EngineError::MalformedScore(raw.to_string()));
    }
    Ok(ScorePair::new(raw.high(), raw.low()))
}

/// The loser's tiebreak points, as shown in "7-6(N)".
pub fn loser_points(tiebreak: ScorePair) -> u8 {
    tiebreak.low()
}

/// Stored form of a set: the tiebreak sub-score replaces the regular score when present.
pub fn resolve_for_persistence(set: &SetEntry) -> SetEntry {
    match set.tiebreak {
        Some(tiebreak) => SetEntry {
            winner: set.winner,
            score: None,
            tiebreak: Some(tiebreak),
        },
        None => SetEntry {
            winner: set.winner,
            score: set.score,
            tiebreak: None,
        },
    }
}
