//! Final gate before a result is handed to the store.

use crate::logic::format_policy::set_plan;
use crate::logic::participants::resolve_slot;
use crate::logic::tiebreak::normalize_tiebreak;
use crate::models::{
    EngineError, MissingField, Participants, PersistedResult, ResultCode, Side,
    SuperTiebreakIssue,
};

/// Check a persisted result against the match it belongs to.
///
/// Returns the first problem found:
/// 1. identity fields use the match's mode only, and name one of its two distinct sides;
/// 2. the result code is legal for the format and agrees with the match winner;
/// 3. the number of sets matches the code (super tiebreak replaces the third set);
/// 4. every set has a winner, never both a score and a tiebreak score, a score
///    written set-winner first, and a score unless the match was won in straight sets;
/// 5. the super tiebreak is present exactly when required, won by the match winner;
/// 6. set winners add up to the result code.
pub fn validate(result: &PersistedResult, participants: &Participants) -> Result<(), EngineError> {
    let active = participants.mode();
    if result.participant_mode != active {
        return Err(EngineError::WrongParticipantMode { active });
    }
    participants.check_distinct()?;

    let winner = resolve_slot(participants, &result.winner)?
        .ok_or(EngineError::IncompleteRecord(MissingField::MatchWinner))?;

    let code = result.result_code;
    let plan = set_plan(result.format, code)?;
    if code.winner() != Some(winner) {
        return Err(EngineError::InvalidResultCode(code.to_string()));
    }

    let expected = plan.set_record_count();
    if result.sets.len() != expected {
        return Err(EngineError::IncompleteRecord(MissingField::SetCount {
            expected,
            found: result.sets.len(),
        }));
    }

    let (mut home, mut away) = (0u8, 0u8);
    let mut tally = |side: Side| match side {
        Side::Home => home += 1,
        Side::Away => away += 1,
    };

    for (index, set) in result.sets.iter().enumerate() {
        let set_winner = resolve_slot(participants, &set.winner)?
            .ok_or(EngineError::IncompleteRecord(MissingField::SetWinner(index)))?;
        if set.score.is_some() && set.tiebreak_score.is_some() {
            return Err(EngineError::ConflictingScoreRepresentation { index });
        }
        if let Some(score) = set.score {
            if score.first < score.second {
                return Err(EngineError::MalformedScore(score.to_string()));
            }
        }
        if let Some(tiebreak) = set.tiebreak_score {
            normalize_tiebreak(tiebreak)?;
        }
        if !plan.is_straight_sets && set.score.is_none() && set.tiebreak_score.is_none() {
            return Err(EngineError::IncompleteRecord(MissingField::SetScore(index)));
        }
        tally(set_winner);
    }

    match (&result.super_tiebreak, plan.third_set_is_super_tiebreak) {
        (Some(_), false) => {
            return Err(EngineError::SuperTiebreakMismatch(
                SuperTiebreakIssue::NotApplicable,
            ));
        }
        (None, true) => {
            return Err(EngineError::SuperTiebreakMismatch(SuperTiebreakIssue::Missing));
        }
        (Some(super_tiebreak), true) => {
            if resolve_slot(participants, &super_tiebreak.winner)? != Some(winner) {
                return Err(EngineError::SuperTiebreakMismatch(
                    SuperTiebreakIssue::WinnerDiffers,
                ));
            }
            if super_tiebreak.score.is_none() {
                return Err(EngineError::IncompleteRecord(
                    MissingField::SuperTiebreakScore,
                ));
            }
            tally(winner);
        }
        (None, false) => {}
    }

    let found = ResultCode::new(home, away);
    if found != code {
        return Err(EngineError::SetTallyMismatch {
            expected: code,
            found,
        });
    }
    Ok(())
}
