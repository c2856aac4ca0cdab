//! Result entry as a sequence of events applied to a draft, and the final hand-off.

use crate::logic::catalog::codes_for;
use crate::logic::participants::{hydrate, project};
use crate::logic::set_scores::{suggest_set_scores, DEFAULT_SET_SCORE};
use crate::logic::set_winners::derive_set_winners;
use crate::logic::super_tiebreak::{is_applicable, synchronize};
use crate::logic::tiebreak::{
    is_tiebreak_set, resolve_for_persistence, tiebreak_from_loser_points, TIEBREAK_SET_SCORE,
};
use crate::logic::validator::validate;
use crate::models::{
    EngineError, MatchInfo, MatchResultRecord, MissingField, PersistedResult, ResultCode,
    ResultDraft, ScorePair, SetEntry, Side, SuperTiebreak, SuperTiebreakIssue,
};
use serde::{Deserialize, Serialize};

/// One operator edit. Set indices are zero-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftEvent {
    SelectWinner { side: Side },
    SelectResultCode { code: ResultCode },
    SetWinner { index: usize, side: Option<Side> },
    EnterSetScore { index: usize, score: Option<ScorePair> },
    EnterTiebreak { index: usize, loser_points: Option<u8> },
    EnterSuperTiebreak { score: Option<ScorePair> },
}

/// Apply `event` to `draft`, returning the new draft. `draft` is left untouched on error.
pub fn apply(draft: &ResultDraft, event: DraftEvent) -> Result<ResultDraft, EngineError> {
    let mut next = draft.clone();
    match event {
        DraftEvent::SelectWinner { side } => select_winner(&mut next, side)?,
        DraftEvent::SelectResultCode { code } => select_result_code(&mut next, code)?,
        DraftEvent::SetWinner { index, side } => set_winner(&mut next, index, side)?,
        DraftEvent::EnterSetScore { index, score } => enter_set_score(&mut next, index, score)?,
        DraftEvent::EnterTiebreak {
            index,
            loser_points,
        } => enter_tiebreak(&mut next, index, loser_points)?,
        DraftEvent::EnterSuperTiebreak { score } => enter_super_tiebreak(&mut next, score)?,
    }
    log::debug!("Draft for match {} applied {:?}", next.match_id, event);
    Ok(next)
}

/// Changing the winner of a match with a result code mirrors the code, which resets
/// the sets like any other code change. A super tiebreak score is kept as entered: it
/// is winner first whoever the winner is.
fn select_winner(draft: &mut ResultDraft, side: Side) -> Result<(), EngineError> {
    if draft.winner == Some(side) {
        return Ok(());
    }
    draft.winner = Some(side);
    if let Some(code) = draft.result_code {
        if code.winner() != Some(side) {
            reset_sets(draft, code.mirrored())?;
        }
    }
    draft.super_tiebreak =
        synchronize(draft.super_tiebreak, draft.format, draft.result_code, draft.winner);
    Ok(())
}

fn select_result_code(draft: &mut ResultDraft, code: ResultCode) -> Result<(), EngineError> {
    let winner = draft
        .winner
        .or_else(|| code.winner())
        .ok_or_else(|| EngineError::InvalidResultCode(code.to_string()))?;
    if !codes_for(draft.format, winner).contains(&code) {
        return Err(EngineError::InvalidResultCode(code.to_string()));
    }
    draft.winner = Some(winner);
    reset_sets(draft, code)?;
    draft.super_tiebreak =
        synchronize(draft.super_tiebreak, draft.format, draft.result_code, draft.winner);
    Ok(())
}

/// Replace every set with freshly derived winners and suggested scores.
fn reset_sets(draft: &mut ResultDraft, code: ResultCode) -> Result<(), EngineError> {
    let winner = draft
        .winner
        .ok_or(EngineError::IncompleteRecord(MissingField::MatchWinner))?;
    let winners = derive_set_winners(draft.format, winner, code)?;
    let scores = suggest_set_scores(&winners, draft.format, code)?;
    draft.sets = winners
        .into_iter()
        .zip(scores)
        .map(|(winner, score)| SetEntry {
            winner,
            score,
            tiebreak: None,
        })
        .collect();
    draft.result_code = Some(code);
    Ok(())
}

fn set_winner(draft: &mut ResultDraft, index: usize, side: Option<Side>) -> Result<(), EngineError> {
    let entry = draft.set_mut(index)?;
    if entry.winner != side {
        entry.tiebreak = None;
        entry.winner = side;
    }
    entry.score = match side {
        Some(_) => entry
            .score
            .map(ScorePair::winner_first)
            .or(Some(DEFAULT_SET_SCORE)),
        None => None,
    };
    Ok(())
}

fn enter_set_score(
    draft: &mut ResultDraft,
    index: usize,
    score: Option<ScorePair>,
) -> Result<(), EngineError> {
    if let Some(score) = score {
        if score.high() > 7 {
            return Err(EngineError::MalformedScore(score.to_string()));
        }
    }
    let entry = draft.set_mut(index)?;
    // typed from either side's view; stored set-winner first
    let score = match entry.winner {
        Some(_) => score.map(ScorePair::winner_first),
        None => score,
    };
    entry.score = score;
    if !score.map(is_tiebreak_set).unwrap_or(false) {
        entry.tiebreak = None;
    }
    Ok(())
}

fn enter_tiebreak(
    draft: &mut ResultDraft,
    index: usize,
    loser_points: Option<u8>,
) -> Result<(), EngineError> {
    let entry = draft.set_mut(index)?;
    let Some(points) = loser_points else {
        entry.tiebreak = None;
        return Ok(());
    };
    let eligible = entry.winner.is_some() && entry.score.map(is_tiebreak_set).unwrap_or(false);
    if !eligible {
        return Err(EngineError::TiebreakUnavailable { index });
    }
    entry.tiebreak = Some(tiebreak_from_loser_points(points)?);
    Ok(())
}

fn enter_super_tiebreak(draft: &mut ResultDraft, score: Option<ScorePair>) -> Result<(), EngineError> {
    let applicable = draft
        .result_code
        .map(|code| is_applicable(draft.format, code))
        .unwrap_or(false);
    if !applicable {
        return Err(EngineError::SuperTiebreakMismatch(
            SuperTiebreakIssue::NotApplicable,
        ));
    }
    draft.super_tiebreak = Some(SuperTiebreak {
        score,
        winner: draft.winner,
    });
    Ok(())
}

/// Persisted form of the draft: tiebreaks resolved, super tiebreak kept only where it
/// applies, identities attached. Not yet validated.
pub fn emit(draft: &ResultDraft) -> Result<PersistedResult, EngineError> {
    let winner = draft
        .winner
        .ok_or(EngineError::IncompleteRecord(MissingField::MatchWinner))?;
    let code = draft
        .result_code
        .ok_or(EngineError::IncompleteRecord(MissingField::ResultCode))?;
    let record = MatchResultRecord {
        match_id: draft.match_id,
        format: draft.format,
        winner,
        result_code: code,
        sets: draft.sets.iter().map(resolve_for_persistence).collect(),
        super_tiebreak: synchronize(draft.super_tiebreak, draft.format, Some(code), Some(winner)),
    };
    Ok(project(&record, &draft.participants))
}

/// Emit and validate. Only a result returned from here goes to the store.
pub fn finalize(draft: &ResultDraft) -> Result<PersistedResult, EngineError> {
    let checked = emit(draft).and_then(|persisted| {
        validate(&persisted, &draft.participants)?;
        Ok(persisted)
    });
    match &checked {
        Ok(persisted) => log::debug!(
            "Result {} for match {} accepted",
            persisted.result_code,
            draft.match_id
        ),
        Err(e) => log::debug!("Result for match {} rejected: {}", draft.match_id, e),
    }
    checked
}

impl ResultDraft {
    /// Draft for editing an existing result. A stored tiebreak brings back its 7-6 set score.
    pub fn from_persisted(persisted: &PersistedResult, info: &MatchInfo) -> Result<Self, EngineError> {
        let record = hydrate(persisted, &info.participants)?;
        let sets = record
            .sets
            .into_iter()
            .map(|set| SetEntry {
                score: match set.tiebreak {
                    Some(_) => Some(TIEBREAK_SET_SCORE),
                    None => set.score,
                },
                ..set
            })
            .collect();
        Ok(Self {
            match_id: info.id,
            format: info.format,
            participants: info.participants.clone(),
            winner: Some(record.winner),
            result_code: Some(record.result_code),
            sets,
            super_tiebreak: synchronize(
                record.super_tiebreak,
                info.format,
                Some(record.result_code),
                Some(record.winner),
            ),
        })
    }
}
