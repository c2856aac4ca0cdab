//! Errors returned by the result engine. All of them are expected domain outcomes.

use crate::models::format::ResultCode;
use crate::models::participants::{Identity, ParticipantMode};
use std::fmt;

/// What an incomplete record is missing. Set indices are zero-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MissingField {
    MatchWinner,
    ResultCode,
    SetWinner(usize),
    SetScore(usize),
    SuperTiebreakScore,
    /// The record carries a different number of sets than the result code implies.
    SetCount { expected: usize, found: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SuperTiebreakIssue {
    /// Present, but the format and result code do not call for one.
    NotApplicable,
    /// Required by the format and result code, but absent.
    Missing,
    /// Its winner is not the match winner.
    WinnerDiffers,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Result code not legal for the format or the winning side.
    InvalidResultCode(String),
    /// Read or write of the identity representation the match does not use.
    WrongParticipantMode { active: ParticipantMode },
    IncompleteRecord(MissingField),
    /// A set carries both a regular score and a tiebreak score.
    ConflictingScoreRepresentation { index: usize },
    SuperTiebreakMismatch(SuperTiebreakIssue),
    /// Recorded set winners do not add up to the result code.
    SetTallyMismatch { expected: ResultCode, found: ResultCode },
    MalformedScore(String),
    SetOutOfRange { index: usize, sets: usize },
    /// Tiebreak entered for a set that is not 7-6 or has no winner yet.
    TiebreakUnavailable { index: usize },
    /// Identity on a record that belongs to neither side of the match.
    UnknownParticipant(Identity),
    /// Home and away name the same player or team.
    SameParticipantOnBothSides(Identity),
}

impl EngineError {
    /// Stable tag for API clients.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidResultCode(_) => "invalid_result_code",
            EngineError::WrongParticipantMode { .. } => "wrong_participant_mode",
            EngineError::IncompleteRecord(_) => "incomplete_record",
            EngineError::ConflictingScoreRepresentation { .. } => "conflicting_score_representation",
            EngineError::SuperTiebreakMismatch(_) => "super_tiebreak_mismatch",
            EngineError::SetTallyMismatch { .. } => "set_tally_mismatch",
            EngineError::MalformedScore(_) => "malformed_score",
            EngineError::SetOutOfRange { .. } => "set_out_of_range",
            EngineError::TiebreakUnavailable { .. } => "tiebreak_unavailable",
            EngineError::UnknownParticipant(_) => "unknown_participant",
            EngineError::SameParticipantOnBothSides(_) => "same_participant_on_both_sides",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::MatchWinner => write!(f, "match winner"),
            MissingField::ResultCode => write!(f, "result code"),
            MissingField::SetWinner(i) => write!(f, "winner of set {}", i + 1),
            MissingField::SetScore(i) => write!(f, "score of set {}", i + 1),
            MissingField::SuperTiebreakScore => write!(f, "super tiebreak score"),
            MissingField::SetCount { expected, found } => {
                write!(f, "{} sets (found {})", expected, found)
            }
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidResultCode(code) => write!(f, "Result code {:?} is not valid here", code),
            EngineError::WrongParticipantMode { active } => {
                write!(f, "Match is {}; that identity field is not used", active)
            }
            EngineError::IncompleteRecord(missing) => write!(f, "Result is missing the {}", missing),
            EngineError::ConflictingScoreRepresentation { index } => {
                write!(f, "Set {} has both a score and a tiebreak score", index + 1)
            }
            EngineError::SuperTiebreakMismatch(SuperTiebreakIssue::NotApplicable) => {
                write!(f, "A super tiebreak is not played for this format and result")
            }
            EngineError::SuperTiebreakMismatch(SuperTiebreakIssue::Missing) => {
                write!(f, "This result requires a super tiebreak")
            }
            EngineError::SuperTiebreakMismatch(SuperTiebreakIssue::WinnerDiffers) => {
                write!(f, "Super tiebreak winner must be the match winner")
            }
            EngineError::SetTallyMismatch { expected, found } => {
                write!(f, "Set winners add up to {}, but the result is {}", found, expected)
            }
            EngineError::MalformedScore(s) => write!(f, "Score {:?} is not valid", s),
            EngineError::SetOutOfRange { index, sets } => {
                write!(f, "Set {} does not exist (result has {} sets)", index + 1, sets)
            }
            EngineError::TiebreakUnavailable { index } => {
                write!(f, "Set {} needs a winner and a 7-6 score before a tiebreak", index + 1)
            }
            EngineError::UnknownParticipant(_) => write!(f, "Participant does not play in this match"),
            EngineError::SameParticipantOnBothSides(_) => {
                write!(f, "Home and away must be different participants")
            }
        }
    }
}

impl std::error::Error for EngineError {}
