//! Result shapes: the editable draft, the side-based record, and the persisted layout.

use crate::models::error::{EngineError, MissingField};
use crate::models::format::{MatchFormat, ResultCode, Side};
use crate::models::matches::{MatchId, MatchInfo};
use crate::models::participants::{Identity, ParticipantId, ParticipantMode, Participants};
use crate::models::score::ScorePair;
use serde::{Deserialize, Serialize};

/// One set as it is being edited. Scores are set-winner first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub winner: Option<Side>,
    pub score: Option<ScorePair>,
    /// Tiebreak sub-score ("7-3"), only for 7-6 sets.
    pub tiebreak: Option<ScorePair>,
}

impl SetEntry {
    pub fn won_by(winner: Side, score: ScorePair) -> Self {
        Self {
            winner: Some(winner),
            score: Some(score),
            tiebreak: None,
        }
    }
}

/// The deciding super tiebreak of the amateur format. Score is match-winner first.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SuperTiebreak {
    pub score: Option<ScorePair>,
    pub winner: Option<Side>,
}

/// In-memory result while an operator fills in the form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultDraft {
    pub match_id: MatchId,
    pub format: MatchFormat,
    pub participants: Participants,
    pub winner: Option<Side>,
    pub result_code: Option<ResultCode>,
    /// One entry per set the result code implies, in play order.
    pub sets: Vec<SetEntry>,
    pub super_tiebreak: Option<SuperTiebreak>,
}

impl ResultDraft {
    /// Empty draft for a match without a result.
    pub fn new(info: &MatchInfo) -> Self {
        Self {
            match_id: info.id,
            format: info.format,
            participants: info.participants.clone(),
            winner: None,
            result_code: None,
            sets: Vec::new(),
            super_tiebreak: None,
        }
    }

    pub fn set(&self, index: usize) -> Result<&SetEntry, EngineError> {
        let sets = self.sets.len();
        self.sets
            .get(index)
            .ok_or(EngineError::SetOutOfRange { index, sets })
    }

    pub fn set_mut(&mut self, index: usize) -> Result<&mut SetEntry, EngineError> {
        let sets = self.sets.len();
        self.sets
            .get_mut(index)
            .ok_or(EngineError::SetOutOfRange { index, sets })
    }
}

/// A complete result expressed in sides, before identities are attached.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResultRecord {
    pub match_id: MatchId,
    pub format: MatchFormat,
    pub winner: Side,
    pub result_code: ResultCode,
    pub sets: Vec<SetEntry>,
    pub super_tiebreak: Option<SuperTiebreak>,
}

/// Identity columns for one winner field. Exactly one is filled on a valid record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct IdentitySlot {
    #[serde(default)]
    pub participant_id: Option<ParticipantId>,
    #[serde(default)]
    pub team: Option<String>,
}

impl IdentitySlot {
    pub fn is_empty(&self) -> bool {
        self.participant_id.is_none() && self.team.is_none()
    }
}

impl From<Identity> for IdentitySlot {
    fn from(identity: Identity) -> Self {
        match identity {
            Identity::Participant(id) => Self {
                participant_id: Some(id),
                team: None,
            },
            Identity::Team(label) => Self {
                participant_id: None,
                team: Some(label),
            },
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersistedSet {
    pub winner: IdentitySlot,
    pub score: Option<ScorePair>,
    pub tiebreak_score: Option<ScorePair>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersistedSuperTiebreak {
    pub score: Option<ScorePair>,
    pub winner: IdentitySlot,
}

/// Result as handed to the store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PersistedResult {
    pub match_id: MatchId,
    pub format: MatchFormat,
    pub participant_mode: ParticipantMode,
    pub winner: IdentitySlot,
    pub result_code: ResultCode,
    pub sets: Vec<PersistedSet>,
    pub super_tiebreak: Option<PersistedSuperTiebreak>,
}

impl PersistedResult {
    pub fn winner_id(&self) -> Result<ParticipantId, EngineError> {
        self.slot_id(&self.winner, MissingField::MatchWinner)
    }

    pub fn winner_team(&self) -> Result<&str, EngineError> {
        self.slot_team(&self.winner, MissingField::MatchWinner)
    }

    pub fn set_winner_id(&self, index: usize) -> Result<ParticipantId, EngineError> {
        self.slot_id(&self.set(index)?.winner, MissingField::SetWinner(index))
    }

    pub fn set_winner_team(&self, index: usize) -> Result<&str, EngineError> {
        self.slot_team(&self.set(index)?.winner, MissingField::SetWinner(index))
    }

    /// Match winner in whichever representation the record's mode uses.
    pub fn winner_identity(&self) -> Result<Identity, EngineError> {
        self.slot_identity(&self.winner, MissingField::MatchWinner)
    }

    pub fn set_winner_identity(&self, index: usize) -> Result<Identity, EngineError> {
        self.slot_identity(&self.set(index)?.winner, MissingField::SetWinner(index))
    }

    pub fn set(&self, index: usize) -> Result<&PersistedSet, EngineError> {
        let sets = self.sets.len();
        self.sets
            .get(index)
            .ok_or(EngineError::SetOutOfRange { index, sets })
    }

    fn expect_mode(&self, mode: ParticipantMode) -> Result<(), EngineError> {
        if self.participant_mode != mode {
            return Err(EngineError::WrongParticipantMode {
                active: self.participant_mode,
            });
        }
        Ok(())
    }

    fn slot_id(&self, slot: &IdentitySlot, missing: MissingField) -> Result<ParticipantId, EngineError> {
        self.expect_mode(ParticipantMode::Singles)?;
        slot.participant_id
            .ok_or(EngineError::IncompleteRecord(missing))
    }

    fn slot_team<'a>(
        &self,
        slot: &'a IdentitySlot,
        missing: MissingField,
    ) -> Result<&'a str, EngineError> {
        self.expect_mode(ParticipantMode::Doubles)?;
        slot.team
            .as_deref()
            .ok_or(EngineError::IncompleteRecord(missing))
    }

    pub(crate) fn slot_identity(
        &self,
        slot: &IdentitySlot,
        missing: MissingField,
    ) -> Result<Identity, EngineError> {
        match self.participant_mode {
            ParticipantMode::Singles => self.slot_id(slot, missing).map(Identity::Participant),
            ParticipantMode::Doubles => self
                .slot_team(slot, missing)
                .map(|label| Identity::Team(label.to_string())),
        }
    }
}
