//! Match catalog entries: what the engine is told about a match before results are entered.

use crate::models::error::EngineError;
use crate::models::format::MatchFormat;
use crate::models::participants::{ParticipantMode, Participants};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Scheduled or being played; no result yet.
    #[default]
    Pending,
    /// Finished; a result may be entered or corrected.
    Completed,
    Cancelled,
}

impl MatchStatus {
    /// Whether an operator may open the result entry flow.
    pub fn accepts_results(self) -> bool {
        !matches!(self, MatchStatus::Cancelled)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub id: MatchId,
    pub format: MatchFormat,
    pub participants: Participants,
    #[serde(default)]
    pub status: MatchStatus,
}

impl MatchInfo {
    /// New pending match. Refused if both sides are the same participant.
    pub fn new(format: MatchFormat, participants: Participants) -> Result<Self, EngineError> {
        participants.check_distinct()?;
        Ok(Self {
            id: Uuid::new_v4(),
            format,
            participants,
            status: MatchStatus::Pending,
        })
    }

    pub fn mode(&self) -> ParticipantMode {
        self.participants.mode()
    }
}
