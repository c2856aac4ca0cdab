//! Data structures for match results: formats, scores, participants, drafts and persisted records.

mod error;
mod format;
mod matches;
mod participants;
mod result;
mod score;

pub use error::{EngineError, MissingField, SuperTiebreakIssue};
pub use format::{MatchFormat, ResultCode, Side};
pub use matches::{MatchId, MatchInfo, MatchStatus};
pub use participants::{Identity, ParticipantId, ParticipantMode, Participants};
pub use result::{
    IdentitySlot, MatchResultRecord, PersistedResult, PersistedSet, PersistedSuperTiebreak,
    ResultDraft, SetEntry, SuperTiebreak,
};
pub use score::{parse_optional_score, ScorePair};
