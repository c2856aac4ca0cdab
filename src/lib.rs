//! Tennis result entry: library with the match result engine and the result store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    apply, codes_for, derive_set_winners, emit, finalize, import_results, score_line,
    score_lines, set_plan, suggest_set_scores, validate, DraftEvent, ImportError, ImportReport,
    SetPlan,
};
pub use models::{
    EngineError, Identity, IdentitySlot, MatchFormat, MatchId, MatchInfo, MatchResultRecord,
    MatchStatus, MissingField, ParticipantId, ParticipantMode, Participants, PersistedResult,
    PersistedSet, PersistedSuperTiebreak, ResultCode, ResultDraft, ScorePair, SetEntry, Side,
    SuperTiebreak, SuperTiebreakIssue,
};
pub use store::{
    InMemoryResultStore, ResultId, ResultStore, StoreError, StoredResult, SubmissionGuard,
    SubmissionTicket,
};
