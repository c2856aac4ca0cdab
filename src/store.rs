//! Result persistence: the store the engine hands validated results to, plus the
//! in-flight guard callers hold while a submission is running.

use crate::models::{MatchId, PersistedResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Unique identifier for a stored result.
pub type ResultId = Uuid;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredResult {
    pub id: ResultId,
    pub record: PersistedResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// Match already has a result; update it instead.
    AlreadyExists(MatchId),
    /// No result for this match to update.
    NoResultForMatch(MatchId),
    NotFound(ResultId),
    /// Another submission for the match has not finished yet.
    SubmissionInFlight(MatchId),
    /// Record was built for a different match than the one addressed.
    MatchMismatch { expected: MatchId, found: MatchId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::AlreadyExists(_) => write!(f, "This match already has a result"),
            StoreError::NoResultForMatch(_) => write!(f, "This match has no result yet"),
            StoreError::NotFound(_) => write!(f, "Result not found"),
            StoreError::SubmissionInFlight(_) => {
                write!(f, "A result for this match is already being submitted")
            }
            StoreError::MatchMismatch { .. } => write!(f, "Result belongs to a different match"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Where validated results live. One attempt per call; callers retry if they want to.
pub trait ResultStore {
    fn create(&mut self, match_id: MatchId, record: PersistedResult) -> Result<ResultId, StoreError>;
    fn update(&mut self, match_id: MatchId, record: PersistedResult) -> Result<ResultId, StoreError>;
    fn delete(&mut self, result_id: ResultId) -> Result<(), StoreError>;
    fn find_by_match(&self, match_id: MatchId) -> Option<&StoredResult>;
}

/// Results kept in memory, at most one per match.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    results: HashMap<ResultId, StoredResult>,
    by_match: HashMap<MatchId, ResultId>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, result_id: ResultId) -> Option<&StoredResult> {
        self.results.get(&result_id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn check_match(match_id: MatchId, record: &PersistedResult) -> Result<(), StoreError> {
    if record.match_id != match_id {
        return Err(StoreError::MatchMismatch {
            expected: match_id,
            found: record.match_id,
        });
    }
    Ok(())
}

impl ResultStore for InMemoryResultStore {
    fn create(&mut self, match_id: MatchId, record: PersistedResult) -> Result<ResultId, StoreError> {
        check_match(match_id, &record)?;
        if self.by_match.contains_key(&match_id) {
            return Err(StoreError::AlreadyExists(match_id));
        }
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.results.insert(
            id,
            StoredResult {
                id,
                record,
                created_at: now,
                updated_at: now,
            },
        );
        self.by_match.insert(match_id, id);
        log::info!("Stored result {} for match {}", id, match_id);
        Ok(id)
    }

    fn update(&mut self, match_id: MatchId, record: PersistedResult) -> Result<ResultId, StoreError> {
        check_match(match_id, &record)?;
        let id = *self
            .by_match
            .get(&match_id)
            .ok_or(StoreError::NoResultForMatch(match_id))?;
        let stored = self.results.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.record = record;
        stored.updated_at = Utc::now();
        log::info!("Updated result {} for match {}", id, match_id);
        Ok(id)
    }

    fn delete(&mut self, result_id: ResultId) -> Result<(), StoreError> {
        let removed = self
            .results
            .remove(&result_id)
            .ok_or(StoreError::NotFound(result_id))?;
        self.by_match.remove(&removed.record.match_id);
        log::info!("Deleted result {}", result_id);
        Ok(())
    }

    fn find_by_match(&self, match_id: MatchId) -> Option<&StoredResult> {
        self.by_match
            .get(&match_id)
            .and_then(|id| self.results.get(id))
    }
}

/// Matches with a submission in progress. Cloning shares the same set.
#[derive(Clone, Debug, Default)]
pub struct SubmissionGuard {
    in_flight: Arc<Mutex<HashSet<MatchId>>>,
}

/// Held while a submission runs; releases the match when dropped.
#[derive(Debug)]
pub struct SubmissionTicket {
    match_id: MatchId,
    in_flight: Arc<Mutex<HashSet<MatchId>>>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `match_id` in flight, or refuse if it already is.
    pub fn begin(&self, match_id: MatchId) -> Result<SubmissionTicket, StoreError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !in_flight.insert(match_id) {
            log::warn!("Duplicate submission for match {} refused", match_id);
            return Err(StoreError::SubmissionInFlight(match_id));
        }
        Ok(SubmissionTicket {
            match_id,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self, match_id: MatchId) -> bool {
        self.in_flight
            .lock()
            .map(|in_flight| in_flight.contains(&match_id))
            .unwrap_or(false)
    }
}

impl SubmissionTicket {
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.remove(&self.match_id);
        }
    }
}
