//! Bulk result import from CSV. Every row goes through the same draft events and
//! validation as a result entered by hand.

use crate::logic::draft::{apply, finalize, DraftEvent};
use crate::logic::tiebreak::{loser_points, normalize_tiebreak, TIEBREAK_SET_SCORE};
use crate::models::{
    parse_optional_score, EngineError, MatchId, MatchInfo, PersistedResult, ResultCode,
    ResultDraft, Side,
};
use serde::Deserialize;
use std::fmt;
use std::io::Read;

/// One CSV row. Score columns accept "", "none" or "G-G".
#[derive(Debug, Deserialize)]
struct ImportRow {
    match_id: MatchId,
    winner: Side,
    result_code: ResultCode,
    set1_winner: Option<Side>,
    set1_score: Option<String>,
    set1_tiebreak: Option<String>,
    set2_winner: Option<Side>,
    set2_score: Option<String>,
    set2_tiebreak: Option<String>,
    set3_winner: Option<Side>,
    set3_score: Option<String>,
    set3_tiebreak: Option<String>,
    set4_winner: Option<Side>,
    set4_score: Option<String>,
    set4_tiebreak: Option<String>,
    set5_winner: Option<Side>,
    set5_score: Option<String>,
    set5_tiebreak: Option<String>,
    super_tiebreak: Option<String>,
}

struct ImportedSet {
    winner: Option<Side>,
    score: Option<String>,
    tiebreak: Option<String>,
}

impl ImportRow {
    fn sets(self) -> ([ImportedSet; 5], Option<String>) {
        let set = |winner, score, tiebreak| ImportedSet {
            winner,
            score,
            tiebreak,
        };
        (
            [
                set(self.set1_winner, self.set1_score, self.set1_tiebreak),
                set(self.set2_winner, self.set2_score, self.set2_tiebreak),
                set(self.set3_winner, self.set3_score, self.set3_tiebreak),
                set(self.set4_winner, self.set4_score, self.set4_tiebreak),
                set(self.set5_winner, self.set5_score, self.set5_tiebreak),
            ],
            self.super_tiebreak,
        )
    }
}

/// Why a row was not imported.
#[derive(Debug)]
pub enum ImportError {
    Csv(csv::Error),
    UnknownMatch(MatchId),
    /// Match is cancelled and takes no results.
    MatchClosed(MatchId),
    /// Set columns filled beyond what the result code implies.
    UnexpectedSet { index: usize },
    Rejected(EngineError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Csv(e) => write!(f, "Unreadable row: {}", e),
            ImportError::UnknownMatch(id) => write!(f, "No match with id {}", id),
            ImportError::MatchClosed(id) => write!(f, "Match {} does not accept results", id),
            ImportError::UnexpectedSet { index } => {
                write!(f, "Set {} is not part of this result", index + 1)
            }
            ImportError::Rejected(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<EngineError> for ImportError {
    fn from(e: EngineError) -> Self {
        ImportError::Rejected(e)
    }
}

/// Outcome of an import: accepted results and rejected rows by line number.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub accepted: Vec<PersistedResult>,
    pub rejected: Vec<(u64, ImportError)>,
}

/// Read results from CSV (with header row). `lookup` plays the match catalog.
pub fn import_results<R, F>(reader: R, lookup: F) -> ImportReport
where
    R: Read,
    F: Fn(MatchId) -> Option<MatchInfo>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut report = ImportReport::default();

    for (offset, row) in csv_reader.deserialize::<ImportRow>().enumerate() {
        // header is line 1
        let line = offset as u64 + 2;
        let outcome = row
            .map_err(ImportError::Csv)
            .and_then(|row| import_row(row, &lookup));
        match outcome {
            Ok(result) => report.accepted.push(result),
            Err(e) => {
                log::warn!("Import line {} rejected: {}", line, e);
                report.rejected.push((line, e));
            }
        }
    }
    log::info!(
        "Imported {} result(s), rejected {}",
        report.accepted.len(),
        report.rejected.len()
    );
    report
}

fn import_row<F>(row: ImportRow, lookup: &F) -> Result<PersistedResult, ImportError>
where
    F: Fn(MatchId) -> Option<MatchInfo>,
{
    let info = lookup(row.match_id).ok_or(ImportError::UnknownMatch(row.match_id))?;
    if !info.status.accepts_results() {
        return Err(ImportError::MatchClosed(info.id));
    }
    let mut draft = ResultDraft::new(&info);
    draft = apply(&draft, DraftEvent::SelectWinner { side: row.winner })?;
    draft = apply(
        &draft,
        DraftEvent::SelectResultCode {
            code: row.result_code,
        },
    )?;

    let (sets, super_tiebreak) = row.sets();
    for (index, set) in sets.into_iter().enumerate() {
        let score = parse_optional_score(set.score.as_deref().unwrap_or(""))?;
        let tiebreak = parse_optional_score(set.tiebreak.as_deref().unwrap_or(""))?;
        if index >= draft.sets.len() {
            if set.winner.is_some() || score.is_some() || tiebreak.is_some() {
                return Err(ImportError::UnexpectedSet { index });
            }
            continue;
        }
        if set.winner.is_some() {
            draft = apply(&draft, DraftEvent::SetWinner { index, side: set.winner })?;
        }
        // imported scores are taken as given, never the suggested default;
        // a tiebreak on its own stands for a 7-6 set
        let score = score.or(tiebreak.map(|_| TIEBREAK_SET_SCORE));
        draft = apply(&draft, DraftEvent::EnterSetScore { index, score })?;
        if let Some(tiebreak) = tiebreak {
            let points = loser_points(normalize_tiebreak(tiebreak)?);
            draft = apply(
                &draft,
                DraftEvent::EnterTiebreak {
                    index,
                    loser_points: Some(points),
                },
            )?;
        }
    }

    let super_score = parse_optional_score(super_tiebreak.as_deref().unwrap_or(""))?;
    if super_score.is_some() {
        draft = apply(&draft, DraftEvent::EnterSuperTiebreak { score: super_score })?;
    }

    Ok(finalize(&draft)?)
}
