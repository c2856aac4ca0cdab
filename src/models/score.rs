//! Literal `"G-G"` score pairs used for set scores, tiebreak sub-scores and super tiebreaks.

use crate::models::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two point or game counts, stored in the order they were recorded.
///
/// Set scores and tiebreak sub-scores are recorded set-winner first ("6-4", "7-3").
/// A super tiebreak is recorded match-winner first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScorePair {
    pub first: u8,
    pub second: u8,
}

impl ScorePair {
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.second, self.first)
    }

    pub fn high(self) -> u8 {
        self.first.max(self.second)
    }

    pub fn low(self) -> u8 {
        self.first.min(self.second)
    }

    /// Higher count first, as a set score is stored once its winner is known.
    pub fn winner_first(self) -> Self {
        Self::new(self.high(), self.low())
    }
}

impl fmt::Display for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

impl FromStr for ScorePair {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s)
            .map(|(first, second)| Self::new(first, second))
            .ok_or_else(|| EngineError::MalformedScore(s.trim().to_string()))
    }
}

impl TryFrom<String> for ScorePair {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScorePair> for String {
    fn from(score: ScorePair) -> Self {
        score.to_string()
    }
}

/// Split `"a-b"` into two small integers.
pub(crate) fn parse_pair(s: &str) -> Option<(u8, u8)> {
    let (a, b) = s.trim().split_once('-')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Parse an optional score field. Empty input and the `none` sentinel both mean
/// "no score"; there is no separate "explicitly none" state.
pub fn parse_optional_score(s: &str) -> Result<Option<ScorePair>, EngineError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
