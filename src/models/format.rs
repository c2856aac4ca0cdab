//! Match formats, sides and match result codes.

use crate::models::error::EngineError;
use crate::models::score::parse_pair;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported match formats.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchFormat {
    /// Best of three regular sets.
    #[serde(rename = "standard-bo3")]
    StandardBestOfThree,
    /// Best of three where a deciding third set is played as a super tiebreak.
    #[serde(rename = "amateur-bo3-super-tiebreak")]
    AmateurSuperTiebreak,
    /// Best of five regular sets.
    #[serde(rename = "bo5")]
    BestOfFive,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [
        MatchFormat::StandardBestOfThree,
        MatchFormat::AmateurSuperTiebreak,
        MatchFormat::BestOfFive,
    ];

    /// Sets a side needs to win the match.
    pub fn sets_to_win(self) -> u8 {
        match self {
            MatchFormat::StandardBestOfThree | MatchFormat::AmateurSuperTiebreak => 2,
            MatchFormat::BestOfFive => 3,
        }
    }

    /// Most sets a match in this format can go to.
    pub fn max_sets(self) -> usize {
        usize::from(self.sets_to_win()) * 2 - 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchFormat::StandardBestOfThree => "standard-bo3",
            MatchFormat::AmateurSuperTiebreak => "amateur-bo3-super-tiebreak",
            MatchFormat::BestOfFive => "bo5",
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Home or away: player A/B in singles, team A/B in doubles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Sets won by each side, rendered `"home-away"`.
///
/// `2-1` is a home win, `1-2` the mirrored away win.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResultCode {
    pub home: u8,
    pub away: u8,
}

impl ResultCode {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    /// Build the code for `winner` winning `winner_sets` to `loser_sets`.
    pub fn for_side(winner: Side, winner_sets: u8, loser_sets: u8) -> Self {
        match winner {
            Side::Home => Self::new(winner_sets, loser_sets),
            Side::Away => Self::new(loser_sets, winner_sets),
        }
    }

    /// The side that won more sets; `None` for a level code.
    pub fn winner(self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn winner_sets(self) -> u8 {
        self.home.max(self.away)
    }

    pub fn loser_sets(self) -> u8 {
        self.home.min(self.away)
    }

    pub fn sets_for(self, side: Side) -> u8 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn total_sets(self) -> usize {
        usize::from(self.home) + usize::from(self.away)
    }

    /// Straight sets: the loser took no set.
    pub fn is_straight_sets(self) -> bool {
        self.loser_sets() == 0
    }

    pub fn mirrored(self) -> Self {
        Self::new(self.away, self.home)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

impl FromStr for ResultCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s)
            .map(|(home, away)| Self::new(home, away))
            .ok_or_else(|| EngineError::InvalidResultCode(s.trim().to_string()))
    }
}

impl TryFrom<String> for ResultCode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultCode> for String {
    fn from(code: ResultCode) -> Self {
        code.to_string()
    }
}
