//! Who plays a match: two individual players (singles) or two team labels (doubles).

use crate::models::error::EngineError;
use crate::models::format::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a player.
pub type ParticipantId = Uuid;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantMode {
    Singles,
    Doubles,
}

impl fmt::Display for ParticipantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantMode::Singles => f.write_str("singles"),
            ParticipantMode::Doubles => f.write_str("doubles"),
        }
    }
}

/// The two sides of a match. Only one representation exists per match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Participants {
    Singles {
        home: ParticipantId,
        away: ParticipantId,
    },
    Doubles {
        home: String,
        away: String,
    },
}

impl Participants {
    pub fn mode(&self) -> ParticipantMode {
        match self {
            Participants::Singles { .. } => ParticipantMode::Singles,
            Participants::Doubles { .. } => ParticipantMode::Doubles,
        }
    }

    /// Identity standing behind `side`.
    pub fn identity(&self, side: Side) -> Identity {
        match (self, side) {
            (Participants::Singles { home, .. }, Side::Home) => Identity::Participant(*home),
            (Participants::Singles { away, .. }, Side::Away) => Identity::Participant(*away),
            (Participants::Doubles { home, .. }, Side::Home) => Identity::Team(home.clone()),
            (Participants::Doubles { away, .. }, Side::Away) => Identity::Team(away.clone()),
        }
    }

    /// Home and away must be told apart, or every identity resolves to home.
    pub fn check_distinct(&self) -> Result<(), EngineError> {
        let home = self.identity(Side::Home);
        if home == self.identity(Side::Away) {
            return Err(EngineError::SameParticipantOnBothSides(home));
        }
        Ok(())
    }

    /// Which side `identity` plays on, if any.
    pub fn side_of(&self, identity: &Identity) -> Option<Side> {
        [Side::Home, Side::Away]
            .into_iter()
            .find(|&side| &self.identity(side) == identity)
    }
}

/// A resolved side: a player id in singles, a team label in doubles.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Participant(ParticipantId),
    Team(String),
}

impl Identity {
    pub fn mode(&self) -> ParticipantMode {
        match self {
            Identity::Participant(_) => ParticipantMode::Singles,
            Identity::Team(_) => ParticipantMode::Doubles,
        }
    }
}
