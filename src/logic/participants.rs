//! Singles/doubles projection: attach identities to sides, and back.

use crate::models::{
    EngineError, Identity, IdentitySlot, MatchResultRecord, MissingField, ParticipantMode,
    Participants, PersistedResult, PersistedSet, PersistedSuperTiebreak, SetEntry, Side,
    SuperTiebreak,
};

/// Persisted form of `record` for a match played by `participants`.
///
/// Every winner field (match, sets, super tiebreak) is filled in the match's mode only;
/// the other representation is left empty.
pub fn project(record: &MatchResultRecord, participants: &Participants) -> PersistedResult {
    let slot = |side: Option<Side>| {
        side.map(|side| IdentitySlot::from(participants.identity(side)))
            .unwrap_or_default()
    };
    PersistedResult {
        match_id: record.match_id,
        format: record.format,
        participant_mode: participants.mode(),
        winner: slot(Some(record.winner)),
        result_code: record.result_code,
        sets: record
            .sets
            .iter()
            .map(|set| PersistedSet {
                winner: slot(set.winner),
                score: set.score,
                tiebreak_score: set.tiebreak,
            })
            .collect(),
        super_tiebreak: record.super_tiebreak.map(|st| PersistedSuperTiebreak {
            score: st.score,
            winner: slot(st.winner),
        }),
    }
}

/// Side named by `slot`, or `None` if the slot is empty.
///
/// A slot carrying the representation the match does not use is a
/// `WrongParticipantMode`; an identity from neither side is `UnknownParticipant`.
pub fn resolve_slot(
    participants: &Participants,
    slot: &IdentitySlot,
) -> Result<Option<Side>, EngineError> {
    let active = participants.mode();
    let identity = match active {
        ParticipantMode::Singles => {
            if slot.team.is_some() {
                return Err(EngineError::WrongParticipantMode { active });
            }
            slot.participant_id.map(Identity::Participant)
        }
        ParticipantMode::Doubles => {
            if slot.participant_id.is_some() {
                return Err(EngineError::WrongParticipantMode { active });
            }
            slot.team.clone().map(Identity::Team)
        }
    };
    identity
        .map(|identity| {
            participants
                .side_of(&identity)
                .ok_or(EngineError::UnknownParticipant(identity))
        })
        .transpose()
}

/// Side-based record from a persisted one. Set winners may still be empty.
pub fn hydrate(
    persisted: &PersistedResult,
    participants: &Participants,
) -> Result<MatchResultRecord, EngineError> {
    if persisted.participant_mode != participants.mode() {
        return Err(EngineError::WrongParticipantMode {
            active: participants.mode(),
        });
    }
    let winner = resolve_slot(participants, &persisted.winner)?
        .ok_or(EngineError::IncompleteRecord(MissingField::MatchWinner))?;
    let sets = persisted
        .sets
        .iter()
        .map(|set| {
            Ok(SetEntry {
                winner: resolve_slot(participants, &set.winner)?,
                score: set.score,
                tiebreak: set.tiebreak_score,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    let super_tiebreak = persisted
        .super_tiebreak
        .as_ref()
        .map(|st| {
            Ok::<_, EngineError>(SuperTiebreak {
                score: st.score,
                winner: resolve_slot(participants, &st.winner)?,
            })
        })
        .transpose()?;
    Ok(MatchResultRecord {
        match_id: persisted.match_id,
        format: persisted.format,
        winner,
        result_code: persisted.result_code,
        sets,
        super_tiebreak,
    })
}
