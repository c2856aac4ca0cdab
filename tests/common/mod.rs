//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use tennis_results_web::{
    apply, DraftEvent, MatchFormat, MatchInfo, Participants, ResultCode, ResultDraft, ScorePair,
    Side,
};
use uuid::Uuid;

pub fn singles_match(format: MatchFormat) -> MatchInfo {
    MatchInfo::new(
        format,
        Participants::Singles {
            home: Uuid::new_v4(),
            away: Uuid::new_v4(),
        },
    )
    .unwrap()
}

pub fn doubles_match(format: MatchFormat) -> MatchInfo {
    MatchInfo::new(
        format,
        Participants::Doubles {
            home: "Team A".to_string(),
            away: "Team B".to_string(),
        },
    )
    .unwrap()
}

pub fn score(s: &str) -> ScorePair {
    s.parse().unwrap()
}

pub fn code(s: &str) -> ResultCode {
    s.parse().unwrap()
}

/// Fresh draft for `info` with `events` applied in order.
pub fn draft_with(info: &MatchInfo, events: &[DraftEvent]) -> ResultDraft {
    events
        .iter()
        .fold(ResultDraft::new(info), |draft, event| apply(&draft, *event).unwrap())
}

/// Winner and result code picked, nothing else.
pub fn draft_for_code(info: &MatchInfo, winner: Side, result: &str) -> ResultDraft {
    draft_with(
        info,
        &[
            DraftEvent::SelectWinner { side: winner },
            DraftEvent::SelectResultCode { code: code(result) },
        ],
    )
}

/// Home wins 2-1; away takes the second set.
pub fn home_two_one(info: &MatchInfo) -> ResultDraft {
    let draft = draft_for_code(info, Side::Home, "2-1");
    [
        DraftEvent::SetWinner { index: 0, side: Some(Side::Home) },
        DraftEvent::SetWinner { index: 1, side: Some(Side::Away) },
        DraftEvent::SetWinner { index: 2, side: Some(Side::Home) },
    ]
    .into_iter()
    .fold(draft, |draft, event| apply(&draft, event).unwrap())
}
