//! Integration tests for set winner derivation, score suggestions and the draft reducer.

mod common;

use common::{code, draft_for_code, draft_with, score, singles_match};
use tennis_results_web::logic::super_tiebreak_applicable;
use tennis_results_web::{
    apply, derive_set_winners, suggest_set_scores, DraftEvent, EngineError, MatchFormat,
    ResultDraft, ScorePair, SetEntry, Side,
};

#[test]
fn straight_sets_are_filled_in() {
    let winners =
        derive_set_winners(MatchFormat::StandardBestOfThree, Side::Home, code("2-0")).unwrap();
    assert_eq!(winners, vec![Some(Side::Home), Some(Side::Home)]);

    let scores =
        suggest_set_scores(&winners, MatchFormat::StandardBestOfThree, code("2-0")).unwrap();
    assert_eq!(scores, vec![Some(score("6-4")), Some(score("6-4"))]);
}

#[test]
fn split_sets_are_left_to_the_operator() {
    let winners = derive_set_winners(MatchFormat::BestOfFive, Side::Home, code("3-2")).unwrap();
    assert_eq!(winners, vec![None::<Side>; 5]);

    let scores = suggest_set_scores(&winners, MatchFormat::BestOfFive, code("3-2")).unwrap();
    assert_eq!(scores, vec![None::<ScorePair>; 5]);
}

#[test]
fn derive_rejects_code_for_the_other_side() {
    assert!(matches!(
        derive_set_winners(MatchFormat::StandardBestOfThree, Side::Home, code("1-2")),
        Err(EngineError::InvalidResultCode(_))
    ));
}

#[test]
fn amateur_split_drops_the_third_set() {
    let winners =
        derive_set_winners(MatchFormat::AmateurSuperTiebreak, Side::Away, code("1-2")).unwrap();
    assert_eq!(winners.len(), 2);

    // a third entry passed in anyway gets no suggestion at all
    let scores = suggest_set_scores(
        &[Some(Side::Away), Some(Side::Home), Some(Side::Away)],
        MatchFormat::AmateurSuperTiebreak,
        code("1-2"),
    )
    .unwrap();
    assert_eq!(scores, vec![Some(score("6-4")), Some(score("6-4"))]);

    let info = singles_match(MatchFormat::AmateurSuperTiebreak);
    let draft = draft_for_code(&info, Side::Away, "1-2");
    assert_eq!(draft.sets.len(), 2);
    assert!(super_tiebreak_applicable(info.format, code("1-2")));
    assert_eq!(draft.super_tiebreak.and_then(|st| st.winner), Some(Side::Away));
}

#[test]
fn changing_the_code_resets_set_edits() {
    let info = singles_match(MatchFormat::BestOfFive);
    let draft = draft_with(
        &info,
        &[
            DraftEvent::SelectWinner { side: Side::Home },
            DraftEvent::SelectResultCode { code: code("3-2") },
            DraftEvent::SetWinner { index: 0, side: Some(Side::Away) },
            DraftEvent::EnterSetScore { index: 0, score: Some(score("7-5")) },
        ],
    );
    assert_eq!(draft.sets[0].winner, Some(Side::Away));

    let draft = apply(&draft, DraftEvent::SelectResultCode { code: code("3-1") }).unwrap();
    assert_eq!(draft.sets.len(), 4);
    assert!(draft.sets.iter().all(|set| set.winner.is_none() && set.score.is_none()));
}

#[test]
fn code_for_the_wrong_side_leaves_the_draft_alone() {
    let info = singles_match(MatchFormat::StandardBestOfThree);
    let draft = draft_for_code(&info, Side::Home, "2-0");
    let err = apply(&draft, DraftEvent::SelectResultCode { code: code("0-2") }).unwrap_err();
    assert_eq!(err, EngineError::InvalidResultCode("0-2".to_string()));
    assert_eq!(draft.result_code, Some(code("2-0")));
}

#[test]
fn code_alone_picks_the_winner() {
    let info = singles_match(MatchFormat::StandardBestOfThree);
    let draft = apply(
        &ResultDraft::new(&info),
        DraftEvent::SelectResultCode { code: code("0-2") },
    )
    .unwrap();
    assert_eq!(draft.winner, Some(Side::Away));
    assert_eq!(draft.sets.len(), 2);
}

#[test]
fn switching_the_winner_mirrors_the_code() {
    let info = singles_match(MatchFormat::AmateurSuperTiebreak);
    let draft = draft_with(
        &info,
        &[
            DraftEvent::SelectWinner { side: Side::Home },
            DraftEvent::SelectResultCode { code: code("2-1") },
            DraftEvent::EnterSuperTiebreak { score: Some(score("10-8")) },
            DraftEvent::SelectWinner { side: Side::Away },
        ],
    );
    assert_eq!(draft.result_code, Some(code("1-2")));
    assert_eq!(draft.sets, vec![SetEntry::default(); 2]);
    let super_tiebreak = draft.super_tiebreak.unwrap();
    assert_eq!(super_tiebreak.winner, Some(Side::Away));
    assert_eq!(super_tiebreak.score, Some(score("10-8")));
}

#[test]
fn assigning_a_set_winner_suggests_a_score() {
    let info = singles_match(MatchFormat::StandardBestOfThree);
    let draft = draft_with(
        &info,
        &[
            DraftEvent::SelectWinner { side: Side::Home },
            DraftEvent::SelectResultCode { code: code("2-1") },
            DraftEvent::SetWinner { index: 1, side: Some(Side::Away) },
        ],
    );
    assert_eq!(draft.sets[1].score, Some(score("6-4")));
    assert_eq!(draft.sets[0].score, None);

    let cleared = apply(&draft, DraftEvent::SetWinner { index: 1, side: None }).unwrap();
    assert_eq!(cleared.sets[1].score, None);

    assert_eq!(
        apply(&draft, DraftEvent::SetWinner { index: 3, side: Some(Side::Home) }),
        Err(EngineError::SetOutOfRange { index: 3, sets: 3 })
    );
}

#[test]
fn super_tiebreak_refused_where_not_played() {
    let info = singles_match(MatchFormat::StandardBestOfThree);
    let draft = draft_for_code(&info, Side::Home, "2-1");
    assert!(matches!(
        apply(&draft, DraftEvent::EnterSuperTiebreak { score: Some(score("10-6")) }),
        Err(EngineError::SuperTiebreakMismatch(_))
    ));
}
