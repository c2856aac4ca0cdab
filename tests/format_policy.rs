//! Integration tests for the result code catalog and per-format set rules.

mod common;

use common::{code, draft_for_code, singles_match};
use tennis_results_web::logic::super_tiebreak_applicable;
use tennis_results_web::{codes_for, set_plan, EngineError, MatchFormat, ResultCode, Side};

#[test]
fn best_of_three_codes() {
    for format in [MatchFormat::StandardBestOfThree, MatchFormat::AmateurSuperTiebreak] {
        assert_eq!(codes_for(format, Side::Home), vec![code("2-0"), code("2-1")]);
        assert_eq!(codes_for(format, Side::Away), vec![code("0-2"), code("1-2")]);
    }
}

#[test]
fn best_of_five_codes() {
    assert_eq!(
        codes_for(MatchFormat::BestOfFive, Side::Home),
        vec![code("3-0"), code("3-1"), code("3-2")]
    );
    assert_eq!(
        codes_for(MatchFormat::BestOfFive, Side::Away),
        vec![code("0-3"), code("1-3"), code("2-3")]
    );
}

#[test]
fn plan_flags_straight_sets_and_super_tiebreak() {
    let straight = set_plan(MatchFormat::StandardBestOfThree, code("2-0")).unwrap();
    assert_eq!(straight.set_count, 2);
    assert!(straight.is_straight_sets);
    assert!(!straight.third_set_is_super_tiebreak);

    let standard_split = set_plan(MatchFormat::StandardBestOfThree, code("1-2")).unwrap();
    assert_eq!(standard_split.set_record_count(), 3);
    assert!(!standard_split.third_set_is_super_tiebreak);

    let amateur_split = set_plan(MatchFormat::AmateurSuperTiebreak, code("2-1")).unwrap();
    assert_eq!(amateur_split.set_count, 3);
    assert_eq!(amateur_split.set_record_count(), 2);
    assert!(amateur_split.third_set_is_super_tiebreak);
    assert!(amateur_split.is_suppressed(2));
}

#[test]
fn codes_outside_the_format_are_rejected() {
    for bad in ["3-0", "2-2", "0-0", "3-2"] {
        assert!(matches!(
            set_plan(MatchFormat::StandardBestOfThree, code(bad)),
            Err(EngineError::InvalidResultCode(_))
        ));
    }
    assert!(matches!(
        set_plan(MatchFormat::BestOfFive, code("2-1")),
        Err(EngineError::InvalidResultCode(_))
    ));
    assert!(matches!(
        "two-one".parse::<ResultCode>(),
        Err(EngineError::InvalidResultCode(_))
    ));
}

#[test]
fn super_tiebreak_only_for_amateur_split_sets() {
    assert!(super_tiebreak_applicable(MatchFormat::AmateurSuperTiebreak, code("2-1")));
    assert!(super_tiebreak_applicable(MatchFormat::AmateurSuperTiebreak, code("1-2")));
    assert!(!super_tiebreak_applicable(MatchFormat::AmateurSuperTiebreak, code("2-0")));
    assert!(!super_tiebreak_applicable(MatchFormat::StandardBestOfThree, code("2-1")));
    assert!(!super_tiebreak_applicable(MatchFormat::BestOfFive, code("3-1")));
}

#[test]
fn set_records_match_the_plan_for_every_catalog_code() {
    for format in MatchFormat::ALL {
        for side in [Side::Home, Side::Away] {
            for result in codes_for(format, side) {
                let info = singles_match(format);
                let draft = draft_for_code(&info, side, &result.to_string());
                let plan = set_plan(format, result).unwrap();
                if plan.third_set_is_super_tiebreak {
                    assert_eq!(draft.sets.len(), 2, "{} {}", format, result);
                    assert!(draft.super_tiebreak.is_some());
                } else {
                    assert_eq!(draft.sets.len(), plan.set_count, "{} {}", format, result);
                    assert!(draft.super_tiebreak.is_none());
                }
                assert!(draft.sets.len() <= format.max_sets());
            }
        }
    }
}
