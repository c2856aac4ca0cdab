//! Integration tests for CSV bulk import.

mod common;

use common::{doubles_match, singles_match};
use std::collections::HashMap;
use tennis_results_web::{
    import_results, score_lines, EngineError, ImportError, MatchFormat, MatchId, MatchInfo,
    MatchStatus, MissingField,
};
use uuid::Uuid;

const HEADER: &str = "match_id,winner,result_code,\
set1_winner,set1_score,set1_tiebreak,\
set2_winner,set2_score,set2_tiebreak,\
set3_winner,set3_score,set3_tiebreak,\
set4_winner,set4_score,set4_tiebreak,\
set5_winner,set5_score,set5_tiebreak,\
super_tiebreak";

/// CSV line from the match id, winner, code, then up to fifteen set cells and the super tiebreak.
fn row(match_id: MatchId, winner: &str, result: &str, sets: &[&str], super_tiebreak: &str) -> String {
    let mut fields = vec![match_id.to_string(), winner.to_string(), result.to_string()];
    fields.extend(sets.iter().map(|s| s.to_string()));
    fields.resize(18, String::new());
    fields.push(super_tiebreak.to_string());
    fields.join(",")
}

fn catalog(matches: &[&MatchInfo]) -> HashMap<MatchId, MatchInfo> {
    matches.iter().map(|m| (m.id, (*m).clone())).collect()
}

#[test]
fn valid_rows_are_accepted_and_bad_rows_reported() {
    let standard = singles_match(MatchFormat::StandardBestOfThree);
    let straight = singles_match(MatchFormat::BestOfFive);
    let amateur = doubles_match(MatchFormat::AmateurSuperTiebreak);
    let matches = catalog(&[&standard, &straight, &amateur]);

    let csv = [
        HEADER.to_string(),
        row(
            standard.id,
            "home",
            "2-1",
            &["home", "6-3", "", "away", "7-6", "7-4", "home", "6-2", "none"],
            "",
        ),
        row(Uuid::new_v4(), "home", "2-0", &[], ""),
        row(straight.id, "away", "0-3", &[], ""),
        row(amateur.id, "away", "1-2", &["away", "6-4", "", "home", "6-4", ""], "10-7"),
    ]
    .join("\n");

    let report = import_results(csv.as_bytes(), |id| matches.get(&id).cloned());

    assert_eq!(report.accepted.len(), 3);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].0, 3);
    assert!(matches!(report.rejected[0].1, ImportError::UnknownMatch(_)));

    let lines: Vec<Vec<String>> = report
        .accepted
        .iter()
        .map(|result| score_lines(result).unwrap())
        .collect();
    assert_eq!(lines[0], vec!["6-3", "6-7(4)", "6-2"]);
    assert!(lines[1].is_empty());
    assert_eq!(lines[2], vec!["6-4", "4-6", "10-7"]);
}

#[test]
fn tiebreak_column_alone_stands_for_seven_six() {
    let info = singles_match(MatchFormat::StandardBestOfThree);
    let matches = catalog(&[&info]);
    let csv = [
        HEADER.to_string(),
        row(info.id, "home", "2-0", &["home", "", "3-7", "home", "6-1", ""], ""),
    ]
    .join("\n");

    let report = import_results(csv.as_bytes(), |id| matches.get(&id).cloned());
    assert!(report.rejected.is_empty());
    assert_eq!(score_lines(&report.accepted[0]).unwrap(), vec!["7-6(3)", "6-1"]);
}

#[test]
fn rows_are_validated_like_manual_entry() {
    let amateur = singles_match(MatchFormat::AmateurSuperTiebreak);
    let standard = singles_match(MatchFormat::StandardBestOfThree);
    let matches = catalog(&[&amateur, &standard]);
    let csv = [
        HEADER.to_string(),
        // third set where the super tiebreak is played
        row(
            amateur.id,
            "home",
            "2-1",
            &["home", "6-4", "", "away", "6-4", "", "home", "6-4", ""],
            "10-5",
        ),
        // split sets without a score for set 2
        row(standard.id, "home", "2-1", &["home", "6-4", "", "away", "", "", "home", "6-4", ""], ""),
        // code the format does not have
        row(standard.id, "home", "3-0", &[], ""),
        row(standard.id, "home", "2-1", &["home", "6-4", "", "away", "six-four", ""], ""),
    ]
    .join("\n");

    let report = import_results(csv.as_bytes(), |id| matches.get(&id).cloned());
    assert!(report.accepted.is_empty());
    let errors: Vec<&ImportError> = report.rejected.iter().map(|(_, e)| e).collect();
    assert!(matches!(errors[0], ImportError::UnexpectedSet { index: 2 }));
    assert!(matches!(
        errors[1],
        ImportError::Rejected(EngineError::IncompleteRecord(MissingField::SetScore(1)))
    ));
    assert!(matches!(
        errors[2],
        ImportError::Rejected(EngineError::InvalidResultCode(_))
    ));
    assert!(matches!(
        errors[3],
        ImportError::Rejected(EngineError::MalformedScore(_))
    ));
}

#[test]
fn unreadable_rows_are_reported() {
    let csv = format!("{}\nnot-a-uuid,home,2-0", HEADER);
    let report = import_results(csv.as_bytes(), |_| None);
    assert!(report.accepted.is_empty());
    assert!(matches!(report.rejected[0], (2, ImportError::Csv(_))));
}

#[test]
fn cancelled_matches_take_no_results() {
    let mut cancelled = singles_match(MatchFormat::StandardBestOfThree);
    cancelled.status = MatchStatus::Cancelled;
    let mut completed = singles_match(MatchFormat::StandardBestOfThree);
    completed.status = MatchStatus::Completed;
    let matches = catalog(&[&cancelled, &completed]);
    let csv = [
        HEADER.to_string(),
        row(cancelled.id, "home", "2-0", &[], ""),
        row(completed.id, "home", "2-0", &[], ""),
    ]
    .join("\n");

    let report = import_results(csv.as_bytes(), |id| matches.get(&id).cloned());
    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.accepted[0].match_id, completed.id);
    assert!(matches!(
        report.rejected[..],
        [(2, ImportError::MatchClosed(id))] if id == cancelled.id
    ));
}
