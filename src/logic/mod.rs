//! Result engine: format rules, set derivation, tiebreaks, validation and display.

mod catalog;
mod display;
mod draft;
mod format_policy;
mod import;
mod participants;
mod set_scores;
mod set_winners;
mod super_tiebreak;
mod tiebreak;
mod validator;

pub use catalog::{codes_for, is_legal};
pub use display::{score_line, score_lines};
pub use draft::{apply, emit, finalize, DraftEvent};
pub use format_policy::{set_plan, SetPlan};
pub use import::{import_results, ImportError, ImportReport};
pub use participants::{hydrate, project, resolve_slot};
pub use set_scores::{suggest_set_scores, DEFAULT_SET_SCORE};
pub use set_winners::derive_set_winners;
pub use super_tiebreak::{
    is_applicable as super_tiebreak_applicable, synchronize as synchronize_super_tiebreak,
};
pub use tiebreak::{
    is_tiebreak_set, loser_points, normalize_tiebreak, resolve_for_persistence,
    tiebreak_from_loser_points, tiebreak_set_indices, TIEBREAK_SET_SCORE,
};
pub use validator::validate;
