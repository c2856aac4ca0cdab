//! Legal result codes per format and winning side.

use crate::models::{MatchFormat, ResultCode, Side};

/// Result codes `winner` can win by in `format`, straight sets first.
///
/// Best of three (either variant): 2-0, 2-1. Best of five: 3-0, 3-1, 3-2.
/// Away codes are the mirror images (0-2, 1-2, ...).
pub fn codes_for(format: MatchFormat, winner: Side) -> Vec<ResultCode> {
    let needed = format.sets_to_win();
    (0..needed)
        .map(|lost| ResultCode::for_side(winner, needed, lost))
        .collect()
}

/// Whether `code` appears in the catalog for `format` (for either side).
pub fn is_legal(format: MatchFormat, code: ResultCode) -> bool {
    code.winner()
        .map(|winner| codes_for(format, winner).contains(&code))
        .unwrap_or(false)
}
