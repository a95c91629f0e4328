// Static evaluation from the pursued agent's point of view

use crate::grid::manhattan;
use crate::state::GameState;

/// Score of a state where the pursued agent stands on the escape cell
pub const SCORE_ESCAPED: i32 = 100;
/// Score of a state where the pursuer caught the pursued agent
pub const SCORE_CAPTURED: i32 = -100;

/// Scores a state; higher is better for the pursued agent
///
/// Terminal states get fixed scores (escape checked first). Anything else is
/// the distance kept from the pursuer minus the distance still to cover to
/// the escape cell.
pub fn evaluate(state: &GameState) -> i32 {
    if state.pursued == state.escape {
        return SCORE_ESCAPED;
    }
    if state.pursued == state.pursuer {
        return SCORE_CAPTURED;
    }

    let pursuer_gap = manhattan(state.pursuer, state.pursued);
    let escape_gap = manhattan(state.pursued, state.escape);
    pursuer_gap - escape_gap
}
