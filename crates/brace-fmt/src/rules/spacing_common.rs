//! Shared plumbing for the "spaceAround X" / "spaceInside X" rule family:
//! never insert whitespace where a line break already
//! sits, never produce two adjacent whitespace tokens, never touch tokens
//! inside a comment or string body.

use crate::state::FormatterState;
use crate::token::Token;

/// Ensures exactly one whitespace token sits between `left` and `right`
/// (both token indices, with `right > left`) when `want` is true, and none
/// when `want` is false — unless a line break already occupies the gap, in
/// which case the gap is left untouched entirely.
///
/// Safe to call with `right == left + 1` (no gap) or `right == left + 2`
/// (a single token, whitespace or otherwise, in the gap).
pub fn reconcile_space(state: &mut FormatterState, left: usize, right: usize, want: bool) {
    if matches!(state.token_at(left), Some(t) if t.is_linebreak()) {
        return;
    }
    if (left + 1..right).any(|k| matches!(state.token_at(k), Some(t) if t.is_linebreak())) {
        return;
    }

    let gap_has_whitespace = right > left + 1;

    if want && !gap_has_whitespace {
        state.insert_at(right, Token::Whitespace(" ".to_string()));
    } else if !want && gap_has_whitespace {
        state.remove_at(left + 1);
    }
}
