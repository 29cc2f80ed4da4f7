//! `consecutiveSpaces`: collapse any whitespace token of
//! width ≥ 2 down to a single space, except inside a `/*` or `//` comment
//! body where original spacing is part of the content.

use crate::state::FormatterState;
use crate::token::Token;

pub fn consecutive_spaces(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::Whitespace(s) if s.chars().count() > 1),
        |state, i, _| {
            if in_comment_scope(state, i) {
                return;
            }
            state.replace_at(i, Token::Whitespace(" ".to_string()));
        },
    );
}

fn in_comment_scope(state: &FormatterState, i: usize) -> bool {
    matches!(
        state.scope_at(i).and_then(|s| state.token_at(s)),
        Some(t) if t.is_start_of_scope_str("/*") || t.is_start_of_scope_str("//")
    )
}
