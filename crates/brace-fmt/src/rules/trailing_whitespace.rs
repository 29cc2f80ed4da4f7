//! `trailingWhitespace` / `linebreakAtEndOfFile`.

use crate::state::FormatterState;
use crate::token::Token;

pub fn trailing_whitespace(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_whitespace(),
        |state, i, _| {
            if matches!(state.token_at(i + 1), Some(t) if t.is_linebreak()) {
                state.remove_at(i);
            }
        },
    );

    while matches!(state.tokens().last(), Some(t) if t.is_whitespace()) {
        state.remove_last();
    }
}

pub fn linebreak_at_end_of_file(state: &mut FormatterState) {
    if state.options.fragment {
        return;
    }

    let last_significant = state.tokens().iter().rposition(|t| !t.is_error() && !t.is_whitespace());
    let already_ends_with_linebreak = match last_significant {
        Some(i) => state.token_at(i).map(|t| t.is_linebreak()).unwrap_or(false),
        None => true,
    };
    if already_ends_with_linebreak || state.is_empty() {
        return;
    }

    let linebreak = state.options.linebreak.clone();
    let len = state.len();
    state.replace_range(len..len, vec![Token::Linebreak(linebreak)]);
}
