//! `ranges`: around `...`/`..<`, strip adjacent whitespace
//! when the option is off; insert one space on each side when on, unless
//! the next non-whitespace token is `)` or `,` (argument-default forms).

use crate::state::FormatterState;
use crate::token::Token;

pub fn ranges(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_symbol_str("...") || t.is_symbol_str("..<"),
        |state, i, _| format_range_operator(state, i),
    );
}

fn format_range_operator(state: &mut FormatterState, mut i: usize) {
    if matches!(state.token_at(i + 1), Some(t) if t.is_whitespace()) {
        state.remove_at(i + 1);
    }
    if i > 0 && matches!(state.token_at(i - 1), Some(t) if t.is_whitespace()) {
        state.remove_at(i - 1);
        i -= 1;
    }

    if !state.options.space_around_range_operators {
        return;
    }

    let next_is_closer_or_comma = matches!(
        state.next_non_whitespace(i + 1).and_then(|j| state.token_at(j)),
        Some(t) if t.is_end_of_scope_str(")") || t.is_symbol_str(",")
    );

    if !matches!(state.token_at(i + 1), Some(t) if t.is_linebreak()) && !next_is_closer_or_comma {
        state.insert_at(i + 1, Token::Whitespace(" ".to_string()));
    }
    if i > 0 && !matches!(state.token_at(i - 1), Some(t) if t.is_linebreak()) {
        state.insert_at(i, Token::Whitespace(" ".to_string()));
    }
}
