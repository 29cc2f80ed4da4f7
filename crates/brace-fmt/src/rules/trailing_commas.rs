//! `trailingCommas`: in a multi-line `[...]` literal, insert
//! or strip the trailing comma before the closing `]` according to the
//! option.

use crate::state::FormatterState;
use crate::token::Token;

pub fn trailing_commas(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_end_of_scope_str("]"),
        |state, i, _| format_trailing_comma(state, i),
    );
}

fn format_trailing_comma(state: &mut FormatterState, close: usize) {
    let Some(prev) = state.previous_non_whitespace_or_comment(close) else {
        return;
    };
    let is_multiline = (prev + 1..close).any(|i| matches!(state.token_at(i), Some(t) if t.is_linebreak()));
    if !is_multiline {
        return;
    }

    let prev_tok = state.token_at(prev).cloned();

    if state.options.trailing_commas {
        let skip = matches!(
            &prev_tok,
            Some(t) if t.is_symbol_str(",") || t.is_symbol_str(":") || t.is_start_of_scope_str("[")
        );
        if !skip {
            state.insert_at(prev + 1, Token::Symbol(",".to_string()));
        }
    } else if matches!(&prev_tok, Some(t) if t.is_symbol_str(",")) {
        state.remove_at(prev);
    }
}
