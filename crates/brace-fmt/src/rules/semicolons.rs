//! `semicolons`.
//!
//! For each `;`: delete it if it sits at start of file, end of file, end of
//! scope (`}`), or end of line. Otherwise, if inline semicolons are
//! disallowed, replace it with a line break reproducing the current line's
//! indent. Never touch a `;` that follows `return` or that lives inside a
//! `(` scope (classic C-style `for (;;)` legacy).

use crate::state::FormatterState;
use crate::token::Token;

pub fn semicolons(state: &mut FormatterState) {
    state.for_each_token(|t| t.is_symbol_str(";"), |state, i, _| format_semicolon(state, i));
}

fn format_semicolon(state: &mut FormatterState, i: usize) {
    if let Some(scope) = state.scope_at(i) {
        if matches!(state.token_at(scope), Some(t) if t.is_start_of_scope_str("(")) {
            return;
        }
    }

    let prev = state.previous_non_whitespace_or_linebreak(i);

    if matches!(prev.and_then(|p| state.token_at(p)), Some(t) if t.is_keyword_str("return")) {
        return;
    }

    let at_start_of_file = prev.is_none();
    let at_end_of_file = state.next_non_whitespace_or_linebreak(i + 1).is_none();
    let at_end_of_scope = matches!(
        state.next_non_whitespace_or_comment_or_linebreak(i + 1).and_then(|j| state.token_at(j)),
        Some(t) if t.is_end_of_scope_str("}")
    );
    let at_end_of_line = state
        .index_of_next(i + 1, |t| !t.is_whitespace())
        .map(|j| matches!(state.token_at(j), Some(t) if t.is_linebreak()))
        .unwrap_or(true);

    if at_start_of_file || at_end_of_file || at_end_of_scope || at_end_of_line {
        state.remove_at(i);
        return;
    }

    if !state.options.allow_inline_semicolons {
        let line_start = state.start_of_line(i);
        let indent = match state.token_at(line_start) {
            Some(Token::Whitespace(s)) => s.clone(),
            _ => String::new(),
        };
        let linebreak = state.options.linebreak.clone();
        state.replace_at(i, Token::Linebreak(linebreak));
        if !indent.is_empty() {
            state.insert_at(i + 1, Token::Whitespace(indent));
        }
    }
}
