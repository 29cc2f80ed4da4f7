//! `void`: normalize the empty tuple in function-type
//! positions. Never touches `Void` after `.` or after `typealias`.

use crate::state::FormatterState;
use crate::token::Token;

pub fn void(state: &mut FormatterState) {
    if state.options.use_void {
        replace_empty_parens_after_arrow_with_void(state);
        replace_void_parens_before_arrow_with_empty(state);
    } else {
        replace_bare_void_after_arrow_with_parens(state);
    }
}

fn is_guarded(state: &FormatterState, void_index: usize) -> bool {
    match state.previous_non_whitespace(void_index).and_then(|p| state.token_at(p)) {
        Some(t) if t.is_symbol_str(".") => true,
        Some(t) if t.is_keyword_str("typealias") => true,
        _ => false,
    }
}

fn replace_empty_parens_after_arrow_with_void(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_symbol_str("->"),
        |state, i, _| {
            let Some(open) = state.next_non_whitespace(i + 1) else {
                return;
            };
            if !matches!(state.token_at(open), Some(t) if t.is_start_of_scope_str("(")) {
                return;
            }
            let Some(close) = state.next_non_whitespace(open + 1) else {
                return;
            };
            if !matches!(state.token_at(close), Some(t) if t.is_end_of_scope_str(")")) {
                return;
            }
            state.replace_range(open..=close, vec![Token::Identifier("Void".to_string())]);
        },
    );
}

fn replace_void_parens_before_arrow_with_empty(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::Identifier(s) if s == "Void"),
        |state, i, _| {
            if is_guarded(state, i) {
                return;
            }
            let Some(open) = state.previous_non_whitespace(i) else {
                return;
            };
            if !matches!(state.token_at(open), Some(t) if t.is_start_of_scope_str("(")) {
                return;
            }
            let Some(close) = state.next_non_whitespace(i + 1) else {
                return;
            };
            if !matches!(state.token_at(close), Some(t) if t.is_end_of_scope_str(")")) {
                return;
            }
            let Some(after) = state.next_non_whitespace(close + 1) else {
                return;
            };
            let continues = matches!(
                state.token_at(after),
                Some(t) if t.is_symbol_str("->") || t.is_keyword_str("throws") || t.is_keyword_str("rethrows")
            );
            if continues {
                state.replace_range(open..=close, vec![
                    Token::StartOfScope("(".to_string()),
                    Token::EndOfScope(")".to_string()),
                ]);
            }
        },
    );
}

fn replace_bare_void_after_arrow_with_parens(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::Identifier(s) if s == "Void"),
        |state, i, _| {
            if is_guarded(state, i) {
                return;
            }
            let Some(prev) = state.previous_non_whitespace(i) else {
                return;
            };
            if matches!(state.token_at(prev), Some(t) if t.is_symbol_str("->")) {
                state.replace_at(
                    i,
                    Token::StartOfScope("(".to_string()),
                );
                state.insert_at(i + 1, Token::EndOfScope(")".to_string()));
            }
        },
    );
}
