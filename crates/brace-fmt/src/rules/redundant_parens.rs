//! `redundantParens`: strip the `( )` around the condition of
//! `if`, `while`, `switch` when the closing `)` is directly followed by
//! `{`. For `switch`, a top-level `,` inside (potential tuple) keeps the
//! parens.

use crate::state::FormatterState;
use crate::token::Token;

const CONDITIONAL_KEYWORDS: &[&str] = &["if", "while", "switch"];

pub fn redundant_parens(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::Keyword(k) if CONDITIONAL_KEYWORDS.contains(&k.as_str())),
        |state, i, tok| strip_if_redundant(state, i, tok.string_ref()),
    );
}

fn strip_if_redundant(state: &mut FormatterState, keyword_index: usize, keyword: &str) {
    let Some(open) = state.next_non_whitespace(keyword_index + 1) else {
        return;
    };
    if !matches!(state.token_at(open), Some(t) if t.is_start_of_scope_str("(")) {
        return;
    }
    let Some(close) = find_matching_close(state, open) else {
        return;
    };
    let Some(brace) = state.next_non_whitespace(close + 1) else {
        return;
    };
    if !matches!(state.token_at(brace), Some(t) if t.is_start_of_scope_str("{")) {
        return;
    }

    if keyword == "switch" && contains_top_level_comma(state, open, close) {
        return;
    }

    state.remove_at(close);
    state.remove_at(open);
}

fn find_matching_close(state: &FormatterState, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    for i in open..state.len() {
        match state.token_at(i) {
            Some(t) if t.is_start_of_scope_str("(") => depth += 1,
            Some(t) if t.is_end_of_scope_str(")") => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn contains_top_level_comma(state: &FormatterState, open: usize, close: usize) -> bool {
    let mut depth = 0i32;
    for i in (open + 1)..close {
        match state.token_at(i) {
            Some(t) if t.is_start_of_scope() => depth += 1,
            Some(t) if t.is_end_of_scope() => depth -= 1,
            Some(t) if depth == 0 && t.is_symbol_str(",") => return true,
            _ => {}
        }
    }
    false
}
