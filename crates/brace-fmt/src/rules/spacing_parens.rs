//! `spaceAroundParens` / `spaceInsideParens`.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;
use crate::token::Token;

const NO_SPACE_KEYWORDS: &[&str] = &["private", "fileprivate", "internal", "init", "subscript"];

fn find_matching_open(state: &FormatterState, close: usize, open_str: &str, close_str: &str) -> Option<usize> {
    let mut depth = 0i32;
    for i in (0..close).rev() {
        match state.token_at(i) {
            Some(t) if t.is_end_of_scope_str(close_str) => depth += 1,
            Some(t) if t.is_start_of_scope_str(open_str) => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

fn is_capture_list_close(state: &FormatterState, close_bracket: usize) -> bool {
    let Some(open_bracket) = find_matching_open(state, close_bracket, "[", "]") else {
        return false;
    };
    let preceded_by_brace = matches!(
        state.previous_non_whitespace(open_bracket).and_then(|p| state.token_at(p)),
        Some(t) if t.is_start_of_scope_str("{")
    );
    let followed_by_in = matches!(
        state.next_non_whitespace(close_bracket + 1).and_then(|n| state.token_at(n)),
        Some(t) if t.is_keyword_str("in")
    );
    preceded_by_brace && followed_by_in
}

fn is_attribute_call_close(state: &FormatterState, close_paren: usize) -> bool {
    let Some(open_paren) = find_matching_open(state, close_paren, "(", ")") else {
        return false;
    };
    matches!(
        state.previous_non_whitespace(open_paren).and_then(|p| state.token_at(p)),
        Some(Token::Keyword(k)) if k.starts_with('@') || k.starts_with('#')
    )
}

pub fn space_around_parens(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("("),
        |state, i, _| space_before_open(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str(")"),
        |state, i, _| space_after_close(state, i),
    );
}

fn space_before_open(state: &mut FormatterState, open: usize) {
    let Some(prev) = state.previous_non_whitespace(open) else {
        return;
    };
    let want = match state.token_at(prev) {
        Some(Token::Keyword(k)) if k.starts_with('@') || k.starts_with('#') => {
            if k == "@escaping" || k == "@noescape" {
                true
            } else if k == "@autoclosure" {
                let has_escaping_arg = matches!(
                    state.next_non_whitespace(open + 1).and_then(|n| state.token_at(n)),
                    Some(t) if t.string_ref() == "escaping"
                );
                !has_escaping_arg
            } else {
                false
            }
        }
        Some(Token::Keyword(k)) if NO_SPACE_KEYWORDS.contains(&k.as_str()) => false,
        Some(t) if t.is_keyword() => true,
        Some(t) if t.is_end_of_scope_str("]") => is_capture_list_close(state, prev),
        Some(t) if t.is_end_of_scope_str(")") => is_attribute_call_close(state, prev),
        _ => false,
    };
    reconcile_space(state, prev, open, want);
}

fn space_after_close(state: &mut FormatterState, close: usize) {
    let Some(next) = state.next_non_whitespace(close + 1) else {
        return;
    };
    let want = match state.token_at(next) {
        Some(t) if t.is_identifier_or_keyword() => true,
        Some(t) if t.is_start_of_scope_str("{") => true,
        Some(t) if t.is_start_of_scope_str("[") => false,
        _ => false,
    };
    reconcile_space(state, close, next, want);
}

pub fn space_inside_parens(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("("),
        |state, i, _| strip_whitespace_after(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str(")"),
        |state, i, _| strip_whitespace_before(state, i),
    );
}

/// Removes the whitespace token immediately after `i`, unless it is itself
/// followed by a line break (an intentional multi-line layout).
fn strip_whitespace_after(state: &mut FormatterState, i: usize) {
    if !matches!(state.token_at(i + 1), Some(t) if t.is_whitespace()) {
        return;
    }
    if matches!(state.token_at(i + 2), Some(t) if t.is_linebreak()) {
        return;
    }
    state.remove_at(i + 1);
}

/// Removes the whitespace token immediately before `i`, unless it is itself
/// preceded by a line break.
fn strip_whitespace_before(state: &mut FormatterState, i: usize) {
    if i == 0 || !matches!(state.token_at(i - 1), Some(t) if t.is_whitespace()) {
        return;
    }
    if i >= 2 && matches!(state.token_at(i - 2), Some(t) if t.is_linebreak()) {
        return;
    }
    state.remove_at(i - 1);
}
