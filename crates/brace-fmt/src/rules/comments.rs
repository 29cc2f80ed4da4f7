//! `spaceAroundComments` / `spaceInsideComments`. Comment
//! bodies are never touched; only the whitespace immediately outside and
//! just inside the `//`/`/*`/`*/` markers is normalized.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;
use crate::token::Token;

fn is_comment_opener(t: &Token) -> bool {
    t.is_start_of_scope_str("//") || t.is_start_of_scope_str("/*")
}

pub fn space_around_comments(state: &mut FormatterState) {
    state.for_each_token(is_comment_opener, |state, i, _| space_before_open(state, i));
    state.for_each_token(
        |t| t.is_end_of_scope_str("*/"),
        |state, i, _| space_after_close(state, i),
    );
}

fn space_before_open(state: &mut FormatterState, open: usize) {
    let Some(prev) = state.previous_non_whitespace(open) else {
        return;
    };
    let want = !matches!(state.token_at(prev), Some(t) if t.is_start_of_scope() && !t.is_start_of_scope_str("\""));
    reconcile_space(state, prev, open, want);
}

fn space_after_close(state: &mut FormatterState, close: usize) {
    let Some(next) = state.next_non_whitespace(close + 1) else {
        return;
    };
    let want = !matches!(state.token_at(next), Some(t) if t.is_linebreak());
    reconcile_space(state, close, next, want);
}

pub fn space_inside_comments(state: &mut FormatterState) {
    state.for_each_token(is_comment_opener, |state, i, _| ensure_space_after(state, i));
    state.for_each_token(
        |t| t.is_end_of_scope_str("*/"),
        |state, i, _| ensure_space_before(state, i),
    );
}

fn ensure_space_after(state: &mut FormatterState, open: usize) {
    match state.token_at(open + 1) {
        None => {}
        Some(t) if t.is_whitespace() || t.is_linebreak() || t.is_end_of_scope() => {}
        _ => state.insert_at(open + 1, Token::Whitespace(" ".to_string())),
    }
}

fn ensure_space_before(state: &mut FormatterState, close: usize) {
    if close == 0 {
        return;
    }
    match state.token_at(close - 1) {
        Some(t) if t.is_whitespace() || t.is_linebreak() || t.is_start_of_scope() => {}
        _ => state.insert_at(close, Token::Whitespace(" ".to_string())),
    }
}
