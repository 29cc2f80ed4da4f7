//! `spaceAroundBrackets` / `spaceInsideBrackets`.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;

pub fn space_around_brackets(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("["),
        |state, i, _| space_before_open(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str("]"),
        |state, i, _| space_after_close(state, i),
    );
}

fn space_before_open(state: &mut FormatterState, open: usize) {
    let Some(prev) = state.previous_non_whitespace(open) else {
        return;
    };
    let want = matches!(state.token_at(prev), Some(t) if t.is_keyword());
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

pub fn space_inside_brackets(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("["),
        |state, i, _| strip_whitespace_after(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str("]"),
        |state, i, _| strip_whitespace_before(state, i),
    );
}

fn strip_whitespace_after(state: &mut FormatterState, i: usize) {
    if !matches!(state.token_at(i + 1), Some(t) if t.is_whitespace()) {
        return;
    }
    if matches!(state.token_at(i + 2), Some(t) if t.is_linebreak()) {
        return;
    }
    state.remove_at(i + 1);
}

fn strip_whitespace_before(state: &mut FormatterState, i: usize) {
    if i == 0 || !matches!(state.token_at(i - 1), Some(t) if t.is_whitespace()) {
        return;
    }
    if i >= 2 && matches!(state.token_at(i - 2), Some(t) if t.is_linebreak()) {
        return;
    }
    state.remove_at(i - 1);
}
