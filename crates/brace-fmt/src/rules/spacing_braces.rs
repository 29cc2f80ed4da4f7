//! `spaceAroundBraces` / `spaceInsideBraces`.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;

pub fn space_around_braces(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("{"),
        |state, i, _| space_before_open(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str("}"),
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
    let want = matches!(state.token_at(next), Some(t) if t.is_identifier_or_keyword());
    reconcile_space(state, close, next, want);
}

/// Exactly one space just inside `{`/`}`, except when the braces are empty
/// or the inner content starts/ends with a line break (own-line layout).
pub fn space_inside_braces(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("{"),
        |state, i, _| space_just_inside_open(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str("}"),
        |state, i, _| space_just_inside_close(state, i),
    );
}

fn space_just_inside_open(state: &mut FormatterState, open: usize) {
    let Some(inner) = state.next_non_whitespace(open + 1) else {
        return;
    };
    if matches!(state.token_at(inner), Some(t) if t.is_linebreak() || t.is_end_of_scope_str("}")) {
        return;
    }
    reconcile_space(state, open, inner, true);
}

fn space_just_inside_close(state: &mut FormatterState, close: usize) {
    let Some(inner) = state.previous_non_whitespace(close) else {
        return;
    };
    if matches!(state.token_at(inner), Some(t) if t.is_linebreak() || t.is_start_of_scope_str("{")) {
        return;
    }
    reconcile_space(state, inner, close, true);
}
