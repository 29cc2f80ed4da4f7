//! `spaceAroundGenerics` / `spaceInsideGenerics`. Generic
//! parameter lists attach directly to the preceding identifier and to
//! whatever follows the closing `>`; no whitespace is ever wanted around the
//! scope boundary itself — only the inside is trimmed here.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;

pub fn space_around_generics(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("<"),
        |state, i, _| {
            if let Some(prev) = state.previous_non_whitespace(i) {
                reconcile_space(state, prev, i, false);
            }
        },
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str(">"),
        |state, i, _| {
            if let Some(next) = state.next_non_whitespace(i + 1) {
                reconcile_space(state, i, next, false);
            }
        },
    );
}

pub fn space_inside_generics(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_start_of_scope_str("<"),
        |state, i, _| strip_whitespace_after(state, i),
    );
    state.for_each_token(
        |t| t.is_end_of_scope_str(">"),
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
