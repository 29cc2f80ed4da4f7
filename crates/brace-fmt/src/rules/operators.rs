//! `spaceAroundOperators`. Dispatches on each `Symbol`
//! token's payload; `:` additionally consults a small ternary-scope lookup
//! (a `?` with whitespace on both sides opens a scope whose matching close
//! is the next `:`) kept local to this rule — no other rule needs it.

use super::spacing_common::reconcile_space;
use crate::state::FormatterState;
use crate::token::Token;

/// Symbols with their own dedicated handling below; the catch-all binary
/// operator rule never applies to these.
const HANDLED_ELSEWHERE: &[&str] = &[":", ",", ";", "?", "!", ".", "->", "...", "..<"];

pub fn space_around_operators(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_symbol(),
        |state, i, tok| {
            let Token::Symbol(s) = tok else { return };
            match s.as_str() {
                ":" => format_colon(state, i),
                "," | ";" => format_comma_or_semicolon(state, i),
                "?" | "!" => format_question_or_bang(state, i),
                "." => format_dot(state, i),
                "->" => format_arrow(state, i),
                "..." | "..<" => {}
                other if !HANDLED_ELSEWHERE.contains(&other) => format_other_symbol(state, i),
                _ => {}
            }
        },
    );
}

fn is_ternary_question(state: &FormatterState, i: usize) -> bool {
    let before_is_space = i > 0 && matches!(state.token_at(i - 1), Some(t) if t.is_whitespace_or_linebreak());
    let after_is_space = matches!(state.token_at(i + 1), Some(t) if t.is_whitespace_or_linebreak());
    before_is_space && after_is_space
}

/// Walks backward from `colon` maintaining a local nesting counter over
/// `:` / ternary-`?` pairs, stopping at a statement or scope boundary.
fn matching_ternary_question(state: &FormatterState, colon: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut i = colon;
    loop {
        if i == 0 {
            return None;
        }
        i -= 1;
        match state.token_at(i) {
            Some(t) if t.is_symbol_str(":") => depth += 1,
            Some(t) if t.is_symbol_str("?") && is_ternary_question(state, i) => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            Some(t) if t.is_symbol_str(";") => return None,
            Some(t) if t.is_start_of_scope() || t.is_end_of_scope() => return None,
            _ => {}
        }
    }
}

/// `foo:bar:` style selector reference — a colon directly between two
/// identifiers, itself immediately followed by another such colon further
/// on, with no whitespace anywhere in the run.
fn is_selector_colon(state: &FormatterState, colon: usize) -> bool {
    let prev_is_ident = matches!(state.token_at(colon.wrapping_sub(1)), Some(t) if t.is_identifier());
    let next_is_ident = matches!(state.token_at(colon + 1), Some(t) if t.is_identifier());
    if !(colon > 0 && prev_is_ident && next_is_ident) {
        return false;
    }
    matches!(state.token_at(colon + 2), Some(t) if t.is_symbol_str(":"))
}

fn format_colon(state: &mut FormatterState, colon: usize) {
    if is_selector_colon(state, colon) {
        return;
    }

    let closes_ternary = matching_ternary_question(state, colon).is_some();
    if let Some(prev) = state.previous_non_whitespace(colon) {
        reconcile_space(state, prev, colon, closes_ternary);
    }

    if let Some(next) = state.next_non_whitespace(colon + 1) {
        let skip = matches!(state.token_at(next), Some(t) if t.is_linebreak() || t.is_end_of_scope());
        if !skip {
            reconcile_space(state, colon, next, true);
        }
    }
}

fn format_comma_or_semicolon(state: &mut FormatterState, i: usize) {
    if let Some(prev) = state.previous_non_whitespace(i) {
        reconcile_space(state, prev, i, false);
    }
    if let Some(next) = state.next_non_whitespace(i + 1) {
        if !matches!(state.token_at(next), Some(t) if t.is_linebreak()) {
            reconcile_space(state, i, next, true);
        }
    }
}

fn format_question_or_bang(state: &mut FormatterState, i: usize) {
    let preceded_by_as_or_try = matches!(
        state.previous_non_whitespace(i).and_then(|p| state.token_at(p)),
        Some(Token::Keyword(k)) if k == "as" || k == "try"
    );
    if !preceded_by_as_or_try {
        return;
    }
    if let Some(next) = state.next_non_whitespace(i + 1) {
        if !matches!(state.token_at(next), Some(t) if t.is_linebreak()) {
            reconcile_space(state, i, next, true);
        }
    }
}

fn is_pure_optional_chain(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '?' || c == '!')
}

fn is_operator_symbol(s: &str) -> bool {
    !matches!(s, "," | ";" | ":" | ".")
}

fn format_dot(state: &mut FormatterState, i: usize) {
    if let Some(prev) = state.previous_non_whitespace(i) {
        let want_before = matches!(
            state.token_at(prev),
            Some(Token::Symbol(s)) if is_operator_symbol(s) && !is_pure_optional_chain(s)
        );
        reconcile_space(state, prev, i, want_before);
    }
    if let Some(next) = state.next_non_whitespace(i + 1) {
        if !matches!(state.token_at(next), Some(t) if t.is_linebreak()) {
            reconcile_space(state, i, next, false);
        }
    }
}

fn format_arrow(state: &mut FormatterState, i: usize) {
    if let Some(prev) = state.previous_non_whitespace(i) {
        reconcile_space(state, prev, i, true);
    }
    if let Some(next) = state.next_non_whitespace(i + 1) {
        if !matches!(state.token_at(next), Some(t) if t.is_linebreak()) {
            reconcile_space(state, i, next, true);
        }
    }
}

fn format_other_symbol(state: &mut FormatterState, i: usize) {
    let Some(prev) = state.previous_non_whitespace(i) else {
        return;
    };
    let Some(next) = state.next_non_whitespace(i + 1) else {
        return;
    };
    let is_lvalue = matches!(
        state.token_at(prev),
        Some(t) if t.is_identifier() || t.is_number() || t.is_end_of_scope() || t.is_symbol_str("?") || t.is_symbol_str("!")
    );
    let is_rvalue = matches!(
        state.token_at(next),
        Some(t) if t.is_identifier() || t.is_number() || t.is_start_of_scope()
    );
    if is_lvalue && is_rvalue {
        reconcile_space(state, prev, i, true);
        reconcile_space(state, i, next, true);
    }
}
