//! `braces`: for every multi-line `{` block, in K&R mode pull
//! the `{` onto the line of the preceding identifier/keyword/close-scope
//! (preserving leading comments), in Allman mode push the `{` onto the next
//! line at the current line's indent.

use crate::state::FormatterState;
use crate::token::Token;

pub fn braces(state: &mut FormatterState) {
    if state.options.allman_braces {
        make_allman(state);
    } else {
        make_knr(state);
    }
}

fn find_matching_close(state: &FormatterState, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    for i in open..state.len() {
        match state.token_at(i) {
            Some(t) if t.is_start_of_scope_str("{") => depth += 1,
            Some(t) if t.is_end_of_scope_str("}") => {
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

fn is_multiline(state: &FormatterState, open: usize, close: usize) -> bool {
    (open + 1..close).any(|i| matches!(state.token_at(i), Some(t) if t.is_linebreak()))
}

fn has_comment_between(state: &FormatterState, from: usize, to: usize) -> bool {
    (from..to).any(|i| matches!(state.token_at(i), Some(t) if t.is_comment()))
}

fn preceding_anchor(state: &FormatterState, brace: usize) -> Option<usize> {
    let prev = state.previous_non_whitespace_or_comment_or_linebreak(brace)?;
    let tok = state.token_at(prev)?;
    if tok.is_identifier_or_keyword() || tok.is_end_of_scope() {
        Some(prev)
    } else {
        None
    }
}

fn make_knr(state: &mut FormatterState) {
    let mut i = 0;
    while i < state.len() {
        if matches!(state.token_at(i), Some(t) if t.is_start_of_scope_str("{")) {
            if let (Some(close), Some(anchor)) = (
                find_matching_close(state, i),
                preceding_anchor(state, i),
            ) {
                if is_multiline(state, i, close)
                    && !has_comment_between(state, anchor + 1, i)
                    && (anchor + 1..i).any(|j| matches!(state.token_at(j), Some(t) if t.is_linebreak()))
                {
                    state.replace_range(anchor + 1..i, vec![Token::Whitespace(" ".to_string())]);
                    i = anchor + 1;
                    continue;
                }
            }
        }
        i += 1;
    }
}

fn make_allman(state: &mut FormatterState) {
    let mut i = 0;
    while i < state.len() {
        if matches!(state.token_at(i), Some(t) if t.is_start_of_scope_str("{")) {
            if let (Some(close), Some(anchor)) = (
                find_matching_close(state, i),
                preceding_anchor(state, i),
            ) {
                let already_own_line =
                    (anchor + 1..i).any(|j| matches!(state.token_at(j), Some(t) if t.is_linebreak()));
                if is_multiline(state, i, close)
                    && !already_own_line
                    && !has_comment_between(state, anchor + 1, i)
                {
                    let indent = state
                        .indent_token_for_line_at(anchor)
                        .and_then(|w| state.token_at(w).cloned())
                        .map(Token::into_string)
                        .unwrap_or_default();
                    let linebreak = state.options.linebreak.clone();
                    let mut replacement = vec![Token::Linebreak(linebreak)];
                    if !indent.is_empty() {
                        replacement.push(Token::Whitespace(indent));
                    }
                    state.replace_range(anchor + 1..i, replacement);
                    continue;
                }
            }
        }
        i += 1;
    }
}
