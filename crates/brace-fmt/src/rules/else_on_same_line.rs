//! `elseOnSameLine`: when the `}` that closes an `if` or
//! `do` body is on its own line (dangling brace), rewrite the tokens
//! between it and the following `else`/`catch` (or the `while` closing a
//! `repeat`) to a single space (K&R) or a line break at the matching `if`'s
//! indent (Allman). A `guard`'s `else` precedes the guard body's `}` and is
//! never touched here.

use crate::state::FormatterState;
use crate::token::Token;

const CONTINUATIONS: &[&str] = &["else", "catch", "while"];

pub fn else_on_same_line(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_end_of_scope_str("}"),
        |state, i, _| join_dangling_brace(state, i),
    );
}

fn join_dangling_brace(state: &mut FormatterState, close: usize) {
    let dangling = matches!(
        state.index_of_previous(close, |t| !t.is_whitespace()).and_then(|p| state.token_at(p)),
        Some(t) if t.is_linebreak()
    );
    if !dangling {
        return;
    }

    let Some(next) = state.next_non_whitespace_or_linebreak(close + 1) else {
        return;
    };
    let continues = matches!(state.token_at(next), Some(Token::Keyword(k)) if CONTINUATIONS.contains(&k.as_str()));
    if !continues {
        return;
    }

    if state.options.allman_braces {
        let indent = state
            .indent_token_for_line_at(close)
            .and_then(|w| state.token_at(w).cloned())
            .map(Token::into_string)
            .unwrap_or_default();
        let linebreak = state.options.linebreak.clone();
        let mut replacement = vec![Token::Linebreak(linebreak)];
        if !indent.is_empty() {
            replacement.push(Token::Whitespace(indent));
        }
        state.replace_range(close + 1..next, replacement);
    } else {
        state.replace_range(close + 1..next, vec![Token::Whitespace(" ".to_string())]);
    }
}
