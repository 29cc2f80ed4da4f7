//! `blankLinesAtEndOfScope`, `blankLinesBetweenScopes`, `consecutiveBlankLines`.

use crate::state::FormatterState;
use crate::token::Token;

const SPACEABLE_BODY_KEYWORDS: &[&str] = &["class", "struct", "extension", "enum"];

/// For each closer `}`/`)`/`]`/`>` standing alone on its line, collapse any
/// blank line(s) immediately before it down to the single line break that
/// separates it from the preceding code.
pub fn blank_lines_at_end_of_scope(state: &mut FormatterState) {
    if !state.options.remove_blank_lines {
        return;
    }

    state.for_each_token(
        |t| t.is_end_of_scope(),
        |state, i, _| {
            if !closer_alone_on_line(state, i) {
                return;
            }
            let Some(own_linebreak) = state.index_of_previous(i, |t| t.is_linebreak()) else {
                return;
            };
            let Some(prev_content) = state.previous_non_whitespace_or_linebreak(own_linebreak + 1) else {
                return;
            };
            let blank_run_start = state.index_of_next(prev_content + 1, |t| t.is_linebreak());
            let Some(blank_run_start) = blank_run_start else {
                return;
            };
            if blank_run_start >= own_linebreak {
                return;
            }
            state.remove_range(blank_run_start..own_linebreak);
        },
    );
}

fn closer_alone_on_line(state: &FormatterState, i: usize) -> bool {
    let start = state.start_of_line(i);
    let before_ok = (start..i).all(|k| matches!(state.token_at(k), Some(t) if t.is_whitespace()));
    if !before_ok {
        return false;
    }
    match state.next_non_whitespace(i + 1) {
        Some(n) => matches!(state.token_at(n), Some(t) if t.is_linebreak()),
        None => true,
    }
}

/// Ensures a blank line follows the closing `}` of a spaceable type body
/// (`class`/`struct`/`extension`/`enum`) when another top-level construct
/// follows.
pub fn blank_lines_between_scopes(state: &mut FormatterState) {
    if !state.options.insert_blank_lines {
        return;
    }

    state.for_each_token(
        |t| t.is_end_of_scope_str("}"),
        |state, i, _| {
            if !is_spaceable_body_close(state, i) {
                return;
            }
            let Some(next) = state.next_non_whitespace_or_linebreak(i + 1) else {
                return;
            };
            if continues_same_construct(state, next) {
                return;
            }

            let Some(first_linebreak) = state.index_of_next(i + 1, |t| t.is_linebreak()) else {
                return;
            };
            let blank_already = matches!(state.token_at(first_linebreak + 1), Some(t) if t.is_linebreak())
                || (matches!(state.token_at(first_linebreak + 1), Some(t) if t.is_whitespace())
                    && matches!(state.token_at(first_linebreak + 2), Some(t) if t.is_linebreak()));
            if blank_already {
                return;
            }
            let linebreak = state.options.linebreak.clone();
            state.insert_at(first_linebreak + 1, Token::Linebreak(linebreak));
        },
    );
}

fn is_spaceable_body_close(state: &FormatterState, close: usize) -> bool {
    // Find the matching opener by scanning back from close via scopeAt on
    // the token just inside it, then check what introduced that scope.
    let Some(opener) = state.scope_at(close) else {
        return false;
    };
    if !matches!(state.token_at(opener), Some(t) if t.is_start_of_scope_str("{")) {
        return false;
    }
    matches!(
        state.previous_non_whitespace_or_comment(opener).and_then(|p| state.token_at(p)),
        Some(Token::Keyword(k)) if SPACEABLE_BODY_KEYWORDS.contains(&k.as_str())
    ) || {
        // `class Foo<T>: Bar {` — walk further back past a generic/inheritance
        // clause to find the leading declaration keyword.
        find_leading_decl_keyword(state, opener)
    }
}

fn find_leading_decl_keyword(state: &FormatterState, opener: usize) -> bool {
    let mut i = opener;
    loop {
        if i == 0 {
            return false;
        }
        i -= 1;
        match state.token_at(i) {
            Some(Token::Keyword(k)) if SPACEABLE_BODY_KEYWORDS.contains(&k.as_str()) => return true,
            Some(Token::Keyword(k)) if matches!(k.as_str(), "func" | "var" | "let" | "if" | "for" | "while" | "switch" | "guard" | "do" | "catch") => {
                return false
            }
            Some(t) if t.is_symbol_str(";") => return false,
            Some(t) if t.is_end_of_scope_str("}") => return false,
            _ => {}
        }
    }
}

fn continues_same_construct(state: &FormatterState, next: usize) -> bool {
    matches!(
        state.token_at(next),
        Some(t) if t.is_end_of_scope()
            || t.is_symbol_str(".")
            || t.is_symbol_str(",")
            || t.is_symbol_str(":")
    ) || matches!(
        state.token_at(next),
        Some(Token::Keyword(k)) if k == "else" || k == "catch" || k == "while"
    )
}

/// Collapses runs of ≥2 consecutive line breaks to at most 2 (one blank
/// line), and to exactly 1 at end of file (unless `fragment`).
pub fn consecutive_blank_lines(state: &mut FormatterState) {
    state.for_each_token(
        |t| t.is_linebreak(),
        |state, i, _| {
            let run_end = state.index_of_next(i + 1, |t| !t.is_linebreak()).unwrap_or(state.len());
            let run_len = run_end - i;
            if run_len <= 2 {
                return;
            }
            let at_eof = run_end >= state.len();
            let keep = if at_eof && !state.options.fragment { 1 } else { 2 };
            state.remove_range(i + keep..run_end);
        },
    );
}
