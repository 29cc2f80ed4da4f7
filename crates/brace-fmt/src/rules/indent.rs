//! The indenter: a single left-to-right pass maintaining one
//! stack of active scopes. Each [`Frame`] collapses what would otherwise be
//! four parallel stacks (scope index, indent string, indent count, wrap
//! flag) plus the opening line into one struct, so popping a scope discards
//! all of that depth's bookkeeping in one step.
//!
//! `case`/`default` switch labels are modeled as a synthetic pseudo-frame
//! pushed when a `case`/`default` keyword is recognized as a label inside a
//! `switch` body, and popped by the next label or by the switch's `}`.

use crate::state::FormatterState;
use crate::token::{closing_scopes_for, Token};

const DECL_CONTROL_KEYWORDS: &[&str] = &[
    "class", "struct", "enum", "protocol", "extension", "let", "var", "func", "init", "subscript",
    "if", "switch", "guard", "else", "for", "while", "repeat", "do", "catch",
];

const NON_TERMINAL_KEYWORDS: &[&str] = &[
    "let",
    "func",
    "var",
    "if",
    "as",
    "import",
    "try",
    "guard",
    "case",
    "for",
    "init",
    "switch",
    "throw",
    "where",
    "subscript",
    "is",
    "while",
    "associatedtype",
    "inout",
];

struct Frame {
    opener_str: String,
    opener_idx: usize,
    indent: String,
    indent_count: i32,
    wrapped: bool,
    is_case: bool,
    is_switch_body: bool,
}

pub fn indent(state: &mut FormatterState) {
    let mut stack: Vec<Frame> = Vec::new();
    let mut fragment_base = String::new();

    state.for_each_token(
        |t| {
            t.is_start_of_scope()
                || t.is_end_of_scope()
                || t.is_linebreak()
                || t.is_keyword_str("case")
                || t.is_keyword_str("default")
                || t.is_keyword_str("#else")
                || t.is_keyword_str("#elseif")
        },
        |state, i, tok| match tok {
            Token::StartOfScope(s) => handle_opener(state, i, s, &mut stack),
            Token::EndOfScope(s) => handle_closer(state, i, s, &mut stack, &mut fragment_base),
            Token::Linebreak(_) => handle_linebreak(state, i, &mut stack, &fragment_base),
            Token::Keyword(k) if k == "case" || k == "default" => {
                handle_case_label(state, i, &mut stack)
            }
            Token::Keyword(_) => handle_conditional_compilation(state, i, &stack, &fragment_base),
            _ => {}
        },
    );

    remove_zero_width_whitespace(state);
}

fn current_indent(state: &FormatterState, stack: &[Frame], fragment_base: &str) -> String {
    match stack.last() {
        None => fragment_base.to_string(),
        Some(top) if top.wrapped => format!("{}{}", top.indent, state.options.indent),
        Some(top) => top.indent.clone(),
    }
}

fn column_after(state: &FormatterState, idx: usize) -> usize {
    let start = state.start_of_line(idx);
    (start..=idx)
        .map(|k| state.token_at(k).map(|t| t.string_ref().chars().count()).unwrap_or(0))
        .sum()
}

fn has_more_tokens_same_line(state: &FormatterState, open_idx: usize) -> bool {
    match state.next_non_whitespace(open_idx + 1) {
        Some(n) => !matches!(state.token_at(n), Some(t) if t.is_linebreak()),
        None => false,
    }
}

/// The brace is *not* a closure when the nearest significant token
/// backward is a closer `}`, or is anything other than one of the
/// declaration/control keywords.
fn brace_is_not_closure(state: &FormatterState, open_idx: usize) -> bool {
    match state.previous_non_whitespace_or_comment(open_idx) {
        None => true,
        Some(p) => match state.token_at(p) {
            Some(t) if t.is_end_of_scope_str("}") => true,
            Some(Token::Keyword(k)) if DECL_CONTROL_KEYWORDS.contains(&k.as_str()) => false,
            _ => true,
        },
    }
}

fn is_switch_body(state: &FormatterState, open_idx: usize) -> bool {
    let mut i = open_idx;
    loop {
        if i == 0 {
            return false;
        }
        i -= 1;
        match state.token_at(i) {
            Some(Token::Keyword(k)) if k == "switch" => return true,
            Some(Token::Keyword(k))
                if matches!(
                    k.as_str(),
                    "if" | "for" | "while" | "func" | "class" | "struct" | "enum" | "protocol"
                        | "extension" | "guard" | "do" | "catch" | "repeat"
                ) =>
            {
                return false
            }
            Some(t) if t.is_symbol_str(";") => return false,
            Some(t) if t.is_start_of_scope_str("{") || t.is_end_of_scope_str("}") => return false,
            _ => {}
        }
    }
}

fn handle_opener(state: &mut FormatterState, idx: usize, opener_str: &str, stack: &mut Vec<Frame>) {
    let parent_same_line = match stack.last() {
        Some(top) => state.start_of_line(idx) == state.start_of_line(top.opener_idx),
        None => false,
    };
    let new_indent_count = if parent_same_line { stack.last().unwrap().indent_count + 1 } else { 1 };

    let target_depth = (stack.len() as i32 + 1) - new_indent_count;
    let base_indent = if target_depth <= 0 {
        String::new()
    } else {
        stack.get((target_depth - 1) as usize).map(|f| f.indent.clone()).unwrap_or_default()
    };

    let new_indent = match opener_str {
        "/*" => format!("{base_indent} "),
        "(" | "[" if has_more_tokens_same_line(state, idx) => " ".repeat(column_after(state, idx)),
        _ => format!("{base_indent}{}", state.options.indent),
    };

    if opener_str == "{" && brace_is_not_closure(state, idx) {
        if let Some(top) = stack.last_mut() {
            top.wrapped = false;
        }
    }

    let switch_body = opener_str == "{" && is_switch_body(state, idx);

    stack.push(Frame {
        opener_str: opener_str.to_string(),
        opener_idx: idx,
        indent: new_indent,
        indent_count: new_indent_count,
        wrapped: false,
        is_case: false,
        is_switch_body: switch_body,
    });
}

fn handle_closer(
    state: &mut FormatterState,
    idx: usize,
    closer_str: &str,
    stack: &mut Vec<Frame>,
    fragment_base: &mut String,
) {
    if matches!(stack.last(), Some(f) if f.is_case) && closer_str == "}" {
        stack.pop();
    }

    let matches_top = stack.last().map(|f| closing_scopes_for(&f.opener_str).contains(&closer_str)).unwrap_or(false);
    if !matches_top {
        adopt_fragment_base(state, idx, fragment_base);
        return;
    }

    stack.pop();
    let outer_indent = current_indent(state, stack, fragment_base);

    if is_first_on_line(state, idx) {
        let start = state.start_of_line(idx);
        if start == idx {
            if !outer_indent.is_empty() {
                state.insert_at(idx, Token::Whitespace(outer_indent));
            }
        } else {
            state.replace_at(start, Token::Whitespace(outer_indent));
        }
    }
}

fn is_first_on_line(state: &FormatterState, idx: usize) -> bool {
    let start = state.start_of_line(idx);
    (start..idx).all(|k| matches!(state.token_at(k), Some(t) if t.is_whitespace()))
}

fn adopt_fragment_base(state: &FormatterState, idx: usize, fragment_base: &mut String) {
    if let Some(w) = state.indent_token_for_line_at(idx) {
        if let Some(Token::Whitespace(s)) = state.token_at(w) {
            *fragment_base = s.clone();
        }
    }
}

fn case_label_colon(state: &FormatterState, idx: usize) -> Option<usize> {
    let mut depth = 0i32;
    let mut i = idx + 1;
    while i < state.len() {
        match state.token_at(i) {
            Some(t) if t.is_start_of_scope() => depth += 1,
            Some(t) if t.is_end_of_scope() => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            Some(t) if t.is_symbol_str(":") && depth == 0 => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

fn case_ends_line(state: &FormatterState, idx: usize) -> bool {
    match case_label_colon(state, idx) {
        Some(colon) => match state.next_non_whitespace(colon + 1) {
            Some(n) => matches!(state.token_at(n), Some(t) if t.is_linebreak()),
            None => true,
        },
        None => true,
    }
}

fn handle_case_label(state: &mut FormatterState, idx: usize, stack: &mut Vec<Frame>) {
    if matches!(stack.last(), Some(f) if f.is_case) {
        stack.pop();
    }
    let Some(top) = stack.last() else { return };
    if !(top.opener_str == "{" && top.is_switch_body) {
        return;
    }

    let parent_indent = current_indent(state, stack, "");
    let new_indent = if case_ends_line(state, idx) {
        format!("{parent_indent}{}", state.options.indent)
    } else {
        format!("{parent_indent}     ")
    };

    stack.push(Frame {
        opener_str: String::new(),
        opener_idx: idx,
        indent: new_indent,
        indent_count: 1,
        wrapped: false,
        is_case: true,
        is_switch_body: false,
    });
}

fn ends_statement(state: &FormatterState, prev: Option<usize>) -> bool {
    let Some(prev) = prev else { return true };
    match state.token_at(prev) {
        Some(Token::Keyword(k)) if k == "return" => match state.next_non_whitespace_or_linebreak(prev + 1) {
            Some(n) => matches!(state.token_at(n), Some(t) if t.is_keyword()),
            None => true,
        },
        Some(Token::Keyword(k)) if NON_TERMINAL_KEYWORDS.contains(&k.as_str()) => false,
        Some(t) if t.is_symbol_str(".") || t.is_symbol_str(":") => false,
        Some(t) if t.is_symbol_str(",") => {
            let in_listy_scope = matches!(
                state.scope_at(prev).and_then(|s| state.token_at(s)),
                Some(o) if o.is_start_of_scope_str("<") || o.is_start_of_scope_str("[") || o.is_start_of_scope_str("(") || o.is_case_or_default()
            );
            !in_listy_scope
        }
        Some(Token::Symbol(s)) if is_infix_operator_symbol(s) => false,
        _ => true,
    }
}

fn starts_statement(state: &FormatterState, next: Option<usize>) -> bool {
    let Some(next) = next else { return true };
    match state.token_at(next) {
        Some(Token::Keyword(k)) if matches!(k.as_str(), "as" | "is" | "where" | "rethrows" | "throws") => false,
        Some(t) if t.is_symbol_str(".") => match state.previous_non_whitespace_or_linebreak(next) {
            Some(p) => matches!(
                state.token_at(p),
                Some(t) if t.is_start_of_scope_str("<") || t.is_start_of_scope_str("(") || t.is_start_of_scope_str("[")
                    || t.is_symbol_str(",") || t.is_symbol_str(":")
            ),
            None => false,
        },
        Some(Token::Symbol(s)) if is_infix_operator_symbol(s) => false,
        _ => true,
    }
}

fn is_infix_operator_symbol(s: &str) -> bool {
    matches!(
        s,
        "+" | "-"
            | "*"
            | "/"
            | "%"
            | "="
            | "=="
            | "!="
            | "==="
            | "!=="
            | "<"
            | ">"
            | "<="
            | ">="
            | "&&"
            | "||"
            | "??"
            | "??="
            | "<<"
            | ">>"
            | "<<="
            | ">>="
            | "+="
            | "-="
            | "*="
            | "/="
            | "%="
            | "&="
            | "|="
            | "^="
            | "&&="
            | "||="
            | "=>"
            | "&"
            | "|"
            | "^"
            | "~"
    )
}

fn is_dangling_closer_line(state: &FormatterState, linebreak_idx: usize) -> bool {
    match state.previous_non_whitespace_or_linebreak(linebreak_idx) {
        Some(p) => {
            if !matches!(state.token_at(p), Some(t) if t.is_end_of_scope()) {
                return false;
            }
            is_first_on_line(state, p)
        }
        None => false,
    }
}

fn handle_linebreak(state: &mut FormatterState, idx: usize, stack: &mut Vec<Frame>, fragment_base: &str) {
    let prev_content = state.previous_non_whitespace_or_linebreak(idx);
    let next_content = state.next_non_whitespace_or_linebreak(idx + 1);

    let linewrapped = !ends_statement(state, prev_content) && !starts_statement(state, next_content);

    if let Some(top) = stack.last_mut() {
        if linewrapped && !top.wrapped {
            let suppressed = next_content
                .map(|n| matches!(state.token_at(n), Some(t) if t.is_symbol_str(".")))
                .unwrap_or(false)
                && is_dangling_closer_line(state, idx);
            if !suppressed {
                top.wrapped = true;
            }
        } else if !linewrapped && top.wrapped {
            top.wrapped = false;
        }
    }

    let active_indent = current_indent(state, stack, fragment_base);
    apply_line_indent(state, idx, &active_indent);
}

fn apply_line_indent(state: &mut FormatterState, linebreak_idx: usize, indent: &str) {
    let at = linebreak_idx + 1;
    let has_leading_ws = matches!(state.token_at(at), Some(t) if t.is_whitespace());
    let next_is_linebreak = matches!(state.token_at(at), Some(t) if t.is_linebreak());
    let is_blank_line =
        next_is_linebreak || (has_leading_ws && matches!(state.token_at(at + 1), Some(t) if t.is_linebreak()));
    let is_comment_start = matches!(state.token_at(at), Some(t) if t.is_comment())
        || (has_leading_ws && matches!(state.token_at(at + 1), Some(t) if t.is_comment()));

    if is_blank_line {
        if state.options.truncate_blank_lines {
            if has_leading_ws {
                state.remove_at(at);
            }
        } else if has_leading_ws {
            state.replace_at(at, Token::Whitespace(indent.to_string()));
        } else if !indent.is_empty() {
            state.insert_at(at, Token::Whitespace(indent.to_string()));
        }
        return;
    }

    if is_comment_start && !state.options.indent_comments {
        return;
    }

    if has_leading_ws {
        state.replace_at(at, Token::Whitespace(indent.to_string()));
    } else if !indent.is_empty() {
        state.insert_at(at, Token::Whitespace(indent.to_string()));
    }
}

/// `#if` isn't modeled as its own scope by this tokenizer, so there is no
/// literal "parent depth" to restore; one indent level is peeled off the
/// currently active indent as a proxy, matching the common case where the
/// `#if` body sits exactly one level deeper than its surroundings.
fn handle_conditional_compilation(state: &mut FormatterState, idx: usize, stack: &[Frame], fragment_base: &str) {
    let line_start = state.start_of_line(idx);
    if line_start == idx || !is_first_on_line(state, idx) {
        return;
    }
    if !matches!(state.token_at(line_start), Some(t) if t.is_whitespace()) {
        return;
    }

    let current = current_indent(state, stack, fragment_base);
    let parent = current.strip_suffix(state.options.indent.as_str()).unwrap_or(&current).to_string();
    state.replace_at(line_start, Token::Whitespace(parent));
}

fn remove_zero_width_whitespace(state: &mut FormatterState) {
    let mut i = 0;
    while i < state.len() {
        if matches!(state.token_at(i), Some(Token::Whitespace(s)) if s.is_empty()) {
            state.remove_at(i);
        } else {
            i += 1;
        }
    }
}
