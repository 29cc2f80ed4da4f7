//! `todos`: normalize `TODO`/`MARK`/`FIXME` comment tags so
//! the tag is followed by exactly `": "`.

use crate::state::FormatterState;
use crate::token::Token;

const TAGS: &[&str] = &["TODO", "MARK", "FIXME"];

pub fn todos(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::CommentBody(s) if TAGS.iter().any(|tag| s.starts_with(tag))),
        |state, i, tok| {
            let Token::CommentBody(body) = tok else { return };
            if let Some(normalized) = normalize_tag(body) {
                state.replace_at(i, Token::CommentBody(normalized));
            }
        },
    );
}

fn normalize_tag(body: &str) -> Option<String> {
    let tag = TAGS.iter().find(|tag| body.starts_with(**tag))?;
    let rest = &body[tag.len()..];

    let mut chars = rest.char_indices().peekable();
    let mut ws_end = 0;
    while let Some(&(idx, c)) = chars.peek() {
        if c == ' ' || c == '\t' {
            ws_end = idx + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }
    let after_ws = &rest[ws_end..];

    let has_colon = after_ws.starts_with(':');
    if ws_end == 0 && !has_colon {
        // No whitespace or colon follows — likely an identifier like
        // `TODOItem`, not a tag. Leave untouched.
        return None;
    }

    let after_colon = if has_colon { &after_ws[1..] } else { after_ws };
    let after_colon = after_colon.trim_start_matches([' ', '\t']);

    Some(format!("{tag}: {after_colon}"))
}
