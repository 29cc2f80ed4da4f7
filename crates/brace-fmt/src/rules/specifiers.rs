//! `specifiers`: for each declaration-introducing keyword,
//! walk backward collecting consecutive specifier tokens from a fixed
//! allowed set and reorder them into the canonical order.

use crate::state::FormatterState;
use crate::token::Token;

const DECL_KEYWORDS: &[&str] = &[
    "let",
    "func",
    "var",
    "class",
    "extension",
    "init",
    "enum",
    "struct",
    "typealias",
    "subscript",
    "associatedtype",
    "protocol",
];

const ACCESS_BARE: &[&str] = &["private", "fileprivate", "internal", "public", "open"];
const ACCESS_WITH_SET: &[&str] = &["private", "fileprivate", "internal", "public"];

/// Canonical order (lowest rank sorts first).
fn specifier_rank(keyword: &str) -> Option<u8> {
    if ACCESS_BARE.contains(&keyword) {
        return Some(1);
    }
    match keyword {
        "final" | "dynamic" => Some(2),
        "optional" | "required" => Some(3),
        "convenience" => Some(4),
        "override" => Some(5),
        "lazy" => Some(6),
        "weak" | "unowned" => Some(7),
        "static" | "class" => Some(8),
        "mutating" | "nonmutating" => Some(9),
        "prefix" | "postfix" => Some(10),
        _ => None,
    }
}

struct Unit {
    rank: u8,
    start: usize,
    end: usize, // inclusive
}

pub fn specifiers(state: &mut FormatterState) {
    state.for_each_token(
        |t| matches!(t, Token::Keyword(k) if DECL_KEYWORDS.contains(&k.as_str())),
        |state, i, _| reorder_before(state, i),
    );
}

fn reorder_before(state: &mut FormatterState, decl_index: usize) {
    let mut units: Vec<Unit> = Vec::new();
    let mut cursor = decl_index;

    loop {
        if cursor == 0 {
            break;
        }
        let mut j = cursor - 1;

        if matches!(state.token_at(j), Some(t) if t.is_whitespace()) {
            if j == 0 {
                break;
            }
            j -= 1;
        }

        // Try the multi-token `access(set)` unit first.
        if matches!(state.token_at(j), Some(t) if t.is_end_of_scope_str(")")) && j >= 3 {
            let (p_set, p_open, p_access) = (j - 1, j - 2, j - 3);
            let is_set_unit = matches!(state.token_at(p_set), Some(Token::Identifier(s)) if s == "set")
                && matches!(state.token_at(p_open), Some(t) if t.is_start_of_scope_str("("))
                && matches!(state.token_at(p_access), Some(Token::Keyword(k)) if ACCESS_WITH_SET.contains(&k.as_str()));
            if is_set_unit {
                units.push(Unit {
                    rank: 0,
                    start: p_access,
                    end: j,
                });
                cursor = p_access;
                continue;
            }
        }

        if let Some(Token::Keyword(k)) = state.token_at(j) {
            if let Some(rank) = specifier_rank(k) {
                units.push(Unit {
                    rank,
                    start: j,
                    end: j,
                });
                cursor = j;
                continue;
            }
        }

        break;
    }

    if units.is_empty() {
        return;
    }

    let block_start = cursor;
    let block_end = decl_index; // exclusive

    // `units` is in closest-to-declaration-first order; reverse to get
    // source order, then stable-sort by canonical rank.
    units.reverse();
    let mut ordered: Vec<&Unit> = units.iter().collect();
    ordered.sort_by_key(|u| u.rank);

    let mut rebuilt = Vec::new();
    for (idx, unit) in ordered.iter().enumerate() {
        if idx > 0 {
            rebuilt.push(Token::Whitespace(" ".to_string()));
        }
        for k in unit.start..=unit.end {
            rebuilt.push(state.token_at(k).unwrap().clone());
        }
    }
    rebuilt.push(Token::Whitespace(" ".to_string()));

    state.replace_range(block_start..block_end, rebuilt);
}
