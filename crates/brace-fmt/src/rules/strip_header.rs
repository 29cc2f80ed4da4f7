//! `stripHeader`: remove a leading block of one or more `//`
//! comments, plus an optional single trailing blank line. `/*`-style
//! headers are left alone.

use crate::state::FormatterState;

pub fn strip_header(state: &mut FormatterState) {
    if state.options.fragment || !state.options.strip_header {
        return;
    }
    if !matches!(state.token_at(0), Some(t) if t.is_start_of_scope_str("//")) {
        return;
    }

    let mut i = 0;
    loop {
        if !matches!(state.token_at(i), Some(t) if t.is_start_of_scope_str("//")) {
            break;
        }
        // Skip the `//` opener, its body, and the line break that ends it.
        i += 1;
        if matches!(state.token_at(i), Some(t) if t.is_comment() && !t.is_start_of_scope() && !t.is_end_of_scope()) {
            i += 1;
        }
        if matches!(state.token_at(i), Some(t) if t.is_linebreak()) {
            i += 1;
        } else {
            break;
        }
        // Another `//` continues the header block directly.
        if matches!(state.token_at(i), Some(t) if t.is_start_of_scope_str("//")) {
            continue;
        }
        // A single blank line optionally follows the block.
        if matches!(state.token_at(i), Some(t) if t.is_linebreak()) {
            i += 1;
        }
        break;
    }

    if i > 0 {
        state.remove_range(0..i);
    }
}
