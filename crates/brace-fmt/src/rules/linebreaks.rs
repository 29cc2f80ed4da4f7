//! `linebreaks`: rewrite every line-break token's payload to the
//! configured canonical sequence.

use crate::state::FormatterState;
use crate::token::Token;

pub fn linebreaks(state: &mut FormatterState) {
    let canonical = state.options.linebreak.clone();
    state.for_each_token(Token::is_linebreak, |state, i, tok| {
        if tok.string_ref() != canonical {
            state.replace_at(i, Token::Linebreak(canonical.clone()));
        }
    });
}
