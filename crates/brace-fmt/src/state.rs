//! Formatter state: a mutable token buffer with
//! positional queries and local edits.
//!
//! A flat `Vec<Token>` is used rather than a tree or rope because every
//! rule performs local, position-anchored edits — a persistent tree would
//! force a rebuild on every insert.

use crate::options::Options;
use crate::token::Token;
use std::ops::Range;

pub struct FormatterState {
    tokens: Vec<Token>,
    pub options: Options,
}

impl FormatterState {
    pub fn new(tokens: Vec<Token>, options: Options) -> Self {
        Self { tokens, options }
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token_at(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    // -- directional search -------------------------------------------------

    /// The index of the first token at or after `from` matching `matching`,
    /// or `None` if the buffer is exhausted.
    pub fn index_of_next(&self, from: usize, matching: impl Fn(&Token) -> bool) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| matching(&self.tokens[i]))
    }

    /// The index of the nearest token *strictly before* `before` matching
    /// `matching`, searching backward. `before` itself is never examined,
    /// so `before == 0` safely yields `None` without underflow at call
    /// sites.
    pub fn index_of_previous(
        &self,
        before: usize,
        matching: impl Fn(&Token) -> bool,
    ) -> Option<usize> {
        let before = before.min(self.tokens.len());
        (0..before).rev().find(|&i| matching(&self.tokens[i]))
    }

    pub fn next_non_whitespace(&self, from: usize) -> Option<usize> {
        self.index_of_next(from, |t| !t.is_whitespace())
    }

    pub fn previous_non_whitespace(&self, from: usize) -> Option<usize> {
        self.index_of_previous(from, |t| !t.is_whitespace())
    }

    pub fn next_non_whitespace_or_linebreak(&self, from: usize) -> Option<usize> {
        self.index_of_next(from, |t| !t.is_whitespace_or_linebreak())
    }

    pub fn previous_non_whitespace_or_linebreak(&self, from: usize) -> Option<usize> {
        self.index_of_previous(from, |t| !t.is_whitespace_or_linebreak())
    }

    pub fn next_non_whitespace_or_comment(&self, from: usize) -> Option<usize> {
        self.index_of_next(from, |t| !t.is_whitespace_or_comment())
    }

    pub fn previous_non_whitespace_or_comment(&self, from: usize) -> Option<usize> {
        self.index_of_previous(from, |t| !t.is_whitespace_or_comment())
    }

    pub fn next_non_whitespace_or_comment_or_linebreak(&self, from: usize) -> Option<usize> {
        self.index_of_next(from, |t| !t.is_whitespace_or_comment_or_linebreak())
    }

    pub fn previous_non_whitespace_or_comment_or_linebreak(&self, from: usize) -> Option<usize> {
        self.index_of_previous(from, |t| !t.is_whitespace_or_comment_or_linebreak())
    }

    // -- scope query ---------------------------------------------------------

    /// Returns the index of the innermost enclosing opener of `i`, walking
    /// backward and maintaining a balanced-scope counter per opener kind
    ///.
    pub fn scope_at(&self, i: usize) -> Option<usize> {
        if i >= self.tokens.len() {
            return None;
        }

        let mut depth = 0i64;
        let mut case_depth = 0i64;

        let mut j = i;
        loop {
            if j == 0 {
                return None;
            }
            j -= 1;

            let tok = &self.tokens[j];
            if tok.is_end_of_scope() {
                match tok {
                    Token::EndOfScope(s) if s == "}" => {
                        // `}` also closes a trailing `case`/`default` body.
                        if case_depth > 0 {
                            case_depth -= 1;
                        } else {
                            depth += 1;
                        }
                    }
                    _ => depth += 1,
                }
            } else if tok.is_case_or_default() {
                if case_depth == 0 && depth == 0 {
                    return Some(j);
                }
                // A sibling case/default closes the previous one.
                if case_depth > 0 {
                    continue;
                }
            } else if tok.is_start_of_scope() {
                if depth == 0 {
                    return Some(j);
                }
                depth -= 1;
            }
        }
    }

    // -- edits ----------------------------------------------------------------

    pub fn insert_at(&mut self, i: usize, tok: Token) {
        self.tokens.insert(i, tok);
    }

    pub fn remove_at(&mut self, i: usize) -> Token {
        self.tokens.remove(i)
    }

    pub fn replace_at(&mut self, i: usize, tok: Token) -> Token {
        std::mem::replace(&mut self.tokens[i], tok)
    }

    pub fn remove_range(&mut self, range: Range<usize>) {
        self.tokens.drain(range);
    }

    pub fn replace_range(&mut self, range: Range<usize>, toks: Vec<Token>) {
        self.tokens.splice(range, toks);
    }

    pub fn remove_last(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    // -- iteration --------------------------------------------------------------

    /// Invokes `body(state, i, token)` for every token index (snapshotted at
    /// call time) matching `predicate`. `body` may mutate the sequence; if it
    /// inserts tokens at or before `i` (shifting the matched token itself
    /// forward), the scan accounts for the length delta so the matched
    /// token's new position is skipped rather than redelivered to `body` on
    /// the next tick. The scan resumes at `min(i + 1 + growth, length)`,
    /// where `growth` is however much the buffer grew during this call.
    pub fn for_each_token(
        &mut self,
        predicate: impl Fn(&Token) -> bool,
        mut body: impl FnMut(&mut FormatterState, usize, &Token),
    ) {
        let mut i = 0;
        while i < self.tokens.len() {
            let mut next = i + 1;
            if predicate(&self.tokens[i]) {
                let tok = self.tokens[i].clone();
                let len_before = self.tokens.len();
                body(self, i, &tok);
                let len_after = self.tokens.len();
                let growth = len_after.saturating_sub(len_before);
                next = i + 1 + growth;
            }
            i = next.min(self.tokens.len());
        }
    }

    // -- line helpers -----------------------------------------------------------

    /// The index of the first token on the line containing `at` (the token
    /// immediately after the preceding line break, or 0).
    pub fn start_of_line(&self, at: usize) -> usize {
        match self.index_of_previous(at, |t| t.is_linebreak()) {
            Some(lb) => lb + 1,
            None => 0,
        }
    }

    /// The whitespace token that begins the line containing `i`, if the
    /// line in fact starts with one.
    pub fn indent_token_for_line_at(&self, i: usize) -> Option<usize> {
        let start = self.start_of_line(i);
        if matches!(self.tokens.get(start), Some(t) if t.is_whitespace()) {
            Some(start)
        } else {
            None
        }
    }
}
