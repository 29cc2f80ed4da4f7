#![allow(clippy::module_name_repetitions, clippy::too_many_lines)]

//! A token-stream formatter for a brace-delimited, C-family source
//! language: lex once into a flat, mutable token sequence,
//! run a fixed pipeline of independent rules over it, then concatenate.
//!
//! No AST is built. Every rule is a pure function of
//! [`state::FormatterState`] and [`options::Options`]; see [`pipeline`] for
//! the registration order and [`rules`] for the rule set itself.

pub mod error;
pub mod lexer;
pub mod options;
pub mod pipeline;
pub mod rules;
pub mod state;
pub mod token;
pub mod untokenize;

pub use error::FormatError;
pub use options::Options;
pub use state::FormatterState;
pub use token::Token;

/// Formats source text under `options`, running the full pipeline.
#[must_use]
pub fn format_source(src: &str, options: Options) -> String {
    let tokens = lexer::tokenize(src);
    let mut state = FormatterState::new(tokens, options);
    pipeline::run_all(&mut state);
    untokenize::untokenize(state.tokens())
}

/// Formats source text running only the named subset of rules, in
/// pipeline order regardless of the order they're listed in.
#[must_use]
pub fn format_source_with(src: &str, options: Options, rule_names: impl IntoIterator<Item = &'static str>) -> String {
    let tokens = lexer::tokenize(src);
    let mut state = FormatterState::new(tokens, options);
    pipeline::run_named(&mut state, rule_names);
    untokenize::untokenize(state.tokens())
}

/// Lexes `src` and formats the resulting token sequence in place, handing
/// back the [`FormatterState`] for callers that want to inspect tokens
/// rather than just the rendered string (e.g. the LSP-style tooling this
/// crate's driver is grounded on).
#[must_use]
pub fn format_tokens(src: &str, options: Options) -> FormatterState {
    let tokens = lexer::tokenize(src);
    let mut state = FormatterState::new(tokens, options);
    pipeline::run_all(&mut state);
    state
}
