//! Ordered application of rules.
//!
//! Rationale for the fixed order: normalization first, then structural
//! edits, then spacing, then indentation, then vertical whitespace, then
//! header strip. Each rule is idempotent on its own output and monotone
//! with its predecessors; selecting any subset (e.g. `indent` alone) must
//! not require any other rule to have run first.

use crate::rules;
use crate::state::FormatterState;

pub type RuleFn = fn(&mut FormatterState);

/// `(name, function)` pairs in the exact order the pipeline runs them.
pub const PIPELINE: &[(&str, RuleFn)] = &[
    ("linebreaks", rules::linebreaks::linebreaks),
    ("semicolons", rules::semicolons::semicolons),
    ("specifiers", rules::specifiers::specifiers),
    ("redundantParens", rules::redundant_parens::redundant_parens),
    ("void", rules::void::void),
    ("braces", rules::braces::braces),
    ("ranges", rules::ranges::ranges),
    ("trailingCommas", rules::trailing_commas::trailing_commas),
    ("elseOnSameLine", rules::else_on_same_line::else_on_same_line),
    ("spaceAroundParens", rules::spacing_parens::space_around_parens),
    ("spaceInsideParens", rules::spacing_parens::space_inside_parens),
    ("spaceAroundBrackets", rules::spacing_brackets::space_around_brackets),
    ("spaceInsideBrackets", rules::spacing_brackets::space_inside_brackets),
    ("spaceAroundBraces", rules::spacing_braces::space_around_braces),
    ("spaceInsideBraces", rules::spacing_braces::space_inside_braces),
    ("spaceAroundGenerics", rules::spacing_generics::space_around_generics),
    ("spaceInsideGenerics", rules::spacing_generics::space_inside_generics),
    ("spaceAroundOperators", rules::operators::space_around_operators),
    ("spaceAroundComments", rules::comments::space_around_comments),
    ("spaceInsideComments", rules::comments::space_inside_comments),
    ("consecutiveSpaces", rules::consecutive_spaces::consecutive_spaces),
    ("todos", rules::todos::todos),
    ("indent", rules::indent::indent),
    (
        "blankLinesAtEndOfScope",
        rules::blank_lines::blank_lines_at_end_of_scope,
    ),
    (
        "blankLinesBetweenScopes",
        rules::blank_lines::blank_lines_between_scopes,
    ),
    (
        "consecutiveBlankLines",
        rules::blank_lines::consecutive_blank_lines,
    ),
    (
        "trailingWhitespace",
        rules::trailing_whitespace::trailing_whitespace,
    ),
    (
        "linebreakAtEndOfFile",
        rules::trailing_whitespace::linebreak_at_end_of_file,
    ),
    ("stripHeader", rules::strip_header::strip_header),
];

/// Runs every rule in `PIPELINE`, in order, once.
pub fn run_all(state: &mut FormatterState) {
    run_named(state, PIPELINE.iter().map(|(name, _)| *name));
}

/// Runs the subset of `PIPELINE` named in `names`, preserving pipeline
/// order regardless of the order `names` lists them in.
pub fn run_named(state: &mut FormatterState, names: impl IntoIterator<Item = &'static str>) {
    let wanted: Vec<&'static str> = names.into_iter().collect();
    for (name, rule) in PIPELINE {
        if wanted.contains(name) {
            let _span = tracing::debug_span!("rule", name).entered();
            let before = state.len();
            rule(state);
            tracing::trace!(name, before, after = state.len(), "rule applied");
        }
    }
}
