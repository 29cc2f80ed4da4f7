//! The rule set: ~27 independent, pure transformations of a
//! [`crate::state::FormatterState`]. Every rule is registered by name in
//! [`crate::pipeline::PIPELINE`] in a fixed order; rules communicate only
//! through the token sequence.

pub mod blank_lines;
pub mod braces;
pub mod comments;
pub mod consecutive_spaces;
pub mod else_on_same_line;
pub mod indent;
pub mod linebreaks;
pub mod operators;
pub mod ranges;
pub mod redundant_parens;
pub mod semicolons;
pub mod spacing_braces;
pub mod spacing_brackets;
pub mod spacing_common;
pub mod spacing_generics;
pub mod spacing_parens;
pub mod specifiers;
pub mod strip_header;
pub mod todos;
pub mod trailing_commas;
pub mod trailing_whitespace;
pub mod void;
