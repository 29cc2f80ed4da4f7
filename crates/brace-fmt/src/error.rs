use thiserror::Error;

/// Errors the core crate can surface to a driver.
///
/// The current rule set is total (every rule always completes): lexer
/// errors propagate as ordinary `Token::Error` values rather than as
/// `Result::Err`. This type exists so a future fallible rule
/// does not force an API break; nothing in this crate constructs
/// `RuleFailed` today.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("rule `{rule}` failed: {message}")]
    RuleFailed { rule: &'static str, message: String },
}
