//! Configuration consumed by rules.
//!
//! `Options` is an immutable record threaded through the whole pipeline.
//! The `create_options!` macro (grounded on the equivalent macro in
//! `rhai-fmt::options`) also generates an `OptionsIncomplete` companion
//! struct with every field wrapped in `Option`, so a driver can deserialize
//! a partial config file and merge it over `Options::default()` with
//! `Options::update`.

use serde::{Deserialize, Serialize};

macro_rules! create_options {
    (
        $(#[$attr:meta])*
        pub struct Options {
            $(
                $(#[$field_attr:meta])*
                pub $name:ident: $ty:ty,
            )+
        }
    ) => {
        #[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
        $(#[$attr])*
        pub struct Options {
            $(
                $(#[$field_attr])*
                pub $name: $ty,
            )+
        }

        impl Options {
            pub fn update(&mut self, incomplete: OptionsIncomplete) {
                $(
                    if let Some(v) = incomplete.$name {
                        self.$name = v;
                    }
                )+
            }

            pub fn update_from_str<S: AsRef<str>, I: Iterator<Item = (S, S)>>(
                &mut self,
                values: I,
            ) -> Result<(), OptionParseError> {
                for (key, val) in values {
                    $(
                        if key.as_ref() == stringify!($name) {
                            self.$name =
                                val.as_ref()
                                    .parse()
                                    .map_err(|error| OptionParseError::InvalidValue {
                                        key: key.as_ref().into(),
                                        error: Box::new(error),
                                    })?;

                            continue;
                        }
                    )+

                    return Err(OptionParseError::InvalidOption(key.as_ref().into()));
                }

                Ok(())
            }
        }

        #[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
        $(#[$attr])*
        #[derive(Default)]
        #[serde(deny_unknown_fields, rename_all = "camelCase")]
        pub struct OptionsIncomplete {
            $(
                $(#[$field_attr])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $name: Option<$ty>,
            )+
        }
    };
}

create_options! {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Options {
        /// String used per indent level (spaces or a tab).
        pub indent: String,
        /// Canonical line-break string (`\n`, `\r\n`, or `\r`).
        pub linebreak: String,
        /// Add/remove spaces around `...`/`..<`.
        pub space_around_range_operators: bool,
        /// Prefer `Void` vs `()` in return positions.
        pub use_void: bool,
        /// Enforce or strip a trailing comma in multi-line array literals.
        pub trailing_commas: bool,
        /// Whether comment bodies participate in indent normalization.
        pub indent_comments: bool,
        /// Blank lines get empty indent vs full indent.
        pub truncate_blank_lines: bool,
        /// Open brace on the next line (Allman) vs the same line (K&R).
        pub allman_braces: bool,
        /// Drop blank lines at the end of a scope.
        pub remove_blank_lines: bool,
        /// Insert a blank line between spaceable type-body scopes.
        pub insert_blank_lines: bool,
        /// Keep `;` separating statements that share one line.
        pub allow_inline_semicolons: bool,
        /// Remove a leading `//` header block.
        pub strip_header: bool,
        /// Input is a code fragment; suppresses whole-file rules.
        pub fragment: bool,
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: String::from("    "),
            linebreak: String::from("\n"),
            space_around_range_operators: true,
            use_void: true,
            trailing_commas: true,
            indent_comments: true,
            truncate_blank_lines: true,
            allman_braces: false,
            remove_blank_lines: true,
            insert_blank_lines: true,
            allow_inline_semicolons: true,
            strip_header: true,
            fragment: false,
        }
    }
}

#[derive(Debug)]
pub enum OptionParseError {
    InvalidOption(String),
    InvalidValue {
        key: String,
        error: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl core::fmt::Display for OptionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionParseError::InvalidOption(k) => {
                write!(f, r#"invalid formatting option "{k}""#)
            }
            OptionParseError::InvalidValue { key, error } => {
                write!(f, r#"invalid value for option "{key}": {error}"#)
            }
        }
    }
}

impl std::error::Error for OptionParseError {}
