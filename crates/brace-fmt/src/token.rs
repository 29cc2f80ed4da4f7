//! The token model.
//!
//! A token is a tagged variant carrying a string payload. Whitespace, line
//! breaks and comments are first-class tokens, not trivia bolted onto a
//! neighboring node — every rule operates purely on this flat sequence.

/// One of the opener/closer strings a scope can be delimited by, including
/// the pseudo-scope markers used by the indenter for `case`/`default`
/// bodies.
pub const OPENERS: &[&str] = &["(", "[", "{", "<", "/*", "//", "\""];
pub const CLOSERS: &[&str] = &[")", "]", "}", ">", "*/"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(String),
    Identifier(String),
    Keyword(String),
    CommentBody(String),
    Symbol(String),
    StartOfScope(String),
    EndOfScope(String),
    Whitespace(String),
    Linebreak(String),
    Error(String),
}

impl Token {
    pub fn string(s: impl Into<String>) -> Token {
        Token::Symbol(s.into())
    }

    /// The raw payload carried by every token kind.
    pub fn string_ref(&self) -> &str {
        match self {
            Token::Number(s)
            | Token::Identifier(s)
            | Token::Keyword(s)
            | Token::CommentBody(s)
            | Token::Symbol(s)
            | Token::StartOfScope(s)
            | Token::EndOfScope(s)
            | Token::Whitespace(s)
            | Token::Linebreak(s)
            | Token::Error(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Token::Number(s)
            | Token::Identifier(s)
            | Token::Keyword(s)
            | Token::CommentBody(s)
            | Token::Symbol(s)
            | Token::StartOfScope(s)
            | Token::EndOfScope(s)
            | Token::Whitespace(s)
            | Token::Linebreak(s)
            | Token::Error(s) => s,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    pub fn is_linebreak(&self) -> bool {
        matches!(self, Token::Linebreak(_))
    }

    pub fn is_whitespace_or_linebreak(&self) -> bool {
        self.is_whitespace() || self.is_linebreak()
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Token::CommentBody(_))
            || matches!(self, Token::StartOfScope(s) | Token::EndOfScope(s) if s == "//" || s == "/*" || s == "*/")
    }

    pub fn is_whitespace_or_comment(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    pub fn is_whitespace_or_comment_or_linebreak(&self) -> bool {
        self.is_whitespace() || self.is_comment() || self.is_linebreak()
    }

    pub fn is_identifier_or_keyword(&self) -> bool {
        matches!(self, Token::Identifier(_) | Token::Keyword(_))
    }

    pub fn is_start_of_scope(&self) -> bool {
        matches!(self, Token::StartOfScope(_))
    }

    pub fn is_end_of_scope(&self) -> bool {
        matches!(self, Token::EndOfScope(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::Keyword(_))
    }

    pub fn is_keyword_str(&self, s: &str) -> bool {
        matches!(self, Token::Keyword(k) if k == s)
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Token::Symbol(_))
    }

    pub fn is_symbol_str(&self, s: &str) -> bool {
        matches!(self, Token::Symbol(sym) if sym == s)
    }

    pub fn is_start_of_scope_str(&self, s: &str) -> bool {
        matches!(self, Token::StartOfScope(o) if o == s)
    }

    pub fn is_end_of_scope_str(&self, s: &str) -> bool {
        matches!(self, Token::EndOfScope(c) if c == s)
    }

    /// `case`/`default` pseudo-scope openers are carried as `StartOfScope`
    /// tokens whose payload is the keyword itself; the indenter treats the
    /// next `case`/`default`/`}` as their closer.
    pub fn is_case_or_default(&self) -> bool {
        self.is_start_of_scope_str("case") || self.is_start_of_scope_str("default")
    }
}

/// Maps each opener payload to the set of closer payloads that legally
/// terminate its scope.
pub fn closing_scopes_for(opener: &str) -> &'static [&'static str] {
    match opener {
        "(" => &[")"],
        "[" => &["]"],
        "{" => &["}"],
        "<" => &[">"],
        "/*" => &["*/"],
        "//" => &["\n", "\r\n", "\r"],
        "\"" => &["\n", "\r\n", "\r", "\""],
        "case" | "default" => &["case", "default", "}"],
        _ => &[],
    }
}

pub fn closes_scope_for_token(opener: &Token, candidate: &Token) -> bool {
    let opener_str = match opener {
        Token::StartOfScope(s) => s.as_str(),
        _ => return false,
    };
    let closers = closing_scopes_for(opener_str);
    match candidate {
        Token::EndOfScope(s) => closers.contains(&s.as_str()),
        Token::Linebreak(_) => closers.contains(&"\n"),
        Token::StartOfScope(s) if opener_str == "case" || opener_str == "default" => {
            s == "case" || s == "default"
        }
        _ => false,
    }
}
