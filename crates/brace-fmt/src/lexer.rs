//! A minimal scanner producing the initial token sequence the rule engine
//! consumes. It classifies tokens well enough to drive the rules without
//! implementing a full grammar, disambiguating `<`/`>` only by emitting
//! plain `Symbol` tokens for them (the indenter and spacing rules key off
//! neighboring tokens, not off full bracket matching of generics).
//! Malformed input never panics: unrecognized bytes become `Token::Error`.
//!
//! The raw character classes (trivia, comments, string literals, numbers,
//! words, punctuation) are matched with `logos`; `scan` only translates the
//! resulting lexeme stream into this crate's richer `Token` model, which
//! needs three tokens (`StartOfScope`/`CommentBody`/`EndOfScope`) per
//! comment or string where `logos` itself only needs one.

use crate::token::Token;
use logos::{Lexer, Logos};

const KEYWORDS: &[&str] = &[
    "let", "var", "func", "class", "struct", "enum", "protocol", "extension", "init", "deinit",
    "subscript", "typealias", "associatedtype", "if", "else", "guard", "switch", "case",
    "default", "for", "while", "repeat", "do", "catch", "try", "throw", "throws", "rethrows",
    "return", "break", "continue", "fallthrough", "import", "as", "is", "in", "where", "inout",
    "private", "fileprivate", "internal", "public", "open", "final", "static", "class", "lazy",
    "weak", "unowned", "mutating", "nonmutating", "override", "convenience", "required",
    "dynamic", "optional", "prefix", "postfix", "infix", "operator", "true", "false", "nil",
    "self", "Self", "super",
];

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Lexeme {
    #[error]
    Error,

    #[regex(r"\r\n|\n|\r")]
    Linebreak,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"//[^\n\r]*")]
    LineComment,

    #[token("/*", bump_to_block_comment_end)]
    BlockComment,

    #[token("\"", bump_to_string_end)]
    StringLiteral,

    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]+)?")]
    Number,

    #[regex(r"[@#][A-Za-z0-9_]*")]
    Attribute,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Longest match wins regardless of declaration order, so these and the
    // single-character symbols below never compete on anything but length.
    #[regex(
        r"\.\.\.|\.\.<|\?\?=|<<=|>>=|->|=>|\?\?|\|\||&&=|\|\|=|&&|===|!==|==|!=|<=|>=|\+=|-=|\*=|/=|%=|&=|\|=|\^=|<<|>>"
    )]
    MultiSymbol,

    #[regex(r"[+\-*/%=<>!&|^~?:.,;]")]
    Symbol,
}

/// Scans through `"*/"`, or to end of input if it's never found, so an
/// unterminated block comment still yields a single span rather than
/// aborting the lexer.
fn bump_to_block_comment_end(lex: &mut Lexer<Lexeme>) {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
}

/// Scans to the closing quote, honoring backslash escapes, and stops short
/// (without bumping past it) at a bare newline or end of input so unterminated
/// strings are reported as such.
fn bump_to_string_end(lex: &mut Lexer<Lexeme>) {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'"' => {
                lex.bump(i + 1);
                return;
            }
            b'\n' => break,
            _ => i += 1,
        }
    }
    lex.bump(i);
}

pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokens = scan(src);
    reclassify_generics(&mut tokens);
    tokens
}

fn scan(src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(src);

    while let Some(lexeme) = lexer.next() {
        let text = lexer.slice();
        match lexeme {
            Lexeme::Linebreak => tokens.push(Token::Linebreak(text.to_string())),
            Lexeme::Whitespace => tokens.push(Token::Whitespace(text.to_string())),
            Lexeme::LineComment => push_line_comment(&mut tokens, text),
            Lexeme::BlockComment => push_block_comment(&mut tokens, text),
            Lexeme::StringLiteral => push_string_literal(&mut tokens, text),
            Lexeme::Number => tokens.push(Token::Number(text.to_string())),
            Lexeme::Attribute => tokens.push(Token::Keyword(text.to_string())),
            Lexeme::Word => {
                if KEYWORDS.contains(&text) {
                    tokens.push(Token::Keyword(text.to_string()));
                } else {
                    tokens.push(Token::Identifier(text.to_string()));
                }
            }
            Lexeme::LParen => tokens.push(Token::StartOfScope("(".to_string())),
            Lexeme::RParen => tokens.push(Token::EndOfScope(")".to_string())),
            Lexeme::LBracket => tokens.push(Token::StartOfScope("[".to_string())),
            Lexeme::RBracket => tokens.push(Token::EndOfScope("]".to_string())),
            Lexeme::LBrace => tokens.push(Token::StartOfScope("{".to_string())),
            Lexeme::RBrace => tokens.push(Token::EndOfScope("}".to_string())),
            Lexeme::MultiSymbol | Lexeme::Symbol => tokens.push(Token::Symbol(text.to_string())),
            Lexeme::Error => tokens.push(Token::Error(text.to_string())),
        }
    }

    tokens
}

fn push_line_comment(tokens: &mut Vec<Token>, text: &str) {
    tokens.push(Token::StartOfScope("//".to_string()));
    let body = &text[2..];
    if !body.is_empty() {
        tokens.push(Token::CommentBody(body.to_string()));
    }
}

fn push_block_comment(tokens: &mut Vec<Token>, text: &str) {
    tokens.push(Token::StartOfScope("/*".to_string()));
    let terminated = text.len() >= 4 && text.ends_with("*/");
    let body_end = if terminated { text.len() - 2 } else { text.len() };
    let body = &text[2..body_end];
    if !body.is_empty() {
        tokens.push(Token::CommentBody(body.to_string()));
    }
    if terminated {
        tokens.push(Token::EndOfScope("*/".to_string()));
    } else {
        tokens.push(Token::Error(String::new()));
    }
}

fn push_string_literal(tokens: &mut Vec<Token>, text: &str) {
    tokens.push(Token::StartOfScope("\"".to_string()));
    let terminated = text.len() >= 2 && text.ends_with('"');
    let body_end = if terminated { text.len() - 1 } else { text.len() };
    let body = &text[1..body_end];
    if !body.is_empty() {
        tokens.push(Token::CommentBody(body.to_string()));
    }
    if terminated {
        tokens.push(Token::EndOfScope("\"".to_string()));
    } else {
        tokens.push(Token::Error(String::new()));
    }
}

/// Disambiguates `<`/`>` as generics vs comparison operators.
///
/// Only an identifier-preceded `<` is considered; the scan forward allows
/// the handful of token kinds that legally appear inside a generic argument
/// or constraint list and bails out (leaving both as plain `Symbol`s) on
/// anything else rather than trying to fully parse the expression.
fn reclassify_generics(tokens: &mut [Token]) {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].is_symbol_str("<") {
            let preceded_by_identifier = (0..i)
                .rev()
                .find(|&j| !tokens[j].is_whitespace())
                .map(|j| tokens[j].is_identifier_or_keyword() || tokens[j].is_end_of_scope_str(">"))
                .unwrap_or(false);

            if preceded_by_identifier {
                if let Some(close) = find_generic_close(tokens, i) {
                    tokens[i] = Token::StartOfScope("<".to_string());
                    tokens[close] = Token::EndOfScope(">".to_string());
                    i = close + 1;
                    continue;
                }
            }
        }
        i += 1;
    }
}

fn find_generic_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 1i32;
    let mut j = open + 1;
    while j < tokens.len() {
        match &tokens[j] {
            t if t.is_symbol_str("<") => depth += 1,
            t if t.is_symbol_str(">") => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            Token::Identifier(_)
            | Token::Keyword(_)
            | Token::Number(_)
            | Token::Whitespace(_) => {}
            Token::Symbol(s) if matches!(s.as_str(), "," | ":" | "?" | "." | "&" | "...") => {}
            Token::StartOfScope(s) if s == "[" || s == "(" => {}
            Token::EndOfScope(s) if s == "]" || s == ")" => {}
            _ => return None,
        }
        j += 1;
    }
    None
}
