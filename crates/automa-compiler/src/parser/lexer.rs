//! Lexer for the pattern syntax.
//!
//! Every token is a single character; literals are alphanumeric. The first
//! unrecognized character aborts the lex with `UnknownSymbol`.

use logos::Logos;

use crate::CompileError;

/// Token kinds produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex("[0-9A-Za-z]")]
    Literal,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,
    #[token("|")]
    Pipe,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("^")]
    Caret,
    #[token("$")]
    Dollar,
}

/// A token: kind plus its character and byte position in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub ch: char,
    pub pos: usize,
}

/// Tokenize a pattern.
pub fn lex(pattern: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(pattern);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let ch = pattern[span.start..].chars().next().unwrap_or('\u{FFFD}');
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                ch,
                pos: span.start,
            }),
            Err(()) => {
                return Err(CompileError::UnknownSymbol {
                    symbol: ch,
                    pos: span.start,
                });
            }
        }
    }

    Ok(tokens)
}
