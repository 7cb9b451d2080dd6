//! Lexer, AST, and recursive-descent parser for the pattern syntax.

mod ast;
mod grammar;
mod lexer;

#[cfg(test)]
mod lexer_tests;

pub use ast::{AnchorKind, Ast};
pub use grammar::parse;
pub use lexer::{Token, TokenKind, lex};
