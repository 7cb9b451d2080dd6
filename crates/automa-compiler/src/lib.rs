//! Regex-to-automaton compiler.
//!
//! This crate provides the compilation pipeline for the restricted regex
//! syntax:
//! - `parser` - lexer and recursive-descent parser producing an operator AST
//! - `thompson` - Thompson construction from AST to NFA
//! - `determinize` - subset construction from NFA to DFA
//!
//! The pipeline is `pattern -> parse -> build_nfa -> [determinize]`; the
//! [`compile_regex`] entry point covers the first two stages.

pub mod determinize;
pub mod parser;
pub mod thompson;

#[cfg(test)]
mod thompson_tests;

use automa_core::Automaton;

/// Errors raised while compiling a pattern.
///
/// Fatal to the compile call: surfaced verbatim to the caller, never retried,
/// and no partial automaton is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A character that is neither alphanumeric nor a recognized operator.
    #[error("unknown symbol '{symbol}' at position {pos}")]
    UnknownSymbol { symbol: char, pos: usize },

    /// Parentheses do not match.
    #[error("unbalanced group")]
    UnbalancedGroup,

    /// Zero-length pattern, or an alternation branch with no atoms.
    #[error("empty expression")]
    EmptyExpression,

    /// `^` somewhere other than the start of the pattern, or `$` somewhere
    /// other than its end.
    #[error("anchor at invalid position {pos}")]
    InvalidAnchorPosition { pos: usize },

    /// An operator in a position where an atom is required.
    #[error("unexpected token '{symbol}' at position {pos}")]
    UnexpectedToken { symbol: char, pos: usize },
}

pub use determinize::determinize;
pub use parser::{AnchorKind, Ast, parse};
pub use thompson::build_nfa;

/// Compile a pattern into an NFA: parse, then Thompson construction.
///
/// The AST is built once and discarded as soon as the NFA exists.
pub fn compile_regex(pattern: &str) -> Result<Automaton, CompileError> {
    let ast = parser::parse(pattern)?;
    Ok(thompson::build_nfa(&ast))
}
