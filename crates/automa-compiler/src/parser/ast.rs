//! Operator AST for parsed patterns.

use serde::Serialize;

/// Anchor kind: `^` (start of input) or `$` (end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Start,
    End,
}

/// One node of the operator tree.
///
/// Built once per compile call and discarded after the NFA is produced.
/// Serializes as an externally tagged tree for the CLI `ast` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Ast {
    Literal { symbol: char },
    Concat { left: Box<Ast>, right: Box<Ast> },
    Union { left: Box<Ast>, right: Box<Ast> },
    Star { inner: Box<Ast> },
    Plus { inner: Box<Ast> },
    Optional { inner: Box<Ast> },
    Anchor { kind: AnchorKind },
}

impl Ast {
    pub fn literal(symbol: char) -> Ast {
        Ast::Literal { symbol }
    }

    pub fn concat(left: Ast, right: Ast) -> Ast {
        Ast::Concat {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn union(left: Ast, right: Ast) -> Ast {
        Ast::Union {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn star(inner: Ast) -> Ast {
        Ast::Star {
            inner: Box::new(inner),
        }
    }

    pub fn plus(inner: Ast) -> Ast {
        Ast::Plus {
            inner: Box::new(inner),
        }
    }

    pub fn optional(inner: Ast) -> Ast {
        Ast::Optional {
            inner: Box::new(inner),
        }
    }

    pub fn anchor(kind: AnchorKind) -> Ast {
        Ast::Anchor { kind }
    }
}
