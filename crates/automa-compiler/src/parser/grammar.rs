//! Recursive-descent parser for the pattern grammar.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! expr    := term ('|' term)*
//! term    := factor+
//! factor  := atom postfix?
//! postfix := '*' | '+' | '?'
//! atom    := literal | '(' expr ')' | anchor
//! ```
//!
//! Concatenation is implicit juxtaposition of factors. Anchors are admitted
//! only at the pattern boundaries: `^` as the very first token, `$` as the
//! very last. A correctly placed anchor compiles to a positional assertion,
//! never a literal.

use super::ast::{AnchorKind, Ast};
use super::lexer::{Token, TokenKind, lex};
use crate::CompileError;

/// Parse a pattern into an AST. Pure function, no side effects.
pub fn parse(pattern: &str) -> Result<Ast, CompileError> {
    let tokens = lex(pattern)?;
    if tokens.is_empty() {
        return Err(CompileError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let ast = parser.parse_expr()?;

    // A leftover token here is either a stray ')' or a postfix operator
    // with nothing to apply to.
    match parser.peek() {
        None => Ok(ast),
        Some(t) if t.kind == TokenKind::ParenClose => Err(CompileError::UnbalancedGroup),
        Some(t) => Err(unexpected(t)),
    }
}

fn unexpected(token: &Token) -> CompileError {
    CompileError::UnexpectedToken {
        symbol: token.ch,
        pos: token.pos,
    }
}

fn starts_factor(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Literal | TokenKind::ParenOpen | TokenKind::Caret | TokenKind::Dollar
    )
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    /// Group nesting depth, to tell a stray `)` from an empty group.
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// `expr := term ('|' term)*`, folded left into `Union` nodes.
    fn parse_expr(&mut self) -> Result<Ast, CompileError> {
        let mut ast = self.parse_term()?;
        while self.peek().is_some_and(|t| t.kind == TokenKind::Pipe) {
            self.bump();
            let rhs = self.parse_term()?;
            ast = Ast::union(ast, rhs);
        }
        Ok(ast)
    }

    /// `term := factor+`, folded left into `Concat` nodes.
    fn parse_term(&mut self) -> Result<Ast, CompileError> {
        let mut ast: Option<Ast> = None;
        while self.peek().is_some_and(|t| starts_factor(t.kind)) {
            let factor = self.parse_factor()?;
            ast = Some(match ast {
                Some(prev) => Ast::concat(prev, factor),
                None => factor,
            });
        }

        match ast {
            Some(ast) => Ok(ast),
            // No factor at all: an empty branch, a stray ')' outside any
            // group, or an operator with nothing to apply to.
            None => match self.peek() {
                Some(t) if t.kind == TokenKind::ParenClose && self.depth == 0 => {
                    Err(CompileError::UnbalancedGroup)
                }
                Some(t) if !matches!(t.kind, TokenKind::Pipe | TokenKind::ParenClose) => {
                    Err(unexpected(t))
                }
                // An open group that ran out of tokens never closes.
                None if self.depth > 0 => Err(CompileError::UnbalancedGroup),
                _ => Err(CompileError::EmptyExpression),
            },
        }
    }

    /// `factor := atom postfix?`
    fn parse_factor(&mut self) -> Result<Ast, CompileError> {
        let atom = self.parse_atom()?;
        let is_anchor = matches!(atom, Ast::Anchor { .. });

        if let Some(&token) = self.peek()
            && matches!(
                token.kind,
                TokenKind::Star | TokenKind::Plus | TokenKind::Question
            )
        {
            // Quantifying a positional assertion is meaningless.
            if is_anchor {
                return Err(unexpected(&token));
            }
            self.bump();
            let node = match token.kind {
                TokenKind::Star => Ast::star(atom),
                TokenKind::Plus => Ast::plus(atom),
                TokenKind::Question => Ast::optional(atom),
                _ => unreachable!("guarded by the postfix match above"),
            };
            return Ok(node);
        }

        Ok(atom)
    }

    /// `atom := literal | '(' expr ')' | anchor`
    fn parse_atom(&mut self) -> Result<Ast, CompileError> {
        let Some(&token) = self.peek() else {
            return Err(CompileError::EmptyExpression);
        };

        match token.kind {
            TokenKind::Literal => {
                self.bump();
                Ok(Ast::literal(token.ch))
            }
            TokenKind::ParenOpen => self.parse_group(),
            TokenKind::Caret => {
                // `^` is only meaningful as the first atom of the whole
                // pattern, which means the very first token.
                if self.pos != 0 {
                    return Err(CompileError::InvalidAnchorPosition { pos: token.pos });
                }
                self.bump();
                Ok(Ast::anchor(AnchorKind::Start))
            }
            TokenKind::Dollar => {
                // `$` is only meaningful as the last atom, the very last token.
                if self.pos != self.tokens.len() - 1 {
                    return Err(CompileError::InvalidAnchorPosition { pos: token.pos });
                }
                self.bump();
                Ok(Ast::anchor(AnchorKind::End))
            }
            TokenKind::Star
            | TokenKind::Plus
            | TokenKind::Question
            | TokenKind::Pipe
            | TokenKind::ParenClose => Err(unexpected(&token)),
        }
    }

    /// `'(' expr ')'`
    fn parse_group(&mut self) -> Result<Ast, CompileError> {
        self.bump(); // '('
        self.depth += 1;
        let ast = self.parse_expr()?;
        self.depth -= 1;
        match self.bump() {
            Some(t) if t.kind == TokenKind::ParenClose => Ok(ast),
            _ => Err(CompileError::UnbalancedGroup),
        }
    }
}
