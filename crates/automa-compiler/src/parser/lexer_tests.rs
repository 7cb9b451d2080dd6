use super::lexer::{TokenKind, lex};
use crate::CompileError;

#[test]
fn lex_literals_and_operators() {
    let tokens = lex("a*(b|c)+").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Literal,
            TokenKind::Star,
            TokenKind::ParenOpen,
            TokenKind::Literal,
            TokenKind::Pipe,
            TokenKind::Literal,
            TokenKind::ParenClose,
            TokenKind::Plus,
        ]
    );
    assert_eq!(tokens[0].ch, 'a');
    assert_eq!(tokens[3].ch, 'b');
    assert_eq!(tokens[5].ch, 'c');
}

#[test]
fn lex_anchors() {
    let tokens = lex("^a$").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Caret);
    assert_eq!(tokens[2].kind, TokenKind::Dollar);
}

#[test]
fn lex_tracks_positions() {
    let tokens = lex("ab?").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn lex_empty_pattern_yields_no_tokens() {
    assert!(lex("").unwrap().is_empty());
}

#[test]
fn unknown_symbol_aborts() {
    let err = lex("a-b").unwrap_err();
    assert_eq!(
        err,
        CompileError::UnknownSymbol {
            symbol: '-',
            pos: 1
        }
    );
}

#[test]
fn whitespace_is_unknown() {
    let err = lex("a b").unwrap_err();
    assert!(matches!(err, CompileError::UnknownSymbol { symbol: ' ', .. }));
}

#[test]
fn non_ascii_symbol_reported_whole() {
    let err = lex("aεb").unwrap_err();
    assert!(matches!(
        err,
        CompileError::UnknownSymbol {
            symbol: 'ε',
            pos: 1
        }
    ));
}
