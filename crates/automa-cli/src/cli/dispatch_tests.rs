//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Positional shifting: -r shifts the first positional to the input string
//! 2. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{ast_command, print_command, run_command};

#[test]
fn run_with_file_and_input() {
    let m = run_command()
        .try_get_matches_from(["run", "dfa.json", "abba"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.automaton_path, Some(PathBuf::from("dfa.json")));
    assert_eq!(params.input, Some("abba".to_string()));
    assert_eq!(params.regex, None);
    assert!(!params.verbose);
    assert!(!params.dfa);
    assert!(!params.json);
}

#[test]
fn run_with_regex_shifts_positional_to_input() {
    let m = run_command()
        .try_get_matches_from(["run", "-r", "a*", "aaa"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.automaton_path, None);
    assert_eq!(params.regex, Some("a*".to_string()));
    assert_eq!(params.input, Some("aaa".to_string()));
}

#[test]
fn run_without_regex_does_not_shift() {
    let m = run_command()
        .try_get_matches_from(["run", "dfa.json"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert_eq!(params.automaton_path, Some(PathBuf::from("dfa.json")));
    assert_eq!(params.input, None);
}

#[test]
fn run_flags_are_extracted() {
    let m = run_command()
        .try_get_matches_from(["run", "-r", "a+", "aa", "--verbose", "--dfa", "--json"])
        .unwrap();
    let params = RunParams::from_matches(&m);

    assert!(params.verbose);
    assert!(params.dfa);
    assert!(params.json);
}

#[test]
fn ast_requires_a_pattern() {
    assert!(ast_command().try_get_matches_from(["ast"]).is_err());

    let m = ast_command()
        .try_get_matches_from(["ast", "a(b|c)*"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.pattern, "a(b|c)*");
}

#[test]
fn print_accepts_file_or_regex() {
    let m = print_command()
        .try_get_matches_from(["print", "nfa.json"])
        .unwrap();
    let params = PrintParams::from_matches(&m);
    assert_eq!(params.automaton_path, Some(PathBuf::from("nfa.json")));
    assert!(!params.dfa);

    let m = print_command()
        .try_get_matches_from(["print", "-r", "a|b", "--dfa"])
        .unwrap();
    let params = PrintParams::from_matches(&m);
    assert_eq!(params.regex, Some("a|b".to_string()));
    assert!(params.dfa);
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(build_cli().try_get_matches_from(["automa", "frobnicate"]).is_err());
}
