//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so `run` and `print` share the same automaton input definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Automaton description file (positional).
pub fn automaton_path_arg() -> Arg {
    Arg::new("automaton_path")
        .value_name("AUTOMATON")
        .value_parser(value_parser!(PathBuf))
        .help("Automaton description file (JSON)")
}

/// Inline regular expression (-r/--regex).
pub fn regex_arg() -> Arg {
    Arg::new("regex")
        .short('r')
        .long("regex")
        .value_name("PATTERN")
        .help("Build the automaton from a regular expression")
}

/// Input string to process (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .help("Input string to process")
}

/// Regular expression pattern (positional, required).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Regular expression to parse")
}

/// Show each transition taken (--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show each transition taken")
}

/// Determinize before use (--dfa).
pub fn dfa_arg() -> Arg {
    Arg::new("dfa")
        .long("dfa")
        .action(ArgAction::SetTrue)
        .help("Convert the automaton to a DFA first")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output the match result as JSON")
}
