//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull the relevant fields
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for run/print (`-r` shifts the first positional
//!   from the automaton file to the input string)

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::ast::AstArgs;
use crate::commands::print::PrintArgs;
use crate::commands::run::RunArgs;

pub struct RunParams {
    pub automaton_path: Option<PathBuf>,
    pub regex: Option<String>,
    pub input: Option<String>,
    pub verbose: bool,
    pub dfa: bool,
    pub json: bool,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let automaton_path = m.get_one::<PathBuf>("automaton_path").cloned();
        let regex = m.get_one::<String>("regex").cloned();
        let input = m.get_one::<String>("input").cloned();

        // Positional shifting: when -r is used with a single positional,
        // shift it from automaton_path to input.
        let (automaton_path, input) =
            shift_positional_to_input(regex.is_some(), automaton_path, input);

        Self {
            automaton_path,
            regex,
            input,
            verbose: m.get_flag("verbose"),
            dfa: m.get_flag("dfa"),
            json: m.get_flag("json"),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            regex: p.regex,
            input: p.input,
            verbose: p.verbose,
            dfa: p.dfa,
            json: p.json,
        }
    }
}

pub struct AstParams {
    pub pattern: String,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // required by clap
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self { pattern: p.pattern }
    }
}

pub struct PrintParams {
    pub automaton_path: Option<PathBuf>,
    pub regex: Option<String>,
    pub dfa: bool,
}

impl PrintParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            automaton_path: m.get_one::<PathBuf>("automaton_path").cloned(),
            regex: m.get_one::<String>("regex").cloned(),
            dfa: m.get_flag("dfa"),
        }
    }
}

impl From<PrintParams> for PrintArgs {
    fn from(p: PrintParams) -> Self {
        Self {
            automaton_path: p.automaton_path,
            regex: p.regex,
            dfa: p.dfa,
        }
    }
}

pub struct ReplParams;

impl ReplParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

/// When -r is used with a single positional arg, shift it from the
/// automaton file to the input string. This enables: `automa run -r 'a*' aaa`
fn shift_positional_to_input(
    has_regex: bool,
    automaton_path: Option<PathBuf>,
    input: Option<String>,
) -> (Option<PathBuf>, Option<String>) {
    if has_regex && automaton_path.is_some() && input.is_none() {
        let shifted = automaton_path.map(|p| p.to_string_lossy().into_owned());
        (None, shifted)
    } else {
        (automaton_path, input)
    }
}
