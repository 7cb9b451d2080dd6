//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("automa")
        .about("Compile regular expressions to finite automata and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(run_command())
        .subcommand(ast_command())
        .subcommand(print_command())
        .subcommand(repl_command())
}

/// Run an automaton over an input string.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Run an automaton over an input string")
        .override_usage(
            "\
  automa run <AUTOMATON> <INPUT>
  automa run -r <PATTERN> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  automa run dfa.json abba            # automaton from a description file
  automa run -r '(a|b)*c' abc         # automaton from a regex
  automa run -r 'a+' aaa --verbose    # show each transition taken
  automa run -r 'a+' aaa --dfa --json # determinize, JSON result"#,
        )
        .arg(automaton_path_arg())
        .arg(input_arg())
        .arg(regex_arg())
        .arg(verbose_arg())
        .arg(dfa_arg())
        .arg(json_arg())
}

/// Show the parsed regex AST as JSON.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the parsed regex AST as JSON")
        .override_usage("  automa ast <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  automa ast 'a(b|c)*'
  automa ast '^ab+$'"#,
        )
        .arg(pattern_arg())
}

/// Print automaton structure.
pub fn print_command() -> Command {
    Command::new("print")
        .about("Print automaton structure")
        .override_usage(
            "\
  automa print <AUTOMATON>
  automa print -r <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  automa print nfa.json               # states, alphabet, transitions
  automa print -r 'a|b' --dfa         # determinized regex automaton"#,
        )
        .arg(automaton_path_arg())
        .arg(regex_arg())
        .arg(dfa_arg())
}

/// Interactive session.
pub fn repl_command() -> Command {
    Command::new("repl")
        .about("Interactive session")
        .after_help(
            r#"COMMANDS:
  load <file>                 load an automaton description
  regex <pattern>             build an automaton from a regex
  process <input> [--verbose] run the automaton over an input string
  print                       print the current automaton
  exit                        leave the session"#,
        )
}
