use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use automa_core::automaton::Automaton;
use automa_core::dump;
use automa_engine::run as execute;

use super::loader::load_automaton;

/// One line of REPL input, parsed.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Load(PathBuf),
    Regex(String),
    Process { input: String, verbose: bool },
    Print,
    Exit,
}

/// Parse a non-empty input line. `None` means the line is not a valid command.
pub fn parse_command(line: &str) -> Option<ReplCommand> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let rest: Vec<&str> = words.collect();

    match (head, rest.as_slice()) {
        ("load", [path]) => Some(ReplCommand::Load(PathBuf::from(path))),
        ("regex", [pattern]) => Some(ReplCommand::Regex((*pattern).to_string())),
        ("process", [input]) => Some(ReplCommand::Process {
            input: (*input).to_string(),
            verbose: false,
        }),
        ("process", [input, "--verbose"]) | ("process", ["--verbose", input]) => {
            Some(ReplCommand::Process {
                input: (*input).to_string(),
                verbose: true,
            })
        }
        ("print", []) => Some(ReplCommand::Print),
        ("exit", []) => Some(ReplCommand::Exit),
        _ => None,
    }
}

pub fn run() {
    let stdin = io::stdin();
    let mut automaton: Option<Automaton> = None;

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(ReplCommand::Load(path)) => match load_automaton(Some(&path), None) {
                Ok(a) => {
                    automaton = Some(a);
                    println!("Automaton loaded successfully.");
                }
                Err(msg) => println!("error: {}", msg),
            },
            Some(ReplCommand::Regex(pattern)) => match load_automaton(None, Some(&pattern)) {
                Ok(a) => {
                    automaton = Some(a);
                    println!("Automaton built from regex.");
                }
                Err(msg) => println!("error: {}", msg),
            },
            Some(ReplCommand::Process { input, verbose }) => match &automaton {
                Some(a) => {
                    let result = execute(a, &input, verbose);
                    if let Some(trace) = &result.trace {
                        for step in trace {
                            println!("{}", step);
                        }
                    }
                    println!("{}", result.reason);
                }
                None => println!("No automaton loaded."),
            },
            Some(ReplCommand::Print) => match &automaton {
                Some(a) => print!("{}", dump::render(a)),
                None => println!("No automaton loaded."),
            },
            Some(ReplCommand::Exit) => return,
            None => println!("Invalid command"),
        }
    }
}
