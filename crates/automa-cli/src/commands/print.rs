use std::path::PathBuf;

use automa_compiler::determinize;
use automa_core::dump;

use super::loader::load_automaton;

pub struct PrintArgs {
    pub automaton_path: Option<PathBuf>,
    pub regex: Option<String>,
    pub dfa: bool,
}

pub fn run(args: PrintArgs) {
    let automaton =
        match load_automaton(args.automaton_path.as_deref(), args.regex.as_deref()) {
            Ok(a) => a,
            Err(msg) => {
                eprintln!("error: {}", msg);
                std::process::exit(1);
            }
        };

    let automaton = if args.dfa {
        determinize(&automaton)
    } else {
        automaton
    };

    print!("{}", dump::render(&automaton));
}
