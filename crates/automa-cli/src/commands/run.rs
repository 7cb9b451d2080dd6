use std::path::PathBuf;

use automa_compiler::determinize;
use automa_engine::run as execute;

use super::loader::load_automaton;

pub struct RunArgs {
    pub automaton_path: Option<PathBuf>,
    pub regex: Option<String>,
    pub input: Option<String>,
    pub verbose: bool,
    pub dfa: bool,
    pub json: bool,
}

pub fn run(args: RunArgs) {
    let Some(input) = args.input else {
        eprintln!("error: an input string is required");
        std::process::exit(1);
    };

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

    let result = execute(&automaton, &input, args.verbose);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(trace) = &result.trace {
        for step in trace {
            println!("{}", step);
        }
    }
    println!("{}", result.reason);
}
