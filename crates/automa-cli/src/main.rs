mod cli;
mod commands;

use cli::{AstParams, PrintParams, ReplParams, RunParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("print", m)) => {
            let params = PrintParams::from_matches(m);
            commands::print::run(params.into());
        }
        Some(("repl", m)) => {
            let _params = ReplParams::from_matches(m);
            commands::repl::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
