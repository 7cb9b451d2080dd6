pub mod ast;
pub mod loader;
pub mod print;
pub mod repl;
pub mod run;
