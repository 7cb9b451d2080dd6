//! Multi-state simulation engine.

mod error;
mod result;
mod runner;


pub use error::RuntimeError;
pub use result::{MatchResult, TraceStep, Verdict};
pub use runner::run;
