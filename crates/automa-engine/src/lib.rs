//! Execution engine for automa.
//!
//! Simulates an automaton over an input string via iterative epsilon-closure
//! multi-state stepping. A DFA is an NFA restricted to singleton transitions,
//! so one algorithm serves both representations.

pub mod engine;

pub use engine::{MatchResult, RuntimeError, TraceStep, Verdict, run};
