//! Execution-time errors.
//!
//! Both variants are data errors: `run` always recovers them into a `Reject`
//! verdict with the error's message as reason. They never abort the calling
//! process and never escape `run`.

/// Error for a single failed execution step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The input contains a symbol outside the automaton's alphabet.
    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(char),

    /// No state in the current set has a transition on the symbol.
    /// `states` is pre-rendered (`state 'q0'` or `states {q0 q1}`).
    #[error("No transition for '{symbol}' in {states}")]
    NoTransition { symbol: char, states: String },
}
