//! Core data structures for automa.
//!
//! This crate provides the pieces shared by the compiler, the engine, and the
//! CLI:
//! - `automaton` - the unified automaton model (state table, alphabet,
//!   transition relation, epsilon closure)
//! - `description` - the JSON interchange format and its validation into the
//!   model
//! - `dump` - human-readable rendering of automaton structure

pub mod automaton;
pub mod description;
pub mod dump;

#[cfg(test)]
mod automaton_tests;

pub use automaton::{Automaton, AutomatonBuilder, StateId};
pub use description::{DeltaEntry, Description, EPSILON_TOKEN, ValidationError};
