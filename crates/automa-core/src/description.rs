//! JSON interchange format for externally supplied automata.
//!
//! A description file carries `states`, `alphabet`,
//! `start_state`, `accept_states`, and a `delta` list of
//! `{state, input, next_state}` triples. A reserved token in `alphabet` or
//! `input` denotes an epsilon move.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::automaton::{Automaton, AutomatonBuilder, StateId};

/// Reserved epsilon token in description files.
pub const EPSILON_TOKEN: &str = "ε";

/// Legacy spelling of the epsilon token, accepted on input.
pub const EPSILON_ALIAS: &str = "<EPSILON>";

fn is_epsilon_token(s: &str) -> bool {
    s == EPSILON_TOKEN || s == EPSILON_ALIAS
}

/// Error while parsing or validating an automaton description.
///
/// No partial automaton is ever returned: the first violation aborts the
/// load.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A state name appears more than once in `states`.
    #[error("duplicate state '{0}'")]
    DuplicateState(String),

    /// `start_state` does not appear in `states`.
    #[error("missing start state '{0}'")]
    MissingStartState(String),

    /// An accept state or transition endpoint does not appear in `states`.
    #[error("unknown state reference '{0}'")]
    UnknownStateReference(String),

    /// An alphabet entry or transition input that is neither an epsilon
    /// token nor a single character.
    #[error("invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One `delta` triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaEntry {
    pub state: String,
    pub input: String,
    pub next_state: String,
}

/// Raw automaton description as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub start_state: String,
    pub accept_states: Vec<String>,
    pub delta: Vec<DeltaEntry>,
}

impl Description {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the description as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ValidationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the description and build the immutable automaton.
    pub fn build(&self) -> Result<Automaton, ValidationError> {
        let mut builder = AutomatonBuilder::new();
        let mut ids: IndexMap<&str, StateId> = IndexMap::new();

        for name in &self.states {
            if ids.contains_key(name.as_str()) {
                return Err(ValidationError::DuplicateState(name.clone()));
            }
            ids.insert(name, builder.add_state(name.clone()));
        }

        let Some(&start) = ids.get(self.start_state.as_str()) else {
            return Err(ValidationError::MissingStartState(self.start_state.clone()));
        };

        for name in &self.accept_states {
            let Some(&id) = ids.get(name.as_str()) else {
                return Err(ValidationError::UnknownStateReference(name.clone()));
            };
            builder.mark_accept(id);
        }

        // Declared symbols are known to the engine even when no transition
        // uses them.
        for sym in &self.alphabet {
            if !is_epsilon_token(sym) {
                builder.add_symbol(parse_symbol(sym)?);
            }
        }

        for entry in &self.delta {
            let Some(&from) = ids.get(entry.state.as_str()) else {
                return Err(ValidationError::UnknownStateReference(entry.state.clone()));
            };
            let Some(&to) = ids.get(entry.next_state.as_str()) else {
                return Err(ValidationError::UnknownStateReference(
                    entry.next_state.clone(),
                ));
            };
            let symbol = if is_epsilon_token(&entry.input) {
                None
            } else {
                Some(parse_symbol(&entry.input)?)
            };
            builder.add_transition(from, symbol, to);
        }

        Ok(builder.build(start))
    }

    /// Description of an existing automaton, for saving.
    pub fn from_automaton(automaton: &Automaton) -> Self {
        let mut alphabet: Vec<String> =
            automaton.alphabet().iter().map(|c| c.to_string()).collect();
        let mut delta = Vec::new();
        let mut has_epsilon = false;

        for (from, symbol, to) in automaton.transitions() {
            let input = match symbol {
                Some(c) => c.to_string(),
                None => {
                    has_epsilon = true;
                    EPSILON_TOKEN.to_string()
                }
            };
            delta.push(DeltaEntry {
                state: automaton.state_name(from).to_string(),
                input,
                next_state: automaton.state_name(to).to_string(),
            });
        }

        // The epsilon token in the alphabet list is what marks a description
        // as nondeterministic for loaders.
        if has_epsilon {
            alphabet.push(EPSILON_TOKEN.to_string());
        }

        Self {
            states: automaton.state_names().map(str::to_string).collect(),
            alphabet,
            start_state: automaton.state_name(automaton.start()).to_string(),
            accept_states: automaton
                .accepts()
                .iter()
                .map(|&id| automaton.state_name(id).to_string())
                .collect(),
            delta,
        }
    }
}

fn parse_symbol(s: &str) -> Result<char, ValidationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::InvalidSymbol(s.to_string())),
    }
}
