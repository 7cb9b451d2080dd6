//! The unified automaton model.
//!
//! A single transition relation keyed by `(state, optional symbol)` covers
//! both deterministic and nondeterministic automata: a DFA is simply an
//! automaton with no epsilon entries and exactly one target per entry. One
//! representation means one execution algorithm downstream.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Index into an automaton's state table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A finite automaton: state table, alphabet, start state, accept set, and
/// transition relation.
///
/// Immutable once built. [`AutomatonBuilder`] is the only way to construct
/// one and the only source of [`StateId`]s, so every stored id is valid by
/// construction. The alphabet and state set are fixed at build time and never
/// reassigned. Execution only reads the automaton, so a built value can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Automaton {
    names: Vec<String>,
    alphabet: IndexSet<char>,
    start: StateId,
    accepts: IndexSet<StateId>,
    delta: IndexMap<(StateId, Option<char>), IndexSet<StateId>>,
}

impl Automaton {
    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    pub fn state_name(&self, id: StateId) -> &str {
        &self.names[id.index()]
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn alphabet(&self) -> &IndexSet<char> {
        &self.alphabet
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accepts(&self) -> &IndexSet<StateId> {
        &self.accepts
    }

    pub fn is_accept(&self, id: StateId) -> bool {
        self.accepts.contains(&id)
    }

    /// Target set for `(state, symbol)`. A `None` symbol is an epsilon move.
    pub fn targets(&self, from: StateId, symbol: Option<char>) -> Option<&IndexSet<StateId>> {
        self.delta.get(&(from, symbol))
    }

    /// All transition edges in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Option<char>, StateId)> + '_ {
        self.delta
            .iter()
            .flat_map(|(&(from, symbol), targets)| {
                targets.iter().map(move |&to| (from, symbol, to))
            })
    }

    /// True when the relation has no epsilon entries and every entry has a
    /// single target.
    pub fn is_deterministic(&self) -> bool {
        self.delta
            .iter()
            .all(|(&(_, symbol), targets)| symbol.is_some() && targets.len() == 1)
    }

    /// States reachable from `seed` via zero or more epsilon moves.
    ///
    /// Iterative worklist walk over the growing set; discovery order is
    /// deterministic, so closures render and compare stably.
    pub fn epsilon_closure(&self, seed: impl IntoIterator<Item = StateId>) -> IndexSet<StateId> {
        let mut closure: IndexSet<StateId> = seed.into_iter().collect();
        let mut i = 0;
        while i < closure.len() {
            let state = closure[i];
            i += 1;
            if let Some(targets) = self.targets(state, None) {
                for &t in targets {
                    closure.insert(t);
                }
            }
        }
        closure
    }
}

/// Builder for [`Automaton`].
///
/// Ids are handed out by [`AutomatonBuilder::add_state`] from a monotonically
/// increasing counter; the built automaton can therefore never reference a
/// state outside its own table.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    names: Vec<String>,
    alphabet: IndexSet<char>,
    accepts: IndexSet<StateId>,
    delta: IndexMap<(StateId, Option<char>), IndexSet<StateId>>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state and return its id.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        let id = StateId(self.names.len() as u32);
        self.names.push(name.into());
        id
    }

    /// Declare an alphabet symbol without any transition on it.
    ///
    /// Loaded descriptions may declare symbols that no transition uses; the
    /// engine still treats those as known symbols (rejection via a missing
    /// transition, not an invalid symbol).
    pub fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Add a transition edge. A `None` symbol is an epsilon move; non-epsilon
    /// symbols join the alphabet.
    pub fn add_transition(&mut self, from: StateId, symbol: Option<char>, to: StateId) {
        if let Some(c) = symbol {
            self.alphabet.insert(c);
        }
        self.delta.entry((from, symbol)).or_default().insert(to);
    }

    pub fn mark_accept(&mut self, id: StateId) {
        self.accepts.insert(id);
    }

    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    /// Finish construction. The state set and alphabet are final from here on.
    pub fn build(self, start: StateId) -> Automaton {
        Automaton {
            names: self.names,
            alphabet: self.alphabet,
            start,
            accepts: self.accepts,
            delta: self.delta,
        }
    }
}
