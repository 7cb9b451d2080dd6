//! Subset construction: NFA to DFA.
//!
//! On-the-fly construction over reachable subsets only; cost is bounded by
//! the number of distinct subsets actually reached, not by the power set.
//! For the supported regex subset this stays small in practice.

use automa_core::automaton::{Automaton, AutomatonBuilder, StateId};
use indexmap::{IndexMap, IndexSet};

/// Convert an NFA into an equivalent DFA.
///
/// Never fails. A subset without an outgoing transition for some symbol is
/// legal and simply rejects on that symbol. DFA states are named `d0, d1,
/// ...` in discovery order, which is deterministic.
pub fn determinize(nfa: &Automaton) -> Automaton {
    let mut builder = AutomatonBuilder::new();

    // The declared alphabet carries over even when no transition uses a
    // symbol; the engine treats declared symbols as known.
    for &symbol in nfa.alphabet() {
        builder.add_symbol(symbol);
    }

    let mut subset_ids: IndexMap<Vec<StateId>, StateId> = IndexMap::new();

    let start_subset = canonical(nfa.epsilon_closure([nfa.start()]));
    let start = builder.add_state("d0");
    if accepts(nfa, &start_subset) {
        builder.mark_accept(start);
    }
    subset_ids.insert(start_subset, start);

    // Worklist over the map itself: entries are only appended, so a plain
    // index walk visits every discovered subset exactly once.
    let mut i = 0;
    while i < subset_ids.len() {
        let Some((subset, &dfa_id)) = subset_ids.get_index(i) else {
            break;
        };
        let subset = subset.clone();
        i += 1;

        for &symbol in nfa.alphabet() {
            let mut moved: IndexSet<StateId> = IndexSet::new();
            for &state in &subset {
                if let Some(targets) = nfa.targets(state, Some(symbol)) {
                    moved.extend(targets.iter().copied());
                }
            }
            if moved.is_empty() {
                continue;
            }

            let target_subset = canonical(nfa.epsilon_closure(moved));
            let next_id = match subset_ids.get(&target_subset) {
                Some(&id) => id,
                None => {
                    let id = builder.add_state(format!("d{}", subset_ids.len()));
                    if accepts(nfa, &target_subset) {
                        builder.mark_accept(id);
                    }
                    subset_ids.insert(target_subset, id);
                    id
                }
            };
            builder.add_transition(dfa_id, Some(symbol), next_id);
        }
    }

    builder.build(start)
}

/// A subset accepts iff it contains any NFA accept state.
fn accepts(nfa: &Automaton, subset: &[StateId]) -> bool {
    subset.iter().any(|&state| nfa.is_accept(state))
}

/// Sorted id list: the canonical, hashable form of a subset.
fn canonical(set: IndexSet<StateId>) -> Vec<StateId> {
    let mut ids: Vec<StateId> = set.into_iter().collect();
    ids.sort_unstable();
    ids
}
