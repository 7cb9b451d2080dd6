//! Iterative breadth-first multi-state stepping.
//!
//! `current` is always an epsilon closure. Per input symbol the engine takes
//! the closure of the symbol successors of every current state; an
//! out-of-alphabet symbol or an empty successor set rejects immediately and
//! consumes nothing further. Runtime is O(n * |Q|) with bounded memory; call
//! stack depth does not grow with input length.

use automa_core::automaton::{Automaton, StateId};
use indexmap::IndexSet;

use super::error::RuntimeError;
use super::result::{MatchResult, TraceStep, Verdict};

const REASON_ACCEPTED: &str = "String accepted";
const REASON_REJECTED: &str = "String rejected";

/// Run `automaton` over `input`.
///
/// Never fails: execution-time errors become `Reject` verdicts carrying the
/// error's message. With `verbose`, the result carries an ordered trace of
/// `(before, symbol, after)` triples for every completed step; on a failed
/// step the trace holds the steps completed so far.
pub fn run(automaton: &Automaton, input: &str, verbose: bool) -> MatchResult {
    let mut trace = verbose.then(Vec::new);
    let mut current = automaton.epsilon_closure([automaton.start()]);

    for symbol in input.chars() {
        match step(automaton, &current, symbol) {
            Ok(next) => {
                if let Some(trace) = trace.as_mut() {
                    trace.push(TraceStep {
                        from: names(automaton, &current),
                        symbol,
                        to: names(automaton, &next),
                    });
                }
                current = next;
            }
            Err(err) => {
                return MatchResult {
                    verdict: Verdict::Reject,
                    reason: err.to_string(),
                    trace,
                };
            }
        }
    }

    let accepted = current.iter().any(|&state| automaton.is_accept(state));
    MatchResult {
        verdict: if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        },
        reason: if accepted {
            REASON_ACCEPTED
        } else {
            REASON_REJECTED
        }
        .to_string(),
        trace,
    }
}

/// One symbol step from the current closure.
fn step(
    automaton: &Automaton,
    current: &IndexSet<StateId>,
    symbol: char,
) -> Result<IndexSet<StateId>, RuntimeError> {
    if !automaton.alphabet().contains(&symbol) {
        return Err(RuntimeError::InvalidSymbol(symbol));
    }

    let mut moved: IndexSet<StateId> = IndexSet::new();
    for &state in current {
        if let Some(targets) = automaton.targets(state, Some(symbol)) {
            moved.extend(targets.iter().copied());
        }
    }

    if moved.is_empty() {
        return Err(RuntimeError::NoTransition {
            symbol,
            states: describe_states(automaton, current),
        });
    }

    Ok(automaton.epsilon_closure(moved))
}

fn names(automaton: &Automaton, set: &IndexSet<StateId>) -> Vec<String> {
    set.iter()
        .map(|&state| automaton.state_name(state).to_string())
        .collect()
}

/// `state 'q0'` for a singleton, `states {q0 q1}` otherwise.
fn describe_states(automaton: &Automaton, set: &IndexSet<StateId>) -> String {
    match set.first() {
        Some(&only) if set.len() == 1 => format!("state '{}'", automaton.state_name(only)),
        _ => {
            let joined = set
                .iter()
                .map(|&state| automaton.state_name(state))
                .collect::<Vec<_>>()
                .join(" ");
            format!("states {{{joined}}}")
        }
    }
}
