use indexmap::IndexSet;

use crate::automaton::{AutomatonBuilder, StateId};

#[test]
fn builder_allocates_monotonic_ids() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    assert_eq!(q0, StateId(0));
    assert_eq!(q1, StateId(1));
    assert_eq!(builder.state_count(), 2);
}

#[test]
fn transitions_populate_alphabet() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    builder.add_transition(q0, Some('a'), q1);
    builder.add_transition(q0, None, q1);
    let automaton = builder.build(q0);

    // Epsilon never joins the alphabet.
    assert_eq!(automaton.alphabet().len(), 1);
    assert!(automaton.alphabet().contains(&'a'));
}

#[test]
fn declared_symbol_without_transition_is_known() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    builder.add_symbol('x');
    let automaton = builder.build(q0);
    assert!(automaton.alphabet().contains(&'x'));
    assert!(automaton.targets(q0, Some('x')).is_none());
}

#[test]
fn multiple_targets_per_entry() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    let q2 = builder.add_state("q2");
    builder.add_transition(q0, Some('a'), q1);
    builder.add_transition(q0, Some('a'), q2);
    let automaton = builder.build(q0);

    let targets = automaton.targets(q0, Some('a')).unwrap();
    assert_eq!(targets.len(), 2);
    assert!(!automaton.is_deterministic());
}

#[test]
fn singleton_relation_is_deterministic() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    builder.add_transition(q0, Some('a'), q1);
    builder.add_transition(q1, Some('b'), q0);
    let automaton = builder.build(q0);
    assert!(automaton.is_deterministic());
}

#[test]
fn epsilon_makes_nondeterministic() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    builder.add_transition(q0, None, q1);
    let automaton = builder.build(q0);
    assert!(!automaton.is_deterministic());
}

#[test]
fn epsilon_closure_follows_chains() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    let q2 = builder.add_state("q2");
    let q3 = builder.add_state("q3");
    builder.add_transition(q0, None, q1);
    builder.add_transition(q1, None, q2);
    builder.add_transition(q2, Some('a'), q3);
    let automaton = builder.build(q0);

    let closure = automaton.epsilon_closure([q0]);
    let expected: IndexSet<StateId> = [q0, q1, q2].into_iter().collect();
    assert_eq!(closure, expected);
}

#[test]
fn epsilon_closure_handles_cycles() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    builder.add_transition(q0, None, q1);
    builder.add_transition(q1, None, q0);
    let automaton = builder.build(q0);

    let closure = automaton.epsilon_closure([q0]);
    assert_eq!(closure.len(), 2);
}

#[test]
fn epsilon_closure_of_empty_seed_is_empty() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    builder.add_transition(q0, None, q0);
    let automaton = builder.build(q0);
    assert!(automaton.epsilon_closure([]).is_empty());
}

#[test]
fn transitions_iterator_flattens_edges() {
    let mut builder = AutomatonBuilder::new();
    let q0 = builder.add_state("q0");
    let q1 = builder.add_state("q1");
    let q2 = builder.add_state("q2");
    builder.add_transition(q0, Some('a'), q1);
    builder.add_transition(q0, Some('a'), q2);
    builder.add_transition(q1, None, q2);
    let automaton = builder.build(q0);

    let edges: Vec<_> = automaton.transitions().collect();
    assert_eq!(
        edges,
        vec![
            (q0, Some('a'), q1),
            (q0, Some('a'), q2),
            (q1, None, q2),
        ]
    );
}
