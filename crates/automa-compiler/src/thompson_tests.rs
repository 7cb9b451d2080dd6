use automa_core::dump;

use crate::parser::parse;
use crate::thompson::build_nfa;

fn nfa(pattern: &str) -> automa_core::Automaton {
    build_nfa(&parse(pattern).unwrap())
}

#[test]
fn literal_is_two_states_one_edge() {
    insta::assert_snapshot!(dump::render(&nfa("a")), @r"
    States: s0 s1
    Alphabet: a
    Transitions:
      s0 --(a)--> s1
    Start state: s0
    Accept states: s1
    ");
}

#[test]
fn concat_joins_fragments_with_epsilon() {
    insta::assert_snapshot!(dump::render(&nfa("ab")), @r"
    States: s0 s1 s2 s3
    Alphabet: a b
    Transitions:
      s0 --(a)--> s1
      s2 --(b)--> s3
      s1 --(ε)--> s2
    Start state: s0
    Accept states: s3
    ");
}

#[test]
fn union_adds_fresh_entry_and_exit() {
    insta::assert_snapshot!(dump::render(&nfa("a|b")), @r"
    States: s0 s1 s2 s3 s4 s5
    Alphabet: a b
    Transitions:
      s0 --(a)--> s1
      s2 --(b)--> s3
      s4 --(ε)--> s0
      s4 --(ε)--> s2
      s1 --(ε)--> s5
      s3 --(ε)--> s5
    Start state: s4
    Accept states: s5
    ");
}

#[test]
fn star_wires_bypass_and_repeat() {
    insta::assert_snapshot!(dump::render(&nfa("a*")), @r"
    States: s0 s1 s2 s3
    Alphabet: a
    Transitions:
      s0 --(a)--> s1
      s2 --(ε)--> s0
      s2 --(ε)--> s3
      s1 --(ε)--> s0
      s1 --(ε)--> s3
    Start state: s2
    Accept states: s3
    ");
}

#[test]
fn plus_compiles_a_fresh_star_copy() {
    let automaton = nfa("a+");
    // One mandatory copy plus the star body: the two 'a' edges must leave
    // different states, or the sub-fragments would alias.
    let a_edges: Vec<_> = automaton
        .transitions()
        .filter(|(_, symbol, _)| *symbol == Some('a'))
        .collect();
    assert_eq!(a_edges.len(), 2);
    assert_ne!(a_edges[0].0, a_edges[1].0);

    insta::assert_snapshot!(dump::render(&automaton), @r"
    States: s0 s1 s2 s3 s4 s5
    Alphabet: a
    Transitions:
      s0 --(a)--> s1
      s2 --(a)--> s3
      s4 --(ε)--> s2
      s4 --(ε)--> s5
      s3 --(ε)--> s2
      s3 --(ε)--> s5
      s1 --(ε)--> s4
    Start state: s0
    Accept states: s5
    ");
}

#[test]
fn optional_unions_with_a_pass_through() {
    insta::assert_snapshot!(dump::render(&nfa("a?")), @r"
    States: s0 s1 s2 s3 s4
    Alphabet: a
    Transitions:
      s0 --(a)--> s1
      s3 --(ε)--> s0
      s3 --(ε)--> s2
      s1 --(ε)--> s4
      s2 --(ε)--> s4
    Start state: s3
    Accept states: s4
    ");
}

#[test]
fn anchor_compiles_to_pass_through() {
    insta::assert_snapshot!(dump::render(&nfa("^a")), @r"
    States: s0 s1 s2
    Alphabet: a
    Transitions:
      s1 --(a)--> s2
      s0 --(ε)--> s1
    Start state: s0
    Accept states: s2
    ");
}

#[test]
fn alphabet_is_union_of_literals() {
    let automaton = nfa("(ab)*c|a");
    let alphabet: Vec<char> = automaton.alphabet().iter().copied().collect();
    assert_eq!(alphabet, vec!['a', 'b', 'c']);
}

#[test]
fn sibling_state_ids_never_collide() {
    let automaton = nfa("(a|b)(a|b)");
    // Every state id appears once in the table.
    assert_eq!(automaton.state_count(), 12);
    let mut names: Vec<&str> = automaton.state_names().collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 12);
}
