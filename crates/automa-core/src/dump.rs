//! Human-readable rendering of automaton structure.

use crate::automaton::Automaton;
use crate::description::EPSILON_TOKEN;

/// Render the automaton as a fixed-shape text block:
///
/// ```text
/// States: q0 q1
/// Alphabet: a b
/// Transitions:
///   q0 --(a)--> q1
///   q1 --(ε)--> q0
/// Start state: q0
/// Accept states: q1
/// ```
pub fn render(automaton: &Automaton) -> String {
    let mut out = String::new();

    out.push_str("States: ");
    out.push_str(&join(automaton.state_names()));
    out.push('\n');

    out.push_str("Alphabet: ");
    let symbols: Vec<String> = automaton.alphabet().iter().map(|c| c.to_string()).collect();
    out.push_str(&join(symbols.iter().map(String::as_str)));
    out.push('\n');

    out.push_str("Transitions:\n");
    for (from, symbol, to) in automaton.transitions() {
        let input = match symbol {
            Some(c) => c.to_string(),
            None => EPSILON_TOKEN.to_string(),
        };
        out.push_str(&format!(
            "  {} --({})--> {}\n",
            automaton.state_name(from),
            input,
            automaton.state_name(to)
        ));
    }

    out.push_str("Start state: ");
    out.push_str(automaton.state_name(automaton.start()));
    out.push('\n');

    out.push_str("Accept states: ");
    out.push_str(&join(
        automaton
            .accepts()
            .iter()
            .map(|&id| automaton.state_name(id)),
    ));
    out.push('\n');

    out
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(" ")
}
