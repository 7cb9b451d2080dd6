//! Verdicts, traces, and the match result.

use std::fmt;

use serde::Serialize;

/// Accept/reject outcome. A rejection is an expected, non-exceptional result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Accept,
    Reject,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accept => f.write_str("ACCEPT"),
            Verdict::Reject => f.write_str("REJECT"),
        }
    }
}

/// One executed step: the state set before, the consumed symbol, the state
/// set after. Carries names rather than ids so traces render without the
/// automaton at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub from: Vec<String>,
    pub symbol: char,
    pub to: Vec<String>,
}

impl fmt::Display for TraceStep {
    /// `q0 --(a)--> q1` for singleton sets, `{s0 s2} --(a)--> {s1}` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --({})--> {}",
            format_set(&self.from),
            self.symbol,
            format_set(&self.to)
        )
    }
}

fn format_set(names: &[String]) -> String {
    match names {
        [single] => single.clone(),
        _ => format!("{{{}}}", names.join(" ")),
    }
}

/// Result of running an automaton over an input string.
///
/// The trace is present only in verbose mode and never influences the
/// verdict.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub verdict: Verdict,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceStep>>,
}

impl MatchResult {
    pub fn is_accept(&self) -> bool {
        self.verdict == Verdict::Accept
    }
}
