//! Thompson construction: AST to NFA.
//!
//! Each operator compiles to a fragment with one entry and one exit state.
//! Fragments compose by epsilon wiring. All states live in a single shared
//! builder and are numbered from a per-compilation counter, so sibling
//! sub-expressions can never reference or corrupt one another's states.

use automa_core::automaton::{Automaton, AutomatonBuilder, StateId};

use crate::parser::Ast;

/// Entry/exit pair of a compiled sub-expression. The states and transitions
/// themselves accumulate in the shared builder; fragments never leave this
/// module.
#[derive(Clone, Copy, Debug)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

/// Build an NFA for the whole AST: start at the root fragment's entry,
/// accept at its exit. The alphabet is the union of literal symbols.
pub fn build_nfa(ast: &Ast) -> Automaton {
    let mut thompson = Thompson {
        builder: AutomatonBuilder::new(),
    };
    let root = thompson.compile(ast);

    let mut builder = thompson.builder;
    builder.mark_accept(root.exit);
    builder.build(root.entry)
}

struct Thompson {
    builder: AutomatonBuilder,
}

impl Thompson {
    fn fresh(&mut self) -> StateId {
        let n = self.builder.state_count();
        self.builder.add_state(format!("s{n}"))
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        self.builder.add_transition(from, None, to);
    }

    fn compile(&mut self, node: &Ast) -> Fragment {
        match node {
            Ast::Literal { symbol } => {
                let entry = self.fresh();
                let exit = self.fresh();
                self.builder.add_transition(entry, Some(*symbol), exit);
                Fragment { entry, exit }
            }
            Ast::Concat { left, right } => {
                let a = self.compile(left);
                let b = self.compile(right);
                self.epsilon(a.exit, b.entry);
                Fragment {
                    entry: a.entry,
                    exit: b.exit,
                }
            }
            Ast::Union { left, right } => {
                let a = self.compile(left);
                let b = self.compile(right);
                self.join(a, b)
            }
            Ast::Star { inner } => self.compile_star(inner),
            Ast::Plus { inner } => {
                // One mandatory pass followed by a freshly compiled Star
                // over the same sub-AST. The copy gets its own states;
                // reusing the first fragment would alias them.
                let first = self.compile(inner);
                let rest = self.compile_star(inner);
                self.epsilon(first.exit, rest.entry);
                Fragment {
                    entry: first.entry,
                    exit: rest.exit,
                }
            }
            Ast::Optional { inner } => {
                let a = self.compile(inner);
                let bypass = self.pass_through();
                self.join(a, bypass)
            }
            // Anchors are admitted only at the pattern boundaries, where the
            // positional assertion holds for any whole-input match, so the
            // fragment consumes nothing.
            Ast::Anchor { .. } => self.pass_through(),
        }
    }

    /// Loop wiring: enter the body, skip it entirely, repeat it, or leave.
    fn compile_star(&mut self, inner: &Ast) -> Fragment {
        let body = self.compile(inner);
        let entry = self.fresh();
        let exit = self.fresh();
        self.epsilon(entry, body.entry);
        self.epsilon(entry, exit);
        self.epsilon(body.exit, body.entry);
        self.epsilon(body.exit, exit);
        Fragment { entry, exit }
    }

    /// Union wiring: fresh entry/exit around two alternative fragments.
    fn join(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let entry = self.fresh();
        let exit = self.fresh();
        self.epsilon(entry, a.entry);
        self.epsilon(entry, b.entry);
        self.epsilon(a.exit, exit);
        self.epsilon(b.exit, exit);
        Fragment { entry, exit }
    }

    /// Single-state fragment with entry == exit; matches the empty string.
    fn pass_through(&mut self) -> Fragment {
        let state = self.fresh();
        Fragment {
            entry: state,
            exit: state,
        }
    }
}
