use crate::error::Error;
use crate::Result;
use indexmap::{IndexMap, IndexSet};

pub type StateId = String;
pub type Symbol = String;

/// An in-memory finite automaton built incrementally from a definition.
///
/// All containers preserve insertion order. This is load-bearing: the grammar
/// converter emits rules in the order transitions were registered, so the
/// model must iterate states and outgoing pairs exactly as they were added.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    /// Declared states, in declaration order.
    states: IndexSet<StateId>,

    /// Input alphabet, derived from transitions as they are added.
    alphabet: IndexSet<Symbol>,

    /// Outgoing transitions per source state, in add order.
    /// A state with no outgoing transitions has no entry here.
    transitions: IndexMap<StateId, Vec<(Symbol, StateId)>>,

    /// The unique start state, if one has been set.
    start_state: Option<StateId>,

    /// Accept states, in declaration order.
    accept_states: IndexSet<StateId>,
}

/// Where a dangling state label was encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    StartState,
    AcceptState,
    TransitionSource,
    TransitionTarget,
}

impl ReferenceKind {
    pub fn describe(&self) -> &'static str {
        match self {
            ReferenceKind::StartState => "start state",
            ReferenceKind::AcceptState => "accept state",
            ReferenceKind::TransitionSource => "transition source",
            ReferenceKind::TransitionTarget => "transition target",
        }
    }
}

/// A state label used somewhere without ever being declared via `add_state`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub label: StateId,
    pub kind: ReferenceKind,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` ({})", self.label, self.kind.describe())
    }
}

/// Summary counts over an automaton
#[derive(Debug, Clone)]
pub struct AutomatonStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub accept_states: usize,
    pub alphabet_size: usize,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a state. Re-declaring an existing state is a no-op.
    pub fn add_state(&mut self, state: impl Into<StateId>) {
        self.states.insert(state.into());
    }

    /// Records the start state, overwriting any previous one.
    ///
    /// Membership in the state set is not checked here; see [`validate`].
    ///
    /// [`validate`]: Automaton::validate
    pub fn set_start_state(&mut self, state: impl Into<StateId>) {
        self.start_state = Some(state.into());
    }

    /// Marks a state as accepting. Idempotent, membership unchecked.
    pub fn add_accept_state(&mut self, state: impl Into<StateId>) {
        self.accept_states.insert(state.into());
    }

    /// Appends a transition `from --symbol--> to` and grows the alphabet.
    ///
    /// Neither endpoint needs to be pre-declared; states referenced only via
    /// transitions are tolerated unless the caller opts into validation.
    pub fn add_transition(
        &mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) {
        let symbol = symbol.into();
        self.alphabet.insert(symbol.clone());
        self.transitions
            .entry(from.into())
            .or_default()
            .push((symbol, to.into()));
    }

    /// Declared states, in declaration order
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.states.iter()
    }

    /// Derived input alphabet, in first-use order
    pub fn alphabet(&self) -> impl Iterator<Item = &Symbol> {
        self.alphabet.iter()
    }

    /// Source states paired with their outgoing `(symbol, target)` sequences,
    /// iterated in first-transition-add order
    pub fn transitions(&self) -> impl Iterator<Item = (&StateId, &[(Symbol, StateId)])> {
        self.transitions.iter().map(|(s, t)| (s, t.as_slice()))
    }

    /// Outgoing `(symbol, target)` pairs for a state, empty if it has none
    pub fn transitions_from(&self, state: &str) -> &[(Symbol, StateId)] {
        self.transitions.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn start_state(&self) -> Option<&StateId> {
        self.start_state.as_ref()
    }

    /// Accept states, in declaration order
    pub fn accept_states(&self) -> impl Iterator<Item = &StateId> {
        self.accept_states.iter()
    }

    pub fn is_accept_state(&self, state: &str) -> bool {
        self.accept_states.contains(state)
    }

    /// Enumerates every label referenced by the start state, accept set, or a
    /// transition endpoint that was never declared via `add_state`.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut push = |label: &StateId, kind: ReferenceKind| {
            if !self.states.contains(label) {
                dangling.push(DanglingReference {
                    label: label.clone(),
                    kind,
                });
            }
        };

        if let Some(start) = &self.start_state {
            push(start, ReferenceKind::StartState);
        }
        for accept in &self.accept_states {
            push(accept, ReferenceKind::AcceptState);
        }
        for (from, pairs) in &self.transitions {
            push(from, ReferenceKind::TransitionSource);
            for (_, to) in pairs {
                push(to, ReferenceKind::TransitionTarget);
            }
        }

        dangling
    }

    /// Strict-mode structural check: fails if any referenced state was never
    /// declared. Conversion itself never requires this to pass.
    pub fn validate(&self) -> Result<()> {
        let dangling = self.dangling_references();
        if dangling.is_empty() {
            return Ok(());
        }

        let listing = dangling
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Err(Error::dangling_reference(listing))
    }

    /// Get summary statistics
    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            total_states: self.states.len(),
            total_transitions: self.transitions.values().map(Vec::len).sum(),
            accept_states: self.accept_states.len(),
            alphabet_size: self.alphabet.len(),
        }
    }
}
