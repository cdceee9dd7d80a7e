//! Grammar rule representation

use crate::automaton::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single right-linear production derived from the automaton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrammarRule {
    /// `S -> aT`: one production per transition
    Production {
        lhs: StateId,
        symbol: Symbol,
        rhs: StateId,
    },

    /// `A -> ε`: the nonterminal may terminate a derivation
    Epsilon { lhs: StateId },
}

impl GrammarRule {
    pub fn production(
        lhs: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        rhs: impl Into<StateId>,
    ) -> Self {
        Self::Production {
            lhs: lhs.into(),
            symbol: symbol.into(),
            rhs: rhs.into(),
        }
    }

    pub fn epsilon(lhs: impl Into<StateId>) -> Self {
        Self::Epsilon { lhs: lhs.into() }
    }

    /// The nonterminal on the left-hand side
    pub fn lhs(&self) -> &StateId {
        match self {
            GrammarRule::Production { lhs, .. } => lhs,
            GrammarRule::Epsilon { lhs } => lhs,
        }
    }

    /// The right-hand side as text. Symbol and state labels are concatenated
    /// directly, so multi-character labels produce ambiguous (but still
    /// well-formed) output.
    pub fn rhs_text(&self) -> String {
        match self {
            GrammarRule::Production { symbol, rhs, .. } => format!("{}{}", symbol, rhs),
            GrammarRule::Epsilon { .. } => "ε".to_string(),
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs(), self.rhs_text())
    }
}
