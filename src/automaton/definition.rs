//! JSON automaton definitions
//!
//! The on-disk definition format uses camelCase field names:
//!
//! ```json
//! {
//!     "states": ["S", "A"],
//!     "startState": "S",
//!     "acceptStates": ["A"],
//!     "transitions": [
//!         { "start": "S", "inputSymbol": "0", "end": "A" }
//!     ]
//! }
//! ```

use crate::automaton::Automaton;
use crate::error::Error;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed automaton definition, exactly as listed in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaDefinition {
    pub states: Vec<String>,

    #[serde(rename = "startState")]
    pub start_state: String,

    #[serde(rename = "acceptStates")]
    pub accept_states: Vec<String>,

    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
}

/// A single transition record in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionDef {
    pub start: String,

    #[serde(rename = "inputSymbol")]
    pub input_symbol: String,

    pub end: String,
}

impl FaDefinition {
    /// Load a definition from a JSON file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(Error::DefinitionNotFound(path));
        }

        let contents = std::fs::read_to_string(&path)?;
        let definition: FaDefinition = serde_json::from_str(&contents)?;
        Ok(definition)
    }

    /// Build an [`Automaton`] by replaying the definition in listed order:
    /// states first, then start state, accept states, and transitions.
    pub fn build(&self) -> Automaton {
        let mut fa = Automaton::new();
        for state in &self.states {
            fa.add_state(state);
        }
        fa.set_start_state(&self.start_state);
        for accept in &self.accept_states {
            fa.add_accept_state(accept);
        }
        for t in &self.transitions {
            fa.add_transition(&t.start, &t.input_symbol, &t.end);
        }
        fa
    }
}

/// Load a definition file and build the automaton it describes
pub fn load_automaton(path: impl Into<PathBuf>) -> Result<Automaton> {
    Ok(FaDefinition::from_file(path)?.build())
}
