//! Automaton module - Build, validate and render finite automata

pub mod definition;
pub mod model;
pub mod render;

// Re-export key types
pub use definition::{load_automaton, FaDefinition, TransitionDef};
pub use model::{Automaton, AutomatonStats, DanglingReference, ReferenceKind, StateId, Symbol};
