//! Grammar module - Derive right-linear grammar rules from automata

pub mod convert;
pub mod rule;

// Re-export key types
pub use convert::convert;
pub use rule::GrammarRule;
