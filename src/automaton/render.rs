//! Graphviz DOT export
//!
//! Renders the automaton as a directed graph: accept states as double
//! circles, a synthetic `start` marker node with a dashed edge into the
//! start state, and transition edges labeled with their input symbol.
//! Purely cosmetic; nothing here feeds back into the model or converter.

use crate::automaton::Automaton;
use crate::config::RenderConfig;
use crate::error::Error;
use crate::Result;
use std::path::Path;

/// Render the automaton to DOT format
pub fn to_dot(fa: &Automaton, config: &RenderConfig) -> String {
    let mut dot = "digraph FiniteAutomaton {\n".to_string();
    dot.push_str(&format!("  layout={};\n", config.layout));
    dot.push_str(&format!("  rankdir={};\n", config.rankdir));
    dot.push_str("  node [style=filled, fillcolor=white];\n\n");

    if let Some(start) = fa.start_state() {
        dot.push_str("  \"start\" [shape=none, label=\"\"];\n");
        dot.push_str(&format!(
            "  \"start\" -> \"{}\" [label=\"Start\", style=dashed];\n",
            escape(start)
        ));
    }

    for state in fa.states() {
        let shape = if fa.is_accept_state(state) {
            "doublecircle"
        } else {
            "circle"
        };
        dot.push_str(&format!(
            "  \"{}\" [label=\"{}\", shape={}, height=0.5];\n",
            escape(state),
            escape(state),
            shape
        ));
    }

    dot.push('\n');

    for (from, pairs) in fa.transitions() {
        for (symbol, to) in pairs {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\", fontsize=12, fontcolor=blue];\n",
                escape(from),
                escape(to),
                escape(symbol)
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

/// Write the DOT graph to a file
pub fn render_to_file(fa: &Automaton, config: &RenderConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, to_dot(fa, config))
        .map_err(|e| Error::render(format!("Failed to write DOT file {:?}: {}", path, e)))?;
    Ok(())
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Automaton {
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_state("A");
        fa.set_start_state("S");
        fa.add_accept_state("A");
        fa.add_transition("S", "0", "A");
        fa
    }

    #[test]
    fn test_to_dot_output() {
        let dot = to_dot(&sample(), &RenderConfig::default());
        assert!(dot.contains("digraph FiniteAutomaton"));
        assert!(dot.contains("rankdir=LR"));
        assert!(dot.contains("\"start\" -> \"S\" [label=\"Start\", style=dashed]"));
        assert!(dot.contains("\"A\" [label=\"A\", shape=doublecircle"));
        assert!(dot.contains("\"S\" [label=\"S\", shape=circle"));
        assert!(dot.contains("\"S\" -> \"A\" [label=\"0\""));
    }

    #[test]
    fn test_to_dot_without_start_state() {
        let mut fa = Automaton::new();
        fa.add_state("S");
        let dot = to_dot(&fa, &RenderConfig::default());
        assert!(!dot.contains("style=dashed"));
    }

    #[test]
    fn test_render_to_file_failure_is_render_error() {
        let err = render_to_file(
            &sample(),
            &RenderConfig::default(),
            "/no/such/dir/automaton.dot",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_escape_quotes() {
        let mut fa = Automaton::new();
        fa.add_state("q\"0");
        let dot = to_dot(&fa, &RenderConfig::default());
        assert!(dot.contains("q\\\"0"));
    }
}
