//! Output formatting module
//!
//! This module handles writing the derived grammar rules to the different
//! rule sinks. Rules are written exactly in the order the converter produced
//! them; no reordering or deduplication happens here.

use crate::automaton::AutomatonStats;
use crate::grammar::GrammarRule;
use crate::Result;
use serde_json::json;

/// Write rules as plain text, one `<lhs> -> <rhs>` per line
pub fn output_text(w: &mut impl std::io::Write, rules: &[GrammarRule]) -> Result<()> {
    for rule in rules {
        writeln!(w, "{}", rule)?;
    }
    Ok(())
}

/// Write rules and a summary as JSON
pub fn output_json(
    w: &mut impl std::io::Write,
    stats: &AutomatonStats,
    rules: &[GrammarRule],
) -> Result<()> {
    let epsilon_rules = rules
        .iter()
        .filter(|r| matches!(r, GrammarRule::Epsilon { .. }))
        .count();

    let output = json!({
        "summary": {
            "total_states": stats.total_states,
            "total_transitions": stats.total_transitions,
            "accept_states": stats.accept_states,
            "alphabet_size": stats.alphabet_size,
            "total_rules": rules.len(),
            "epsilon_rules": epsilon_rules,
        },
        "rules": rules.iter().map(|rule| {
            json!({
                "lhs": rule.lhs(),
                "rhs": rule.rhs_text(),
                "display": rule.to_string(),
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use crate::grammar::convert;

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
    fn test_output_text() {
        let fa = sample();
        let rules = convert(&fa);

        let mut buffer = Vec::new();
        output_text(&mut buffer, &rules).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "S -> 0A\nA -> ε\n");
    }

    #[test]
    fn test_output_json() {
        let fa = sample();
        let rules = convert(&fa);

        let mut buffer = Vec::new();
        output_json(&mut buffer, &fa.stats(), &rules).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["summary"]["total_rules"], 2);
        assert_eq!(value["summary"]["epsilon_rules"], 1);
        assert_eq!(value["rules"][0]["display"], "S -> 0A");
        assert_eq!(value["rules"][1]["rhs"], "ε");
    }

    #[test]
    fn test_output_text_empty() {
        let mut buffer = Vec::new();
        output_text(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
