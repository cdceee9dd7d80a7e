//! FA → RLG transformation
//!
//! The standard textbook construction: every transition `S --a--> T` becomes
//! the production `S -> aT`, and accept states that cannot move anywhere
//! become epsilon productions. The conversion is total; it trusts the
//! automaton as given and never fails, even on dangling state references.

use crate::automaton::Automaton;
use crate::grammar::GrammarRule;

/// Convert a finite automaton into an ordered sequence of right-linear
/// grammar rules.
///
/// Transition rules come first, iterated in the order states first gained a
/// transition and, per state, in transition-add order. Epsilon rules follow,
/// one per accept state with no outgoing transitions, in accept-declaration
/// order. An accept state that does have outgoing transitions gets no
/// epsilon rule.
pub fn convert(fa: &Automaton) -> Vec<GrammarRule> {
    let mut rules = Vec::new();

    for (from, pairs) in fa.transitions() {
        for (symbol, to) in pairs {
            tracing::debug!("Transition {} --{}--> {} becomes a production", from, symbol, to);
            rules.push(GrammarRule::production(from, symbol, to));
        }
    }

    for accept in fa.accept_states() {
        if fa.transitions_from(accept).is_empty() {
            tracing::debug!("Accept state {} has no outgoing transitions, adding ε rule", accept);
            rules.push(GrammarRule::epsilon(accept));
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_strings(fa: &Automaton) -> Vec<String> {
        convert(fa).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_transition_with_sink_accept() {
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_state("A");
        fa.set_start_state("S");
        fa.add_accept_state("A");
        fa.add_transition("S", "0", "A");

        assert_eq!(rule_strings(&fa), vec!["S -> 0A", "A -> ε"]);
    }

    #[test]
    fn test_accept_state_with_self_loop_gets_no_epsilon() {
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_state("A");
        fa.set_start_state("S");
        fa.add_accept_state("A");
        fa.add_transition("S", "0", "A");
        fa.add_transition("A", "1", "A");

        assert_eq!(rule_strings(&fa), vec!["S -> 0A", "A -> 1A"]);
    }

    #[test]
    fn test_undeclared_accept_state_still_gets_epsilon() {
        // F only ever appears via add_accept_state, never add_state
        let mut fa = Automaton::new();
        fa.add_accept_state("F");

        assert_eq!(rule_strings(&fa), vec!["F -> ε"]);
    }

    #[test]
    fn test_reversing_add_order_reverses_rule_order() {
        let mut forward = Automaton::new();
        forward.add_transition("S", "a", "X");
        forward.add_transition("S", "b", "Y");
        assert_eq!(rule_strings(&forward), vec!["S -> aX", "S -> bY"]);

        let mut reversed = Automaton::new();
        reversed.add_transition("S", "b", "Y");
        reversed.add_transition("S", "a", "X");
        assert_eq!(rule_strings(&reversed), vec!["S -> bY", "S -> aX"]);
    }

    #[test]
    fn test_empty_automaton_yields_no_rules() {
        let fa = Automaton::new();
        assert!(convert(&fa).is_empty());
    }

    #[test]
    fn test_convert_is_deterministic() {
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_state("A");
        fa.add_state("B");
        fa.add_accept_state("B");
        fa.add_accept_state("A");
        fa.add_transition("S", "0", "A");
        fa.add_transition("S", "1", "B");
        fa.add_transition("A", "0", "B");

        assert_eq!(convert(&fa), convert(&fa));
    }

    #[test]
    fn test_rule_counts() {
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_state("A");
        fa.add_state("B");
        fa.add_accept_state("A");
        fa.add_accept_state("B");
        fa.add_transition("S", "0", "A");
        fa.add_transition("S", "1", "B");
        fa.add_transition("A", "0", "A");

        let rules = convert(&fa);
        let productions = rules
            .iter()
            .filter(|r| matches!(r, GrammarRule::Production { .. }))
            .count();
        let epsilons = rules
            .iter()
            .filter(|r| matches!(r, GrammarRule::Epsilon { .. }))
            .count();

        // One production per transition pair; epsilon only for B, the single
        // accept state with no outgoing transitions.
        assert_eq!(productions, 3);
        assert_eq!(epsilons, 1);
        assert_eq!(rules.last().unwrap().lhs(), "B");
    }

    #[test]
    fn test_dangling_targets_are_still_converted() {
        // Converter never cross-checks endpoints against the state set
        let mut fa = Automaton::new();
        fa.add_state("S");
        fa.add_transition("S", "0", "GHOST");

        assert_eq!(rule_strings(&fa), vec!["S -> 0GHOST"]);
    }
}
