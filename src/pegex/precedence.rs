//! Operator precedence policy for the emitted regex
//!
//! Concatenating child fragments into a parent fragment can silently change
//! meaning when the surrounding regex operator binds tighter than the
//! child's own structure. Each groupable node kind gets a rank from a fixed
//! loosest-to-tightest order; a child is parenthesized exactly when its
//! parent's rank is higher. Kinds without a rank are atomic or emit their
//! own brackets and never need grouping.

use super::ast::Node;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Node kinds in increasing order of binding tightness.
const RANK_GROUPS: [&[&str]; 4] = [
    &["choice"],
    // A multi-character literal is a run of atoms in the output, not one
    // atom, so a neighboring operator can split it: /foo?/ parses as /fo(o?)/.
    &["sequence", "literal"],
    &[
        "zero_or_more",
        "one_or_more",
        "repeated",
        "optional_lazy",
        "zero_or_more_lazy",
        "one_or_more_lazy",
    ],
    // Optional ranks above the other quantifiers so an optional group never
    // reads as a lazy quantifier: (.+)? vs .+?
    &["optional"],
];

static NODE_PRECEDENCES: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (rank, group) in RANK_GROUPS.iter().enumerate() {
        for kind in *group {
            table.insert(*kind, rank);
        }
    }
    table
});

/// The node's rank in the grouping order, if it has one.
///
/// A literal of one UTF-16 code unit (or none) is atomic in the output and
/// cannot be split, so it carries no rank.
pub fn precedence_of(node: &Node) -> Option<usize> {
    if let Node::Literal { value, .. } = node {
        if value.encode_utf16().count() < 2 {
            return None;
        }
    }
    NODE_PRECEDENCES.get(node.kind_name()).copied()
}

/// Whether a child fragment needs a group before being embedded in its
/// parent's fragment: both must be ranked, with the parent ranked tighter.
pub fn must_group(node: &Node, parent: Option<&Node>) -> bool {
    let parent = match parent {
        Some(parent) => parent,
        None => return false,
    };
    match (precedence_of(parent), precedence_of(node)) {
        (Some(parent_rank), Some(child_rank)) => parent_rank > child_rank,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pegex::testing::{any, choice, lit, neg_lookahead, opt, plus, seq, star};

    #[test]
    fn test_rank_order() {
        let choice_rank = precedence_of(&choice(vec![lit("ab"), lit("cd")])).unwrap();
        let sequence_rank = precedence_of(&seq(vec![any(), any()])).unwrap();
        let star_rank = precedence_of(&star(any())).unwrap();
        let optional_rank = precedence_of(&opt(any())).unwrap();
        assert!(choice_rank < sequence_rank);
        assert!(sequence_rank < star_rank);
        assert!(star_rank < optional_rank);
    }

    #[test]
    fn test_multi_char_literal_ranks_with_sequence() {
        let literal_rank = precedence_of(&lit("ab")).unwrap();
        let sequence_rank = precedence_of(&seq(vec![any(), any()])).unwrap();
        assert_eq!(literal_rank, sequence_rank);
    }

    #[test]
    fn test_short_literals_are_atomic() {
        assert_eq!(precedence_of(&lit("a")), None);
        assert_eq!(precedence_of(&lit("")), None);
        // One astral character is two UTF-16 units, so it is not atomic.
        assert!(precedence_of(&lit("\u{1f600}")).is_some());
    }

    #[test]
    fn test_unranked_kinds() {
        assert_eq!(precedence_of(&any()), None);
        assert_eq!(precedence_of(&neg_lookahead(lit("a"))), None);
    }

    #[test]
    fn test_must_group_tighter_parent() {
        let child = seq(vec![any(), any()]);
        let parent = star(child.clone());
        assert!(must_group(&child, Some(&parent)));

        let literal = lit("Foo");
        let optional = opt(literal.clone());
        assert!(must_group(&literal, Some(&optional)));
    }

    #[test]
    fn test_no_group_for_equal_or_looser_parent() {
        let sequence = seq(vec![any(), any()]);
        let sibling = seq(vec![any()]);
        let alternatives = choice(vec![any()]);
        assert!(!must_group(&sequence, Some(&sibling)));
        assert!(!must_group(&sequence, Some(&alternatives)));
        assert!(!must_group(&plus(any()), Some(&sibling)));
    }

    #[test]
    fn test_no_group_without_parent_or_rank() {
        let sequence = seq(vec![any(), any()]);
        let optional = opt(lit("a"));
        assert!(!must_group(&sequence, None));
        assert!(!must_group(&lit("a"), Some(&optional)));
        assert!(!must_group(&neg_lookahead(lit("a")), Some(&sequence)));
    }
}
