//! Property-based tests for grammar conversion
//!
//! Generated trees stay within the dialect the regex crate accepts (no
//! lookarounds, no back references, no named groups), so every compiled
//! pattern can be handed to a real engine for validation.

use pegex::pegex::testing::any;
use pegex::pegex::testing::*;
use pegex::{compile, ConversionOptions, Node};
use proptest::prelude::*;
use regex::Regex;
use std::rc::Rc;

/// Leaf expressions: short literals, wildcards, and character classes
fn leaf_strategy() -> impl Strategy<Value = Rc<Node>> {
    prop_oneof![
        "[a-z0-9]{1,4}".prop_map(|value| lit(&value)),
        Just(any()),
        Just(built_in("\\d")),
        Just(built_in("\\w")),
        Just(built_in("\\s")),
        Just(class(vec![range('a', 'f'), part('_')], false)),
        Just(class(vec![range('0', '9')], true)),
    ]
}

/// Arbitrary expression trees over the leaves, a few levels deep.
///
/// Quantifiers and repeats apply to leaves or parenthesized groups only,
/// since that is all a suffix operator can attach to in grammar source.
fn node_strategy() -> impl Strategy<Value = Rc<Node>> {
    leaf_strategy().prop_recursive(3, 24, 3, |inner| {
        let primary = prop_oneof![leaf_strategy(), inner.clone().prop_map(group)].boxed();
        let quantified = prop_oneof![
            primary.clone().prop_map(opt),
            primary.clone().prop_map(star),
            primary.clone().prop_map(plus),
            primary.clone().prop_map(opt_lazy),
            primary.clone().prop_map(star_lazy),
            primary.clone().prop_map(plus_lazy),
        ];
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(seq),
            prop::collection::vec(inner.clone(), 1..4).prop_map(choice),
            quantified,
            inner.clone().prop_map(group),
            (primary.clone(), 0..4u64, 0..4u64)
                .prop_map(|(node, low, extra)| repeated(Some(low), Some(low + extra), node)),
            (primary.clone(), 1..5u64)
                .prop_map(|(node, count)| repeated(None, Some(count), node)),
            (primary, inner, 0..3u64)
                .prop_map(|(node, separator, low)| delimited(Some(low), None, separator, node)),
        ]
    })
}

fn anchored(source: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", source)).unwrap()
}

proptest! {
    #[test]
    fn test_compilation_succeeds_and_is_deterministic(expression in node_strategy()) {
        let first = compile(&start(expression.clone()), &ConversionOptions::default());
        let second = compile(&start(expression), &ConversionOptions::default());
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_accepted_by_a_regex_engine(expression in node_strategy()) {
        let source = compile(&start(expression), &ConversionOptions::default()).unwrap();
        prop_assert!(Regex::new(&source).is_ok(), "engine rejected: {}", source);
    }

    #[test]
    fn test_transparent_wrappers_do_not_change_output(expression in node_strategy()) {
        let options = ConversionOptions::default();
        let direct = compile(&start(expression.clone()), &options).unwrap();
        let through_named = compile(
            &start(named("wrapper", expression.clone())),
            &options,
        )
        .unwrap();
        let through_reference = compile(
            &grammar(vec![
                rule("start", rule_ref("Helper")),
                rule("Helper", expression),
            ]),
            &options,
        )
        .unwrap();
        prop_assert_eq!(&direct, &through_named);
        prop_assert_eq!(&direct, &through_reference);
    }

    #[test]
    fn test_group_style_preserves_the_language(
        expression in node_strategy(),
        input in "[a-z0-9_,]{0,8}",
    ) {
        let grammar = start(expression);
        let default_source = compile(&grammar, &ConversionOptions::default()).unwrap();
        let plain_source = compile(
            &grammar,
            &ConversionOptions { no_non_capture_groups: true },
        )
        .unwrap();
        let default_re = anchored(&default_source);
        let plain_re = anchored(&plain_source);
        prop_assert_eq!(
            default_re.is_match(&input),
            plain_re.is_match(&input),
            "group style diverged on {:?}: {} vs {}",
            input,
            default_source,
            plain_source
        );
    }

    #[test]
    fn test_literals_match_themselves_after_escaping(text in "[ -~]{0,12}") {
        let source = compile(&start(lit(&text)), &ConversionOptions::default()).unwrap();
        let re = anchored(&source);
        prop_assert!(re.is_match(&text));
        let extended = format!("{}!x", text);
        prop_assert!(!re.is_match(&extended));
    }
}
