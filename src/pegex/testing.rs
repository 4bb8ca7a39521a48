//! Factories for building grammar trees succinctly in tests

use super::ast::{ClassPart, Grammar, Node, RepeatBound, Rule};
use std::rc::Rc;

/// Make a literal node
pub fn lit(value: &str) -> Rc<Node> {
    Rc::new(Node::Literal {
        value: value.to_string(),
        ignore_case: false,
        location: None,
    })
}

/// Make a case-insensitive literal node
pub fn lit_ci(value: &str) -> Rc<Node> {
    Rc::new(Node::Literal {
        value: value.to_string(),
        ignore_case: true,
        location: None,
    })
}

/// Make an any-character node
pub fn any() -> Rc<Node> {
    Rc::new(Node::Any { location: None })
}

/// Make a built-in class node from its regex text, e.g. `\d`
pub fn built_in(regex_text: &str) -> Rc<Node> {
    Rc::new(Node::BuiltInClass {
        regex_text: regex_text.to_string(),
        location: None,
    })
}

/// Make a unicode character class node from the class name, e.g. `Sc`
pub fn unicode_class(regex_text: &str) -> Rc<Node> {
    Rc::new(Node::UnicodeCharClass {
        regex_text: regex_text.to_string(),
        location: None,
    })
}

/// Make a numbered back reference node
pub fn back_ref(index: u32) -> Rc<Node> {
    Rc::new(Node::BackReference {
        index,
        location: None,
    })
}

/// Make a named back reference node
pub fn named_back_ref(name: &str) -> Rc<Node> {
    Rc::new(Node::NamedBackReference {
        name: name.to_string(),
        location: None,
    })
}

/// Make an input boundary node from its regex text, `^` or `$`
pub fn boundary(regex_text: &str) -> Rc<Node> {
    Rc::new(Node::InputBoundary {
        regex_text: regex_text.to_string(),
        location: None,
    })
}

/// Make a single-character class part
pub fn part(ch: char) -> ClassPart {
    ClassPart::Single(ch.to_string())
}

/// Make a range class part
pub fn range(low: char, high: char) -> ClassPart {
    ClassPart::Range(low.to_string(), high.to_string())
}

/// Make a character class node
pub fn class(parts: Vec<ClassPart>, inverted: bool) -> Rc<Node> {
    Rc::new(Node::Class {
        parts,
        inverted,
        ignore_case: false,
        location: None,
    })
}

/// Make a case-insensitive character class node
pub fn class_ci(parts: Vec<ClassPart>, inverted: bool) -> Rc<Node> {
    Rc::new(Node::Class {
        parts,
        inverted,
        ignore_case: true,
        location: None,
    })
}

/// Make a sequence node
pub fn seq(elements: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Sequence {
        elements,
        location: None,
    })
}

/// Make a choice node
pub fn choice(alternatives: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Choice {
        alternatives,
        location: None,
    })
}

/// Make an optional node
pub fn opt(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Optional {
        expression,
        location: None,
    })
}

/// Make a lazy optional node
pub fn opt_lazy(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::OptionalLazy {
        expression,
        location: None,
    })
}

/// Make a zero-or-more node
pub fn star(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::ZeroOrMore {
        expression,
        location: None,
    })
}

/// Make a lazy zero-or-more node
pub fn star_lazy(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::ZeroOrMoreLazy {
        expression,
        location: None,
    })
}

/// Make a one-or-more node
pub fn plus(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::OneOrMore {
        expression,
        location: None,
    })
}

/// Make a lazy one-or-more node
pub fn plus_lazy(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::OneOrMoreLazy {
        expression,
        location: None,
    })
}

fn bound(value: Option<u64>) -> Option<RepeatBound> {
    value.map(|value| RepeatBound { value: Some(value) })
}

/// Make a repeated node with the given bounds; `min: None` is an exact count
pub fn repeated(min: Option<u64>, max: Option<u64>, expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Repeated {
        expression,
        min: bound(min),
        max: RepeatBound { value: max },
        lazy: false,
        delimiter: None,
        location: None,
    })
}

/// Make a lazy repeated node with the given bounds
pub fn repeated_lazy(min: Option<u64>, max: Option<u64>, expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Repeated {
        expression,
        min: bound(min),
        max: RepeatBound { value: max },
        lazy: true,
        delimiter: None,
        location: None,
    })
}

/// Make a repeated node with a delimiter between occurrences
pub fn delimited(
    min: Option<u64>,
    max: Option<u64>,
    delimiter: Rc<Node>,
    expression: Rc<Node>,
) -> Rc<Node> {
    Rc::new(Node::Repeated {
        expression,
        min: bound(min),
        max: RepeatBound { value: max },
        lazy: false,
        delimiter: Some(delimiter),
        location: None,
    })
}

/// Make a lazy repeated node with a delimiter between occurrences
pub fn delimited_lazy(
    min: Option<u64>,
    max: Option<u64>,
    delimiter: Rc<Node>,
    expression: Rc<Node>,
) -> Rc<Node> {
    Rc::new(Node::Repeated {
        expression,
        min: bound(min),
        max: RepeatBound { value: max },
        lazy: true,
        delimiter: Some(delimiter),
        location: None,
    })
}

/// Make a labeled node that captures under the label's name
pub fn labeled(label: &str, expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Labeled {
        label: Some(label.to_string()),
        pick: false,
        expression,
        location: None,
    })
}

/// Make an unlabeled pick node, as written `@expr`
pub fn pluck(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Labeled {
        label: None,
        pick: true,
        expression,
        location: None,
    })
}

/// Make a labeled pick node, as written `@name:expr`
pub fn pluck_as(label: &str, expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Labeled {
        label: Some(label.to_string()),
        pick: true,
        expression,
        location: None,
    })
}

/// Make an explicit group node
pub fn group(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Group {
        expression,
        location: None,
    })
}

/// Make a negative lookahead node
pub fn neg_lookahead(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::SimpleNot {
        expression,
        location: None,
    })
}

/// Make a positive lookahead node
pub fn lookahead(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::SimpleAnd {
        expression,
        location: None,
    })
}

/// Make a negative lookbehind node
pub fn neg_lookbehind(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::SimpleNotBehind {
        expression,
        location: None,
    })
}

/// Make a positive lookbehind node
pub fn lookbehind(expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::SimpleAndBehind {
        expression,
        location: None,
    })
}

/// Make a named wrapper node
pub fn named(name: &str, expression: Rc<Node>) -> Rc<Node> {
    Rc::new(Node::Named {
        name: name.to_string(),
        expression,
        location: None,
    })
}

/// Make a rule reference node
pub fn rule_ref(name: &str) -> Rc<Node> {
    Rc::new(Node::RuleRef {
        name: name.to_string(),
        location: None,
    })
}

/// Make an action node (always rejected by conversion)
pub fn action() -> Rc<Node> {
    Rc::new(Node::Action { location: None })
}

/// Make a semantic-and predicate node (always rejected by conversion)
pub fn semantic_and() -> Rc<Node> {
    Rc::new(Node::SemanticAnd { location: None })
}

/// Make a semantic-not predicate node (always rejected by conversion)
pub fn semantic_not() -> Rc<Node> {
    Rc::new(Node::SemanticNot { location: None })
}

/// Make a rule declaration
pub fn rule(name: &str, expression: Rc<Node>) -> Rule {
    Rule::new(name, expression)
}

/// Make a grammar from rule declarations
pub fn grammar(rules: Vec<Rule>) -> Grammar {
    Grammar::new(rules)
}

/// Make a single-rule grammar whose start rule is named `start`
pub fn start(expression: Rc<Node>) -> Grammar {
    grammar(vec![rule("start", expression)])
}
