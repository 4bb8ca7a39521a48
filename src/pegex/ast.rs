//! Grammar AST type definitions
//!
//! This module defines the node types for a parsed pegex grammar, in the
//! same shape the JavaScript parser emits them, so a grammar serialized as
//! JSON on one side deserializes losslessly here. Nodes are internally
//! tagged by their `type` field and child links are reference counted,
//! which lets rewritten trees share unchanged subtrees with the original.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

// ============================================================================
// Source locations
// ============================================================================

/// A position in the grammar source (byte offset plus line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in the grammar source (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ============================================================================
// Grammar structure
// ============================================================================

/// A complete parsed grammar: an ordered list of rule declarations plus the
/// optional JavaScript initializer blocks (which conversion rejects, but
/// which must still deserialize so the error can point at them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grammar {
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Initializer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_level_initializer: Option<Initializer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            initializer: None,
            top_level_initializer: None,
            location: None,
        }
    }
}

/// A JavaScript initializer block attached to the grammar. Only the
/// location survives deserialization; the code itself is never used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

/// A named rule declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub expression: Rc<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

impl Rule {
    pub fn new(name: impl Into<String>, expression: Rc<Node>) -> Self {
        Self {
            name: name.into(),
            expression,
            location: None,
        }
    }
}

// ============================================================================
// Expression nodes
// ============================================================================

/// One entry of a character class: either a single character or an
/// inclusive range. The wire format is a bare string or a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassPart {
    Range(String, String),
    Single(String),
}

/// One bound of a `repeated` node. A `None` value means the bound was
/// written as open (`|n..|`) in the grammar source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatBound {
    #[serde(default)]
    pub value: Option<u64>,
}

impl RepeatBound {
    pub fn new(value: Option<u64>) -> Self {
        Self { value }
    }
}

/// A grammar expression node, tagged on the wire by its `type` field.
///
/// The set of variants matches what the pegex parser can produce. Kinds the
/// converter rejects (`action`, `semantic_and`, `semantic_not`) still
/// deserialize so that the rejection can carry a source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    #[serde(rename_all = "camelCase")]
    Literal {
        value: String,
        #[serde(default)]
        ignore_case: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    #[serde(rename_all = "camelCase")]
    Class {
        parts: Vec<ClassPart>,
        #[serde(default)]
        inverted: bool,
        #[serde(default)]
        ignore_case: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Any {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    #[serde(rename_all = "camelCase")]
    BuiltInClass {
        regex_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    #[serde(rename_all = "camelCase")]
    UnicodeCharClass {
        regex_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    BackReference {
        index: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    NamedBackReference {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    #[serde(rename_all = "camelCase")]
    InputBoundary {
        regex_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Sequence {
        elements: Vec<Rc<Node>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Choice {
        alternatives: Vec<Rc<Node>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Optional {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    ZeroOrMore {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    OneOrMore {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    OptionalLazy {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    ZeroOrMoreLazy {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    OneOrMoreLazy {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Repeated {
        expression: Rc<Node>,
        #[serde(default)]
        min: Option<RepeatBound>,
        max: RepeatBound,
        #[serde(default)]
        lazy: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delimiter: Option<Rc<Node>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Labeled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        pick: bool,
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Group {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SimpleNot {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SimpleAnd {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SimpleNotBehind {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SimpleAndBehind {
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Named {
        name: String,
        expression: Rc<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    RuleRef {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    Action {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SemanticAnd {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
    SemanticNot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Span>,
    },
}

impl Node {
    /// The node's wire tag, as it appears in the JSON `type` field.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Literal { .. } => "literal",
            Node::Class { .. } => "class",
            Node::Any { .. } => "any",
            Node::BuiltInClass { .. } => "built_in_class",
            Node::UnicodeCharClass { .. } => "unicode_char_class",
            Node::BackReference { .. } => "back_reference",
            Node::NamedBackReference { .. } => "named_back_reference",
            Node::InputBoundary { .. } => "input_boundary",
            Node::Sequence { .. } => "sequence",
            Node::Choice { .. } => "choice",
            Node::Optional { .. } => "optional",
            Node::ZeroOrMore { .. } => "zero_or_more",
            Node::OneOrMore { .. } => "one_or_more",
            Node::OptionalLazy { .. } => "optional_lazy",
            Node::ZeroOrMoreLazy { .. } => "zero_or_more_lazy",
            Node::OneOrMoreLazy { .. } => "one_or_more_lazy",
            Node::Repeated { .. } => "repeated",
            Node::Labeled { .. } => "labeled",
            Node::Group { .. } => "group",
            Node::SimpleNot { .. } => "simple_not",
            Node::SimpleAnd { .. } => "simple_and",
            Node::SimpleNotBehind { .. } => "simple_not_behind",
            Node::SimpleAndBehind { .. } => "simple_and_behind",
            Node::Named { .. } => "named",
            Node::RuleRef { .. } => "rule_ref",
            Node::Action { .. } => "action",
            Node::SemanticAnd { .. } => "semantic_and",
            Node::SemanticNot { .. } => "semantic_not",
        }
    }

    /// The node's source span, if the parser recorded one.
    pub fn location(&self) -> Option<Span> {
        match self {
            Node::Literal { location, .. } => *location,
            Node::Class { location, .. } => *location,
            Node::Any { location, .. } => *location,
            Node::BuiltInClass { location, .. } => *location,
            Node::UnicodeCharClass { location, .. } => *location,
            Node::BackReference { location, .. } => *location,
            Node::NamedBackReference { location, .. } => *location,
            Node::InputBoundary { location, .. } => *location,
            Node::Sequence { location, .. } => *location,
            Node::Choice { location, .. } => *location,
            Node::Optional { location, .. } => *location,
            Node::ZeroOrMore { location, .. } => *location,
            Node::OneOrMore { location, .. } => *location,
            Node::OptionalLazy { location, .. } => *location,
            Node::ZeroOrMoreLazy { location, .. } => *location,
            Node::OneOrMoreLazy { location, .. } => *location,
            Node::Repeated { location, .. } => *location,
            Node::Labeled { location, .. } => *location,
            Node::Group { location, .. } => *location,
            Node::SimpleNot { location, .. } => *location,
            Node::SimpleAnd { location, .. } => *location,
            Node::SimpleNotBehind { location, .. } => *location,
            Node::SimpleAndBehind { location, .. } => *location,
            Node::Named { location, .. } => *location,
            Node::RuleRef { location, .. } => *location,
            Node::Action { location, .. } => *location,
            Node::SemanticAnd { location, .. } => *location,
            Node::SemanticNot { location, .. } => *location,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}
