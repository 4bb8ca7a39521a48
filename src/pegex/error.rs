//! Error type for grammar-to-regex conversion
//!
//! Every variant that can be traced to a grammar construct carries the
//! construct's source span, so callers can point at the offending spot.

use super::ast::Span;
use std::fmt;

/// Why a grammar could not be compiled to a regex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The grammar uses a feature regexes cannot express, such as an
    /// embedded JavaScript action or a case-insensitive literal.
    UnsupportedConstruct {
        message: String,
        location: Option<Span>,
    },
    /// A rule reference names a rule the grammar does not declare.
    UnresolvedReference {
        name: String,
        location: Option<Span>,
    },
    /// Two rules share a name. The location is the second declaration.
    DuplicateRule {
        name: String,
        location: Option<Span>,
    },
    /// Rule references form a cycle. `names` lists the rules along the
    /// cycle, ending with the rule that closed it.
    CircularReference {
        names: Vec<String>,
        location: Option<Span>,
    },
    /// A repeat carries bounds no quantifier can express, either because
    /// the count is missing entirely or because the minimum exceeds the
    /// maximum.
    InvalidRepeatBounds {
        min: Option<u64>,
        max: Option<u64>,
        location: Option<Span>,
    },
    /// The grammar declares no rules, so there is no start rule.
    EmptyGrammar { location: Option<Span> },
}

impl CompileError {
    /// The source span the error points at, if one was recorded.
    pub fn location(&self) -> Option<Span> {
        match self {
            CompileError::UnsupportedConstruct { location, .. } => *location,
            CompileError::UnresolvedReference { location, .. } => *location,
            CompileError::DuplicateRule { location, .. } => *location,
            CompileError::CircularReference { location, .. } => *location,
            CompileError::InvalidRepeatBounds { location, .. } => *location,
            CompileError::EmptyGrammar { location } => *location,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnsupportedConstruct { message, .. } => f.write_str(message),
            CompileError::UnresolvedReference { name, .. } => {
                write!(f, "Referenced rule \"{}\" does not exist.", name)
            }
            CompileError::DuplicateRule { name, .. } => {
                write!(f, "Redeclaration of rule: {}", name)
            }
            CompileError::CircularReference { names, .. } => {
                write!(
                    f,
                    "Grammar contains circular reference: {}",
                    names.join(" -> ")
                )
            }
            CompileError::InvalidRepeatBounds {
                min: Some(min),
                max: Some(max),
                ..
            } => {
                write!(
                    f,
                    "Invalid repeat bounds: minimum {} is greater than maximum {}.",
                    min, max
                )
            }
            CompileError::InvalidRepeatBounds { .. } => {
                f.write_str("Invalid repeat bounds: the repetition count is missing.")
            }
            CompileError::EmptyGrammar { .. } => f.write_str("Grammar does not declare any rules."),
        }
    }
}

impl std::error::Error for CompileError {}
