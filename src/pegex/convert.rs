//! Depth-first conversion of a grammar into regex source
//!
//! Conversion walks the start rule's expression tree and emits one regex
//! fragment per node, concatenating children into parents. Before a node is
//! dispatched on, three steps run in a fixed order: rule references and
//! named wrappers are inlined down to the expression they stand for (these
//! kinds are transparent and emit no syntax of their own), a delimited
//! repeat is rewritten into plain sequencing, and the node is checked
//! against the traversal stack for cycles. After dispatch the fragment is
//! parenthesized when the precedence policy demands it.
//!
//! Rule inlining is tracked by name so that a grammar whose rules refer to
//! each other in a loop is reported as a circular reference instead of
//! recursing forever. Re-entering a rule on a sibling branch is fine; only
//! re-entering one that is still being converted closes a cycle.

use super::ast::{Grammar, Node, Rule, Span};
use super::error::CompileError;
use super::escape::{escape_class_part, escape_regex};
use super::precedence::must_group;
use super::rules::RuleTable;
use super::transform::{expand_delimiter, repeat_op};
use std::rc::Rc;

/// Output-shaping options for conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Emit ordinary capturing groups in place of the non-capturing groups
    /// the converter inserts. The matched language is unchanged; only the
    /// number and positions of capture groups differ.
    pub no_non_capture_groups: bool,
}

/// Compile a grammar's start rule (its first declaration) to regex source.
pub fn compile(grammar: &Grammar, options: &ConversionOptions) -> Result<String, CompileError> {
    if let Some(initializer) = &grammar.initializer {
        return Err(unsupported(
            "JavaScript initializers are not supported.",
            initializer.location,
        ));
    }
    if let Some(initializer) = &grammar.top_level_initializer {
        return Err(unsupported(
            "JavaScript initializers are not supported.",
            initializer.location,
        ));
    }

    let rules = RuleTable::build(grammar)?;
    let start = match grammar.rules.first() {
        Some(start) => start,
        None => {
            return Err(CompileError::EmptyGrammar {
                location: grammar.location,
            })
        }
    };

    let mut converter = Converter {
        rules,
        stack: Vec::new(),
        rule_trail: vec![start.name.clone()],
        options: options.clone(),
    };
    converter.convert(&start.expression)
}

struct Converter<'g> {
    rules: RuleTable<'g>,
    /// Nodes currently being converted, outermost first. Transparent kinds
    /// never appear here, so the last frame below the current node is the
    /// parent the precedence policy compares against.
    stack: Vec<Rc<Node>>,
    /// Names of the rules whose expressions the walk is currently inside,
    /// starting with the start rule.
    rule_trail: Vec<String>,
    options: ConversionOptions,
}

impl<'g> Converter<'g> {
    fn convert(&mut self, node: &Rc<Node>) -> Result<String, CompileError> {
        let mut current = Rc::clone(node);
        let mut entered = 0usize;

        // Inline transparent wrappers down to the expression they stand for.
        loop {
            let next = match &*current {
                Node::Named { expression, .. } => Rc::clone(expression),
                Node::RuleRef { name, location } => {
                    let rule = match self.rules.get(name) {
                        Some(rule) => rule,
                        None => {
                            return Err(CompileError::UnresolvedReference {
                                name: name.clone(),
                                location: *location,
                            })
                        }
                    };
                    if self.rule_trail.iter().any(|open| *open == rule.name) {
                        return Err(self.circular_reference(rule));
                    }
                    self.rule_trail.push(rule.name.clone());
                    entered += 1;
                    Rc::clone(&rule.expression)
                }
                _ => break,
            };
            current = next;
        }

        // Delimited repeats are rewritten before the identity check below,
        // since the rewrite replaces the node.
        let expanded = match &*current {
            Node::Repeated {
                expression,
                min,
                max,
                lazy,
                delimiter: Some(delimiter),
                location,
            } => Some(expand_delimiter(
                expression,
                delimiter,
                min.as_ref(),
                max,
                *lazy,
                *location,
            )),
            _ => None,
        };
        if let Some(replacement) = expanded {
            current = replacement;
        }

        if self.stack.iter().any(|frame| Rc::ptr_eq(frame, &current)) {
            return Err(CompileError::CircularReference {
                names: self.rule_trail.clone(),
                location: current.location(),
            });
        }

        self.stack.push(Rc::clone(&current));
        let fragment = self.node_fragment(&current);
        self.stack.pop();
        let mut fragment = fragment?;

        let needs_group = must_group(
            current.as_ref(),
            self.stack.last().map(|frame| frame.as_ref()),
        );
        if needs_group {
            fragment = self.group(fragment);
        }

        self.rule_trail.truncate(self.rule_trail.len() - entered);
        Ok(fragment)
    }

    fn node_fragment(&mut self, node: &Rc<Node>) -> Result<String, CompileError> {
        match &**node {
            Node::Literal {
                value,
                ignore_case,
                location,
            } => {
                if *ignore_case {
                    return Err(unsupported(
                        "Case insensitive literals are not supported.",
                        *location,
                    ));
                }
                Ok(escape_regex(value))
            }
            Node::Class {
                parts,
                inverted,
                ignore_case,
                location,
            } => {
                if *ignore_case {
                    return Err(unsupported(
                        "Case insensitive classes are not supported.",
                        *location,
                    ));
                }
                let mut body = String::new();
                for part in parts {
                    body.push_str(&escape_class_part(part));
                }
                Ok(format!("{}{}]", if *inverted { "[^" } else { "[" }, body))
            }
            Node::Any { .. } => Ok(".".to_string()),
            Node::BuiltInClass { regex_text, .. } => Ok(regex_text.clone()),
            Node::UnicodeCharClass { regex_text, .. } => Ok(format!("\\p{{{}}}", regex_text)),
            Node::BackReference { index, .. } => Ok(format!("\\{}", index)),
            Node::NamedBackReference { name, .. } => Ok(format!("\\k<{}>", name)),
            Node::InputBoundary { regex_text, .. } => Ok(regex_text.clone()),
            Node::Sequence { elements, .. } => {
                let mut out = String::new();
                for element in elements {
                    out.push_str(&self.convert(element)?);
                }
                Ok(out)
            }
            Node::Choice { alternatives, .. } => {
                let mut parts = Vec::with_capacity(alternatives.len());
                for alternative in alternatives {
                    parts.push(self.convert(alternative)?);
                }
                Ok(parts.join("|"))
            }
            Node::Optional { expression, .. } => Ok(format!("{}?", self.convert(expression)?)),
            Node::ZeroOrMore { expression, .. } => Ok(format!("{}*", self.convert(expression)?)),
            Node::OneOrMore { expression, .. } => Ok(format!("{}+", self.convert(expression)?)),
            Node::OptionalLazy { expression, .. } => Ok(format!("{}??", self.convert(expression)?)),
            Node::ZeroOrMoreLazy { expression, .. } => {
                Ok(format!("{}*?", self.convert(expression)?))
            }
            Node::OneOrMoreLazy { expression, .. } => Ok(format!("{}+?", self.convert(expression)?)),
            Node::Repeated {
                expression,
                min,
                max,
                lazy,
                delimiter,
                location,
            } => {
                debug_assert!(delimiter.is_none(), "delimited repeats are rewritten first");
                let body = self.convert(expression)?;
                Ok(format!(
                    "{}{}",
                    body,
                    repeat_op(min.as_ref(), max, *lazy, *location)?
                ))
            }
            Node::Labeled {
                label,
                pick,
                expression,
                ..
            } => {
                let body = self.convert(expression)?;
                match label {
                    Some(label) if !*pick => Ok(format!("(?<{}>{})", label, body)),
                    _ => Ok(format!("({})", body)),
                }
            }
            Node::Group { expression, .. } => {
                let body = self.convert(expression)?;
                Ok(self.group(body))
            }
            Node::SimpleNot { expression, .. } => Ok(format!("(?!{})", self.convert(expression)?)),
            Node::SimpleAnd { expression, .. } => Ok(format!("(?={})", self.convert(expression)?)),
            Node::SimpleNotBehind { expression, .. } => {
                Ok(format!("(?<!{})", self.convert(expression)?))
            }
            Node::SimpleAndBehind { expression, .. } => {
                Ok(format!("(?<={})", self.convert(expression)?))
            }
            Node::Action { location } => {
                Err(unsupported("JavaScript actions are not supported.", *location))
            }
            Node::SemanticAnd { location } | Node::SemanticNot { location } => Err(unsupported(
                "JavaScript assertions are not supported.",
                *location,
            )),
            Node::Named { .. } | Node::RuleRef { .. } => {
                unreachable!("transparent nodes are inlined before dispatch")
            }
        }
    }

    fn group(&self, fragment: String) -> String {
        if self.options.no_non_capture_groups {
            format!("({})", fragment)
        } else {
            format!("(?:{})", fragment)
        }
    }

    fn circular_reference(&self, reentered: &Rule) -> CompileError {
        let mut names = self.rule_trail.clone();
        names.push(reentered.name.clone());
        CompileError::CircularReference {
            names,
            location: reentered.location,
        }
    }
}

fn unsupported(message: &str, location: Option<Span>) -> CompileError {
    CompileError::UnsupportedConstruct {
        message: message.to_string(),
        location,
    }
}
