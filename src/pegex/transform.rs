//! Rewrites applied to nodes before conversion
//!
//! Regex has no "repeat with separator" construct, so a `repeated` node
//! carrying a delimiter is rewritten into plain sequencing before any other
//! processing sees it: `expr |min..max, delim|` becomes `expr (delim expr)`
//! repeated with both bounds decremented, wrapped in an optional when the
//! original minimum was zero. The rewrite builds fresh structural nodes but
//! shares the original expression and delimiter subtrees.

use super::ast::{Node, RepeatBound, Span};
use super::error::CompileError;
use std::rc::Rc;

/// Decrement a repeat bound by one. Open bounds and zero stay unchanged,
/// so a bound never goes negative.
pub fn decrement_bound(bound: &RepeatBound) -> RepeatBound {
    match bound.value {
        None | Some(0) => RepeatBound { value: bound.value },
        Some(value) => RepeatBound {
            value: Some(value - 1),
        },
    }
}

/// Rewrite a delimited repeat into an equivalent delimiter-free tree.
///
/// The result never carries a delimiter itself, so applying the rewrite to
/// its own output changes nothing. Synthesized nodes take over the original
/// node's span so later errors still point at the repeat in the source.
pub fn expand_delimiter(
    expression: &Rc<Node>,
    delimiter: &Rc<Node>,
    min: Option<&RepeatBound>,
    max: &RepeatBound,
    lazy: bool,
    location: Option<Span>,
) -> Rc<Node> {
    let tail = Rc::new(Node::Repeated {
        expression: Rc::new(Node::Sequence {
            elements: vec![Rc::clone(delimiter), Rc::clone(expression)],
            location,
        }),
        min: min.map(decrement_bound),
        max: decrement_bound(max),
        lazy,
        delimiter: None,
        location,
    });
    let body = Rc::new(Node::Sequence {
        elements: vec![Rc::clone(expression), tail],
        location,
    });

    let starts_at_zero = matches!(min, Some(bound) if bound.value == Some(0));
    if !starts_at_zero {
        return body;
    }
    if lazy {
        Rc::new(Node::OptionalLazy {
            expression: body,
            location,
        })
    } else {
        Rc::new(Node::Optional {
            expression: body,
            location,
        })
    }
}

/// The quantifier suffix for a delimiter-free `repeated` node.
///
/// No minimum means an exact count, `{max}`. With a minimum, a missing or
/// zero maximum means unbounded: `*` when the minimum is zero, `{min,}`
/// otherwise. Both present give `{min,max}`. Lazy repeats append `?`.
/// Bounds that no quantifier can express are rejected.
pub fn repeat_op(
    min: Option<&RepeatBound>,
    max: &RepeatBound,
    lazy: bool,
    location: Option<Span>,
) -> Result<String, CompileError> {
    let op = match min {
        None => match max.value {
            Some(count) => format!("{{{}}}", count),
            None => {
                return Err(CompileError::InvalidRepeatBounds {
                    min: None,
                    max: None,
                    location,
                })
            }
        },
        Some(min_bound) => {
            let low = match min_bound.value {
                Some(low) => low,
                None => {
                    return Err(CompileError::InvalidRepeatBounds {
                        min: None,
                        max: max.value,
                        location,
                    })
                }
            };
            match max.value {
                None | Some(0) => {
                    if low == 0 {
                        "*".to_string()
                    } else {
                        format!("{{{},}}", low)
                    }
                }
                Some(high) if low > high => {
                    return Err(CompileError::InvalidRepeatBounds {
                        min: Some(low),
                        max: Some(high),
                        location,
                    })
                }
                Some(high) => format!("{{{},{}}}", low, high),
            }
        }
    };
    if lazy {
        Ok(format!("{}?", op))
    } else {
        Ok(op)
    }
}
