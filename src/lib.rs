//! # pegex
//!
//! Compiles PEG-style grammars into the source text of an equivalent
//! regular expression.
//!
//! A grammar arrives as the JSON AST the pegex parser produces, is
//! deserialized into [`Grammar`], and its first rule is compiled with
//! [`compile`]. Constructs a regex cannot express, such as embedded
//! JavaScript actions, are rejected with a [`CompileError`] pointing at
//! the offending spot in the grammar source.

pub mod pegex;

pub use pegex::ast::{ClassPart, Grammar, Initializer, Node, Position, RepeatBound, Rule, Span};
pub use pegex::convert::{compile, ConversionOptions};
pub use pegex::error::CompileError;
