//! Main module for pegex library functionality

pub mod ast;
pub mod convert;
pub mod error;
pub mod escape;
pub mod precedence;
pub mod rules;
pub mod testing;
pub mod transform;
