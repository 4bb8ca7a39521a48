//! Rule lookup table built from a grammar's declarations

use super::ast::{Grammar, Rule};
use super::error::CompileError;
use std::collections::HashMap;

/// A name-to-declaration index over a grammar's rules.
///
/// Building the table validates that every rule name is declared exactly
/// once; redeclaration is rejected pointing at the second declaration.
#[derive(Debug)]
pub struct RuleTable<'g> {
    rules: HashMap<&'g str, &'g Rule>,
}

impl<'g> RuleTable<'g> {
    pub fn build(grammar: &'g Grammar) -> Result<Self, CompileError> {
        let mut rules = HashMap::with_capacity(grammar.rules.len());
        for rule in &grammar.rules {
            if rules.insert(rule.name.as_str(), rule).is_some() {
                return Err(CompileError::DuplicateRule {
                    name: rule.name.clone(),
                    location: rule.location,
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn get(&self, name: &str) -> Option<&'g Rule> {
        self.rules.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
