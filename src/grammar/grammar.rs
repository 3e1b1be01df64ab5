use std::collections::HashSet;

use serde::Serialize;

use super::{ParsingTable, EPSILON};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub left: String,
    /// Right-hand sides, symbols separated by a single space. `ε` is the empty production.
    pub alternatives: Vec<String>,
}

impl Rule {
    pub fn new(left: &str) -> Self {
        Self {
            left: left.to_string(),
            alternatives: Vec::new(),
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.alternatives
            .iter()
            .flat_map(|alternative| alternative.split(' '))
            .filter(|&s| s != EPSILON)
    }

    pub fn has_alternative(&self, right: &str) -> bool {
        self.alternatives.iter().any(|a| a == right)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    pub rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn start_symbol(&self) -> Option<&str> {
        self.rules.first().map(|r| r.left.as_str())
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.left.as_str())
    }

    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.left == name)
    }

    pub fn is_non_terminal(&self, name: &str) -> bool {
        self.get_rule(name).is_some()
    }

    pub fn add_non_terminal(&mut self, name: &str) -> usize {
        if let Some(idx) = self.rules.iter().position(|r| r.left == name) {
            return idx;
        }
        self.rules.push(Rule::new(name));
        self.rules.len() - 1
    }

    pub fn add_production(&mut self, left: usize, right: String) {
        self.rules[left].alternatives.push(right);
    }
}

/// FIRST or FOLLOW sets, kept in the order the non-terminals were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSets {
    entries: Vec<(String, HashSet<String>)>,
}

impl SymbolSets {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, non_terminal: &str, symbols: &[&str]) {
        let set = symbols.iter().map(|s| s.to_string()).collect();
        match self.entries.iter_mut().find(|(nt, _)| nt == non_terminal) {
            Some((_, existing)) => *existing = set,
            None => self.entries.push((non_terminal.to_string(), set)),
        }
    }

    pub fn get(&self, non_terminal: &str) -> Option<&HashSet<String>> {
        self.entries
            .iter()
            .find(|(nt, _)| nt == non_terminal)
            .map(|(_, set)| set)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.entries.iter().map(|(nt, set)| (nt.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every symbol mentioned by any set, except `ε`.
    pub fn terminal_iter(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, set)| set.iter().map(|s| s.as_str()))
            .filter(|&s| s != EPSILON)
    }
}

/// Everything the front-end needs: productions, FIRST, FOLLOW and the LL(1) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarData {
    pub grammar: Grammar,
    pub first: SymbolSets,
    pub follow: SymbolSets,
    pub table: ParsingTable,
}
