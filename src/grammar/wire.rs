//! JSON shapes of the grammar data.
//!
//! Maps are written in declaration order. Sets have no JSON counterpart, so
//! they go out as arrays: sorted, with `ε` last, which keeps repeated payloads
//! byte-identical. Clients must not depend on that order.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Action, Grammar, ParsingTable, SymbolSets, EPSILON};

/// The single place where a set becomes a sequence.
pub fn set_to_vec(set: &HashSet<String>) -> Vec<&str> {
    let mut v: Vec<&str> = set
        .iter()
        .map(|s| s.as_str())
        .filter(|&s| s != EPSILON)
        .collect();
    v.sort();
    if set.contains(EPSILON) {
        v.push(EPSILON);
    }
    v
}

impl Serialize for Grammar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.left, &rule.alternatives)?;
        }
        map.end()
    }
}

impl Serialize for SymbolSets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (nt, set) in self.iter() {
            map.serialize_entry(nt, &set_to_vec(set))?;
        }
        map.end()
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct TableRow<'a> {
    terminals: &'a [String],
    actions: &'a [Action],
}

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.terminals.len()))?;
        for (terminal, action) in self.terminals.iter().zip(self.actions) {
            map.serialize_entry(terminal, action)?;
        }
        map.end()
    }
}

impl Serialize for ParsingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (left, actions) in &self.rows {
            let row = TableRow {
                terminals: &self.terminals,
                actions,
            };
            map.serialize_entry(left, &row)?;
        }
        map.end()
    }
}
