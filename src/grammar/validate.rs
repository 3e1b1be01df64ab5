use std::collections::HashSet;

use super::{Action, GrammarData, GrammarError, Section, END_MARK};

fn check_keys<'a>(
    section: Section,
    expected: &HashSet<&str>,
    found: impl Iterator<Item = &'a str>,
) -> Result<(), GrammarError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for nt in found {
        if !seen.insert(nt) {
            return Err(GrammarError::DuplicateEntry {
                section,
                non_terminal: nt.to_string(),
            });
        }
    }
    let found = seen;
    if let Some(nt) = expected.iter().find(|nt| !found.contains(*nt)) {
        return Err(GrammarError::MissingEntry {
            section,
            non_terminal: nt.to_string(),
        });
    }
    if let Some(nt) = found.iter().find(|nt| !expected.contains(*nt)) {
        return Err(GrammarError::OrphanEntry {
            section,
            non_terminal: nt.to_string(),
        });
    }
    Ok(())
}

fn sorted(set: impl Iterator<Item = String>) -> Vec<String> {
    let mut v: Vec<String> = set.collect();
    v.sort();
    v
}

impl GrammarData {
    /// Checks that the sets and the table line up with the grammar.
    ///
    /// A symbol is a non-terminal iff it is the left side of a rule. Symbols
    /// that look like non-terminals (upper-case initial) but have no rule are
    /// reported, everything else is taken as a terminal.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.grammar.rules.is_empty() {
            return Err(GrammarError::Empty);
        }

        for rule in &self.grammar.rules {
            for symbol in rule.symbols() {
                let looks_non_terminal = symbol.starts_with(|c: char| c.is_ascii_uppercase());
                if looks_non_terminal && !self.grammar.is_non_terminal(symbol) {
                    return Err(GrammarError::UndefinedNonTerminal {
                        left: rule.left.clone(),
                        symbol: symbol.to_string(),
                    });
                }
            }
        }

        let non_terminals: HashSet<&str> = self.grammar.non_terminal_iter().collect();
        check_keys(
            Section::Grammar,
            &non_terminals,
            self.grammar.non_terminal_iter(),
        )?;
        check_keys(
            Section::First,
            &non_terminals,
            self.first.iter().map(|(nt, _)| nt),
        )?;
        check_keys(
            Section::Follow,
            &non_terminals,
            self.follow.iter().map(|(nt, _)| nt),
        )?;
        check_keys(
            Section::Table,
            &non_terminals,
            self.table.non_terminal_iter(),
        )?;

        let expected: HashSet<&str> = self
            .first
            .terminal_iter()
            .chain(self.follow.terminal_iter())
            .chain(std::iter::once(END_MARK))
            .collect();
        let found: HashSet<&str> = self.table.terminals.iter().map(|t| t.as_str()).collect();
        if expected != found || found.len() != self.table.terminals.len() {
            return Err(GrammarError::ColumnMismatch {
                expected: sorted(expected.into_iter().map(String::from)),
                found: self.table.terminals.clone(),
            });
        }

        for (left, row) in &self.table.rows {
            if row.len() != self.table.terminals.len() {
                return Err(GrammarError::IncompleteRow {
                    non_terminal: left.clone(),
                    expected: self.table.terminals.len(),
                    found: row.len(),
                });
            }

            // rows were checked against the grammar keys above
            let rule = match self.grammar.get_rule(left) {
                Some(rule) => rule,
                None => continue,
            };
            for (terminal, action) in self.table.terminals.iter().zip(row) {
                if let Action::Produce(right) = action {
                    if !rule.has_alternative(right) {
                        return Err(GrammarError::UnknownProduction {
                            non_terminal: left.clone(),
                            terminal: terminal.clone(),
                            production: right.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
