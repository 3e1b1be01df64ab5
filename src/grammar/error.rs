use std::fmt;

use thiserror::Error;

/// Part of a [`GrammarData`](super::GrammarData) that is keyed by non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Grammar,
    First,
    Follow,
    Table,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Grammar => write!(f, "grammar"),
            Section::First => write!(f, "FIRST"),
            Section::Follow => write!(f, "FOLLOW"),
            Section::Table => write!(f, "parsing table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("grammar has no rules")]
    Empty,

    #[error("`{symbol}` in a production of `{left}` is not a defined non-terminal")]
    UndefinedNonTerminal { left: String, symbol: String },

    #[error("`{non_terminal}` has no {section} entry")]
    MissingEntry {
        section: Section,
        non_terminal: String,
    },

    #[error("{section} has more than one entry for `{non_terminal}`")]
    DuplicateEntry {
        section: Section,
        non_terminal: String,
    },

    #[error("{section} has an entry for unknown non-terminal `{non_terminal}`")]
    OrphanEntry {
        section: Section,
        non_terminal: String,
    },

    #[error("table columns {found:?} do not match the terminals {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("row `{non_terminal}` has {found} actions for {expected} columns")]
    IncompleteRow {
        non_terminal: String,
        expected: usize,
        found: usize,
    },

    #[error("M[{non_terminal}, {terminal}] = `{production}` is not a production of `{non_terminal}`")]
    UnknownProduction {
        non_terminal: String,
        terminal: String,
        production: String,
    },
}
