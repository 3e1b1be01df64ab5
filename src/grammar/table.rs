use super::ERROR_MARK;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Produce(String),
    Error,
}

impl Action {
    /// Reads a table cell: `erro` means no entry, anything else is a right-hand side.
    pub fn from_cell(cell: &str) -> Self {
        if cell == ERROR_MARK {
            Action::Error
        } else {
            Action::Produce(cell.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Produce(right) => right.as_str(),
            Action::Error => ERROR_MARK,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Action::Error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingTable {
    pub terminals: Vec<String>,
    pub rows: Vec<(String, Vec<Action>)>,
}

impl ParsingTable {
    pub fn new(terminals: &[&str]) -> Self {
        Self {
            terminals: terminals.iter().map(|t| t.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, left: &str, cells: &[&str]) {
        let row = cells.iter().map(|c| Action::from_cell(c)).collect();
        match self.rows.iter_mut().find(|(nt, _)| nt == left) {
            Some((_, existing)) => *existing = row,
            None => self.rows.push((left.to_string(), row)),
        }
    }

    pub fn row(&self, non_terminal: &str) -> Option<&[Action]> {
        self.rows
            .iter()
            .find(|(left, _)| left == non_terminal)
            .map(|(_, row)| row.as_slice())
    }

    pub fn get(&self, non_terminal: &str, terminal: &str) -> Option<&Action> {
        let col = self.terminals.iter().position(|t| t == terminal)?;
        self.row(non_terminal).and_then(|row| row.get(col))
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(left, _)| left.as_str())
    }
}
