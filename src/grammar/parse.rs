use super::{Grammar, GrammarError, EPSILON};

fn error(line: usize, message: &str) -> GrammarError {
    GrammarError::Parse {
        line: line + 1,
        message: message.to_string(),
    }
}

impl Grammar {
    /// Reads rules written as `A -> a B | c D`. A line starting with `|`
    /// continues the previous rule. An empty alternative is read as `ε`.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        let mut g = Self::new();

        let mut previous_left: Option<usize> = None;
        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(error(i, "too many \"->\""));
            }
            let (left, rights): (usize, &str) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(error(i, "empty left side"));
                } else if left_str.split_whitespace().count() != 1 {
                    return Err(error(i, "left side contains whitespace"));
                }
                (g.add_non_terminal(left_str), parts[1].trim())
            } else {
                match (previous_left, parts[0].trim().strip_prefix('|')) {
                    (Some(idx), Some(rest)) => (idx, rest.trim()),
                    _ => return Err(error(i, "cannot find left side")),
                }
            };

            previous_left = Some(left);

            for right in rights.split('|') {
                let symbols: Vec<&str> = right.split_whitespace().collect();
                let right = if symbols.is_empty() {
                    EPSILON.to_string()
                } else {
                    symbols.join(" ")
                };
                g.add_production(left, right);
            }
        }

        Ok(g)
    }
}
