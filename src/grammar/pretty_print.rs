use crowbook_text_processing::escape;

use super::{wire::set_to_vec, Grammar, GrammarData, ParsingTable, SymbolSets, EPSILON};

fn tex_symbols(right: &str) -> String {
    right
        .split(' ')
        .map(|s| escape::tex(s))
        .collect::<Vec<_>>()
        .join(" \\ ")
        .replace(EPSILON, "\\epsilon")
}

fn align(output: &[Vec<String>]) -> String {
    let width: Vec<usize> = (0..output[0].len())
        .map(|j| {
            output
                .iter()
                .map(|line| line[j].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    output
        .iter()
        .map(|line| {
            line.iter()
                .enumerate()
                .map(|(i, s)| format!("{:>width$}", s, width = width[i]))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Grammar {
    pub fn to_plaintext(&self) -> String {
        let left_width = self
            .rules
            .iter()
            .map(|r| r.left.chars().count())
            .max()
            .unwrap_or(0);
        self.rules
            .iter()
            .flat_map(|rule| {
                rule.alternatives.iter().enumerate().map(move |(i, right)| {
                    if i == 0 {
                        format!("{:>width$} -> {}", rule.left, right, width = left_width)
                    } else {
                        format!("{:>width$}  | {}", "", right, width = left_width)
                    }
                })
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.rules.iter().map(|rule| {
                let right = rule
                    .alternatives
                    .iter()
                    .map(|r| tex_symbols(r))
                    .collect::<Vec<_>>()
                    .join(" \\mid ");
                format!("{} & \\rightarrow & {}", escape::tex(rule.left.as_str()), right)
            }))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }
}

impl SymbolSets {
    fn plain_entry(&self, non_terminal: &str) -> String {
        self.get(non_terminal)
            .map(|set| set_to_vec(set).join(", "))
            .unwrap_or_default()
    }

    fn latex_entry(&self, non_terminal: &str) -> String {
        self.get(non_terminal)
            .map(|set| {
                set_to_vec(set)
                    .into_iter()
                    .map(|s| escape::tex(s))
                    .collect::<Vec<_>>()
                    .join(r"\ ")
                    .replace(EPSILON, r"$\epsilon$")
            })
            .unwrap_or_default()
    }
}

impl ParsingTable {
    pub fn to_plaintext(&self) -> String {
        let mut header: Vec<String> = vec![String::new()];
        header.extend(self.terminals.iter().cloned());
        let mut output: Vec<Vec<String>> = vec![header];
        for (left, row) in &self.rows {
            let mut line: Vec<String> = vec![left.clone()];
            line.extend(row.iter().map(|action| {
                if action.is_error() {
                    String::new()
                } else {
                    format!("{} -> {}", left, action.as_str())
                }
            }));
            output.push(line);
        }
        align(&output)
    }

    pub fn to_latex(&self) -> String {
        let mut header: Vec<String> = vec![format!(
            "\\[\\begin{{array}}{{c{}}}\n",
            "|l".repeat(self.terminals.len()),
        )];
        header.extend(
            self.terminals
                .iter()
                .map(|t| format!("\\text{{{}}}", escape::tex(t.as_str()))),
        );
        let header = header.join(" & ");

        let output = self
            .rows
            .iter()
            .map(|(left, row)| {
                let mut line: Vec<String> = vec![escape::tex(left.as_str()).to_string()];
                line.extend(row.iter().map(|action| {
                    if action.is_error() {
                        String::new()
                    } else {
                        format!(
                            "{} \\rightarrow {}",
                            escape::tex(left.as_str()),
                            tex_symbols(action.as_str())
                        )
                    }
                }));
                line.join(" & ")
            })
            .collect::<Vec<_>>()
            .join("\\\\\n");

        header + "\\\\\\hline\n" + &output + "\n\\end{array}\\]"
    }
}

impl GrammarData {
    fn sets_to_plaintext(&self) -> String {
        self.grammar
            .non_terminal_iter()
            .map(|nt| {
                format!(
                    "{} | {} | {}",
                    nt,
                    self.first.plain_entry(nt),
                    self.follow.plain_entry(nt)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sets_to_latex(&self) -> String {
        let content = self
            .grammar
            .non_terminal_iter()
            .map(|nt| {
                format!(
                    "{} & {} & {}",
                    escape::tex(nt),
                    self.first.latex_entry(nt),
                    self.follow.latex_entry(nt)
                )
            })
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c}\n".to_string()
            + "Symbol & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }

    pub fn to_plaintext(&self) -> String {
        [
            self.grammar.to_plaintext(),
            self.sets_to_plaintext(),
            self.table.to_plaintext(),
        ]
        .join("\n\n")
    }

    pub fn to_latex(&self) -> String {
        [
            self.grammar.to_latex(),
            self.sets_to_latex(),
            self.table.to_latex(),
        ]
        .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::GrammarData;

    #[test]
    fn productions_plaintext() {
        let data = GrammarData::fixture().unwrap();
        let text = data.grammar.to_plaintext();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "S -> A d");
        assert_eq!(lines[1], "A -> a B");
        assert_eq!(lines[2], "   | c D");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn sets_plaintext() {
        let data = GrammarData::fixture().unwrap();
        let text = data.to_plaintext();
        assert!(text.contains("S | a, c, d | $, d"));
        assert!(text.contains("C | c, ε | d"));
    }

    #[test]
    fn table_plaintext_leaves_errors_blank() {
        let data = GrammarData::fixture().unwrap();
        let text = data.table.to_plaintext();
        let row_b = text.lines().find(|l| l.starts_with('B')).unwrap();
        assert!(row_b.contains("B -> b C"));
        assert!(!row_b.contains("erro"));
    }

    #[test]
    fn latex_epsilon() {
        let data = GrammarData::fixture().unwrap();
        let tex = data.to_latex();
        assert!(tex.contains("\\epsilon"));
        assert!(!tex.contains("ε"));
        assert!(tex.contains("\\begin{tabular}{c|c|c}"));
    }
}
