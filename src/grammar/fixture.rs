use super::{Grammar, GrammarData, GrammarError, ParsingTable, SymbolSets};

pub const GRAMMAR_SOURCE: &str = "
S -> A d
A -> a B | c D | d S
B -> b C | d D
C -> c A | ε
D -> a B
";

const TERMINALS: [&str; 5] = ["a", "b", "c", "d", "$"];

impl GrammarData {
    /// The hand-built LL(1) grammar served by this crate. Sets and table are
    /// written out literally, nothing is derived from the productions.
    pub fn fixture() -> Result<Self, GrammarError> {
        let grammar = Grammar::parse(GRAMMAR_SOURCE)?;

        let mut first = SymbolSets::new();
        first.insert("S", &["a", "c", "d"]);
        first.insert("A", &["a", "c", "d"]);
        first.insert("B", &["b", "d"]);
        first.insert("C", &["c", "ε"]);
        first.insert("D", &["a"]);

        let mut follow = SymbolSets::new();
        follow.insert("S", &["$", "d"]);
        follow.insert("A", &["d"]);
        follow.insert("B", &["d"]);
        follow.insert("C", &["d"]);
        follow.insert("D", &["d"]);

        let mut table = ParsingTable::new(&TERMINALS);
        table.add_row("S", &["A d", "erro", "A d", "A d", "erro"]);
        table.add_row("A", &["a B", "erro", "c D", "d S", "erro"]);
        table.add_row("B", &["erro", "b C", "erro", "d D", "erro"]);
        table.add_row("C", &["erro", "erro", "c A", "ε", "erro"]);
        table.add_row("D", &["a B", "erro", "erro", "erro", "erro"]);

        Ok(Self {
            grammar,
            first,
            follow,
            table,
        })
    }
}
