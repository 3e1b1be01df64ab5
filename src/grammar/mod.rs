pub mod error;
pub mod fixture;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub mod table;
pub mod validate;
pub mod wire;
pub use error::{GrammarError, Section};
pub use grammar::{Grammar, GrammarData, Rule, SymbolSets};
pub use table::{Action, ParsingTable};

pub const EPSILON: &str = "ε";
pub const END_MARK: &str = "$";
pub const ERROR_MARK: &str = "erro";
