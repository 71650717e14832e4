//! Parser configuration

/// How `let` and `return` statements treat the tokens after `=` / `return`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementValues {
    /// Build the value with a full expression parse
    #[default]
    Parse,
    /// Skip tokens up to the terminating `;` without building a value
    Skip,
}

/// Options fixed when a parser is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub statement_values: StatementValues,
}

impl ParserConfig {
    /// The minimal grammar, where statement values are skipped
    pub fn skipping_values() -> Self {
        Self {
            statement_values: StatementValues::Skip,
        }
    }
}
