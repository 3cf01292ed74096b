/// Errors that occur when parsing literal values.
///
/// These errors occur when converting raw source text to semantic
/// values, or when a value's first byte selects no value rule at all.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid float literal (bad format, stray exponent, etc.).
    #[error("invalid float literal: `{0}`")]
    Float(String),

    /// Invalid integer literal (overflow, bad format, stray exponent).
    ///
    /// Note that `1e10` lands here: the literal contains no `.`, so it
    /// is parsed as an integer, and exponent notation is not valid
    /// integer syntax in this grammar.
    #[error("invalid integer literal: `{0}`")]
    Int(String),

    /// The value's first byte matched none of `"`, `[`, `{`, a digit,
    /// `-`, `t`, `f`, or `n`.
    #[error("no value starts with `{0}`")]
    UnrecognizedStart(char),
}
