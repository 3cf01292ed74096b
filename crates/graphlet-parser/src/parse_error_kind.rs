use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant carries the minimal data needed for programmatic
/// decisions; the byte offset lives on the parent
/// [`ParseError`](crate::ParseError).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A `Name` production matched zero bytes.
    ///
    /// # Example
    /// ```text
    /// query { total: }
    ///                ^ expected a field name after the alias colon
    /// ```
    #[error("expected a name")]
    ExpectedName,

    /// A literal value could not be parsed.
    ///
    /// Covers both unrecognized leading bytes and numeric format
    /// failures (e.g. exponent notation, which this subset rejects).
    ///
    /// # Example
    /// ```text
    /// query { field(limit: 1e10) }
    ///                      ^^^^ no exponent notation in this grammar
    /// ```
    #[error("invalid value: {0}")]
    InvalidValue(ValueParsingError),

    /// Nesting exceeded the parser's configured depth limit.
    ///
    /// Selection sets, list values, and object values share one
    /// recursion-depth counter; adversarial inputs like `[[[[[...`
    /// fail here instead of overflowing the call stack.
    #[error("nesting exceeds the maximum depth of {max_depth}")]
    RecursionDepthExceeded {
        /// The configured limit that was exceeded.
        max_depth: usize,
    },

    /// Expected a specific byte but found a different one.
    ///
    /// # Example
    /// ```text
    /// query { field(id 4) }
    ///                  ^ expected `:`, found `4`
    /// ```
    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedCharacter {
        /// The byte the grammar required here.
        expected: char,
        /// The byte actually found.
        found: char,
    },

    /// The source text ended before a complete construct was parsed.
    ///
    /// # Example
    /// ```text
    /// query { user { name
    ///                    ^ expected `}`, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A multi-byte keyword literal did not match.
    ///
    /// # Example
    /// ```text
    /// query { field(flag: tru) }
    ///                     ^^^ expected the keyword `true`
    /// ```
    #[error("expected the word `{expected}`")]
    UnexpectedWord {
        /// The keyword the grammar required here.
        expected: String,
    },

    /// A definition began with a keyword other than `query`,
    /// `mutation`, or `subscription`.
    ///
    /// Fragment and type-system definitions are not part of this
    /// grammar subset.
    ///
    /// # Example
    /// ```text
    /// foo { bar }
    /// ^^^ not an operation keyword
    /// ```
    #[error("unknown definition keyword: `{word}`")]
    UnknownDefinition {
        /// The unrecognized leading keyword.
        word: String,
    },
}
