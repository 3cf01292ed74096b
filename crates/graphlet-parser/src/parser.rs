//! Recursive descent parser for query documents.
//!
//! [`Parser`] walks the source text character-by-character through a
//! [`Cursor`], with one byte of lookahead and no backtracking: the
//! grammar is designed so each production's first byte unambiguously
//! selects its rule. The parser's only state is the cursor offset plus
//! a recursion-depth counter guarding nested constructs.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::Cursor;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ValueParsingError;
use indexmap::IndexMap;

/// A recursive descent parser for the query grammar subset.
///
/// # Usage
///
/// ```
/// use graphlet_parser::ast;
/// use graphlet_parser::Parser;
///
/// let source = "query { user(id: 4) { name } }";
/// let document = Parser::new(source).parse_document().unwrap();
///
/// assert!(matches!(
///     document.definitions[0],
///     ast::Definition::Operation(_),
/// ));
/// ```
pub struct Parser<'src> {
    cursor: Cursor<'src>,

    /// Current nesting depth, incremented on entry to
    /// `parse_selection_set` and to list/object value parsing.
    depth: usize,

    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Default nesting limit for selection sets and list/object values.
    ///
    /// Far beyond any realistic document while keeping adversarial
    /// inputs like `query { f { f { f { ...` from overflowing the call
    /// stack, even in debug builds with large un-optimized frames.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates a new parser over a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self {
            cursor: Cursor::new(source.as_ref()),
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the default nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the entire source text as a document.
    ///
    /// The first malformed construct aborts parsing entirely; there is
    /// no error recovery and no partial-document result.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        let mut definitions = vec![];
        loop {
            self.cursor.skip_insignificant_whitespace();
            if self.cursor.peek() == Cursor::EOF_SENTINEL {
                break;
            }
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions })
    }

    // =========================================================================
    // Grammar productions
    // =========================================================================

    /// `Definition := ("query" | "mutation" | "subscription") Name? SelectionSet`
    fn parse_definition(&mut self) -> Result<Definition, ParseError> {
        let keyword_offset = self.cursor.offset();
        let keyword = self.parse_name()?;
        let operation_kind = match keyword.as_str() {
            "mutation" => OperationKind::Mutation,
            "query" => OperationKind::Query,
            "subscription" => OperationKind::Subscription,
            _ => {
                return Err(ParseError {
                    kind: ParseErrorKind::UnknownDefinition { word: keyword },
                    offset: keyword_offset,
                });
            },
        };

        self.cursor.skip_insignificant_whitespace();
        let name = if is_name_byte(self.cursor.peek()) {
            Some(self.parse_name()?)
        } else {
            None
        };

        self.cursor.skip_insignificant_whitespace();
        let selection_set = self.parse_selection_set()?;

        Ok(Definition::Operation(OperationDefinition {
            name,
            operation_kind,
            selection_set,
        }))
    }

    /// `SelectionSet := '{' Selection* '}'`
    fn parse_selection_set(&mut self) -> Result<SelectionSet, ParseError> {
        self.enter_nested()?;
        self.cursor.expect(b'{')?;

        let mut selections = vec![];
        loop {
            self.cursor.skip_insignificant_whitespace();
            match self.cursor.peek() {
                b'}' => break,
                Cursor::EOF_SENTINEL => {
                    return Err(self.cursor.error(
                        ParseErrorKind::UnexpectedEndOfInput,
                    ));
                },
                _ => selections.push(self.parse_selection()?),
            }
        }
        self.cursor.expect(b'}')?;

        self.exit_nested();
        Ok(SelectionSet { selections })
    }

    /// `Selection := Name (':' Name)? Arguments? SelectionSet?`
    ///
    /// If the byte after the first name (whitespace skipped) is `:`,
    /// the first name is the alias and a second name is required for
    /// the field's actual name.
    fn parse_selection(&mut self) -> Result<Selection, ParseError> {
        let first_name = self.parse_name()?;
        self.cursor.skip_insignificant_whitespace();

        let (alias, name) = if self.cursor.peek() == b':' {
            self.cursor.expect(b':')?;
            self.cursor.skip_insignificant_whitespace();
            (Some(first_name), self.parse_name()?)
        } else {
            (None, first_name)
        };

        self.cursor.skip_insignificant_whitespace();
        let arguments = if self.cursor.peek() == b'(' {
            self.parse_arguments()?
        } else {
            IndexMap::new()
        };

        self.cursor.skip_insignificant_whitespace();
        let selection_set = if self.cursor.peek() == b'{' {
            self.parse_selection_set()?
        } else {
            SelectionSet::default()
        };

        Ok(Selection {
            alias,
            arguments,
            name,
            selection_set,
        })
    }

    /// `Arguments := '(' (Name ':' Value ','?)* ')'`
    ///
    /// Commas are pure separators, never required, and a trailing comma
    /// before the closing `)` is tolerated. Duplicate argument names
    /// overwrite: last write wins, no error raised.
    fn parse_arguments(&mut self) -> Result<IndexMap<String, Value>, ParseError> {
        self.cursor.expect(b'(')?;

        let mut arguments = IndexMap::new();
        loop {
            self.cursor.skip_insignificant_whitespace();
            match self.cursor.peek() {
                b')' => break,
                Cursor::EOF_SENTINEL => {
                    return Err(self.cursor.error(
                        ParseErrorKind::UnexpectedEndOfInput,
                    ));
                },
                _ => {
                    let name = self.parse_name()?;
                    self.cursor.skip_insignificant_whitespace();
                    self.cursor.expect(b':')?;
                    self.cursor.skip_insignificant_whitespace();
                    let value = self.parse_value()?;
                    arguments.insert(name, value);

                    self.cursor.skip_insignificant_whitespace();
                    if self.cursor.peek() == b',' {
                        self.cursor.expect(b',')?;
                    }
                },
            }
        }
        self.cursor.expect(b')')?;

        Ok(arguments)
    }

    /// `Value := String | Number | List | Object | "true" | "false" | "null"`
    ///
    /// LL(1) dispatch on the first byte; anything else fails with
    /// [`ParseErrorKind::InvalidValue`].
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek() {
            b'"' => self.parse_string_value(),
            b'[' => self.parse_list_value(),
            b'{' => self.parse_object_value(),
            b'-' | b'0'..=b'9' => self.parse_number_value(),
            b't' => {
                self.cursor.expect_literal("true")?;
                Ok(Value::Bool(true))
            },
            b'f' => {
                self.cursor.expect_literal("false")?;
                Ok(Value::Bool(false))
            },
            b'n' => {
                self.cursor.expect_literal("null")?;
                Ok(Value::Null)
            },
            found => Err(self.cursor.error(ParseErrorKind::InvalidValue(
                ValueParsingError::UnrecognizedStart(found as char),
            ))),
        }
    }

    /// `String := '"' <any byte except '"'>* '"'`
    ///
    /// The text between the quotes is taken verbatim: no escape
    /// sequence decoding, so a `"` can never appear inside a string
    /// value. This is a documented grammar limitation.
    fn parse_string_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.expect(b'"')?;
        let start = self.cursor.offset();
        while self.cursor.peek() != b'"' {
            self.cursor.advance()?;
        }
        let text = self.source_slice(start, self.cursor.offset());
        self.cursor.expect(b'"')?;
        Ok(Value::String(text.to_string()))
    }

    /// `Number := '-'? digit+ ('.' digit+)?`
    ///
    /// The presence of `.` alone decides Int vs Float. The literal is
    /// scanned as one run of sign/alphanumeric/dot bytes and handed to
    /// the std numeric parsers, so exponent notation like `1e10` fails
    /// with [`ParseErrorKind::InvalidValue`] rather than being silently
    /// truncated.
    fn parse_number_value(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.offset();
        if self.cursor.peek() == b'-' {
            self.cursor.expect(b'-')?;
        }
        while self.cursor.peek().is_ascii_alphanumeric()
            || self.cursor.peek() == b'.'
        {
            self.cursor.advance()?;
        }
        let text = self.source_slice(start, self.cursor.offset());

        let value = if text.contains('.') {
            text.parse::<f64>().map(Value::Float).map_err(|_| {
                ValueParsingError::Float(text.to_string())
            })
        } else {
            text.parse::<i64>().map(Value::Int).map_err(|_| {
                ValueParsingError::Int(text.to_string())
            })
        };

        value.map_err(|parse_failure| ParseError {
            kind: ParseErrorKind::InvalidValue(parse_failure),
            offset: start,
        })
    }

    /// `List := '[' (Value ','?)* ']'`
    fn parse_list_value(&mut self) -> Result<Value, ParseError> {
        self.enter_nested()?;
        self.cursor.expect(b'[')?;

        let mut items = vec![];
        loop {
            self.cursor.skip_insignificant_whitespace();
            match self.cursor.peek() {
                b']' => break,
                Cursor::EOF_SENTINEL => {
                    return Err(self.cursor.error(
                        ParseErrorKind::UnexpectedEndOfInput,
                    ));
                },
                _ => {
                    items.push(self.parse_value()?);
                    self.cursor.skip_insignificant_whitespace();
                    if self.cursor.peek() == b',' {
                        self.cursor.expect(b',')?;
                    }
                },
            }
        }
        self.cursor.expect(b']')?;

        self.exit_nested();
        Ok(Value::List(items))
    }

    /// `Object := '{' (Name ':' Value ','?)* '}'`
    ///
    /// Duplicate field names overwrite: last write wins, no error.
    fn parse_object_value(&mut self) -> Result<Value, ParseError> {
        self.enter_nested()?;
        self.cursor.expect(b'{')?;

        let mut fields = IndexMap::new();
        loop {
            self.cursor.skip_insignificant_whitespace();
            match self.cursor.peek() {
                b'}' => break,
                Cursor::EOF_SENTINEL => {
                    return Err(self.cursor.error(
                        ParseErrorKind::UnexpectedEndOfInput,
                    ));
                },
                _ => {
                    let name = self.parse_name()?;
                    self.cursor.skip_insignificant_whitespace();
                    self.cursor.expect(b':')?;
                    self.cursor.skip_insignificant_whitespace();
                    let value = self.parse_value()?;
                    fields.insert(name, value);

                    self.cursor.skip_insignificant_whitespace();
                    if self.cursor.peek() == b',' {
                        self.cursor.expect(b',')?;
                    }
                },
            }
        }
        self.cursor.expect(b'}')?;

        self.exit_nested();
        Ok(Value::Object(fields))
    }

    /// `Name := (alnum | '_')+`
    fn parse_name(&mut self) -> Result<String, ParseError> {
        let start = self.cursor.offset();
        while is_name_byte(self.cursor.peek()) {
            self.cursor.advance()?;
        }
        if self.cursor.offset() == start {
            return Err(self.cursor.error(ParseErrorKind::ExpectedName));
        }
        Ok(self.source_slice(start, self.cursor.offset()).to_string())
    }

    // =========================================================================
    // Depth guard and helpers
    // =========================================================================

    fn enter_nested(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.cursor.error(
                ParseErrorKind::RecursionDepthExceeded {
                    max_depth: self.max_depth,
                },
            ));
        }
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth -= 1;
    }

    fn source_slice(&self, start: usize, end: usize) -> &'src str {
        self.cursor.source_slice(start, end)
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
