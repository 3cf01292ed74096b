//! Shared helpers for parser tests.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ParseError;
use crate::Parser;

/// Parses `source`, panicking on failure.
pub fn parse(source: &str) -> Document {
    Parser::new(source)
        .parse_document()
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

/// Parses `source`, panicking on success.
pub fn parse_err(source: &str) -> ParseError {
    match Parser::new(source).parse_document() {
        Ok(doc) => panic!("expected parse failure for {source:?}, got {doc:?}"),
        Err(error) => error,
    }
}

/// The first (and usually only) operation in a document.
pub fn first_operation(document: &Document) -> &OperationDefinition {
    let Definition::Operation(operation) =
        document.definitions.first().expect("no definitions");
    operation
}

/// The first selection of the first operation.
pub fn first_selection(document: &Document) -> &Selection {
    first_operation(document)
        .selection_set
        .selections
        .first()
        .expect("no selections")
}

/// The value of the named argument on a selection.
pub fn arg_value<'a>(selection: &'a Selection, name: &str) -> &'a Value {
    selection
        .arguments
        .get(name)
        .unwrap_or_else(|| panic!("no argument named {name:?}"))
}
