//! A parsing library for a small GraphQL query subset.
//!
//! This crate provides [`Parser`], a character-level recursive descent
//! parser producing a [`Document`](ast::Document), together with the
//! [`Value`](ast::Value) model shared by parsed arguments and
//! builder-supplied arguments.
//!
//! The grammar covers operation definitions only (`query`, `mutation`,
//! `subscription`) with aliases, arguments, and nested selection sets.
//! String literals carry no escape processing, commas are pure separators,
//! and numbers have no exponent notation.

pub mod ast;
mod cursor;
mod parse_error;
mod parse_error_kind;
mod parser;
mod value_parsing_error;

pub use cursor::Cursor;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parser::Parser;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
