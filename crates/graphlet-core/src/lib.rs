//! Core libraries for working with the query grammar subset parsed by
//! `graphlet-parser`: the fluent selection-tree builder (the parser's
//! programmatic dual), a passive schema catalog, and stub executor and
//! validator collaborators.

pub mod execute;
pub mod operation;
pub mod schema;
pub mod types;
pub mod validate;

pub use graphlet_parser::ast;
pub use graphlet_parser::ast::Value;
pub use graphlet_parser::ParseError;
pub use graphlet_parser::Parser;
