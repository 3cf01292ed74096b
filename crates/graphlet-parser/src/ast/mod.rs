//! AST types for representing parsed query documents.
//!
//! Every node type here is plain owned data: a [`Document`] exclusively
//! owns the definitions beneath it, each [`Selection`] owns its argument
//! values and nested selections, and dropping the root releases the whole
//! tree in one step. No node is referenced from two independent owners.
//!
//! The same shapes are produced by the builder API in `graphlet-core`,
//! which is why serialization lives here: [`QueryText`] renders any node
//! back to text the parser accepts, making the two halves exact duals.

mod definition;
mod document;
mod operation_definition;
mod operation_kind;
mod query_text;
mod selection;
mod selection_set;
mod value;

pub use definition::Definition;
pub use document::Document;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use query_text::QueryText;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use value::Value;
