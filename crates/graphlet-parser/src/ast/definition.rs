use crate::ast::OperationDefinition;
use crate::ast::QueryText;
use inherent::inherent;

/// A top-level definition within a [`Document`](crate::ast::Document).
///
/// This grammar subset parses operation definitions only; fragment and
/// type-system definitions are not supported.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
}

#[inherent]
impl QueryText for Definition {
    pub fn append_query_text(&self, sink: &mut String) {
        match self {
            Definition::Operation(operation) => {
                operation.append_query_text(sink)
            },
        }
    }
}
