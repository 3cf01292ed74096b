use crate::ast::OperationKind;
use crate::ast::QueryText;
use crate::ast::SelectionSet;
use inherent::inherent;

/// An operation definition (query, mutation, or subscription).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub name: Option<String>,
    pub operation_kind: OperationKind,
    pub selection_set: SelectionSet,
}

impl OperationDefinition {
    /// Renders this operation back to query text.
    pub fn to_query_text(&self) -> String {
        let mut sink = String::new();
        self.append_query_text(&mut sink);
        sink
    }
}

#[inherent]
impl QueryText for OperationDefinition {
    pub fn append_query_text(&self, sink: &mut String) {
        sink.push_str(self.operation_kind.keyword());
        if let Some(name) = &self.name {
            sink.push(' ');
            sink.push_str(name);
        }
        sink.push(' ');
        self.selection_set.append_query_text(sink);
    }
}
