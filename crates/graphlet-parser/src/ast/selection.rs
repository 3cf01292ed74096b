use crate::ast::QueryText;
use crate::ast::SelectionSet;
use crate::ast::Value;
use indexmap::IndexMap;
use inherent::inherent;

/// One requested field: optionally aliased, with arguments and nested
/// sub-selections.
///
/// A selection with a nonempty nested [`SelectionSet`] denotes a
/// composite field; one with an empty set denotes a leaf field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Selection {
    pub alias: Option<String>,
    /// Argument name → value. Duplicate names overwrite: last write
    /// wins, no error raised. Iteration order is insertion order.
    pub arguments: IndexMap<String, Value>,
    pub name: String,
    pub selection_set: SelectionSet,
}

impl Selection {
    /// If an alias was specified for this selection, returns the alias.
    /// Otherwise returns the name of the field.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }
}

#[inherent]
impl QueryText for Selection {
    pub fn append_query_text(&self, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        if !self.arguments.is_empty() {
            sink.push('(');
            for (idx, (name, value)) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    sink.push_str(", ");
                }
                sink.push_str(name);
                sink.push_str(": ");
                value.append_query_text(sink);
            }
            sink.push(')');
        }
        if !self.selection_set.is_empty() {
            sink.push(' ');
            self.selection_set.append_query_text(sink);
        }
    }
}
