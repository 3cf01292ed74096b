use crate::ast::QueryText;
use crate::ast::Selection;
use inherent::inherent;

/// The ordered set of fields selected within braces `{ ... }`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

#[inherent]
impl QueryText for SelectionSet {
    pub fn append_query_text(&self, sink: &mut String) {
        if self.selections.is_empty() {
            sink.push_str("{ }");
            return;
        }
        sink.push_str("{ ");
        for (idx, selection) in self.selections.iter().enumerate() {
            if idx > 0 {
                sink.push(' ');
            }
            selection.append_query_text(sink);
        }
        sink.push_str(" }");
    }
}
