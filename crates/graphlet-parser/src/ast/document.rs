use crate::ast::Definition;
use crate::ast::QueryText;
use inherent::inherent;

/// The top-level parsed result: an ordered sequence of definitions.
///
/// The document is the sole owner of the entire tree beneath it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Renders the whole document back to query text.
    pub fn to_query_text(&self) -> String {
        let mut sink = String::new();
        self.append_query_text(&mut sink);
        sink
    }
}

#[inherent]
impl QueryText for Document {
    pub fn append_query_text(&self, sink: &mut String) {
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                sink.push_str("\n\n");
            }
            definition.append_query_text(sink);
        }
    }
}
