/// Serialization of an AST node back to query text.
///
/// The rendering conforms to the same grammar the parser accepts, so
/// re-parsing a rendered node reconstructs a structurally equal tree for
/// all values expressible without escaped characters.
pub trait QueryText {
    /// Appends this node's query-text rendering to `sink`.
    fn append_query_text(&self, sink: &mut String);
}
