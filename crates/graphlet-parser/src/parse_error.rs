use crate::ParseErrorKind;

/// A parse failure, terminal for the current `parse_document()` call.
///
/// There is no error recovery and no partial-document result; the first
/// malformed construct aborts parsing entirely. Every error carries the
/// byte offset where the parser stopped, anchoring the failure to the
/// source text without the cost of line/column tracking.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind} at byte offset {offset}")]
pub struct ParseError {
    /// Categorizes the failure for programmatic handling.
    pub kind: ParseErrorKind,

    /// Byte offset into the source text where the failure was detected.
    pub offset: usize,
}
