pub use graphlet_core::*;

/// The underlying parser crate, for callers that want the cursor and
/// error types directly.
pub mod parser {
    pub use graphlet_parser::*;
}
