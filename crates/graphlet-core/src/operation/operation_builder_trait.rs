use crate::operation::SelectionBuilder;
use graphlet_parser::ast::OperationDefinition;

/// The construction surface shared by the operation builders.
pub(crate) trait OperationBuilderTrait where Self: Sized {
    /// Serializes the accumulated selection tree to query text.
    fn build(self) -> String;

    /// Reconstructs a builder from a parsed operation, adopting its
    /// name and selections. The keyword emitted by [`build`] comes from
    /// the builder type, not from the parsed operation.
    ///
    /// [`build`]: OperationBuilderTrait::build
    fn from_operation(operation: &OperationDefinition) -> Self;

    /// Sets the operation name.
    fn name(self, name: impl Into<String>) -> Self;

    /// Appends a fully-built selection after any previously added
    /// selections.
    fn select(self, selection: SelectionBuilder) -> Self;
}
