use crate::operation::SelectionBuilder;
use graphlet_parser::ast::OperationDefinition;
use graphlet_parser::ast::OperationKind;
use graphlet_parser::ast::Selection;
use graphlet_parser::ast::SelectionSet;

/// State shared by [`QueryBuilder`](crate::operation::QueryBuilder) and
/// [`MutationBuilder`](crate::operation::MutationBuilder).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct OperationData {
    name: Option<String>,
    operation_kind: OperationKind,
    selections: Vec<Selection>,
}

impl OperationData {
    /// Serializes the accumulated tree to query text via the shared
    /// AST rendering, so builder output and reserialized parser output
    /// are byte-identical.
    pub(crate) fn build(self) -> String {
        self.into_operation().to_query_text()
    }

    pub(crate) fn from_operation(
        operation_kind: OperationKind,
        operation: &OperationDefinition,
    ) -> Self {
        Self {
            name: operation.name.clone(),
            operation_kind,
            selections: operation.selection_set.selections.clone(),
        }
    }

    pub(crate) fn into_operation(self) -> OperationDefinition {
        OperationDefinition {
            name: self.name,
            operation_kind: self.operation_kind,
            selection_set: SelectionSet {
                selections: self.selections,
            },
        }
    }

    pub(crate) fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn new(operation_kind: OperationKind) -> Self {
        Self {
            name: None,
            operation_kind,
            selections: vec![],
        }
    }

    pub(crate) fn select(mut self, selection: SelectionBuilder) -> Self {
        self.selections.push(selection.into_selection());
        self
    }
}
