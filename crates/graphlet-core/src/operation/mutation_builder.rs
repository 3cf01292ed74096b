use crate::operation::OperationBuilderTrait;
use crate::operation::OperationData;
use crate::operation::SelectionBuilder;
use graphlet_parser::ast::OperationDefinition;
use graphlet_parser::ast::OperationKind;
use inherent::inherent;

/// Builds a mutation operation and serializes it to query text.
///
/// Identical to [`QueryBuilder`](crate::operation::QueryBuilder) apart
/// from the keyword emitted by [`MutationBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct MutationBuilder(OperationData);

impl MutationBuilder {
    pub fn new() -> Self {
        Self(OperationData::new(OperationKind::Mutation))
    }
}

impl Default for MutationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl OperationBuilderTrait for MutationBuilder {
    pub fn build(self) -> String {
        self.0.build()
    }

    pub fn from_operation(operation: &OperationDefinition) -> Self {
        Self(OperationData::from_operation(
            OperationKind::Mutation,
            operation,
        ))
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        Self(self.0.name(name))
    }

    pub fn select(self, selection: SelectionBuilder) -> Self {
        Self(self.0.select(selection))
    }
}
