use crate::operation::OperationBuilderTrait;
use crate::operation::OperationData;
use crate::operation::SelectionBuilder;
use graphlet_parser::ast::OperationDefinition;
use graphlet_parser::ast::OperationKind;
use inherent::inherent;

/// Builds a query operation and serializes it to query text.
///
/// # Usage
///
/// ```
/// use graphlet_core::operation::QueryBuilder;
/// use graphlet_core::operation::SelectionBuilder;
///
/// let text = QueryBuilder::new()
///     .select(SelectionBuilder::new("user").arg("id", 4).field("name"))
///     .build();
///
/// assert_eq!(text, "query { user(id: 4) { name } }");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuilder(OperationData);

impl QueryBuilder {
    pub fn new() -> Self {
        Self(OperationData::new(OperationKind::Query))
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl OperationBuilderTrait for QueryBuilder {
    pub fn build(self) -> String {
        self.0.build()
    }

    pub fn from_operation(operation: &OperationDefinition) -> Self {
        Self(OperationData::from_operation(OperationKind::Query, operation))
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        Self(self.0.name(name))
    }

    pub fn select(self, selection: SelectionBuilder) -> Self {
        Self(self.0.select(selection))
    }
}
