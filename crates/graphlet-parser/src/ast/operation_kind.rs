/// The kind of an operation definition.
///
/// The kind determines which root type an executor resolves against.
#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq,
    serde::Deserialize, serde::Serialize,
)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    /// The keyword that introduces this kind of operation in query text.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}
