use crate::schema::SchemaBuilder;
use crate::types::TypeDefinition;
use indexmap::IndexMap;

/// A catalog of named types plus the root operation types.
///
/// Built with [`SchemaBuilder`]; immutable afterwards.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(super) mutation_type: Option<String>,
    pub(super) query_type: String,
    pub(super) types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    /// Convenience wrapper around [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The root type mutation operations resolve against, if one was
    /// declared.
    pub fn mutation_type(&self) -> Option<&TypeDefinition> {
        self.mutation_type
            .as_deref()
            .and_then(|name| self.types.get(name))
    }

    /// The root type query operations resolve against.
    pub fn query_type(&self) -> &TypeDefinition {
        self.types
            .get(self.query_type.as_str())
            .expect("query type presence is checked by SchemaBuilder::build")
    }

    /// Looks up a type definition by name.
    pub fn type_def(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }
}
