use crate::schema::Schema;
use crate::types::TypeDefinition;
use indexmap::IndexMap;
use thiserror::Error;

/// Assembles a [`Schema`] from type definitions and root type names.
///
/// Accumulation never errors; all checks happen in
/// [`SchemaBuilder::build`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    query_type: Option<String>,
    types: IndexMap<String, TypeDefinition>,
}

impl SchemaBuilder {
    /// Registers a type definition, keyed by its name. Re-registering
    /// a name replaces the earlier definition.
    pub fn add_type(mut self, type_def: TypeDefinition) -> Self {
        self.types.insert(type_def.name().to_string(), type_def);
        self
    }

    /// Consumes this builder to produce a [`Schema`].
    ///
    /// Fails when the required query root type was never set, or when
    /// a declared root type names no registered type.
    pub fn build(self) -> Result<Schema, SchemaBuildError> {
        let query_type = self
            .query_type
            .ok_or(SchemaBuildError::NoQueryTypeSet)?;
        if !self.types.contains_key(query_type.as_str()) {
            return Err(SchemaBuildError::UndefinedQueryType {
                type_name: query_type,
            });
        }
        if let Some(mutation_type) = &self.mutation_type
            && !self.types.contains_key(mutation_type.as_str())
        {
            return Err(SchemaBuildError::UndefinedMutationType {
                type_name: mutation_type.to_string(),
            });
        }

        Ok(Schema {
            mutation_type: self.mutation_type,
            query_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the root type mutation operations resolve against.
    pub fn set_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation_type = Some(name.into());
        self
    }

    /// Declares the root type query operations resolve against.
    /// Required.
    pub fn set_query_type(mut self, name: impl Into<String>) -> Self {
        self.query_type = Some(name.into());
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    /// The required query root type was never set.
    #[error("no query type set on this schema")]
    NoQueryTypeSet,

    #[error("mutation type `{type_name}` names no registered type")]
    UndefinedMutationType {
        type_name: String,
    },

    #[error("query type `{type_name}` names no registered type")]
    UndefinedQueryType {
        type_name: String,
    },
}
