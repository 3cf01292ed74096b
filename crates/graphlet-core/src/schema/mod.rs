//! The schema registry: a passive catalog of named types plus the root
//! operation types, assembled by [`SchemaBuilder`].

mod schema;
mod schema_builder;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
