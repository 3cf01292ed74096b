//! The fluent builder API: the programmatic dual of the parser.
//!
//! A [`SelectionBuilder`] accumulates one field selection bottom-up:
//! children are fully built before being moved into their parent, so no
//! handle ever dangles into growable storage. Builder handles are plain
//! owned values; dropping one releases everything it accumulated, with
//! no explicit close call required. The selection tree itself never
//! errors; it is pure data accumulation.

mod mutation_builder;
mod operation_builder_trait;
mod operation_data;
mod query_builder;
mod selection_builder;

pub use mutation_builder::MutationBuilder;
pub(crate) use operation_builder_trait::OperationBuilderTrait;
pub(crate) use operation_data::OperationData;
pub use query_builder::QueryBuilder;
pub use selection_builder::SelectionBuilder;
