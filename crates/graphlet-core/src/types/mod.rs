//! A passive catalog of named type definitions.
//!
//! These types carry no algorithmic content; they exist so a
//! [`Schema`](crate::schema::Schema) can answer "what fields does this
//! type have" for the validator and similar consumers.

mod enum_type;
mod field_definition;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod type_definition;
mod union_type;

pub use enum_type::EnumType;
pub use field_definition::FieldDefinition;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use type_definition::TypeDefinition;
pub use union_type::UnionType;
