use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Any named type a [`Schema`](crate::schema::Schema) can catalog.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl TypeDefinition {
    /// The fields selectable on this type, for object and interface
    /// types. `None` for types without selectable fields.
    pub fn fields(&self) -> Option<&[FieldDefinition]> {
        match self {
            TypeDefinition::Interface(interface) => Some(&interface.fields),
            TypeDefinition::Object(object) => Some(&object.fields),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Enum(enum_type) => &enum_type.name,
            TypeDefinition::InputObject(input_object) => &input_object.name,
            TypeDefinition::Interface(interface) => &interface.name,
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Union(union_type) => &union_type.name,
        }
    }
}
