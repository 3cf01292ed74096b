use crate::types::FieldDefinition;

/// A named object type with an ordered list of fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub fields: Vec<FieldDefinition>,
    pub name: String,
}

impl ObjectType {
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Self {
        Self {
            fields,
            name: name.into(),
        }
    }
}
