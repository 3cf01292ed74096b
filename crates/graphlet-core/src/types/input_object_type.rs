use crate::types::FieldDefinition;

/// A named input object type with an ordered list of input fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectType {
    pub fields: Vec<FieldDefinition>,
    pub name: String,
}

impl InputObjectType {
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
