/// One field of an object or interface type: a name and the name of
/// the type it resolves to.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub type_name: String,
}

impl FieldDefinition {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}
