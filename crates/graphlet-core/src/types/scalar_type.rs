/// A named scalar type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub name: String,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
