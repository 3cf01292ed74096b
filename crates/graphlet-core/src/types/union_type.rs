/// A named union type and the names of its member types.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub members: Vec<String>,
    pub name: String,
}

impl UnionType {
    pub fn new(
        name: impl Into<String>,
        members: Vec<impl Into<String>>,
    ) -> Self {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }
}
