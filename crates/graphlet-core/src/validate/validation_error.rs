use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A mutation operation appears in the document but the schema
    /// declares no mutation root type.
    #[error("no mutation type defined on this schema")]
    NoMutationTypeDefined,

    /// Subscription operations parse but have no root type in this
    /// schema model.
    #[error("no subscription type defined on this schema")]
    NoSubscriptionTypeDefined,

    /// A selection has nested sub-selections but its field resolves to
    /// a type with no selectable fields.
    #[error("field `{field_name}` of type `{type_name}` has no selectable fields")]
    SelectionOnLeafField {
        field_name: String,
        type_name: String,
    },

    /// A selected field name does not exist on the composite type it
    /// is selected from.
    #[error("type `{type_name}` has no field named `{field_name}`")]
    UndefinedField {
        field_name: String,
        type_name: String,
    },
}
