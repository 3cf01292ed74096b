use crate::schema::Schema;
use crate::types::TypeDefinition;
use crate::validate::ValidationError;
use graphlet_parser::ast::Definition;
use graphlet_parser::ast::Document;
use graphlet_parser::ast::OperationKind;
use graphlet_parser::ast::SelectionSet;

/// Cross-checks every operation in `document` against the schema
/// catalog, returning every mismatch found.
///
/// An empty result means the document selects only fields the schema
/// defines. Argument values are not checked; this is a structural
/// field-existence pass only.
pub fn validate(document: &Document, schema: &Schema) -> Vec<ValidationError> {
    let mut errors = vec![];
    for definition in &document.definitions {
        let Definition::Operation(operation) = definition;
        let root_type = match operation.operation_kind {
            OperationKind::Mutation => match schema.mutation_type() {
                Some(mutation_type) => mutation_type,
                None => {
                    errors.push(ValidationError::NoMutationTypeDefined);
                    continue;
                },
            },
            OperationKind::Query => schema.query_type(),
            OperationKind::Subscription => {
                errors.push(ValidationError::NoSubscriptionTypeDefined);
                continue;
            },
        };
        validate_selection_set(
            &operation.selection_set,
            root_type,
            schema,
            &mut errors,
        );
    }
    errors
}

fn validate_selection_set(
    selection_set: &SelectionSet,
    parent_type: &TypeDefinition,
    schema: &Schema,
    errors: &mut Vec<ValidationError>,
) {
    let Some(fields) = parent_type.fields() else {
        return;
    };
    for selection in &selection_set.selections {
        let Some(field) =
            fields.iter().find(|field| field.name == selection.name)
        else {
            errors.push(ValidationError::UndefinedField {
                field_name: selection.name.clone(),
                type_name: parent_type.name().to_string(),
            });
            continue;
        };

        if selection.selection_set.is_empty() {
            continue;
        }

        // A field whose type is not in the catalog (e.g. a built-in
        // scalar) has nothing to select into.
        match schema.type_def(&field.type_name) {
            Some(field_type) if field_type.fields().is_some() => {
                validate_selection_set(
                    &selection.selection_set,
                    field_type,
                    schema,
                    errors,
                );
            },
            _ => {
                errors.push(ValidationError::SelectionOnLeafField {
                    field_name: selection.name.clone(),
                    type_name: field.type_name.clone(),
                });
            },
        }
    }
}
