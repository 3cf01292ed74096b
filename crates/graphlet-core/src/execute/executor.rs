use crate::execute::ResolveError;
use crate::execute::ResolverMap;
use graphlet_parser::ast::Definition;
use graphlet_parser::ast::Document;
use graphlet_parser::ast::OperationDefinition;
use graphlet_parser::ast::SelectionSet;
use graphlet_parser::ast::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// Executes the first operation of a document against a resolver map.
///
/// See [`execute_operation`] for the walking semantics.
pub fn execute(
    document: &Document,
    resolvers: &ResolverMap,
) -> Result<Value, ExecuteError> {
    let Some(Definition::Operation(operation)) = document.definitions.first()
    else {
        return Err(ExecuteError::NoOperationsInDocument);
    };
    execute_operation(operation, resolvers)
}

/// Walks the operation's selection tree depth-first, invoking the
/// resolver registered for each field's name and keying the response
/// object by each selection's response key (alias-or-name).
///
/// A composite selection recurses into the resolved value; when the
/// resolved value is a list, the nested selection set is applied to
/// each item.
pub fn execute_operation(
    operation: &OperationDefinition,
    resolvers: &ResolverMap,
) -> Result<Value, ExecuteError> {
    execute_selection_set(&operation.selection_set, &Value::Null, resolvers)
}

fn execute_selection_set(
    selection_set: &SelectionSet,
    parent: &Value,
    resolvers: &ResolverMap,
) -> Result<Value, ExecuteError> {
    let mut response = IndexMap::new();
    for selection in &selection_set.selections {
        let resolver = resolvers.resolver(&selection.name).ok_or_else(|| {
            ExecuteError::UnresolvedField {
                field_name: selection.name.clone(),
            }
        })?;
        let resolved = resolver
            .resolve(parent, &selection.arguments)
            .map_err(|source| ExecuteError::ResolverFailed {
                field_name: selection.name.clone(),
                source,
            })?;

        let value = if selection.selection_set.is_empty() {
            resolved
        } else if let Value::List(items) = &resolved {
            let mut nested = Vec::with_capacity(items.len());
            for item in items {
                nested.push(execute_selection_set(
                    &selection.selection_set,
                    item,
                    resolvers,
                )?);
            }
            Value::List(nested)
        } else {
            execute_selection_set(
                &selection.selection_set,
                &resolved,
                resolvers,
            )?
        };

        response.insert(selection.response_key().to_string(), value);
    }
    Ok(Value::Object(response))
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecuteError {
    #[error("no operations found in document")]
    NoOperationsInDocument,

    #[error("resolver for field `{field_name}` failed")]
    ResolverFailed {
        field_name: String,
        #[source]
        source: ResolveError,
    },

    /// No resolver is registered for a selected field's name.
    #[error("no resolver registered for field `{field_name}`")]
    UnresolvedField {
        field_name: String,
    },
}
