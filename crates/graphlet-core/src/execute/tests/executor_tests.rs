//! Tests for the stub executor's selection walking.

use crate::execute::execute;
use crate::execute::ExecuteError;
use crate::execute::ResolveError;
use crate::execute::ResolverMap;
use graphlet_parser::ast::Value;
use graphlet_parser::Parser;
use indexmap::IndexMap;

fn constant(value: Value) -> impl Fn(
    &Value,
    &IndexMap<String, Value>,
) -> Result<Value, ResolveError> {
    move |_parent, _args| Ok(value.clone())
}

#[test]
fn leaf_fields_resolve_into_a_response_object() {
    let document = Parser::new("query { name age }")
        .parse_document()
        .unwrap();
    let resolvers = ResolverMap::new()
        .register("name", constant(Value::from("ada")))
        .register("age", constant(Value::Int(36)));

    let response = execute(&document, &resolvers).unwrap();
    assert_eq!(
        response,
        Value::Object(indexmap::indexmap! {
            "name".to_string() => Value::from("ada"),
            "age".to_string() => Value::Int(36),
        }),
    );
}

/// The response object is keyed by alias-or-name.
#[test]
fn aliases_key_the_response() {
    let document = Parser::new("query { total: count }")
        .parse_document()
        .unwrap();
    let resolvers =
        ResolverMap::new().register("count", constant(Value::Int(7)));

    let response = execute(&document, &resolvers).unwrap();
    assert_eq!(
        response,
        Value::Object(indexmap::indexmap! {
            "total".to_string() => Value::Int(7),
        }),
    );
}

#[test]
fn arguments_reach_the_resolver() {
    let document = Parser::new("query { user(id: 4) }")
        .parse_document()
        .unwrap();
    let resolvers = ResolverMap::new().register(
        "user",
        |_parent: &Value, args: &IndexMap<String, Value>|
            -> Result<Value, ResolveError> {
            Ok(args.get("id").cloned().unwrap_or(Value::Null))
        },
    );

    let response = execute(&document, &resolvers).unwrap();
    assert_eq!(
        response,
        Value::Object(indexmap::indexmap! {
            "user".to_string() => Value::Int(4),
        }),
    );
}

/// A composite selection recurses with the resolved value as parent.
#[test]
fn nested_selections_receive_the_parent_value() {
    let document = Parser::new("query { user { name } }")
        .parse_document()
        .unwrap();
    let resolvers = ResolverMap::new()
        .register(
            "user",
            constant(Value::Object(indexmap::indexmap! {
                "name".to_string() => Value::from("ada"),
            })),
        )
        .register(
            "name",
            |parent: &Value, _args: &IndexMap<String, Value>|
                -> Result<Value, ResolveError> { match parent {
                Value::Object(fields) => Ok(fields
                    .get("name")
                    .cloned()
                    .unwrap_or(Value::Null)),
                _ => Err(ResolveError::new("expected an object parent")),
            }},
        );

    let response = execute(&document, &resolvers).unwrap();
    assert_eq!(
        response,
        Value::Object(indexmap::indexmap! {
            "user".to_string() => Value::Object(indexmap::indexmap! {
                "name".to_string() => Value::from("ada"),
            }),
        }),
    );
}

/// A list-valued composite field applies the nested selection set to
/// each item.
#[test]
fn list_values_fan_out_nested_selections() {
    let document = Parser::new("query { friends { id } }")
        .parse_document()
        .unwrap();
    let resolvers = ResolverMap::new()
        .register(
            "friends",
            constant(Value::List(vec![Value::Int(1), Value::Int(2)])),
        )
        .register(
            "id",
            |parent: &Value, _args: &IndexMap<String, Value>| {
                Ok(parent.clone())
            },
        );

    let response = execute(&document, &resolvers).unwrap();
    assert_eq!(
        response,
        Value::Object(indexmap::indexmap! {
            "friends".to_string() => Value::List(vec![
                Value::Object(indexmap::indexmap! {
                    "id".to_string() => Value::Int(1),
                }),
                Value::Object(indexmap::indexmap! {
                    "id".to_string() => Value::Int(2),
                }),
            ]),
        }),
    );
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn unregistered_field_fails() {
    let document = Parser::new("query { ghost }").parse_document().unwrap();
    let error = execute(&document, &ResolverMap::new()).unwrap_err();
    assert_eq!(
        error,
        ExecuteError::UnresolvedField {
            field_name: "ghost".to_string(),
        },
    );
}

#[test]
fn resolver_failures_carry_the_field_name() {
    let document = Parser::new("query { user }").parse_document().unwrap();
    let resolvers = ResolverMap::new().register(
        "user",
        |_parent: &Value, _args: &IndexMap<String, Value>| {
            Err(ResolveError::new("not found"))
        },
    );

    let error = execute(&document, &resolvers).unwrap_err();
    assert_eq!(
        error,
        ExecuteError::ResolverFailed {
            field_name: "user".to_string(),
            source: ResolveError::new("not found"),
        },
    );
}

#[test]
fn empty_document_fails() {
    let document = Parser::new("").parse_document().unwrap();
    let error = execute(&document, &ResolverMap::new()).unwrap_err();
    assert_eq!(error, ExecuteError::NoOperationsInDocument);
}
