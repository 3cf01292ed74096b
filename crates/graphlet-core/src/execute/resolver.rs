use graphlet_parser::ast::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// A caller-supplied field resolver.
///
/// Implemented for free by any
/// `Fn(&Value, &IndexMap<String, Value>) -> Result<Value, ResolveError>`
/// closure.
pub trait Resolver {
    /// Resolves one field given the parent's resolved value and the
    /// selection's argument map.
    fn resolve(
        &self,
        parent: &Value,
        arguments: &IndexMap<String, Value>,
    ) -> Result<Value, ResolveError>;
}

impl<F> Resolver for F
where
    F: Fn(&Value, &IndexMap<String, Value>) -> Result<Value, ResolveError>,
{
    fn resolve(
        &self,
        parent: &Value,
        arguments: &IndexMap<String, Value>,
    ) -> Result<Value, ResolveError> {
        self(parent, arguments)
    }
}

/// A failure reported by a caller-supplied resolver.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ResolveError {
    pub message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
