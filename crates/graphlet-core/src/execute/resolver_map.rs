use crate::execute::Resolver;
use indexmap::IndexMap;

/// Field name → resolver registry consulted during execution.
#[derive(Default)]
pub struct ResolverMap {
    resolvers: IndexMap<String, Box<dyn Resolver>>,
}

impl ResolverMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resolver for the named field. Re-registering a name
    /// replaces the earlier resolver.
    pub fn register(
        mut self,
        field_name: impl Into<String>,
        resolver: impl Resolver + 'static,
    ) -> Self {
        self.resolvers
            .insert(field_name.into(), Box::new(resolver));
        self
    }

    /// Looks up the resolver for a field name.
    pub fn resolver(&self, field_name: &str) -> Option<&dyn Resolver> {
        self.resolvers.get(field_name).map(Box::as_ref)
    }
}
