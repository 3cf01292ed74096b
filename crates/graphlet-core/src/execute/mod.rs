//! A stub executor: walks a parsed document's selection tree and
//! invokes caller-supplied resolvers.
//!
//! A resolver is a typed capability — a function from (parent value,
//! argument map) to a value-or-error — so nothing opaque crosses the
//! parser/executor boundary. Execution is fully synchronous, performs
//! no I/O, and shares no mutable state with its caller.

mod executor;
mod resolver;
mod resolver_map;

pub use executor::execute;
pub use executor::execute_operation;
pub use executor::ExecuteError;
pub use resolver::ResolveError;
pub use resolver::Resolver;
pub use resolver_map::ResolverMap;

#[cfg(test)]
mod tests;
