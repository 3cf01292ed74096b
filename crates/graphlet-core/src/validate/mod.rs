//! A stub validator: cross-checks a parsed document against a
//! [`Schema`](crate::schema::Schema) catalog.

mod validation_error;
mod validator;

pub use validation_error::ValidationError;
pub use validator::validate;
