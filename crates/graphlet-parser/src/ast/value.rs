use crate::ast::QueryText;
use indexmap::IndexMap;
use inherent::inherent;

/// A literal value, shared by parsed arguments and builder-supplied
/// arguments.
///
/// A `List`/`Object` owns its child values exclusively; the grammar
/// cannot produce sharing or cycles.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    /// Field name → value. Duplicate names overwrite: last write wins.
    /// Iteration order is insertion order.
    Object(IndexMap<String, Value>),
    String(String),
    /// An enum literal, rendered bare (unquoted) in both JSON and
    /// query text. The parser never produces this variant; it exists
    /// for builder-supplied arguments.
    Symbol(String),
}

impl Value {
    /// Appends this value's JSON rendering to `sink`.
    ///
    /// Strings are wrapped in quotes with no escaping of embedded
    /// quotes or control characters, matching the parser's lack of
    /// escape handling. Round-trip is only guaranteed for strings free
    /// of `"`, `\`, and control bytes. Object keys render in insertion
    /// order, double-quoted.
    pub fn append_json(&self, sink: &mut String) {
        match self {
            Value::Bool(value) => {
                sink.push_str(if *value { "true" } else { "false" })
            },
            Value::Float(value) => {
                sink.push_str(&value.to_string())
            },
            Value::Int(value) => {
                sink.push_str(&value.to_string())
            },
            Value::List(items) => {
                sink.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        sink.push(',');
                    }
                    item.append_json(sink);
                }
                sink.push(']');
            },
            Value::Null => sink.push_str("null"),
            Value::Object(fields) => {
                sink.push('{');
                for (idx, (name, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        sink.push(',');
                    }
                    sink.push('"');
                    sink.push_str(name);
                    sink.push_str("\":");
                    value.append_json(sink);
                }
                sink.push('}');
            },
            Value::String(value) => {
                sink.push('"');
                sink.push_str(value);
                sink.push('"');
            },
            Value::Symbol(symbol) => sink.push_str(symbol),
        }
    }

    /// Renders this value as a JSON text fragment.
    ///
    /// See [`Value::append_json`] for the escaping caveat.
    pub fn to_json(&self) -> String {
        let mut sink = String::new();
        self.append_json(&mut sink);
        sink
    }
}

#[inherent]
impl QueryText for Value {
    /// Appends this value's query-text rendering to `sink`.
    ///
    /// Scalars render as in [`Value::to_json`]; list items and object
    /// entries are separated by `", "` and object keys are unquoted
    /// names followed by `: `, matching the argument grammar the
    /// parser accepts.
    pub fn append_query_text(&self, sink: &mut String) {
        match self {
            Value::List(items) => {
                sink.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        sink.push_str(", ");
                    }
                    item.append_query_text(sink);
                }
                sink.push(']');
            },
            Value::Object(fields) => {
                sink.push('{');
                for (idx, (name, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        sink.push_str(", ");
                    }
                    sink.push_str(name);
                    sink.push_str(": ");
                    value.append_query_text(sink);
                }
                sink.push('}');
            },
            scalar => scalar.append_json(sink),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
