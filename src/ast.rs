use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// One parsed config value.
///
/// The sum is closed: the emitter can render every variant except `Float`,
/// which the dialect's expressions can produce (`sqrt()`, float `mod()`)
/// but the TOML subset has no defined rendering for.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Table(Mapping),
}

/// Insertion-order-preserving key/value mapping produced by one parse frame.
///
/// Later assignments to an existing key overwrite the value in place and
/// keep the key's first-seen position.
pub type Mapping = IndexMap<String, Value>;

impl Value {
    pub fn as_table(&self) -> Option<&Mapping> {
        if let Value::Table(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Tag name used in diagnostics and type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Table(_) => "table",
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Table(items) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(items.len()))?;
                for (k, v) in items {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
