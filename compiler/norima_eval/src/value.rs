//! Runtime values.

use std::fmt;

/// A runtime value.
///
/// Norima has exactly two data types. `Void` is the "no value" result of
/// `print` and of a call that finishes without `return`; it is not zero
/// and not the empty string.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Void,
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Void => "none",
        }
    }
}

/// Output format used by `print`.
///
/// Numbers use Rust's shortest round-trip formatting, so integral values
/// print without a fractional part (`7`, `2.5`, `inf`, `NaN`). `Void`
/// prints as `None`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Void => f.write_str("None"),
        }
    }
}
