//! Bound values and the dynamic argument convention used by registered operations.

use serde::Serialize;

/// A value bound as a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// One argument passed to a registered operation.
///
/// `Undefined` stands for an argument the caller left out, which is not the
/// same thing as an explicit `Value::Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arg {
    #[default]
    Undefined,
    Value(Value),
}

impl Arg {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Value(Value::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Self::Value(v.into())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Self::Value(v.into())
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Self::Value(v.into())
    }
}

/// Positional arguments. Reading past the end yields [`Arg::Undefined`], so
/// trailing optional parameters behave as if omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Arg>);

static UNDEFINED: Arg = Arg::Undefined;

impl Args {
    pub fn new(args: Vec<Arg>) -> Self {
        Self(args)
    }

    pub fn get(&self, idx: usize) -> &Arg {
        self.0.get(idx).unwrap_or(&UNDEFINED)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(v: Vec<Arg>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[Arg; N]> for Args {
    fn from(v: [Arg; N]) -> Self {
        Self(v.into())
    }
}
