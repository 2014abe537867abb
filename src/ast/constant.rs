use ordered_float::NotNan;
use std::fmt::{self, Display};

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    String(String),
    Int(i64),
    Float(NotNan<f64>),
    Bool(bool),
    Null,
}

impl ConstantValue {
    pub fn string(value: impl Into<String>) -> Self {
        ConstantValue::String(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::String(s) => {
                write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Float(n) => write!(f, "{}", n.into_inner()),
            ConstantValue::Bool(b) => write!(f, "{}", b),
            ConstantValue::Null => write!(f, "NULL"),
        }
    }
}

impl fmt::Debug for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::String(_) => write!(f, "String({})", self),
            ConstantValue::Int(_) => write!(f, "Int({})", self),
            ConstantValue::Float(_) => write!(f, "Float({})", self),
            ConstantValue::Bool(_) => write!(f, "Bool({})", self),
            ConstantValue::Null => write!(f, "Null(NULL)"),
        }
    }
}
