//! Extraction of Rust values from query result cells.

use std::fmt::Debug;

use cozo::{DataValue, Num};

/// Values returned by a database backend that can be read as Rust types.
pub trait DatabaseValue: Clone + Debug {
    /// String contents, `None` for null or non-string values.
    fn as_string(&self) -> Option<String>;

    /// Integer contents. Floats are truncated.
    fn as_i64(&self) -> Option<i64>;

    fn as_bool(&self) -> Option<bool>;

    fn is_null(&self) -> bool;

    /// Type name for error messages.
    fn type_name(&self) -> &'static str;

    fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }
}

impl DatabaseValue for DataValue {
    fn as_string(&self) -> Option<String> {
        match self {
            DataValue::Str(s) => Some(s.to_string()),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i),
            DataValue::Num(Num::Float(f)) => Some(*f as i64),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "bool",
            DataValue::Num(_) => "number",
            DataValue::Str(_) => "string",
            DataValue::Bytes(_) => "bytes",
            DataValue::List(_) => "list",
            DataValue::Set(_) => "set",
            DataValue::Vec(_) => "vec",
            DataValue::Json(_) => "json",
            DataValue::Uuid(_) => "uuid",
            DataValue::Regex(_) => "regex",
            DataValue::Bot => "bot",
            DataValue::Validity(_) => "validity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datavalue_as_string() {
        assert_eq!(DataValue::Str("hello".into()).as_string(), Some("hello".to_string()));
        assert_eq!(DataValue::Null.as_string(), None);
        assert_eq!(DataValue::Num(Num::Int(1)).as_string(), None);
    }

    #[test]
    fn test_datavalue_as_i64() {
        assert_eq!(DataValue::Num(Num::Int(42)).as_i64(), Some(42));
        assert_eq!(DataValue::Num(Num::Float(3.9)).as_i64(), Some(3));
        assert_eq!(DataValue::Null.as_i64(), None);
        assert_eq!(DataValue::Null.as_i64_or(0), 0);
    }

    #[test]
    fn test_datavalue_as_bool() {
        assert_eq!(DataValue::Bool(true).as_bool(), Some(true));
        assert_eq!(DataValue::Str("true".into()).as_bool(), None);
    }

    #[test]
    fn test_datavalue_null_and_type_name() {
        assert!(DataValue::Null.is_null());
        assert!(!DataValue::Bool(false).is_null());
        assert_eq!(DataValue::Str("x".into()).type_name(), "string");
        assert_eq!(DataValue::Num(Num::Int(1)).type_name(), "number");
    }
}
