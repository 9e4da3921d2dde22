use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FillValue
///
/// Column value types that can be filled in by the combinator.
/// `fill_null` is the empty value used when a `Previous` column is exhausted
/// before any row exists to borrow from. Plain scalars use their `Default`.
///

pub trait FillValue: Clone + fmt::Debug {
    fn fill_null() -> Self;
}

macro_rules! impl_fill_value_default {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl FillValue for $type {
                fn fill_null() -> Self {
                    Self::default()
                }
            }
        )*
    };
}

impl_fill_value_default! {
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
}

impl<T: Clone + fmt::Debug> FillValue for Option<T> {
    fn fill_null() -> Self {
        None
    }
}

impl FillValue for Value {
    fn fill_null() -> Self {
        Self::Null
    }
}

///
/// Value
///
/// Dynamically typed cell for rows that mix column types.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    String => Text,
    &str => Text,
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_expected_variant() {
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(7u8), Value::Uint(7));
        assert_eq!(Value::from('f'), Value::Text("f".to_string()));
        assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }

    #[test]
    fn fill_null_is_empty() {
        assert!(Value::fill_null().is_null());
        assert_eq!(Option::<u32>::fill_null(), None);
        assert_eq!(i32::fill_null(), 0);
        assert_eq!(String::fill_null(), String::new());
    }

    #[test]
    fn display_renders_plain_values() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::from("f").to_string(), "f");
    }

    #[test]
    fn accessors_reject_other_variants() {
        let v = Value::Int(4);
        assert_eq!(v.as_int(), Some(4));
        assert_eq!(v.as_uint(), None);
        assert_eq!(v.as_text(), None);
        assert_eq!(v.as_bool(), None);
    }
}
