//! Scalar cell values
//!
//! [`Datum`] mirrors SQLite's storage classes minus BLOB. It is what filter
//! values are bound as, and what trace coordinates are read back as.
//! On the wire it is a plain JSON scalar (null, number or string).

use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    /// SQL NULL / JSON null
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Real(f64),
    /// UTF-8 text
    Text(String),
}

/// Renders the value the way it is joined into legend names.
///
/// Reals always keep a fractional part (`2.0`, not `2`) so they never read
/// as integers. A JSON real is already normalized by parsing, so `1.50`
/// sent as a number renders as `1.5`; send it as a string to keep it as is.
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Null => write!(f, "null"),
            Datum::Integer(i) => write!(f, "{}", i),
            Datum::Real(r) => write!(f, "{:?}", r),
            Datum::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl From<i64> for Datum {
    fn from(i: i64) -> Self {
        Datum::Integer(i)
    }
}

impl From<f64> for Datum {
    fn from(f: f64) -> Self {
        Datum::Real(f)
    }
}

impl ToSql for Datum {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Datum::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Datum::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Datum::Real(f) => ToSqlOutput::Borrowed(ValueRef::Real(*f)),
            Datum::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl FromSql for Datum {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Datum::Null),
            ValueRef::Integer(i) => Ok(Datum::Integer(i)),
            ValueRef::Real(f) => Ok(Datum::Real(f)),
            ValueRef::Text(t) => std::str::from_utf8(t)
                .map(|s| Datum::Text(s.to_string()))
                .map_err(|e| FromSqlError::Other(Box::new(e))),
            ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}
