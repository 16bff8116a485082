//! Loosely typed SQLite cells.
//!
//! SQLite stores whatever the loader wrote, regardless of the declared column
//! affinity, so numeric-looking columns can hold integers, reals or free text.
//! [`CellValue`] decodes any of those storage classes without failing the row
//! and serializes back to JSON in the same shape it was stored.

use std::fmt;

use serde::Serialize;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, TypeInfo, ValueRef};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell. Text is parsed after trimming; anything that
    /// does not read as a number yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(value) => Some(*value as f64),
            CellValue::Real(value) => Some(*value),
            CellValue::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{value}"),
            // `{:?}` keeps the trailing `.0` on whole reals ("35.0").
            CellValue::Real(value) => write!(f, "{value:?}"),
            CellValue::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Real(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl Type<Sqlite> for CellValue {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'r> Decode<'r, Sqlite> for CellValue {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let storage_class = value.type_info().name().to_ascii_uppercase();

        match storage_class.as_str() {
            "INTEGER" | "BOOLEAN" => {
                Ok(CellValue::Integer(<i64 as Decode<'r, Sqlite>>::decode(value)?))
            }
            "REAL" | "NUMERIC" => {
                Ok(CellValue::Real(<f64 as Decode<'r, Sqlite>>::decode(value)?))
            }
            _ => Ok(CellValue::Text(<String as Decode<'r, Sqlite>>::decode(value)?)),
        }
    }
}
