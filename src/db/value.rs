//! Rendering of result cells as text.
//!
//! Result tables are printed and compared as strings, so every column is
//! decoded through [`CellText`] regardless of its Postgres type.

use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use postgres::types::{FromSql, Kind, Type};

/// The string form of a single non-null result cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText(String);

impl CellText {
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> FromSql<'a> for CellText {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        // Domains (the status and gender columns) share their base type's encoding
        if let Kind::Domain(base) = ty.kind() {
            return Self::from_sql(base, raw);
        }

        let text = match *ty {
            Type::BOOL => bool::from_sql(ty, raw)?.to_string(),
            Type::INT2 => i16::from_sql(ty, raw)?.to_string(),
            Type::INT4 => i32::from_sql(ty, raw)?.to_string(),
            Type::INT8 => i64::from_sql(ty, raw)?.to_string(),
            Type::OID => u32::from_sql(ty, raw)?.to_string(),
            Type::FLOAT4 => f32::from_sql(ty, raw)?.to_string(),
            Type::FLOAT8 => f64::from_sql(ty, raw)?.to_string(),
            Type::DATE => NaiveDate::from_sql(ty, raw)?.to_string(),
            Type::TIME => NaiveTime::from_sql(ty, raw)?.to_string(),
            Type::TIMESTAMP => NaiveDateTime::from_sql(ty, raw)?.to_string(),
            _ if <&str as FromSql>::accepts(ty) => <&str as FromSql>::from_sql(ty, raw)?.to_string(),
            _ => format!("<{}>", ty.name()),
        };

        Ok(CellText(text))
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}
