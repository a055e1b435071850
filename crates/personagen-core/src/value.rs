use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Scalar value carried by a profile field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Decimal(Decimal),
    Date(NaiveDate),
}

impl ScalarValue {
    /// Natural text form: decimals as their base-10 representation, dates
    /// as ISO-8601 `YYYY-MM-DD`.
    pub fn to_text(&self) -> String {
        match self {
            ScalarValue::Text(value) => value.clone(),
            ScalarValue::Decimal(value) => value.to_string(),
            ScalarValue::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            ScalarValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ScalarValue::Date(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(value) => f.write_str(value),
            ScalarValue::Decimal(value) => write!(f, "{value}"),
            ScalarValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ScalarValue::Text(value) => serializer.serialize_str(value),
            // Exact base-10 string, never a binary float.
            ScalarValue::Decimal(value) => serializer.serialize_str(&value.to_string()),
            ScalarValue::Date(value) => {
                serializer.serialize_str(&value.format("%Y-%m-%d").to_string())
            }
        }
    }
}
