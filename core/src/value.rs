use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A token converted into the typed form a slot declares.
///
/// Produced by the engine's value converter and handed to
/// [`Command::bind_argument`](crate::Command::bind_argument) /
/// [`Command::bind_option`](crate::Command::bind_option), which move the
/// payload into the command's own fields. One variant per supported scalar
/// family; nullable slots receive the inner variant (absence never reaches
/// the command, its field simply keeps its default).
///
/// # Examples
///
/// ```
/// use command_bind_core::BoundValue;
///
/// let value = BoundValue::Integer(8080);
/// assert_eq!(value.kind(), "integer");
///
/// match value {
///     BoundValue::Integer(port) => assert_eq!(port, 8080),
///     other => panic!("unexpected value {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundValue {
    /// Boolean, also what flag presence binds.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Verbatim token text.
    Text(String),
    /// Arbitrary-precision decimal.
    Decimal(Decimal),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Duration.
    TimeSpan(Duration),
    /// Unique identifier.
    Uuid(Uuid),
    /// Matched enum member name.
    EnumMember(String),
}

impl BoundValue {
    /// Short name of the carried variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BoundValue::Bool(_) => "boolean",
            BoundValue::Integer(_) => "integer",
            BoundValue::Float(_) => "float",
            BoundValue::Text(_) => "text",
            BoundValue::Decimal(_) => "decimal",
            BoundValue::Date(_) => "date",
            BoundValue::Time(_) => "time",
            BoundValue::TimeSpan(_) => "time span",
            BoundValue::Uuid(_) => "uuid",
            BoundValue::EnumMember(_) => "enum member",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_follow_descriptor_display() {
        assert_eq!(BoundValue::Bool(true).kind(), "boolean");
        assert_eq!(BoundValue::Text("x".into()).kind(), "text");
        assert_eq!(BoundValue::TimeSpan(Duration::from_secs(90)).kind(), "time span");
    }

    #[test]
    fn test_value_json_round_trip() {
        let values = vec![
            BoundValue::Integer(-7),
            BoundValue::Text("result.txt".into()),
            BoundValue::Date("2024-01-15".parse().expect("valid date")),
            BoundValue::Uuid(Uuid::nil()),
        ];

        let json = serde_json::to_string(&values).expect("values should serialize");
        let back: Vec<BoundValue> = serde_json::from_str(&json).expect("values should deserialize");

        assert_eq!(back, values);
    }
}
