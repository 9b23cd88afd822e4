//! Token-to-value conversion.
//!
//! Converts one textual token into the typed [`BoundValue`] a slot's
//! [`TypeDescriptor`] declares. Dispatch is an explicit match over the
//! descriptor variants, one parse per scalar family:
//!
//! - `Integer`/`Float` — std `FromStr`
//! - `Decimal` — [`rust_decimal`]
//! - `Date`/`Time` — [`chrono`] (ISO-8601 date, `HH:MM[:SS]` time)
//! - `TimeSpan` — [`humantime`] (`90s`, `2h 30m`)
//! - `Uuid` — [`uuid`]
//! - `Enum` — exact member-name match, case sensitive
//! - `Nullable` — recurses into the inner descriptor
//!
//! `Structured` descriptors always fail: the engine provides no structured
//! deserialization.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use command_bind_core::{BoundValue, TypeDescriptor};

use crate::error::{BindError, Result};

/// Converts `token` into the typed value `target` declares.
///
/// # Examples
///
/// ```
/// use command_bind_core::{BoundValue, TypeDescriptor};
/// use command_bind_engine::convert::convert;
///
/// let value = convert(&TypeDescriptor::Integer, "8080").unwrap();
/// assert_eq!(value, BoundValue::Integer(8080));
///
/// let level = TypeDescriptor::Enum(vec!["debug".into(), "info".into()]);
/// let value = convert(&level, "info").unwrap();
/// assert_eq!(value, BoundValue::EnumMember("info".into()));
///
/// assert!(convert(&TypeDescriptor::Integer, "eighty").is_err());
/// ```
pub fn convert(target: &TypeDescriptor, token: &str) -> Result<BoundValue> {
    match target {
        TypeDescriptor::Bool => parse_bool(token)
            .map(BoundValue::Bool)
            .ok_or_else(|| unparseable(target, token)),
        TypeDescriptor::Integer => token
            .parse::<i64>()
            .map(BoundValue::Integer)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Float => token
            .parse::<f64>()
            .map(BoundValue::Float)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Text => Ok(BoundValue::Text(token.to_string())),
        TypeDescriptor::Decimal => token
            .parse::<Decimal>()
            .map(BoundValue::Decimal)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Date => token
            .parse::<NaiveDate>()
            .map(BoundValue::Date)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Time => parse_time(token)
            .map(BoundValue::Time)
            .ok_or_else(|| unparseable(target, token)),
        TypeDescriptor::TimeSpan => humantime::parse_duration(token)
            .map(BoundValue::TimeSpan)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Uuid => Uuid::parse_str(token)
            .map(BoundValue::Uuid)
            .map_err(|_| unparseable(target, token)),
        TypeDescriptor::Enum(members) => members
            .iter()
            .find(|member| *member == token)
            .map(|member| BoundValue::EnumMember(member.clone()))
            .ok_or_else(|| unparseable(target, token)),
        TypeDescriptor::Nullable(inner) => convert(inner, token),
        TypeDescriptor::Structured(_) => Err(BindError::UnsupportedType(target.clone())),
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    // chrono's FromStr wants seconds; accept the bare HH:MM form too.
    token
        .parse::<NaiveTime>()
        .or_else(|_| NaiveTime::parse_from_str(token, "%H:%M"))
        .ok()
}

fn unparseable(target: &TypeDescriptor, token: &str) -> BindError {
    BindError::UnparseableValue {
        target: target.clone(),
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_convert_integer() {
        assert_eq!(
            convert(&TypeDescriptor::Integer, "-42").unwrap(),
            BoundValue::Integer(-42)
        );
        assert!(matches!(
            convert(&TypeDescriptor::Integer, "4.2"),
            Err(BindError::UnparseableValue { .. })
        ));
    }

    #[test]
    fn test_convert_float_and_decimal() {
        assert_eq!(
            convert(&TypeDescriptor::Float, "2.5").unwrap(),
            BoundValue::Float(2.5)
        );
        assert_eq!(
            convert(&TypeDescriptor::Decimal, "19.99").unwrap(),
            BoundValue::Decimal("19.99".parse().expect("valid decimal"))
        );
        assert!(convert(&TypeDescriptor::Decimal, "nineteen").is_err());
    }

    #[test]
    fn test_convert_text_is_verbatim() {
        assert_eq!(
            convert(&TypeDescriptor::Text, "  spaced  ").unwrap(),
            BoundValue::Text("  spaced  ".to_string())
        );
    }

    #[test]
    fn test_convert_bool_is_case_insensitive() {
        assert_eq!(
            convert(&TypeDescriptor::Bool, "True").unwrap(),
            BoundValue::Bool(true)
        );
        assert_eq!(
            convert(&TypeDescriptor::Bool, "false").unwrap(),
            BoundValue::Bool(false)
        );
        assert!(convert(&TypeDescriptor::Bool, "yes").is_err());
    }

    #[test]
    fn test_convert_date_and_time() {
        assert_eq!(
            convert(&TypeDescriptor::Date, "2024-01-15").unwrap(),
            BoundValue::Date("2024-01-15".parse().expect("valid date"))
        );
        assert!(convert(&TypeDescriptor::Date, "15/01/2024").is_err());

        assert_eq!(
            convert(&TypeDescriptor::Time, "14:30").unwrap(),
            BoundValue::Time("14:30:00".parse().expect("valid time"))
        );
        assert_eq!(
            convert(&TypeDescriptor::Time, "14:30:05").unwrap(),
            BoundValue::Time("14:30:05".parse().expect("valid time"))
        );
        assert!(convert(&TypeDescriptor::Time, "2pm").is_err());
    }

    #[test]
    fn test_convert_time_span() {
        assert_eq!(
            convert(&TypeDescriptor::TimeSpan, "90s").unwrap(),
            BoundValue::TimeSpan(Duration::from_secs(90))
        );
        assert_eq!(
            convert(&TypeDescriptor::TimeSpan, "2h 30m").unwrap(),
            BoundValue::TimeSpan(Duration::from_secs(9000))
        );
        assert!(convert(&TypeDescriptor::TimeSpan, "soon").is_err());
    }

    #[test]
    fn test_convert_uuid() {
        let token = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(
            convert(&TypeDescriptor::Uuid, token).unwrap(),
            BoundValue::Uuid(token.parse().expect("valid uuid"))
        );
        assert!(convert(&TypeDescriptor::Uuid, "not-a-uuid").is_err());
    }

    #[test]
    fn test_convert_enum_is_case_sensitive() {
        let level = TypeDescriptor::Enum(vec!["debug".into(), "info".into()]);

        assert_eq!(
            convert(&level, "debug").unwrap(),
            BoundValue::EnumMember("debug".to_string())
        );
        assert!(convert(&level, "Debug").is_err());
        assert!(convert(&level, "warn").is_err());
    }

    #[test]
    fn test_convert_nullable_uses_inner() {
        let ty = TypeDescriptor::Nullable(Box::new(TypeDescriptor::Integer));

        assert_eq!(convert(&ty, "7").unwrap(), BoundValue::Integer(7));
        assert!(convert(&ty, "seven").is_err());
    }

    #[test]
    fn test_convert_structured_is_unsupported() {
        let ty = TypeDescriptor::Structured("ServerConfig".to_string());

        assert_eq!(
            convert(&ty, "{}"),
            Err(BindError::UnsupportedType(ty.clone()))
        );
    }

    #[test]
    fn test_unparseable_error_names_target_and_token() {
        let err = convert(&TypeDescriptor::Date, "tomorrow").unwrap_err();

        assert_eq!(err.to_string(), "cannot parse `tomorrow` as date");
    }
}
