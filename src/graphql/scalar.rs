use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, Utc};

/// Point-in-time scalar, serialized as an ISO-8601 string.
///
/// Input coercion accepts any RFC 3339 timestamp and normalizes it to UTC;
/// output coercion always emits UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date(pub DateTime<Utc>);

impl Date {
    pub fn now() -> Self {
        Date(Utc::now())
    }
}

#[Scalar]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Date(dt.with_timezone(&Utc)))
                .map_err(|e| InputValueError::custom(format!("invalid date '{}': {}", s, e))),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trips_through_serialization() {
        let date = Date::now();
        let Value::String(serialized) = date.to_value() else {
            panic!("expected string value");
        };
        let parsed = <Date as ScalarType>::parse(Value::String(serialized)).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn parse_normalizes_offsets_to_utc() {
        let parsed =
            <Date as ScalarType>::parse(Value::String("2026-01-15T10:30:00+05:00".into()))
                .unwrap();
        assert_eq!(parsed.to_value(), Value::String("2026-01-15T05:30:00+00:00".into()));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(<Date as ScalarType>::parse(Value::String("not a date".into())).is_err());
        assert!(<Date as ScalarType>::parse(Value::Number(42.into())).is_err());
    }
}
