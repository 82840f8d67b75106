//! Type coercion for the loosely typed status JSON: numeric flags and whole floats.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::{Number, Value};
use serde_with::DeserializeAs;

/// Reads `true`/`false` as well as `1`/`0`.
pub struct LenientBool;

impl<'de> DeserializeAs<'de, bool> for LenientBool {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Ok(flag),
            Value::Number(number) => match whole(&number) {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(D::Error::custom(format!("`{number}` is not a flag"))),
            },
            other => Err(D::Error::custom(format!("`{other}` is not a flag"))),
        }
    }
}

/// Reads integers as well as floats without a fractional part, such as `2.0`.
pub struct LenientInteger;

impl<'de, T: TryFrom<i64>> DeserializeAs<'de, T> for LenientInteger {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let Value::Number(number) = &value else {
            return Err(D::Error::custom(format!("`{value}` is not a number")));
        };
        let integer =
            whole(number).ok_or_else(|| D::Error::custom(format!("`{number}` is not whole")))?;
        T::try_from(integer).map_err(|_| D::Error::custom(format!("`{integer}` is out of range")))
    }
}

#[expect(clippy::cast_possible_truncation)]
fn whole(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && value.abs() < 9.0e15)
            .map(|value| value as i64)
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_with::serde_as;

    use super::*;

    #[serde_as]
    #[derive(Deserialize)]
    struct Sample {
        #[serde_as(as = "LenientBool")]
        flag: bool,

        #[serde_as(as = "LenientInteger")]
        count: u32,
    }

    fn parse(body: &str) -> serde_json::Result<Sample> {
        serde_json::from_str(body)
    }

    #[test]
    fn native_types_ok() {
        let parsed = parse(r#"{"flag": true, "count": 16}"#).unwrap();
        assert!(parsed.flag);
        assert_eq!(parsed.count, 16);
    }

    #[test]
    fn numeric_flag_and_whole_float_ok() {
        let parsed = parse(r#"{"flag": 0, "count": 2.0}"#).unwrap();
        assert!(!parsed.flag);
        assert_eq!(parsed.count, 2);
        assert!(parse(r#"{"flag": 1, "count": 0}"#).unwrap().flag);
    }

    #[test]
    fn mismatches_fail() {
        assert!(parse(r#"{"flag": 2, "count": 1}"#).is_err());
        assert!(parse(r#"{"flag": "yes", "count": 1}"#).is_err());
        assert!(parse(r#"{"flag": true, "count": 2.5}"#).is_err());
        assert!(parse(r#"{"flag": true, "count": -1}"#).is_err());
        assert!(parse(r#"{"flag": true, "count": "16"}"#).is_err());
    }
}
