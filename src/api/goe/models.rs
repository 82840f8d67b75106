use std::fmt::{Display, Formatter};

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};

use crate::{
    api::goe::lenient::{LenientBool, LenientInteger},
    quantity::energy::{KilowattHours, WattHours},
};

/// Fields of a wrong type are read as absent, the same as missing ones.
#[serde_as]
#[derive(Deserialize)]
pub struct DeviceInfo {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "typ")]
    pub device_type: Option<String>,
}

#[serde_as]
#[must_use]
#[derive(Debug, Deserialize)]
pub struct Status {
    #[serde_as(deserialize_as = "DefaultOnError<Option<LenientInteger>>")]
    #[serde(default, rename = "car")]
    pub car_state: Option<CarState>,

    /// Requested charging current in amperes.
    #[serde_as(deserialize_as = "DefaultOnError<Option<LenientInteger>>")]
    #[serde(default, rename = "amp")]
    pub requested_current: Option<u32>,

    /// Actual charging current in amperes.
    #[serde_as(deserialize_as = "DefaultOnError<Option<LenientInteger>>")]
    #[serde(default, rename = "acu")]
    pub actual_current: Option<u32>,

    #[serde_as(deserialize_as = "DefaultOnError<Option<LenientBool>>")]
    #[serde(default, rename = "alw")]
    pub is_charging_allowed: Option<bool>,

    /// `null` when no limit is set.
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default, rename = "dwo")]
    pub energy_limit_watt_hours: Option<f64>,
}

impl Status {
    pub fn car_state_description(&self) -> &'static str {
        self.car_state.map_or("Unknown", CarState::description)
    }

    pub fn energy_limit(&self) -> Option<KilowattHours> {
        self.energy_limit_watt_hours.map(|watt_hours| KilowattHours(watt_hours / 1000.0))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(from = "i64")]
pub enum CarState {
    UnknownOrError,
    Idle,
    Charging,
    WaitingForCar,
    Complete,
    Error,
    Other(i64),
}

impl CarState {
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownOrError => "Unknown/Error",
            Self::Idle => "Idle",
            Self::Charging => "Charging",
            Self::WaitingForCar => "Wait for car",
            Self::Complete => "Complete",
            Self::Error => "Error",
            Self::Other(_) => "Unknown",
        }
    }
}

impl From<i64> for CarState {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::UnknownOrError,
            1 => Self::Idle,
            2 => Self::Charging,
            3 => Self::WaitingForCar,
            4 => Self::Complete,
            5 => Self::Error,
            _ => Self::Other(value),
        }
    }
}

impl Display for CarState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// The charger echoes the key it has just set.
#[derive(Deserialize)]
pub struct SetResponse {
    #[serde(default, rename = "dwo")]
    echo: Option<Value>,
}

impl SetResponse {
    /// Largest difference between the requested and echoed limit still taken as success.
    const TOLERANCE_WATT_HOURS: f64 = 100.0;

    /// Accepts `"true"`, `true`, `1`, or an echo close enough to the requested limit.
    pub fn acknowledges(&self, requested: WattHours) -> bool {
        let echoed = match &self.echo {
            Some(Value::String(text)) => return text == "true",
            Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
            Some(Value::Number(number)) => match number.as_f64() {
                Some(value) => value,
                None => return false,
            },
            _ => return false,
        };
        (echoed - 1.0).abs() < f64::EPSILON
            || (echoed - f64::from(requested.0)).abs() < Self::TOLERANCE_WATT_HOURS
    }

    /// Strings are shown without quotes and flags as `1`/`0`.
    pub fn echo_description(&self) -> String {
        match &self.echo {
            None => "unknown".to_owned(),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Bool(flag)) => u8::from(*flag).to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_response(body: &str) -> SetResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn car_state_ok() {
        assert_eq!(CarState::from(3), CarState::WaitingForCar);
        assert_eq!(CarState::from(3).to_string(), "Wait for car");
        assert_eq!(CarState::from(0).description(), "Unknown/Error");
        assert_eq!(CarState::from(7).description(), "Unknown");
    }

    #[test]
    fn status_ok() {
        // language=json
        let body = r#"{"car": 4, "amp": 6, "alw": false, "dwo": null, "acu": 0}"#;
        let status: Status = serde_json::from_str(body).unwrap();
        assert_eq!(status.car_state_description(), "Complete");
        assert_eq!(status.is_charging_allowed, Some(false));
        assert!(status.energy_limit().is_none());
    }

    #[test]
    fn status_coerces_numbers_ok() {
        // language=json
        let body = r#"{"car": 2.0, "amp": 16.0, "alw": 1, "dwo": 5000, "acu": 0}"#;
        let status: Status = serde_json::from_str(body).unwrap();
        assert_eq!(status.car_state, Some(CarState::Charging));
        assert_eq!(status.requested_current, Some(16));
        assert_eq!(status.is_charging_allowed, Some(true));
        assert_eq!(status.energy_limit_watt_hours, Some(5000.0));
    }

    #[test]
    fn status_ignores_mismatches_ok() {
        // language=json
        let body = r#"{"car": 2.5, "alw": "yes", "acu": -3}"#;
        let status: Status = serde_json::from_str(body).unwrap();
        assert_eq!(status.car_state, None);
        assert_eq!(status.is_charging_allowed, None);
        assert_eq!(status.actual_current, None);
        assert_eq!(status.requested_current, None);
    }

    #[test]
    fn acknowledgement_ok() {
        assert!(set_response(r#"{"dwo": true}"#).acknowledges(WattHours(5000)));
        assert!(set_response(r#"{"dwo": "true"}"#).acknowledges(WattHours(5000)));
        assert!(set_response(r#"{"dwo": 1}"#).acknowledges(WattHours(5000)));
        assert!(set_response(r#"{"dwo": 4950.5}"#).acknowledges(WattHours(5000)));
    }

    #[test]
    fn rejection_ok() {
        assert!(!set_response(r#"{"dwo": false}"#).acknowledges(WattHours(5000)));
        assert!(!set_response(r#"{"dwo": "false"}"#).acknowledges(WattHours(5000)));
        assert!(!set_response(r#"{"dwo": 5100}"#).acknowledges(WattHours(5000)));
        assert!(!set_response(r#"{"dwo": null}"#).acknowledges(WattHours(5000)));
        assert!(!set_response("{}").acknowledges(WattHours(5000)));
    }

    #[test]
    fn echo_description_ok() {
        assert_eq!(set_response(r#"{"dwo": 10000}"#).echo_description(), "10000");
        assert_eq!(set_response(r#"{"dwo": "error"}"#).echo_description(), "error");
        assert_eq!(set_response(r#"{"dwo": false}"#).echo_description(), "0");
        assert_eq!(set_response("{}").echo_description(), "unknown");
    }
}
