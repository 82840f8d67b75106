//! Value parsers that keep user input within the allowed ranges.

use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

use crate::{
    quantity::{energy::KilowattHours, ratios::Percentage},
    settings::Settings,
};

pub fn battery_capacity(value: &str) -> Result<KilowattHours, String> {
    parse_within(value, &Settings::BATTERY_CAPACITY_RANGE)
}

pub fn state_of_health(value: &str) -> Result<Percentage, String> {
    parse_within(value, &Settings::STATE_OF_HEALTH_RANGE)
}

pub fn charge_losses(value: &str) -> Result<Percentage, String> {
    parse_within(value, &Settings::CHARGE_LOSSES_RANGE)
}

pub fn state_of_charge(value: &str) -> Result<Percentage, String> {
    parse_within(value, &Settings::STATE_OF_CHARGE_RANGE)
}

fn parse_within<T>(value: &str, range: &RangeInclusive<T>) -> Result<T, String>
where
    T: FromStr + PartialOrd + Display,
    T::Err: Display,
{
    let parsed = value.parse::<T>().map_err(|error| error.to_string())?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("must be between {} and {}", range.start(), range.end()))
    }
}
