use std::ops::Mul;

use crate::quantity::ratios::Percentage;

quantity!(KilowattHours, f64, " kWh", precision: 2);
quantity!(WattHours, u32, " Wh", precision: 0);

impl Mul<f64> for KilowattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        self * percentage.to_ratio()
    }
}

impl From<WattHours> for KilowattHours {
    fn from(value: WattHours) -> Self {
        Self(0.001 * f64::from(value.0))
    }
}

/// Truncates toward zero, negative energy becomes zero.
impl From<KilowattHours> for WattHours {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(value: KilowattHours) -> Self {
        Self((value.0 * 1000.0) as u32)
    }
}
