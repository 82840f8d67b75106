use crate::{
    core::battery::Battery,
    quantity::{energy::KilowattHours, ratios::Percentage},
};

/// Everything shown for a single «from → to» charging session.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct ChargeEstimate {
    pub from: Percentage,
    pub to: Percentage,
    pub effective_capacity: KilowattHours,
    pub usable_capacity: KilowattHours,

    /// Energy that ends up in the battery, signed and without losses.
    pub base_energy: KilowattHours,

    /// Energy drawn from the grid, including losses and clamped at zero.
    pub required_energy: KilowattHours,
}

impl ChargeEstimate {
    pub fn new(battery: &Battery, from: Percentage, to: Percentage) -> Self {
        let effective_capacity = battery.effective_capacity();
        Self {
            from,
            to,
            effective_capacity,
            usable_capacity: battery.usable_capacity(),
            base_energy: effective_capacity * (to - from),
            required_energy: battery.required_energy(from, to),
        }
    }

    pub fn soc_increase(&self) -> Percentage {
        self.to - self.from
    }

    pub fn is_target_below_current(&self) -> bool {
        self.to < self.from
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn reference_example_ok() {
        let battery = Battery::builder()
            .capacity(KilowattHours(75.0))
            .state_of_health(Percentage(95.0))
            .charge_losses(Percentage(10.0))
            .build();
        let estimate = ChargeEstimate::new(&battery, Percentage(20.0), Percentage(80.0));
        assert_abs_diff_eq!(estimate.effective_capacity.0, 71.25);
        assert_abs_diff_eq!(estimate.base_energy.0, 42.75, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.required_energy.0, 47.025, epsilon = 1e-9);
        assert_eq!(estimate.soc_increase(), Percentage(60.0));
        assert!(!estimate.is_target_below_current());
    }

    #[test]
    fn target_below_current_ok() {
        let battery = Battery::builder()
            .capacity(KilowattHours(60.0))
            .state_of_health(Percentage(100.0))
            .charge_losses(Percentage(5.0))
            .build();
        let estimate = ChargeEstimate::new(&battery, Percentage(90.0), Percentage(60.0));
        assert!(estimate.is_target_below_current());
        assert_eq!(estimate.soc_increase(), Percentage(-30.0));
        assert_abs_diff_eq!(estimate.base_energy.0, -18.0, epsilon = 1e-9);
        assert_eq!(estimate.required_energy, KilowattHours::ZERO);
    }
}
