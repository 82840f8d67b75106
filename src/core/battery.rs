use bon::Builder;

use crate::quantity::{energy::KilowattHours, ratios::Percentage};

/// Vehicle traction battery parameters.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Battery {
    /// Nominal (design) capacity.
    pub capacity: KilowattHours,

    /// Share of the nominal capacity the battery still retains.
    pub state_of_health: Percentage,

    /// Extra energy drawn from the grid on top of what ends up in the battery.
    pub charge_losses: Percentage,
}

impl Battery {
    /// Share of the effective capacity within the 10–90% window.
    pub const USABLE_RATIO: f64 = 0.8;

    pub fn effective_capacity(&self) -> KilowattHours {
        self.capacity * self.state_of_health
    }

    pub fn usable_capacity(&self) -> KilowattHours {
        self.effective_capacity() * Self::USABLE_RATIO
    }

    pub fn required_energy(&self, from: Percentage, to: Percentage) -> KilowattHours {
        required_energy(self.capacity, self.state_of_health, self.charge_losses, from, to)
    }
}

/// Grid energy needed to bring the battery from one state of charge to another.
///
/// Never negative: charging «down» needs no energy.
pub fn required_energy(
    capacity: KilowattHours,
    state_of_health: Percentage,
    charge_losses: Percentage,
    from: Percentage,
    to: Percentage,
) -> KilowattHours {
    let base = capacity * state_of_health * (to - from);
    (base * (1.0 + charge_losses.to_ratio())).max(KilowattHours::ZERO)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn battery() -> Battery {
        Battery::builder()
            .capacity(KilowattHours(75.0))
            .state_of_health(Percentage(95.0))
            .charge_losses(Percentage(10.0))
            .build()
    }

    #[test]
    fn effective_capacity_ok() {
        assert_abs_diff_eq!(battery().effective_capacity().0, 71.25);
    }

    #[test]
    fn usable_capacity_ok() {
        assert_abs_diff_eq!(battery().usable_capacity().0, 57.0, epsilon = 1e-9);
    }

    #[test]
    fn required_energy_ok() {
        let energy = battery().required_energy(Percentage(20.0), Percentage(80.0));
        assert_abs_diff_eq!(energy.0, 47.025, epsilon = 1e-9);
    }

    #[test]
    fn same_state_of_charge_needs_nothing() {
        for soc in [0.0, 12.5, 50.0, 100.0] {
            let energy = battery().required_energy(Percentage(soc), Percentage(soc));
            assert_eq!(energy, KilowattHours::ZERO);
        }
    }

    #[test]
    fn lower_target_is_clamped_to_zero() {
        let energy = battery().required_energy(Percentage(80.0), Percentage(20.0));
        assert_eq!(energy, KilowattHours::ZERO);
    }

    #[test]
    fn monotonic_in_soc_difference() {
        let battery = battery();
        let mut previous = KilowattHours::ZERO;
        for delta in -100..=100 {
            let energy = battery.required_energy(Percentage(0.0), Percentage(f64::from(delta)));
            assert!(energy >= previous, "{energy:?} < {previous:?} at delta={delta}");
            previous = energy;
        }
    }

    #[test]
    fn free_function_matches_battery() {
        let energy = required_energy(
            KilowattHours(200.0),
            Percentage(50.0),
            Percentage(25.0),
            Percentage(0.0),
            Percentage(100.0),
        );
        assert_abs_diff_eq!(energy.0, 125.0, epsilon = 1e-9);
    }
}
