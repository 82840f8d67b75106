use crate::quantity::ratios::Percentage;

/// Common charging sessions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Preset {
    /// Everyday charging, 20% → 80%.
    Daily,

    /// Full charge before a long drive, 20% → 100%.
    RoadTrip,

    /// Quick top-up, 60% → 90%.
    TopUp,
}

impl Preset {
    /// Current and target state of charge.
    pub const fn soc_range(self) -> (Percentage, Percentage) {
        match self {
            Self::Daily => (Percentage(20.0), Percentage(80.0)),
            Self::RoadTrip => (Percentage(20.0), Percentage(100.0)),
            Self::TopUp => (Percentage(60.0), Percentage(90.0)),
        }
    }
}
