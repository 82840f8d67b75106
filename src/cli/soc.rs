use clap::Parser;

use crate::{
    cli::range,
    core::preset::Preset,
    prelude::*,
    quantity::ratios::Percentage,
    settings::SettingsStore,
};

/// Current and target state of charge, defaulting to the stored ones.
#[derive(Parser)]
pub struct SocArgs {
    /// Current state of charge, percent.
    #[clap(long, value_parser = range::state_of_charge)]
    pub from: Option<Percentage>,

    /// Target state of charge, percent.
    #[clap(long, value_parser = range::state_of_charge)]
    pub to: Option<Percentage>,

    /// Use one of the common sessions instead of explicit levels.
    #[clap(long, value_enum, conflicts_with_all = ["from", "to"])]
    pub preset: Option<Preset>,
}

impl SocArgs {
    /// Store the explicitly given levels and return the effective pair.
    pub fn apply(&self, store: &mut SettingsStore) -> Result<(Percentage, Percentage)> {
        let (from, to) = match self.preset {
            Some(preset) => {
                let (from, to) = preset.soc_range();
                (Some(from), Some(to))
            }
            None => (self.from, self.to),
        };
        if let Some(from) = from {
            store.set_current_soc(from)?;
        }
        if let Some(to) = to {
            store.set_target_soc(to)?;
        }
        let settings = store.settings();
        Ok((settings.current_soc, settings.target_soc))
    }
}
