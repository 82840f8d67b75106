use clap::{Parser, Subcommand};

use crate::{
    cli::range,
    prelude::*,
    quantity::{energy::KilowattHours, ratios::Percentage},
    settings::SettingsStore,
    tables::build_settings_table,
};

#[derive(Parser)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

impl SettingsArgs {
    pub fn run(self, store: &mut SettingsStore) -> Result {
        match self.command {
            SettingsCommand::Show => {}
            SettingsCommand::Set(args) => args.apply(store)?,
        }
        println!("{}", build_settings_table(store.settings()));
        Ok(())
    }
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the stored settings.
    Show,

    /// Change one or more settings.
    Set(SetArgs),
}

#[derive(Parser)]
struct SetArgs {
    /// Nominal battery capacity in kilowatt-hours, 10–200.
    #[clap(long, value_parser = range::battery_capacity)]
    battery_capacity: Option<KilowattHours>,

    /// Battery state of health, percent, 50–100.
    #[clap(long, value_parser = range::state_of_health)]
    state_of_health: Option<Percentage>,

    /// Charging losses, percent, 5–25.
    #[clap(long, value_parser = range::charge_losses)]
    charge_losses: Option<Percentage>,

    /// Current state of charge, percent.
    #[clap(long, value_parser = range::state_of_charge)]
    current_soc: Option<Percentage>,

    /// Target state of charge, percent.
    #[clap(long, value_parser = range::state_of_charge)]
    target_soc: Option<Percentage>,

    /// Enable or disable the go-eCharger integration.
    #[clap(long)]
    charger_enabled: Option<bool>,

    /// go-eCharger address, for example: `192.168.1.100`.
    #[clap(long)]
    charger_address: Option<String>,
}

impl SetArgs {
    #[instrument(skip_all)]
    fn apply(self, store: &mut SettingsStore) -> Result {
        if let Some(capacity) = self.battery_capacity {
            store.set_battery_capacity(capacity)?;
        }
        if let Some(state_of_health) = self.state_of_health {
            store.set_state_of_health(state_of_health)?;
        }
        if let Some(charge_losses) = self.charge_losses {
            store.set_charge_losses(charge_losses)?;
        }
        if let Some(current_soc) = self.current_soc {
            store.set_current_soc(current_soc)?;
        }
        if let Some(target_soc) = self.target_soc {
            store.set_target_soc(target_soc)?;
        }
        if let Some(enabled) = self.charger_enabled {
            store.set_charger_enabled(enabled)?;
        }
        if let Some(address) = self.charger_address {
            store.set_charger_address(address.trim().to_owned())?;
        }
        info!("updated");
        Ok(())
    }
}
