mod calculate;
mod charger;
mod range;
mod settings;
mod soc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, charger::ChargerArgs, settings::SettingsArgs},
    prelude::*,
    settings::SettingsStore,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Settings file, created on the first change.
    #[clap(long, env = "SETTINGS_PATH", default_value = "settings.toml", global = true)]
    pub settings_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the energy needed to charge from the current to the target level.
    #[clap(name = "calculate")]
    Calculate(CalculateArgs),

    /// Show or change the stored settings.
    #[clap(name = "settings")]
    Settings(SettingsArgs),

    /// Talk to the go-eCharger.
    #[clap(name = "charger")]
    Charger(ChargerArgs),
}

impl Command {
    pub async fn run(self, store: &mut SettingsStore) -> Result {
        match self {
            Self::Calculate(args) => args.run(store).await,
            Self::Settings(args) => args.run(store),
            Self::Charger(args) => args.run(store).await,
        }
    }
}
