use clap::Parser;

use crate::{
    cli::{charger, soc::SocArgs},
    core::estimate::ChargeEstimate,
    prelude::*,
    settings::SettingsStore,
    tables::build_estimate_table,
};

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(flatten)]
    pub soc: SocArgs,

    /// Also push the required energy as the session limit to the go-eCharger.
    #[clap(long)]
    pub push: bool,
}

impl CalculateArgs {
    #[instrument(skip_all)]
    pub async fn run(self, store: &mut SettingsStore) -> Result {
        let (from, to) = self.soc.apply(store)?;
        let estimate = ChargeEstimate::new(&store.settings().battery(), from, to);
        info!(%from, %to, required_energy = %estimate.required_energy, "estimated");
        println!("{}", build_estimate_table(&estimate));
        if estimate.is_target_below_current() {
            warn!("target charge is lower than current charge");
        }
        if self.push {
            charger::push_energy_limit(store, &estimate).await?;
        }
        Ok(())
    }
}
