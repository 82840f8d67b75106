use clap::{Parser, Subcommand};

use crate::{
    api::goe,
    cli::soc::SocArgs,
    core::estimate::ChargeEstimate,
    prelude::*,
    quantity::energy::{KilowattHours, WattHours},
    settings::{ChargerSettings, ConnectionStatus, SettingsStore},
    tables::build_charger_status_table,
};

#[derive(Parser)]
pub struct ChargerArgs {
    #[command(subcommand)]
    command: ChargerCommand,
}

impl ChargerArgs {
    #[instrument(skip_all)]
    pub async fn run(self, store: &mut SettingsStore) -> Result {
        ensure_enabled(&store.settings().charger)?;
        match self.command {
            ChargerCommand::Test => test_connection(store).await,
            ChargerCommand::Status => {
                let status = goe::Client::new(&store.settings().charger.address)?
                    .get_status()
                    .await
                    .context("failed to get the charger status")?;
                println!("{}", build_charger_status_table(&status));
                Ok(())
            }
            ChargerCommand::Push(soc) => {
                let (from, to) = soc.apply(store)?;
                let estimate = ChargeEstimate::new(&store.settings().battery(), from, to);
                push_energy_limit(store, &estimate).await
            }
        }
    }
}

#[derive(Subcommand)]
enum ChargerCommand {
    /// Check that the charger responds and remember the outcome.
    Test,

    /// Show the live charger status.
    Status,

    /// Compute the required energy and set it as the session energy limit.
    Push(SocArgs),
}

/// Test the connection and store the outcome, even when it is a failure.
async fn test_connection(store: &mut SettingsStore) -> Result {
    let result = try_connection(&store.settings().charger.address).await;
    let status = ConnectionStatus::from(&result);
    info!(%status, "tested");
    store.set_charger_status(status)?;
    result?;
    Ok(())
}

async fn try_connection(address: &str) -> Result<String, goe::Error> {
    goe::Client::new(address)?.test_connection().await
}

#[instrument(skip_all, fields(required_energy = %estimate.required_energy))]
pub async fn push_energy_limit(store: &SettingsStore, estimate: &ChargeEstimate) -> Result {
    let charger = &store.settings().charger;
    ensure_enabled(charger)?;
    ensure!(
        estimate.required_energy > KilowattHours::ZERO,
        "nothing to push: the target charge is not above the current charge",
    );
    let confirmation = goe::Client::new(&charger.address)?
        .set_energy_limit(WattHours::from(estimate.required_energy))
        .await
        .context("failed to push the energy limit")?;
    info!(confirmation, "pushed");
    Ok(())
}

fn ensure_enabled(charger: &ChargerSettings) -> Result {
    ensure!(
        charger.enabled,
        "the go-eCharger integration is disabled, enable it with `settings set --charger-enabled true`",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use tempfile::TempDir;

    use super::*;
    use crate::quantity::ratios::Percentage;

    fn open_store(directory: &TempDir, address: &str) -> Result<SettingsStore> {
        let mut store = SettingsStore::open(directory.path().join("settings.toml"))?;
        store.set_charger_enabled(true)?;
        store.set_charger_address(address.to_owned())?;
        Ok(store)
    }

    #[tokio::test]
    async fn successful_test_is_stored() -> Result {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/status")
            .match_query(Matcher::UrlEncoded("filter".into(), "car,typ".into()))
            .with_body(r#"{"typ": "go-eCharger"}"#)
            .create_async()
            .await;
        let directory = TempDir::new()?;
        let mut store = open_store(&directory, &server.url())?;

        test_connection(&mut store).await?;

        assert_eq!(
            store.settings().charger.status,
            ConnectionStatus::Connected("Connected to go-eCharger".to_owned())
        );
        Ok(())
    }

    #[tokio::test]
    async fn failed_test_is_stored() -> Result {
        let directory = TempDir::new()?;
        let mut store = open_store(&directory, "")?;

        assert!(test_connection(&mut store).await.is_err());

        assert_eq!(
            store.settings().charger.status,
            ConnectionStatus::Failed("IP address is empty".to_owned())
        );
        Ok(())
    }

    #[tokio::test]
    async fn push_sends_watt_hours() -> Result {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/set")
            .match_query(Matcher::UrlEncoded("dwo".into(), "47025".into()))
            .with_body(r#"{"dwo": true}"#)
            .create_async()
            .await;
        let directory = TempDir::new()?;
        let store = open_store(&directory, &server.url())?;
        let estimate =
            ChargeEstimate::new(&store.settings().battery(), Percentage(20.0), Percentage(80.0));

        push_energy_limit(&store, &estimate).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn nothing_to_push() -> Result {
        let directory = TempDir::new()?;
        let store = open_store(&directory, "192.0.2.1")?;
        let estimate =
            ChargeEstimate::new(&store.settings().battery(), Percentage(80.0), Percentage(80.0));
        assert!(push_energy_limit(&store, &estimate).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn disabled_charger_is_refused() -> Result {
        let directory = TempDir::new()?;
        let mut store = open_store(&directory, "192.0.2.1")?;
        store.set_charger_enabled(false)?;
        let estimate =
            ChargeEstimate::new(&store.settings().battery(), Percentage(20.0), Percentage(80.0));
        assert!(push_energy_limit(&store, &estimate).await.is_err());
        Ok(())
    }
}
