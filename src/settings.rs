mod status;

use std::{fs, ops::RangeInclusive, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

pub use self::status::ConnectionStatus;
use crate::{
    core::battery::Battery,
    prelude::*,
    quantity::{energy::KilowattHours, ratios::Percentage},
};

/// Persisted user preferences.
///
/// The ranges below are enforced by the input layer, the store accepts any value.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "battery_capacity_kilowatt_hours")]
    pub battery_capacity: KilowattHours,

    #[serde(rename = "state_of_health_percent")]
    pub state_of_health: Percentage,

    #[serde(rename = "charge_losses_percent")]
    pub charge_losses: Percentage,

    #[serde(rename = "current_soc_percent")]
    pub current_soc: Percentage,

    #[serde(rename = "target_soc_percent")]
    pub target_soc: Percentage,

    pub charger: ChargerSettings,
}

impl Settings {
    pub const BATTERY_CAPACITY_RANGE: RangeInclusive<KilowattHours> =
        KilowattHours(10.0)..=KilowattHours(200.0);
    pub const STATE_OF_HEALTH_RANGE: RangeInclusive<Percentage> =
        Percentage(50.0)..=Percentage(100.0);
    pub const CHARGE_LOSSES_RANGE: RangeInclusive<Percentage> = Percentage(5.0)..=Percentage(25.0);
    pub const STATE_OF_CHARGE_RANGE: RangeInclusive<Percentage> =
        Percentage(0.0)..=Percentage(100.0);

    pub fn battery(&self) -> Battery {
        Battery::builder()
            .capacity(self.battery_capacity)
            .state_of_health(self.state_of_health)
            .charge_losses(self.charge_losses)
            .build()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            battery_capacity: KilowattHours(75.0),
            state_of_health: Percentage(95.0),
            charge_losses: Percentage(10.0),
            current_soc: Percentage(20.0),
            target_soc: Percentage(80.0),
            charger: ChargerSettings::default(),
        }
    }
}

/// go-eCharger integration.
#[serde_as]
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargerSettings {
    pub enabled: bool,

    /// Host name or IP address, optionally with a port or a scheme.
    pub address: String,

    /// Outcome of the last connection test.
    #[serde_as(as = "DisplayFromStr")]
    pub status: ConnectionStatus,
}

/// Settings backed by a TOML file, every change is written through immediately.
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: PathBuf) -> Result<Self> {
        let settings = if path.is_file() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse `{}`", path.display()))?
        } else {
            debug!("no settings file yet, using the defaults");
            Settings::default()
        };
        Ok(Self { path, settings })
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_battery_capacity(&mut self, capacity: KilowattHours) -> Result {
        self.update(|settings| settings.battery_capacity = capacity)
    }

    pub fn set_state_of_health(&mut self, state_of_health: Percentage) -> Result {
        self.update(|settings| settings.state_of_health = state_of_health)
    }

    pub fn set_charge_losses(&mut self, charge_losses: Percentage) -> Result {
        self.update(|settings| settings.charge_losses = charge_losses)
    }

    pub fn set_current_soc(&mut self, current_soc: Percentage) -> Result {
        self.update(|settings| settings.current_soc = current_soc)
    }

    pub fn set_target_soc(&mut self, target_soc: Percentage) -> Result {
        self.update(|settings| settings.target_soc = target_soc)
    }

    /// Disabling the integration forgets the last connection test.
    pub fn set_charger_enabled(&mut self, enabled: bool) -> Result {
        self.update(|settings| {
            settings.charger.enabled = enabled;
            if !enabled {
                settings.charger.status = ConnectionStatus::NotTested;
            }
        })
    }

    /// Changing the address forgets the last connection test, re-setting the same one does not.
    pub fn set_charger_address(&mut self, address: String) -> Result {
        self.update(|settings| {
            if settings.charger.address != address {
                settings.charger.address = address;
                settings.charger.status = ConnectionStatus::NotTested;
            }
        })
    }

    pub fn set_charger_status(&mut self, status: ConnectionStatus) -> Result {
        self.update(|settings| settings.charger.status = status)
    }

    fn update(&mut self, apply: impl FnOnce(&mut Settings)) -> Result {
        apply(&mut self.settings);
        self.save()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self) -> Result {
        let contents = toml::to_string(&self.settings).context("failed to serialize the settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write `{}`", self.path.display()))?;
        debug!("saved");
        Ok(())
    }
}
