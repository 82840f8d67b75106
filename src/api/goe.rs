//! go-eCharger local HTTP API.

mod error;
mod lenient;
mod models;

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

pub use self::{
    error::Error,
    models::{CarState, Status},
};
use self::models::{DeviceInfo, SetResponse};
use crate::{prelude::*, quantity::energy::WattHours};

pub struct Client {
    inner: reqwest::Client,
    base_url: Url,
}

impl Client {
    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Accepts a bare host (`192.168.1.100`), `host:port`, or a full base URL.
    #[instrument(skip_all, fields(address = address))]
    pub fn new(address: &str) -> Result<Self, Error> {
        let base_url = parse_address(address)?;
        let inner = reqwest::Client::builder()
            .user_agent("chargewise")
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self { inner, base_url })
    }

    /// Returns a human-readable confirmation on success.
    #[instrument(skip_all, fields(url = %self.base_url))]
    pub async fn test_connection(&self) -> Result<String, Error> {
        info!("testing…");
        let device: DeviceInfo = self.get("api/status", "filter=car,typ").await?;
        Ok(device.device_type.map_or_else(
            || "Connected successfully".to_owned(),
            |device_type| format!("Connected to {device_type}"),
        ))
    }

    #[instrument(skip_all, fields(url = %self.base_url))]
    pub async fn get_status(&self) -> Result<Status, Error> {
        let status: Status = self.get("api/status", "filter=car,amp,alw,dwo,acu").await?;
        info!(
            car = %status.car_state_description(),
            allowed = ?status.is_charging_allowed,
            limit = ?status.energy_limit(),
            "gotcha"
        );
        Ok(status)
    }

    #[instrument(skip_all, fields(url = %self.base_url, limit = %limit))]
    pub async fn set_energy_limit(&self, limit: WattHours) -> Result<String, Error> {
        info!("setting…");
        let response: SetResponse = self.get("api/set", &format!("dwo={}", limit.0)).await?;
        if response.acknowledges(limit) {
            Ok(format!("Energy limit set to {} Wh", limit.0))
        } else {
            Err(Error::Rejected(response.echo_description()))
        }
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(path = path, query = query))]
    async fn get<R: DeserializeOwned>(&self, path: &str, query: &str) -> Result<R, Error> {
        let mut url = self.base_url.join(path).map_err(|_| Error::InvalidAddress)?;
        url.set_query(Some(query));

        let response = self.inner.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Http(status));
        }

        let body: serde_json::Value = serde_json::from_slice(&response.bytes().await?)?;
        debug!(%body, "received");
        if !body.is_object() {
            return Err(Error::NotAnObject);
        }
        Ok(serde_json::from_value(body)?)
    }
}

fn parse_address(address: &str) -> Result<Url, Error> {
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    let url = if address.contains("://") {
        Url::parse(address)
    } else {
        Url::parse(&format!("http://{address}"))
    };
    match url {
        Ok(mut url) if url.host_str().is_some_and(|host| !host.is_empty()) => {
            // Endpoint paths are joined relative to the base, keep its last segment.
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(url)
        }
        _ => {
            warn!(address, "cannot make a base URL out of the address");
            Err(Error::InvalidAddress)
        }
    }
}
