//! HTTP client for communicating with evcal-server

use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use evcal_core::Event;

const SERVER_URL: &str = "http://127.0.0.1:4820";
const MAX_RETRIES: u32 = 10;
const RETRY_DELAY_MS: u64 = 200;

/// HTTP client for evcal-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

/// Response shape of GET /getEvents
#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

impl Client {
    /// Connect to an already-running server or start one
    pub async fn connect() -> Result<Self> {
        let http = reqwest::Client::new();
        let client = Self {
            http,
            base_url: SERVER_URL.to_string(),
        };

        if client.health_check().await.is_ok() {
            return Ok(client);
        }

        // Server not running - start it
        start_server()?;

        // Wait for the server to be ready
        for _ in 0..MAX_RETRIES {
            tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
            if client.health_check().await.is_ok() {
                return Ok(client);
            }
        }

        anyhow::bail!("Failed to connect to evcal-server after starting it")
    }

    async fn health_check(&self) -> Result<()> {
        self.http
            .get(format!("{}/getEvents", self.base_url))
            .timeout(Duration::from_secs(2))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Fetch the full stored event list
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let response: EventsResponse = self
            .http
            .get(format!("{}/getEvents", self.base_url))
            .send()
            .await
            .context("Failed to reach evcal-server")?
            .error_for_status()
            .context("evcal-server rejected the request")?
            .json()
            .await
            .context("Failed to decode events response")?;

        Ok(response.events)
    }

    /// Persist the full event list, replacing the stored one
    pub async fn submit_events(&self, events: &[Event]) -> Result<()> {
        self.http
            .post(format!("{}/addEvent", self.base_url))
            .json(&events)
            .send()
            .await
            .context("Failed to reach evcal-server")?
            .error_for_status()
            .context("evcal-server rejected the request")?;

        Ok(())
    }
}

/// Start evcal-server as a detached background process
fn start_server() -> Result<()> {
    Command::new("evcal-server")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("Failed to start evcal-server (is it installed?)")?;

    Ok(())
}
