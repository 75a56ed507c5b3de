use crate::core::{ScheduleClient, ScheduleResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed [`ScheduleClient`]. Non-2xx statuses become
/// `ScheduleResponse { ok: false, .. }`; transport failures become errors.
#[derive(Debug, Clone, Default)]
pub struct CompanyHttpClient {
    client: Client,
}

impl CompanyHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ScheduleClient for CompanyHttpClient {
    async fn get(&self, url: &str) -> Result<ScheduleResponse> {
        let response = self.client.get(url).send().await?;

        tracing::debug!("Schedule endpoint status: {}", response.status());
        let ok = response.status().is_success();
        let text = response.text().await?;

        Ok(ScheduleResponse { ok, text })
    }
}
