use crate::core::{ConfigProvider, Employee, ScheduleClient};
use crate::utils::error::Result;

pub const BAD_RESPONSE: &str = "Bad Response!";

pub struct ScheduleService<C: ScheduleClient, P: ConfigProvider> {
    client: C,
    config: P,
}

impl<C: ScheduleClient, P: ConfigProvider> ScheduleService<C, P> {
    pub fn new(client: C, config: P) -> Self {
        Self { client, config }
    }

    /// Fetches the employee's schedule for `month` from
    /// `{base_url}/{last}/{month}`. An unsuccessful response is a normal
    /// outcome mapped to [`BAD_RESPONSE`]; only transport failures surface
    /// as errors.
    pub async fn monthly_schedule(&self, employee: &Employee, month: &str) -> Result<String> {
        let url = format!(
            "{}/{}/{}",
            self.config.schedule_base_url(),
            employee.last,
            month
        );

        tracing::debug!("Requesting monthly schedule from: {}", url);
        let response = self.client.get(&url).await?;

        tracing::debug!("Schedule response ok: {}", response.ok);
        if response.ok {
            Ok(response.text)
        } else {
            Ok(BAD_RESPONSE.to_string())
        }
    }
}
