use crate::utils::error::Result;
use async_trait::async_trait;

/// Response shape the schedule endpoint collaborator exposes: a success flag
/// and the body text.
#[derive(Debug, Clone)]
pub struct ScheduleResponse {
    pub ok: bool,
    pub text: String,
}

/// Injectable HTTP seam. Tests substitute a fake implementation; the binary
/// wires in the reqwest-backed adapter.
#[async_trait]
pub trait ScheduleClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<ScheduleResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn schedule_base_url(&self) -> &str;
    fn raise_multiplier(&self) -> f64;
}
