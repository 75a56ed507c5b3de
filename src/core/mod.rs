pub mod schedule;

pub use crate::domain::model::{Employee, DEFAULT_RAISE_MULTIPLIER};
pub use crate::domain::ports::{ConfigProvider, ScheduleClient, ScheduleResponse};
pub use crate::utils::error::Result;
