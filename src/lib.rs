pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::CompanyHttpClient;
pub use crate::core::schedule::{ScheduleService, BAD_RESPONSE};
pub use crate::core::{
    ConfigProvider, Employee, ScheduleClient, ScheduleResponse, DEFAULT_RAISE_MULTIPLIER,
};
pub use utils::error::{Result, RosterError};
