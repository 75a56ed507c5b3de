use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "staff-roster")]
#[command(about = "Look up an employee's derived details and monthly schedule")]
pub struct CliConfig {
    #[arg(long)]
    pub first: String,

    #[arg(long)]
    pub last: String,

    #[arg(long)]
    pub pay: u32,

    #[arg(long)]
    pub month: String,

    #[arg(long, default_value = "http://company.com")]
    pub base_url: String,

    #[arg(long, default_value = "1.05")]
    pub raise_multiplier: f64,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn schedule_base_url(&self) -> &str {
        &self.base_url
    }

    fn raise_multiplier(&self) -> f64 {
        self.raise_multiplier
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("month", &self.month)?;
        validate_range("raise_multiplier", self.raise_multiplier, 0.0, 10.0)?;
        Ok(())
    }
}
