#[cfg(feature = "cli")]
pub mod cli;
pub mod http;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use http::CompanyHttpClient;
