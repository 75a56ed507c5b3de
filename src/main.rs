use clap::Parser;
use staff_roster::utils::{logger, validation::Validate};
use staff_roster::{CliConfig, CompanyHttpClient, ConfigProvider, Employee, ScheduleService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting staff-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut employee = Employee::new(config.first.clone(), config.last.clone(), config.pay);
    employee.apply_raise(config.raise_multiplier());

    let month = config.month.clone();
    let as_json = config.json;

    let service = ScheduleService::new(CompanyHttpClient::new(), config);

    match service.monthly_schedule(&employee, &month).await {
        Ok(schedule) => {
            if as_json {
                let summary = serde_json::json!({
                    "fullname": employee.fullname(),
                    "email": employee.email(),
                    "pay": employee.pay,
                    "month": month,
                    "schedule": schedule,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} <{}>", employee.fullname(), employee.email());
                println!("Pay after raise: {}", employee.pay);
                println!("Schedule for {}: {}", month, schedule);
            }
        }
        Err(e) => {
            tracing::error!("Schedule lookup failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
