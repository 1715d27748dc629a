use clap::Parser;
use repair_sla::app::{run, ApiConfig, RunConfig};
use repair_sla::io::NAGER_API_BASE;
use repair_sla::time::CountryCode;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "repair-sla",
    version,
    about = "Classify repair work orders as SLA Hit or Miss in business days"
)]
struct Cli {
    /// Nager.Date PublicHolidays endpoint
    #[arg(long, env = "REPAIR_SLA_API_BASE", default_value = NAGER_API_BASE)]
    api_base: String,

    /// Years to fetch from the API [default: 2020-2025]
    #[arg(long, env = "REPAIR_SLA_YEARS", value_delimiter = ',')]
    years: Vec<u16>,

    /// ISO country codes to fetch from the API [default: AT,DE,SK,CZ]
    #[arg(long, env = "REPAIR_SLA_COUNTRIES", value_delimiter = ',')]
    countries: Vec<CountryCode>,

    /// Skip the API and read holidays from files only
    #[arg(long)]
    offline: bool,

    /// Holiday file used when the API fails (.json Nager.Date export or .csv)
    #[arg(long, env = "REPAIR_SLA_HOLIDAYS")]
    holidays: Option<PathBuf>,

    /// Holiday file used when everything before it is unreadable or empty
    #[arg(long, env = "REPAIR_SLA_HOLIDAYS_FALLBACK")]
    holidays_fallback: Option<PathBuf>,

    /// Repair records CSV (ID, Country, Start Date, End Date)
    #[arg(long, env = "REPAIR_SLA_REPAIRS")]
    repairs: PathBuf,

    /// Lead-time CSV (Country, LeadTime)
    #[arg(long, env = "REPAIR_SLA_LEAD_TIMES")]
    lead_times: PathBuf,

    /// Output directory for the CSV reports
    #[arg(long, env = "REPAIR_SLA_OUT_DIR", default_value = "results")]
    out_dir: PathBuf,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let api = (!cli.offline).then(|| {
            let mut api = ApiConfig {
                base_url: cli.api_base,
                ..ApiConfig::default()
            };
            if !cli.countries.is_empty() {
                api.countries = cli.countries;
            }
            if !cli.years.is_empty() {
                api.years = cli.years;
            }
            api
        });
        Self {
            api,
            holidays: cli.holidays,
            holidays_fallback: cli.holidays_fallback,
            repairs: cli.repairs,
            lead_times: cli.lead_times,
            out_dir: cli.out_dir,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repair_sla=info,sla_io=info,sla_compliance=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config: RunConfig = Cli::parse().into();
    let report = run(&config)?;
    if !report.is_complete() {
        tracing::warn!(
            skipped = report.skipped.len(),
            configuration_errors = report.configuration_errors.len(),
            "some repair records were not classified"
        );
    }
    Ok(())
}
