//! CLI entry point for the COVID-19 dashboard summaries.
//!
//! Each invocation loads the current case records once, applies the
//! requested filters and prints or logs the result.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use covid_dashboard::{
    aggregate::{Filters, aggregate},
    config::{
        DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LIMIT, DEFAULT_SOURCE, DEFAULT_TIMEOUT_SECS,
        SourceConfig,
    },
    dashboard::dashboard_data,
    fetch::{BasicClient, load_records},
    output::{log_headline, print_pretty, write_json, write_json_file},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "covid_dashboard")]
#[command(about = "Summaries of the Colombian COVID-19 case register", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// URL of the dataset, or a path to a local JSON export
    #[arg(long, env = "DATA_URL", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Maximum number of records requested from the source
    #[arg(long, env = "DATA_LIMIT", default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Request timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl SourceArgs {
    fn into_config(self) -> SourceConfig {
        SourceConfig {
            source: self.source,
            limit: self.limit,
            timeout_secs: self.timeout_secs,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the dashboard summary and print it as JSON
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        /// Only cases in this city (exact match)
        #[arg(long)]
        city: Option<String>,

        /// Only cases of this sex (case-insensitive)
        #[arg(long)]
        gender: Option<String>,

        /// Only cases in this department (exact match)
        #[arg(long)]
        department: Option<String>,

        /// Indent the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the departments present in the dataset
    ListDepartments {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the cities present in the dataset, optionally within a department
    ListCities {
        #[command(flatten)]
        source: SourceArgs,

        /// Restrict to this department (exact match)
        #[arg(long)]
        department: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/covid_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("covid_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            source,
            city,
            gender,
            department,
            pretty,
            output,
        } => {
            let config = source.into_config();
            let client = BasicClient::from_config(&config)?;
            let filters = Filters::new(department, city, gender);

            let payload = dashboard_data(&client, &config, &filters).await;
            log_headline(&payload);
            print_pretty(&payload);

            match output {
                Some(path) => write_json_file(&path, &payload, pretty)?,
                None => write_json(std::io::stdout().lock(), &payload, pretty)?,
            }
        }
        Commands::ListDepartments { source } => {
            let config = source.into_config();
            let client = BasicClient::from_config(&config)?;

            let records = load_records(&client, &config).await;
            let payload = aggregate(&records, &Filters::default());

            for department in &payload.available_departments {
                info!(department = %department, "Department");
            }
            info!(total = payload.available_departments.len(), "Department list summary");
        }
        Commands::ListCities { source, department } => {
            let config = source.into_config();
            let client = BasicClient::from_config(&config)?;

            let records = load_records(&client, &config).await;
            let payload = aggregate(&records, &Filters::new(department.clone(), None, None));

            for city in &payload.available_cities {
                info!(city = %city, "City");
            }
            info!(
                department = department.as_deref().unwrap_or("all"),
                total = payload.available_cities.len(),
                "City list summary"
            );
        }
    }

    Ok(())
}
