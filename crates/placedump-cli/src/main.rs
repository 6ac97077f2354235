mod export;
mod prompt;
mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::ExportOverrides;

#[derive(Debug, Parser)]
#[command(name = "placedump")]
#[command(about = "Export Google Places text search results to CSV")]
struct Cli {
    /// Search text, e.g. "coffee"
    #[arg(long, env = "PLACEDUMP_QUERY")]
    query: Option<String>,
    /// Location to search around, e.g. "Seattle"
    #[arg(long, env = "PLACEDUMP_LOCATION")]
    location: Option<String>,
    /// Maximum number of result pages to fetch
    #[arg(long, env = "PLACEDUMP_PAGES", value_parser = clap::value_parser!(u32).range(1..))]
    pages: Option<u32>,
    /// CSV file to write instead of the generated "<query> in <location> ..." name
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

impl Cli {
    fn overrides(&self) -> ExportOverrides {
        ExportOverrides {
            query: self.query.clone(),
            location: self.location.clone(),
            pages: self.pages,
            output: self.output.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = placedump_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = run::ExportSettings::resolve(&config, cli.overrides(), chrono::Local::now())?;

    prompt::print_summary(&settings);
    if !cli.yes && !prompt::confirm_charges()? {
        println!("Exiting...");
        return Ok(());
    }

    run::run_export(&config, &settings).await
}
