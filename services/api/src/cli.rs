use crate::analyze::{run_analyze, run_export, run_outreach, AnalyzeArgs, ExportArgs, OutreachArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rent_to_own::config::AppConfig;
use rent_to_own::error::AppError;
use rent_to_own::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Rent-to-Own Readiness Analyzer",
    about = "Score renters for homeownership readiness and plan outreach from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the readiness report for a renter roster
    Analyze(AnalyzeArgs),
    /// Write the full analysis, prospects and outreach messages to JSON
    Export(ExportArgs),
    /// Preview personalized outreach messages
    Outreach(OutreachArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Analyze(args) => run_analyze(args, &config.analysis),
        Command::Export(args) => run_export(args, &config.analysis),
        Command::Outreach(args) => run_outreach(args, &config.analysis),
    }
}
