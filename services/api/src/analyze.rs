use crate::infra::{batch_policy, load_analysis};
use chrono::Local;
use clap::{Args, ValueEnum};
use rent_to_own::config::AnalysisConfig;
use rent_to_own::error::AppError;
use rent_to_own::workflows::readiness::{
    export_json, render_text, AnalysisReport, OutreachMessage, OutreachTier, ReadinessAnalysis,
};
use std::path::PathBuf;

const REPORT_PROSPECTS: i64 = 5;
const PREVIEW_CHARS: usize = 100;

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Renter roster CSV (defaults to READINESS_DATA_PATH)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Skip and log renters that cannot be scored instead of aborting
    #[arg(long)]
    pub(crate) skip_invalid: bool,
}

impl RosterArgs {
    fn load(&self, config: &AnalysisConfig) -> Result<ReadinessAnalysis, AppError> {
        let path = self.data.as_ref().unwrap_or(&config.data_path);
        load_analysis(path, batch_policy(self.skip_invalid, config.batch_policy))
    }
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Number of top prospects to list
    #[arg(long, allow_negative_numbers = true, default_value_t = REPORT_PROSPECTS)]
    pub(crate) top: i64,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Destination file (defaults to READINESS_EXPORT_PATH)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Number of top prospects to include (defaults to READINESS_TOP_N)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) top: Option<i64>,
    /// Leave outreach messages out of the export
    #[arg(long)]
    pub(crate) no_messages: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OutreachArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Only show renters in this outreach tier
    #[arg(long, value_enum)]
    pub(crate) tier: Option<TierArg>,
    /// Maximum number of messages to print
    #[arg(long, default_value_t = 3)]
    pub(crate) limit: usize,
    /// Print full messages instead of previews
    #[arg(long)]
    pub(crate) full: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TierArg {
    ReadyNow,
    HighPriority,
    NeedsImprovement,
}

impl From<TierArg> for OutreachTier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::ReadyNow => OutreachTier::ReadyNow,
            TierArg::HighPriority => OutreachTier::HighPriority,
            TierArg::NeedsImprovement => OutreachTier::NeedsImprovement,
        }
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs, config: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = args.roster.load(config)?;
    let report = AnalysisReport::build(&analysis, args.top, false, Local::now())?;
    print!("{}", render_text(&report));
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs, config: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = args.roster.load(config)?;
    let top = args.top.unwrap_or_else(|| i64::from(config.top_n));
    let report = AnalysisReport::build(&analysis, top, !args.no_messages, Local::now())?;

    let output = args.output.unwrap_or_else(|| config.export_path.clone());
    export_json(&report, &output)?;
    println!("Results exported to {}", output.display());
    Ok(())
}

pub(crate) fn run_outreach(args: OutreachArgs, config: &AnalysisConfig) -> Result<(), AppError> {
    let analysis = args.roster.load(config)?;
    let renters = match args.tier {
        Some(tier) => analysis.filter_by_tier(tier.into()),
        None => analysis.renters().iter().collect(),
    };

    if renters.is_empty() {
        println!("No renters matched the requested tier");
        return Ok(());
    }

    println!("Outreach messages ({} of {})", renters.len().min(args.limit), renters.len());
    for (position, renter) in renters.into_iter().take(args.limit).enumerate() {
        let message = OutreachMessage::for_renter(renter);
        let body = if args.full {
            message.message.clone()
        } else {
            message.preview(PREVIEW_CHARS)
        };
        println!(
            "\n{}. {} ({}, score {:.0}):",
            position + 1,
            message.name,
            message.priority,
            renter.score
        );
        println!("   {body}");
    }

    Ok(())
}
