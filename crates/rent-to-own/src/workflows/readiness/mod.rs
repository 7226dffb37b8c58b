//! Homeownership readiness scoring for rental rosters.
//!
//! The scoring core (`scoring`, `summary`, `prospects`) is pure and
//! synchronous. `analysis` applies a batch policy on top of it, while
//! `outreach`, `report` and `router` only consume its results.

pub mod analysis;
pub mod domain;
pub mod outreach;
pub mod prospects;
pub mod report;
pub mod router;
pub mod scoring;
pub mod summary;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisError, BatchPolicy, ReadinessAnalysis, RejectedRecord, ScoredRenter};
pub use domain::{
    DerivedMetrics, OutreachTier, ReadinessCategory, ReadinessError, RenterRecord,
    CREDIT_SCORE_RANGE,
};
pub use outreach::{outreach_messages, OutreachMessage};
pub use prospects::{filter_by_tier, sorted_by, top_n, ProspectSort};
pub use report::{export_json, render_text, AnalysisReport, ExportError};
pub use router::{readiness_router, AnalysisRequest};
pub use scoring::{
    categorize, compute_outreach_tier, ReadinessOutcome, ScoreBreakdown, ScoreComponent,
    ScoreComponentKind, ScoreEngine,
};
pub use summary::{summarize, SummaryStatistics};
