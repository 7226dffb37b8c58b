mod export;
mod render;
pub mod views;

pub use export::{export_json, ExportError};
pub use render::render_text;

use super::analysis::{ReadinessAnalysis, RejectedRecord};
use super::domain::ReadinessError;
use super::outreach::{outreach_messages, OutreachMessage};
use super::summary::SummaryStatistics;
use chrono::{DateTime, Local};
use serde::Serialize;
use views::ProspectView;

/// Everything a stakeholder report or JSON export needs from one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary_stats: SummaryStatistics,
    pub top_prospects: Vec<ProspectView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outreach_messages: Vec<OutreachMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected_records: Vec<RejectedRecord>,
    pub analysis_date: DateTime<Local>,
}

impl AnalysisReport {
    pub fn build(
        analysis: &ReadinessAnalysis,
        top_n: i64,
        include_messages: bool,
        analysis_date: DateTime<Local>,
    ) -> Result<Self, ReadinessError> {
        let summary_stats = analysis.summary()?;
        let top_prospects = analysis
            .top_prospects(top_n)?
            .into_iter()
            .map(ProspectView::from_renter)
            .collect();
        let outreach_messages = if include_messages {
            outreach_messages(analysis.renters())
        } else {
            Vec::new()
        };

        Ok(Self {
            summary_stats,
            top_prospects,
            outreach_messages,
            rejected_records: analysis.rejected().to_vec(),
            analysis_date,
        })
    }
}
