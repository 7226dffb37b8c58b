use super::super::domain::OutreachTier;
use super::super::outreach::format_dollars;
use super::AnalysisReport;
use std::fmt;

/// Renders the console report for an analysis.
pub fn render_text(report: &AnalysisReport) -> String {
    report.to_string()
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.summary_stats;

        writeln!(out, "RENTAL-TO-OWNER ANALYSIS REPORT")?;
        writeln!(out, "=====================================")?;
        writeln!(
            out,
            "Generated: {}",
            self.analysis_date.format("%Y-%m-%d %H:%M:%S")
        )?;

        writeln!(out, "\nSUMMARY STATISTICS:")?;
        writeln!(out, "- Total Renters Analyzed: {}", stats.total_renters)?;
        for tier in OutreachTier::ordered() {
            writeln!(
                out,
                "- {} ({}): {} ({:.1}%)",
                tier.label(),
                tier.range_label(),
                stats.count(tier),
                stats.share(tier)
            )?;
        }

        writeln!(out, "\nPERFORMANCE METRICS:")?;
        writeln!(
            out,
            "- Average Credit Improvement: {:+.0} points",
            stats.avg_credit_improvement
        )?;
        writeln!(
            out,
            "- Average Payment Reliability: {:.1}%",
            stats.avg_payment_reliability
        )?;
        writeln!(out, "- Average Savings: {}", format_dollars(stats.avg_savings))?;
        writeln!(out, "- Average Income: {}", format_dollars(stats.avg_income))?;

        writeln!(out, "\nTOP {} PROSPECTS:", self.top_prospects.len())?;
        if self.top_prospects.is_empty() {
            writeln!(out, "- none")?;
        }
        for prospect in &self.top_prospects {
            writeln!(
                out,
                "\n{} - Score: {:.0} ({})",
                prospect.name, prospect.readiness_score, prospect.recommendation
            )?;
            writeln!(out, "  Email: {}", prospect.email)?;
            writeln!(out, "  Credit Score: {}", prospect.credit_score_current)?;
            writeln!(out, "  Savings: {}", format_dollars(prospect.savings))?;
            writeln!(
                out,
                "  Max Home Price: {}",
                format_dollars(prospect.max_affordable_home)
            )?;
        }

        if !self.rejected_records.is_empty() {
            writeln!(out, "\nSKIPPED RECORDS:")?;
            for rejected in &self.rejected_records {
                writeln!(
                    out,
                    "- #{} {}: {}",
                    rejected.index, rejected.name, rejected.reason
                )?;
            }
        }

        Ok(())
    }
}
