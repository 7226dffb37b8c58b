use super::analysis::ScoredRenter;
use super::domain::{OutreachTier, ReadinessError};
use serde::{Deserialize, Serialize};

/// Roster-wide counts and averages.
///
/// Counts follow the outreach tier (80/90 split), not the readiness category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_renters: usize,
    pub ready_now: usize,
    pub high_priority: usize,
    pub needs_improvement: usize,
    pub avg_credit_improvement: f64,
    pub avg_payment_reliability: f64,
    pub avg_savings: f64,
    pub avg_income: f64,
}

impl SummaryStatistics {
    pub fn count(&self, tier: OutreachTier) -> usize {
        match tier {
            OutreachTier::ReadyNow => self.ready_now,
            OutreachTier::HighPriority => self.high_priority,
            OutreachTier::NeedsImprovement => self.needs_improvement,
        }
    }

    /// Percentage of the roster that landed in `tier`.
    pub fn share(&self, tier: OutreachTier) -> f64 {
        if self.total_renters == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / self.total_renters as f64 * 100.0
    }
}

pub fn summarize(renters: &[ScoredRenter]) -> Result<SummaryStatistics, ReadinessError> {
    if renters.is_empty() {
        return Err(ReadinessError::EmptyInput);
    }

    let mut ready_now = 0;
    let mut high_priority = 0;
    let mut needs_improvement = 0;
    let mut credit_improvement = 0.0;
    let mut payment_reliability = 0.0;
    let mut savings = 0.0;
    let mut income = 0.0;

    for renter in renters {
        match renter.tier {
            OutreachTier::ReadyNow => ready_now += 1,
            OutreachTier::HighPriority => high_priority += 1,
            OutreachTier::NeedsImprovement => needs_improvement += 1,
        }

        credit_improvement += f64::from(renter.metrics.credit_improvement);
        payment_reliability += renter.record.payment_reliability_percent;
        savings += renter.record.savings;
        income += renter.record.income;
    }

    let total = renters.len() as f64;

    Ok(SummaryStatistics {
        total_renters: renters.len(),
        ready_now,
        high_priority,
        needs_improvement,
        avg_credit_improvement: credit_improvement / total,
        avg_payment_reliability: payment_reliability / total,
        avg_savings: savings / total,
        avg_income: income / total,
    })
}
