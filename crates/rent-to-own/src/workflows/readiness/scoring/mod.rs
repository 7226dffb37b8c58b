mod rules;
mod tiers;

pub use tiers::{categorize, compute_outreach_tier};

use super::domain::{OutreachTier, ReadinessCategory, ReadinessError, RenterRecord};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Stateless engine applying the fixed readiness rubric to a renter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes the bounded 0-100 readiness score for a record.
    ///
    /// Fails with [`ReadinessError::InvalidInput`] when income is not strictly
    /// positive, a numeric field is not finite, or a credit score falls outside
    /// the 300-850 bureau range.
    pub fn compute_readiness_score(&self, record: &RenterRecord) -> Result<f64, ReadinessError> {
        Ok(self.breakdown(record)?.total)
    }

    /// Itemizes the six rubric components behind a score.
    pub fn breakdown(&self, record: &RenterRecord) -> Result<ScoreBreakdown, ReadinessError> {
        let metrics = record.derived_metrics()?;
        let components = rules::score_record(record, &metrics);
        let raw: f64 = components.iter().map(|component| component.points).sum();

        Ok(ScoreBreakdown {
            total: raw.clamp(MIN_SCORE, MAX_SCORE),
            components,
        })
    }

    pub fn evaluate(&self, record: &RenterRecord) -> Result<ReadinessOutcome, ReadinessError> {
        let breakdown = self.breakdown(record)?;
        let score = breakdown.total;

        Ok(ReadinessOutcome {
            score,
            category: categorize(score),
            tier: compute_outreach_tier(score),
            breakdown,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponentKind {
    CreditTier,
    PaymentReliability,
    SavingsAdequacy,
    EmploymentStability,
    DebtManagement,
    CreditImprovement,
}

impl ScoreComponentKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditTier => "Credit tier",
            Self::PaymentReliability => "Payment reliability",
            Self::SavingsAdequacy => "Savings adequacy",
            Self::EmploymentStability => "Employment stability",
            Self::DebtManagement => "Debt management",
            Self::CreditImprovement => "Credit improvement",
        }
    }
}

/// Discrete contribution to a readiness score, kept for transparent reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ScoreComponentKind,
    pub points: f64,
    pub cap: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    /// Sum of component points clamped to `[0, 100]`.
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn points_for(&self, kind: ScoreComponentKind) -> Option<f64> {
        self.components
            .iter()
            .find(|component| component.kind == kind)
            .map(|component| component.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessOutcome {
    pub score: f64,
    pub category: ReadinessCategory,
    pub tier: OutreachTier,
    pub breakdown: ScoreBreakdown,
}
