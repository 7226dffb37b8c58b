use super::super::analysis::ScoredRenter;
use super::super::domain::{OutreachTier, ReadinessCategory};
use serde::Serialize;

/// Contact and headline financials for a ranked prospect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProspectView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub readiness_score: f64,
    pub category: ReadinessCategory,
    pub recommendation: &'static str,
    pub tier: OutreachTier,
    pub credit_score_current: i32,
    pub savings: f64,
    pub income: f64,
    pub max_affordable_home: f64,
}

impl ProspectView {
    pub fn from_renter(renter: &ScoredRenter) -> Self {
        let record = &renter.record;
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            readiness_score: renter.score,
            category: renter.category,
            recommendation: renter.category.label(),
            tier: renter.tier,
            credit_score_current: record.credit_score_current,
            savings: record.savings,
            income: record.income,
            max_affordable_home: record.max_affordable_home,
        }
    }
}
