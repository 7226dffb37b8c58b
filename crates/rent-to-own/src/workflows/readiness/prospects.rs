use super::analysis::ScoredRenter;
use super::domain::{OutreachTier, ReadinessError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProspectSort {
    #[default]
    ReadinessScore,
    CreditScore,
    Savings,
}

/// Returns the `n` highest-scoring renters, best first.
///
/// Ties keep their input order. Asking for more renters than exist is not an
/// error; a negative `n` is.
pub fn top_n(renters: &[ScoredRenter], n: i64) -> Result<Vec<&ScoredRenter>, ReadinessError> {
    let limit = usize::try_from(n).map_err(|_| {
        ReadinessError::InvalidInput(format!("prospect count must not be negative, got {n}"))
    })?;

    let mut ranked = sorted_by(renters, ProspectSort::ReadinessScore);
    ranked.truncate(limit);
    Ok(ranked)
}

pub fn filter_by_tier(renters: &[ScoredRenter], tier: OutreachTier) -> Vec<&ScoredRenter> {
    renters.iter().filter(|renter| renter.tier == tier).collect()
}

/// Stable descending sort on the chosen key.
pub fn sorted_by(renters: &[ScoredRenter], sort: ProspectSort) -> Vec<&ScoredRenter> {
    let mut ranked: Vec<&ScoredRenter> = renters.iter().collect();
    ranked.sort_by(|left, right| compare(right, left, sort));
    ranked
}

fn compare(left: &ScoredRenter, right: &ScoredRenter, sort: ProspectSort) -> Ordering {
    match sort {
        ProspectSort::ReadinessScore => left.score.total_cmp(&right.score),
        ProspectSort::CreditScore => left
            .record
            .credit_score_current
            .cmp(&right.record.credit_score_current),
        ProspectSort::Savings => left.record.savings.total_cmp(&right.record.savings),
    }
}
