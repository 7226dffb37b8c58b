use super::domain::{
    DerivedMetrics, OutreachTier, ReadinessCategory, ReadinessError, RenterRecord,
};
use super::prospects::{self, ProspectSort};
use super::scoring::{ScoreBreakdown, ScoreEngine};
use super::summary::{self, SummaryStatistics};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A renter paired with everything the engine derived from their record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRenter {
    pub record: RenterRecord,
    pub metrics: DerivedMetrics,
    pub score: f64,
    pub category: ReadinessCategory,
    pub tier: OutreachTier,
    pub breakdown: ScoreBreakdown,
}

impl ScoredRenter {
    pub fn score(engine: &ScoreEngine, record: RenterRecord) -> Result<Self, ReadinessError> {
        let metrics = record.derived_metrics()?;
        let outcome = engine.evaluate(&record)?;

        Ok(Self {
            record,
            metrics,
            score: outcome.score,
            category: outcome.category,
            tier: outcome.tier,
            breakdown: outcome.breakdown,
        })
    }
}

/// What to do when a record in a batch cannot be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Fail the whole batch on the first invalid record.
    #[default]
    Abort,
    /// Log the invalid record, keep it out of the results and continue.
    SkipInvalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// Zero-based position in the submitted roster.
    pub index: usize,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("record {index} ({name}) could not be scored: {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        #[source]
        source: ReadinessError,
    },
    #[error(transparent)]
    Readiness(#[from] ReadinessError),
}

/// One scoring pass over a roster, in input order.
#[derive(Debug, Clone, Default)]
pub struct ReadinessAnalysis {
    renters: Vec<ScoredRenter>,
    rejected: Vec<RejectedRecord>,
}

impl ReadinessAnalysis {
    pub fn from_records(
        records: Vec<RenterRecord>,
        policy: BatchPolicy,
    ) -> Result<Self, AnalysisError> {
        let engine = ScoreEngine::new();
        let mut renters = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let name = record.name.clone();
            match ScoredRenter::score(&engine, record) {
                Ok(renter) => {
                    debug!(renter = %renter.record.name, score = renter.score, "scored renter");
                    renters.push(renter);
                }
                Err(source) => match policy {
                    BatchPolicy::Abort => {
                        return Err(AnalysisError::InvalidRecord {
                            index,
                            name,
                            source,
                        })
                    }
                    BatchPolicy::SkipInvalid => {
                        warn!(index, renter = %name, error = %source, "skipping unscorable renter");
                        rejected.push(RejectedRecord {
                            index,
                            name,
                            reason: source.to_string(),
                        });
                    }
                },
            }
        }

        info!(
            scored = renters.len(),
            rejected = rejected.len(),
            "readiness analysis complete"
        );

        Ok(Self { renters, rejected })
    }

    pub fn renters(&self) -> &[ScoredRenter] {
        &self.renters
    }

    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    pub fn summary(&self) -> Result<SummaryStatistics, ReadinessError> {
        summary::summarize(&self.renters)
    }

    pub fn top_prospects(&self, n: i64) -> Result<Vec<&ScoredRenter>, ReadinessError> {
        prospects::top_n(&self.renters, n)
    }

    pub fn filter_by_tier(&self, tier: OutreachTier) -> Vec<&ScoredRenter> {
        prospects::filter_by_tier(&self.renters, tier)
    }

    pub fn sorted_by(&self, sort: ProspectSort) -> Vec<&ScoredRenter> {
        prospects::sorted_by(&self.renters, sort)
    }

    /// Head count per four-way readiness category, including empty ones.
    pub fn category_distribution(&self) -> BTreeMap<ReadinessCategory, usize> {
        let mut distribution: BTreeMap<ReadinessCategory, usize> = ReadinessCategory::ordered()
            .into_iter()
            .map(|category| (category, 0))
            .collect();

        for renter in &self.renters {
            *distribution.entry(renter.category).or_default() += 1;
        }

        distribution
    }
}
