use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Bureau range every credit score on a record must fall within.
pub const CREDIT_SCORE_RANGE: RangeInclusive<i32> = 300..=850;

/// Financial profile of a single renter as supplied by the roster.
///
/// Records are treated as immutable for the duration of a scoring pass; every
/// derived figure is recomputed from these fields rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenterRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub credit_score_current: i32,
    pub credit_score_initial: i32,
    pub payment_reliability_percent: f64,
    /// Annual gross income. Must be strictly positive for any ratio to exist.
    pub income: f64,
    pub savings: f64,
    pub debts: f64,
    pub employment_years: f64,
    /// Monthly rent currently paid.
    pub current_rent: f64,
    pub max_affordable_home: f64,
    pub estimated_down_payment: f64,
}

impl RenterRecord {
    pub fn credit_improvement(&self) -> i32 {
        self.credit_score_current.saturating_sub(self.credit_score_initial)
    }

    pub fn derived_metrics(&self) -> Result<DerivedMetrics, ReadinessError> {
        DerivedMetrics::compute(self)
    }

    /// Checks the preconditions shared by every ratio computation.
    pub(crate) fn validate(&self) -> Result<(), ReadinessError> {
        let numeric_fields = [
            ("payment_reliability_percent", self.payment_reliability_percent),
            ("income", self.income),
            ("savings", self.savings),
            ("debts", self.debts),
            ("employment_years", self.employment_years),
            ("current_rent", self.current_rent),
            ("max_affordable_home", self.max_affordable_home),
            ("estimated_down_payment", self.estimated_down_payment),
        ];

        if let Some((field, value)) = numeric_fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ReadinessError::InvalidInput(format!(
                "{field} must be a finite number, got {value}"
            )));
        }

        let credit_scores = [
            ("credit_score_current", self.credit_score_current),
            ("credit_score_initial", self.credit_score_initial),
        ];
        if let Some((field, value)) = credit_scores
            .iter()
            .find(|(_, value)| !CREDIT_SCORE_RANGE.contains(value))
        {
            return Err(ReadinessError::InvalidInput(format!(
                "{field} must be between {} and {}, got {value}",
                CREDIT_SCORE_RANGE.start(),
                CREDIT_SCORE_RANGE.end()
            )));
        }

        if self.income <= 0.0 {
            return Err(ReadinessError::InvalidInput(format!(
                "income must be greater than zero, got {}",
                self.income
            )));
        }

        Ok(())
    }
}

/// Ratios and deltas computed once per record from its raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub credit_improvement: i32,
    pub debt_to_income_ratio: f64,
    pub savings_to_income_ratio: f64,
    pub rent_to_income_ratio: f64,
}

impl DerivedMetrics {
    pub fn compute(record: &RenterRecord) -> Result<Self, ReadinessError> {
        record.validate()?;
        let income = record.income;

        Ok(Self {
            credit_improvement: record.credit_improvement(),
            debt_to_income_ratio: record.debts / income,
            savings_to_income_ratio: record.savings / income,
            rent_to_income_ratio: (record.current_rent * 12.0) / income,
        })
    }
}

/// Four-level readiness label derived from the score at 70/85/90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessCategory {
    NeedsImprovement,
    Moderate,
    HighPriority,
    ReadyNow,
}

impl ReadinessCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::NeedsImprovement,
            Self::Moderate,
            Self::HighPriority,
            Self::ReadyNow,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Needs Improvement",
            Self::Moderate => "Moderate",
            Self::HighPriority => "High Priority",
            Self::ReadyNow => "Ready Now",
        }
    }
}

/// Three-level outreach label derived from the score at 80/90.
///
/// Deliberately distinct from [`ReadinessCategory`]: the category splits at
/// 85 while the outreach tier splits at 80, so a score of 82 is `Moderate`
/// but still `HighPriority` for outreach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutreachTier {
    NeedsImprovement,
    HighPriority,
    ReadyNow,
}

impl OutreachTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::ReadyNow, Self::HighPriority, Self::NeedsImprovement]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Needs Improvement",
            Self::HighPriority => "High Priority",
            Self::ReadyNow => "Ready Now",
        }
    }

    pub const fn range_label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Score <80",
            Self::HighPriority => "Score 80-89",
            Self::ReadyNow => "Score \u{2265}90",
        }
    }
}

/// Failures raised by the scoring core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadinessError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("cannot aggregate an empty set of renters")]
    EmptyInput,
}
