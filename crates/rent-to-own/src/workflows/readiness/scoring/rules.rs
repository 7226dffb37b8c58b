use super::super::domain::{DerivedMetrics, RenterRecord};
use super::{ScoreComponent, ScoreComponentKind};

pub(crate) const CREDIT_TIER_CAP: f64 = 30.0;
pub(crate) const PAYMENT_RELIABILITY_CAP: f64 = 25.0;
pub(crate) const SAVINGS_ADEQUACY_CAP: f64 = 20.0;
pub(crate) const EMPLOYMENT_STABILITY_CAP: f64 = 10.0;
pub(crate) const DEBT_MANAGEMENT_CAP: f64 = 10.0;
pub(crate) const CREDIT_IMPROVEMENT_CAP: f64 = 5.0;

/// Assumed affordable home price as a multiple of annual income.
pub(crate) const HOME_PRICE_INCOME_MULTIPLIER: f64 = 2.5;

pub(crate) fn score_record(record: &RenterRecord, metrics: &DerivedMetrics) -> Vec<ScoreComponent> {
    vec![
        credit_tier(record.credit_score_current),
        payment_reliability(record.payment_reliability_percent),
        savings_adequacy(record.savings, record.income),
        employment_stability(record.employment_years),
        debt_management(metrics.debt_to_income_ratio),
        credit_improvement(metrics.credit_improvement),
    ]
}

fn credit_tier(credit_score: i32) -> ScoreComponent {
    let points = if credit_score >= 760 {
        30.0
    } else if credit_score >= 700 {
        25.0
    } else if credit_score >= 650 {
        20.0
    } else if credit_score >= 600 {
        15.0
    } else {
        10.0
    };

    ScoreComponent {
        kind: ScoreComponentKind::CreditTier,
        points,
        cap: CREDIT_TIER_CAP,
        notes: format!("current credit score {credit_score}"),
    }
}

fn payment_reliability(reliability_percent: f64) -> ScoreComponent {
    ScoreComponent {
        kind: ScoreComponentKind::PaymentReliability,
        points: (reliability_percent / 4.0).min(PAYMENT_RELIABILITY_CAP),
        cap: PAYMENT_RELIABILITY_CAP,
        notes: format!("{reliability_percent:.1}% of rent payments on time"),
    }
}

fn savings_adequacy(savings: f64, income: f64) -> ScoreComponent {
    let target_home_price = income * HOME_PRICE_INCOME_MULTIPLIER;
    let down_payment_ratio = savings / target_home_price;

    ScoreComponent {
        kind: ScoreComponentKind::SavingsAdequacy,
        points: (down_payment_ratio * 100.0).min(SAVINGS_ADEQUACY_CAP),
        cap: SAVINGS_ADEQUACY_CAP,
        notes: format!(
            "savings cover {:.1}% of a {:.0} home",
            down_payment_ratio * 100.0,
            target_home_price
        ),
    }
}

fn employment_stability(employment_years: f64) -> ScoreComponent {
    ScoreComponent {
        kind: ScoreComponentKind::EmploymentStability,
        points: (employment_years * 2.0).min(EMPLOYMENT_STABILITY_CAP),
        cap: EMPLOYMENT_STABILITY_CAP,
        notes: format!("{employment_years:.1} year(s) with current employer"),
    }
}

fn debt_management(debt_to_income: f64) -> ScoreComponent {
    let points = if debt_to_income < 0.10 {
        10.0
    } else if debt_to_income < 0.20 {
        7.0
    } else if debt_to_income < 0.30 {
        5.0
    } else {
        2.0
    };

    ScoreComponent {
        kind: ScoreComponentKind::DebtManagement,
        points,
        cap: DEBT_MANAGEMENT_CAP,
        notes: format!("debt-to-income ratio {debt_to_income:.2}"),
    }
}

// Negative when credit declined; only the final total is floored at zero.
fn credit_improvement(improvement: i32) -> ScoreComponent {
    ScoreComponent {
        kind: ScoreComponentKind::CreditImprovement,
        points: (f64::from(improvement) / 20.0).min(CREDIT_IMPROVEMENT_CAP),
        cap: CREDIT_IMPROVEMENT_CAP,
        notes: format!("credit score changed by {improvement:+} points"),
    }
}
