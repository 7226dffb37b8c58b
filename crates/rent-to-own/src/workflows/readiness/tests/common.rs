use axum::response::Response;
use serde_json::Value;

use crate::workflows::readiness::analysis::{BatchPolicy, ReadinessAnalysis, ScoredRenter};
use crate::workflows::readiness::domain::RenterRecord;
use crate::workflows::readiness::scoring::ScoreEngine;

/// Strong candidate scoring 98: credit 30, reliability 25, savings 20,
/// employment 10, debt 10, improvement 3.
pub(super) fn ready_record() -> RenterRecord {
    RenterRecord {
        name: "Maria Lopez".to_string(),
        email: "maria@example.com".to_string(),
        phone: "555-0101".to_string(),
        credit_score_current: 760,
        credit_score_initial: 700,
        payment_reliability_percent: 100.0,
        income: 80_000.0,
        savings: 50_000.0,
        debts: 5_000.0,
        employment_years: 5.0,
        current_rent: 1_450.0,
        max_affordable_home: 240_000.0,
        estimated_down_payment: 12_000.0,
    }
}

/// Struggling renter scoring 20: credit 10, reliability 10, savings 0,
/// employment 0, debt 2, improvement -2.
pub(super) fn struggling_record() -> RenterRecord {
    RenterRecord {
        name: "Jordan Kim".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "555-0103".to_string(),
        credit_score_current: 580,
        credit_score_initial: 620,
        payment_reliability_percent: 40.0,
        income: 40_000.0,
        savings: 0.0,
        debts: 20_000.0,
        employment_years: 0.0,
        current_rent: 1_100.0,
        max_affordable_home: 110_000.0,
        estimated_down_payment: 3_850.0,
    }
}

/// Scores 84: credit 25, reliability 24, savings 10, employment 10,
/// debt 10, improvement 5. Moderate category but high-priority tier.
pub(super) fn nearly_ready_record() -> RenterRecord {
    RenterRecord {
        name: "Dev Patel".to_string(),
        email: "dev@example.com".to_string(),
        phone: "555-0102".to_string(),
        credit_score_current: 720,
        credit_score_initial: 610,
        payment_reliability_percent: 96.0,
        income: 60_000.0,
        savings: 15_000.0,
        debts: 3_000.0,
        employment_years: 6.0,
        current_rent: 1_250.0,
        max_affordable_home: 285_000.0,
        estimated_down_payment: 10_000.0,
    }
}

pub(super) fn named(mut record: RenterRecord, name: &str) -> RenterRecord {
    record.name = name.to_string();
    record
}

pub(super) fn scored(record: RenterRecord) -> ScoredRenter {
    ScoredRenter::score(&ScoreEngine::new(), record).expect("record scores")
}

pub(super) fn analysis(records: Vec<RenterRecord>) -> ReadinessAnalysis {
    ReadinessAnalysis::from_records(records, BatchPolicy::Abort).expect("analysis builds")
}

pub(super) const ROSTER_HEADER: &str = "name,email,phone,credit_score_current,credit_score_initial,payment_reliability_percent,income,savings,debts,employment_years,current_rent,max_affordable_home,estimated_down_payment";

pub(super) fn roster_csv(rows: &[&str]) -> String {
    let mut body = String::from(ROSTER_HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    body
}

pub(super) const READY_ROW: &str =
    "Maria Lopez,maria@example.com,555-0101,760,700,100,80000,50000,5000,5,1450,240000,12000";
pub(super) const STRUGGLING_ROW: &str =
    "Jordan Kim,jordan@example.com,555-0103,580,620,40,40000,0,20000,0,1100,110000,3850";
pub(super) const ZERO_INCOME_ROW: &str =
    "Ava Chen,ava@example.com,555-0104,700,690,90,0,1000,0,1,900,100000,5000";

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
