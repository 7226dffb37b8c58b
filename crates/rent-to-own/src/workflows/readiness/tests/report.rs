use super::common::*;
use crate::workflows::readiness::analysis::{AnalysisError, BatchPolicy, ReadinessAnalysis};
use crate::workflows::readiness::domain::{ReadinessCategory, ReadinessError};
use crate::workflows::readiness::report::{render_text, AnalysisReport};
use chrono::{Local, TimeZone};

fn fixed_date() -> chrono::DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("unambiguous local time")
}

#[test]
fn abort_policy_fails_on_first_invalid_record() {
    let mut broke = struggling_record();
    broke.name = "Ava Chen".to_string();
    broke.income = 0.0;

    let error = ReadinessAnalysis::from_records(
        vec![ready_record(), broke, nearly_ready_record()],
        BatchPolicy::Abort,
    )
    .expect_err("zero income aborts the batch");

    match error {
        AnalysisError::InvalidRecord { index, name, source } => {
            assert_eq!(index, 1);
            assert_eq!(name, "Ava Chen");
            assert!(matches!(source, ReadinessError::InvalidInput(_)));
        }
        other => panic!("expected invalid record, got {other:?}"),
    }
}

#[test]
fn skip_policy_records_rejections_and_keeps_scoring() {
    let mut broke = struggling_record();
    broke.name = "Ava Chen".to_string();
    broke.income = -5.0;

    let analysis = ReadinessAnalysis::from_records(
        vec![ready_record(), broke, nearly_ready_record()],
        BatchPolicy::SkipInvalid,
    )
    .expect("skip policy never fails on records");

    assert_eq!(analysis.renters().len(), 2);
    assert_eq!(analysis.rejected().len(), 1);
    assert_eq!(analysis.rejected()[0].index, 1);
    assert!(analysis.rejected()[0].reason.contains("income"));
}

#[test]
fn analysis_of_only_invalid_records_cannot_be_summarized() {
    let mut broke = ready_record();
    broke.income = 0.0;
    let analysis = ReadinessAnalysis::from_records(vec![broke], BatchPolicy::SkipInvalid)
        .expect("skip policy");

    assert_eq!(analysis.summary(), Err(ReadinessError::EmptyInput));
    assert!(AnalysisReport::build(&analysis, 5, false, fixed_date()).is_err());
}

#[test]
fn category_distribution_lists_every_category() {
    let analysis = analysis(vec![
        ready_record(),
        nearly_ready_record(),
        struggling_record(),
    ]);
    let distribution = analysis.category_distribution();

    assert_eq!(distribution.len(), 4);
    assert_eq!(distribution[&ReadinessCategory::ReadyNow], 1);
    assert_eq!(distribution[&ReadinessCategory::HighPriority], 0);
    assert_eq!(distribution[&ReadinessCategory::Moderate], 1);
    assert_eq!(distribution[&ReadinessCategory::NeedsImprovement], 1);
}

#[test]
fn report_collects_stats_prospects_and_messages() {
    let analysis = analysis(vec![
        struggling_record(),
        ready_record(),
        nearly_ready_record(),
    ]);

    let report = AnalysisReport::build(&analysis, 2, true, fixed_date()).expect("report builds");

    assert_eq!(report.summary_stats.total_renters, 3);
    assert_eq!(report.top_prospects.len(), 2);
    assert_eq!(report.top_prospects[0].name, "Maria Lopez");
    assert_eq!(report.top_prospects[0].recommendation, "Ready Now");
    assert_eq!(report.outreach_messages.len(), 3);

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["summary_stats"]["ready_now"], 1);
    assert_eq!(json["top_prospects"][1]["category"], "moderate");
    assert!(json.get("rejected_records").is_none());
}

#[test]
fn report_rejects_negative_prospect_counts() {
    let analysis = analysis(vec![ready_record()]);
    assert!(matches!(
        AnalysisReport::build(&analysis, -2, false, fixed_date()),
        Err(ReadinessError::InvalidInput(_))
    ));
}

#[test]
fn rendered_report_lists_tiers_and_prospects() {
    let analysis = analysis(vec![ready_record(), struggling_record()]);
    let report = AnalysisReport::build(&analysis, 5, false, fixed_date()).expect("report builds");

    let text = render_text(&report);

    assert!(text.contains("Generated: 2025-10-01 09:30:00"));
    assert!(text.contains("- Total Renters Analyzed: 2"));
    assert!(text.contains("- Ready Now (Score \u{2265}90): 1 (50.0%)"));
    assert!(text.contains("- High Priority (Score 80-89): 0 (0.0%)"));
    assert!(text.contains("- Needs Improvement (Score <80): 1 (50.0%)"));
    assert!(text.contains("- Average Credit Improvement: +10 points"));
    assert!(text.contains("- Average Savings: $25,000"));
    assert!(text.contains("Maria Lopez - Score: 98 (Ready Now)"));
    assert!(text.contains("  Max Home Price: $240,000"));
    assert!(!text.contains("SKIPPED RECORDS"));
}

#[test]
fn rendered_report_matches_display_and_lists_skipped_records() {
    let mut zero_income = named(struggling_record(), "Ava Chen");
    zero_income.income = 0.0;
    let analysis = ReadinessAnalysis::from_records(
        vec![ready_record(), zero_income],
        BatchPolicy::SkipInvalid,
    )
    .expect("invalid record is skipped");
    let report = AnalysisReport::build(&analysis, 5, false, fixed_date()).expect("report builds");

    let text = render_text(&report);

    assert_eq!(text, report.to_string());
    assert!(text.contains("SKIPPED RECORDS:"));
    assert!(text.contains("- #1 Ava Chen: invalid input: income must be greater than zero"));
}
