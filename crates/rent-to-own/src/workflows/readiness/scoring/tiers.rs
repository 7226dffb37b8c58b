use super::super::domain::{OutreachTier, ReadinessCategory};

/// Maps a score onto the four readiness categories.
///
/// Intervals are left-inclusive: `[0,70)`, `[70,85)`, `[85,90)`, `[90,100]`.
/// Scores outside `[0,100]` fall into the nearest end bucket.
pub fn categorize(score: f64) -> ReadinessCategory {
    if score >= 90.0 {
        ReadinessCategory::ReadyNow
    } else if score >= 85.0 {
        ReadinessCategory::HighPriority
    } else if score >= 70.0 {
        ReadinessCategory::Moderate
    } else {
        ReadinessCategory::NeedsImprovement
    }
}

/// Maps a score onto the three outreach tiers used for counts and messaging.
///
/// Splits at 90 and 80. This does not line up with [`categorize`], which
/// splits its high-priority band at 85; both boundary sets are kept as-is.
pub fn compute_outreach_tier(score: f64) -> OutreachTier {
    if score >= 90.0 {
        OutreachTier::ReadyNow
    } else if score >= 80.0 {
        OutreachTier::HighPriority
    } else {
        OutreachTier::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorize_boundaries_are_left_inclusive() {
        assert_eq!(categorize(0.0), ReadinessCategory::NeedsImprovement);
        assert_eq!(categorize(69.99), ReadinessCategory::NeedsImprovement);
        assert_eq!(categorize(70.0), ReadinessCategory::Moderate);
        assert_eq!(categorize(84.99), ReadinessCategory::Moderate);
        assert_eq!(categorize(85.0), ReadinessCategory::HighPriority);
        assert_eq!(categorize(89.99), ReadinessCategory::HighPriority);
        assert_eq!(categorize(90.0), ReadinessCategory::ReadyNow);
        assert_eq!(categorize(100.0), ReadinessCategory::ReadyNow);
    }

    #[test]
    fn outreach_tier_boundaries_are_left_inclusive() {
        assert_eq!(compute_outreach_tier(0.0), OutreachTier::NeedsImprovement);
        assert_eq!(compute_outreach_tier(79.99), OutreachTier::NeedsImprovement);
        assert_eq!(compute_outreach_tier(80.0), OutreachTier::HighPriority);
        assert_eq!(compute_outreach_tier(89.99), OutreachTier::HighPriority);
        assert_eq!(compute_outreach_tier(90.0), OutreachTier::ReadyNow);
        assert_eq!(compute_outreach_tier(100.0), OutreachTier::ReadyNow);
    }

    #[test]
    fn category_and_tier_diverge_between_eighty_and_eighty_five() {
        for score in [80.0, 82.5, 84.99] {
            assert_eq!(categorize(score), ReadinessCategory::Moderate);
            assert_eq!(compute_outreach_tier(score), OutreachTier::HighPriority);
        }
    }

    #[test]
    fn every_score_in_range_maps_to_exactly_one_bucket() {
        let mut previous_category = ReadinessCategory::NeedsImprovement;
        let mut previous_tier = OutreachTier::NeedsImprovement;

        for step in 0..=10_000 {
            let score = f64::from(step) / 100.0;
            let category = categorize(score);
            let tier = compute_outreach_tier(score);

            assert!(category >= previous_category, "category regressed at {score}");
            assert!(tier >= previous_tier, "tier regressed at {score}");
            previous_category = category;
            previous_tier = tier;
        }

        assert_eq!(previous_category, ReadinessCategory::ReadyNow);
        assert_eq!(previous_tier, OutreachTier::ReadyNow);
    }
}
