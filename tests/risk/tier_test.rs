#[cfg(test)]
mod tests {
    use heart_risk::{RiskAssessment, RiskTier};
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_are_closed_below() {
        assert_eq!(RiskTier::from_score(70.0), RiskTier::High);
        assert_eq!(RiskTier::from_score(69.999), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(30.0), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(29.999), RiskTier::Low);
    }

    #[test]
    fn test_headlines() {
        assert_eq!(RiskTier::High.headline(), "HIGH RISK DETECTED:");
        assert_eq!(RiskTier::Moderate.headline(), "MODERATE RISK:");
        assert_eq!(RiskTier::Low.headline(), "LOW RISK");
    }

    #[test]
    fn test_probability_extremes() {
        let zero = RiskAssessment::from_probability(0.0).unwrap();
        assert_eq!(zero.tier, RiskTier::Low);
        assert_eq!(zero.percent_label(), "0%");

        let one = RiskAssessment::from_probability(1.0).unwrap();
        assert_eq!(one.tier, RiskTier::High);
        assert_eq!(one.percent_label(), "100%");
    }

    proptest! {
        #[test]
        fn prop_tier_is_monotonic_in_probability(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = RiskAssessment::from_probability(lo).unwrap();
            let hi = RiskAssessment::from_probability(hi).unwrap();
            prop_assert!(lo.risk_score <= hi.risk_score);
            prop_assert!(lo.tier <= hi.tier);
        }

        #[test]
        fn prop_score_is_a_percentage(p in 0.0f64..=1.0) {
            let assessment = RiskAssessment::from_probability(p).unwrap();
            prop_assert!((0.0..=100.0).contains(&assessment.risk_score));
            prop_assert_eq!(assessment.tier, RiskTier::from_score(assessment.risk_score));
        }
    }
}
