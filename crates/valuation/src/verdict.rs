//! Asking price vs fair value.

use carworth_model::{Verdict, VerdictResult};

const GREAT_DEAL_MAX: f64 = -0.10;
const GOOD_DEAL_MAX: f64 = 0.0;
const FAIR_PRICE_MAX: f64 = 0.07;
const SLIGHTLY_OVERPRICED_MAX: f64 = 0.15;

/// Relative difference of the asking price over fair value. Zero when the
/// fair value is zero.
pub fn difference_percent(asking_price: f64, fair_value: f64) -> f64 {
    if fair_value == 0.0 {
        0.0
    } else {
        (asking_price - fair_value) / fair_value
    }
}

/// Bucket a relative difference. Upper bounds are inclusive.
pub fn classify(difference: f64) -> Verdict {
    if difference <= GREAT_DEAL_MAX {
        Verdict::GreatDeal
    } else if difference <= GOOD_DEAL_MAX {
        Verdict::GoodDeal
    } else if difference <= FAIR_PRICE_MAX {
        Verdict::FairPrice
    } else if difference <= SLIGHTLY_OVERPRICED_MAX {
        Verdict::SlightlyOverpriced
    } else {
        Verdict::Overpriced
    }
}

/// Price to open negotiations at.
pub fn negotiation_target(verdict: Verdict, fair_value: f64) -> f64 {
    match verdict {
        Verdict::Overpriced | Verdict::SlightlyOverpriced => fair_value,
        Verdict::FairPrice => fair_value * 0.97,
        Verdict::GoodDeal | Verdict::GreatDeal => fair_value * 0.95,
    }
}

pub fn verdict(asking_price: f64, fair_value: f64) -> VerdictResult {
    let difference_percent = difference_percent(asking_price, fair_value);
    let verdict = classify(difference_percent);

    tracing::debug!(
        asking_price,
        fair_value,
        difference_percent,
        verdict = verdict.label(),
        "Classified deal"
    );

    VerdictResult {
        verdict,
        severity: verdict.severity(),
        difference_percent,
        difference_amount: asking_price - fair_value,
        negotiation_target: negotiation_target(verdict, fair_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carworth_model::VerdictSeverity;

    #[test]
    fn test_thresholds() {
        let fair = 1_000_000.0;
        assert_eq!(verdict(850_000.0, fair).verdict, Verdict::GreatDeal);
        assert_eq!(verdict(900_000.0, fair).verdict, Verdict::GreatDeal);
        assert_eq!(verdict(950_000.0, fair).verdict, Verdict::GoodDeal);
        assert_eq!(verdict(1_000_000.0, fair).verdict, Verdict::GoodDeal);
        assert_eq!(verdict(1_050_000.0, fair).verdict, Verdict::FairPrice);
        assert_eq!(verdict(1_150_000.0, fair).verdict, Verdict::SlightlyOverpriced);
        assert_eq!(verdict(1_200_000.0, fair).verdict, Verdict::Overpriced);
    }

    #[test]
    fn test_fair_price_boundary_inclusive() {
        assert_eq!(verdict(1_070_000.0, 1_000_000.0).verdict, Verdict::FairPrice);
        assert_eq!(
            verdict(1_070_100.0, 1_000_000.0).verdict,
            Verdict::SlightlyOverpriced
        );
    }

    #[test]
    fn test_negotiation_targets() {
        let fair = 1_000_000.0;
        assert_eq!(verdict(1_200_000.0, fair).negotiation_target, fair);
        assert_eq!(verdict(1_050_000.0, fair).negotiation_target, 970_000.0);
        assert_eq!(verdict(800_000.0, fair).negotiation_target, 950_000.0);
    }

    #[test]
    fn test_zero_fair_value() {
        let result = verdict(500_000.0, 0.0);
        assert_eq!(result.difference_percent, 0.0);
        assert_eq!(result.verdict, Verdict::GoodDeal);
        assert_eq!(result.severity, VerdictSeverity::Success);
    }
}
