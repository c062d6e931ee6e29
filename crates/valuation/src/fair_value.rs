use carworth_model::{
    DepreciationResult, FairValueComparison, FairValueResult, PriceInputs, ValuationMode,
};
use carworth_tables::insurance_replacement;

use crate::ValuationConfig;

/// `(min, max)` band around a fair value.
pub fn fair_value_range(fair_value: f64, range: f64) -> (f64, f64) {
    (fair_value * (1.0 - range), fair_value * (1.0 + range))
}

/// Apply a depreciation ratio to the on-road price.
///
/// An expired policy is deducted at the replacement cost the buyer will
/// pay to renew it.
pub fn fair_value(
    on_road_price: f64,
    depreciation: f64,
    insurance_valid: bool,
    ex_showroom: f64,
    range: f64,
) -> FairValueResult {
    let base_fair_value = on_road_price * (1.0 - depreciation);
    let insurance_deduction = if insurance_valid {
        0.0
    } else {
        insurance_replacement(ex_showroom)
    };
    let fair_value = base_fair_value - insurance_deduction;
    let (fair_value_min, fair_value_max) = fair_value_range(fair_value, range);

    FairValueResult {
        depreciation_used: depreciation,
        base_fair_value,
        insurance_deduction,
        fair_value,
        fair_value_min,
        fair_value_max,
        range_percent: range,
    }
}

/// Fair value from the basic track, plus the advanced track when requested.
pub fn compare_fair_values(
    on_road_price: f64,
    depreciation: &DepreciationResult,
    prices: &PriceInputs,
    mode: ValuationMode,
    config: &ValuationConfig,
) -> FairValueComparison {
    let track = |ratio: f64| {
        fair_value(
            on_road_price,
            ratio,
            prices.insurance_valid,
            prices.ex_showroom,
            config.fair_value_range,
        )
    };

    let basic = track(depreciation.basic.capped);
    let advanced = match mode {
        ValuationMode::Advanced => Some(track(depreciation.advanced.capped)),
        ValuationMode::Basic => None,
    };
    let difference = advanced.map(|a| a.fair_value - basic.fair_value);

    FairValueComparison {
        basic,
        advanced,
        difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_value_valid_insurance() {
        let result = fair_value(1_000_000.0, 0.4, true, 800_000.0, 0.05);
        assert!((result.fair_value - 600_000.0).abs() < 1e-6);
        assert_eq!(result.insurance_deduction, 0.0);
        assert!((result.fair_value_min - 570_000.0).abs() < 1e-6);
        assert!((result.fair_value_max - 630_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_expired_insurance_deducts_tier() {
        let valid = fair_value(1_000_000.0, 0.4, true, 800_000.0, 0.05);
        let expired = fair_value(1_000_000.0, 0.4, false, 800_000.0, 0.05);
        assert_eq!(expired.insurance_deduction, 20_000.0);
        assert_eq!(valid.fair_value - expired.fair_value, 20_000.0);
        assert_eq!(expired.base_fair_value, valid.base_fair_value);
    }

    #[test]
    fn test_expired_insurance_four_tiers() {
        let deductions: Vec<f64> = [800_000.0, 1_200_000.0, 2_000_000.0, 3_000_000.0]
            .iter()
            .map(|&ex| fair_value(1_000_000.0, 0.4, false, ex, 0.05).insurance_deduction)
            .collect();
        assert_eq!(deductions, vec![20_000.0, 35_000.0, 50_000.0, 80_000.0]);
    }

    #[test]
    fn test_range() {
        let (min, max) = fair_value_range(200_000.0, 0.05);
        assert!((min - 190_000.0).abs() < 1e-6);
        assert!((max - 210_000.0).abs() < 1e-6);
    }
}
