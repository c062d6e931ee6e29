//! Used-car valuation pipeline.
//!
//! Reconstructs the on-road price a car cost when new, depreciates it,
//! and compares the resulting fair value with the asking price to produce
//! a verdict, a negotiation target and situational warnings.

use carworth_explain::generate_warnings;
use carworth_model::{
    CarProfile, DepreciationResult, FairValueComparison, OnRoadPriceResult, PriceInputs,
    ValuationMode, VerdictResult, Warning,
};
use carworth_tables::{EXPECTED_ANNUAL_KM, FAIR_VALUE_RANGE, MAX_DEPRECIATION};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

mod compare;
mod depreciation;
mod fair_value;
mod on_road;
mod verdict;

pub use compare::{
    compare_deals, BetterDeal, DealComparison, ValueGap, DEPRECIATION_INSIGHT, MILEAGE_INSIGHT_KM,
};
pub use depreciation::{
    brand_adjustment, cap, condition_adjustments, depreciation, life_depreciation,
    mileage_adjustment,
};
pub use fair_value::{compare_fair_values, fair_value, fair_value_range};
pub use on_road::{on_road_price, tcs};
pub use verdict::{classify, difference_percent, negotiation_target, verdict};

/// Tunables for a valuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Year ages are measured against
    pub reference_year: i32,
    /// Upper bound for both depreciation tracks
    pub max_depreciation: f64,
    /// Normal usage per year
    pub expected_annual_km: f64,
    /// Half-width of the fair value band
    pub fair_value_range: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            reference_year: chrono::Local::now().year(),
            max_depreciation: MAX_DEPRECIATION,
            expected_annual_km: EXPECTED_ANNUAL_KM,
            fair_value_range: FAIR_VALUE_RANGE,
        }
    }
}

impl ValuationConfig {
    /// Defaults with a pinned reference year.
    pub fn for_year(reference_year: i32) -> Self {
        Self {
            reference_year,
            ..Self::default()
        }
    }
}

/// Every intermediate of one valuation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub profile: CarProfile,
    pub prices: PriceInputs,
    pub mode: ValuationMode,
    pub on_road: OnRoadPriceResult,
    pub depreciation: DepreciationResult,
    pub fair_values: FairValueComparison,
    pub verdict: VerdictResult,
    pub warnings: Vec<Warning>,
}

impl Valuation {
    /// The fair value the verdict was based on.
    pub fn fair_value(&self) -> f64 {
        self.fair_values.selected().fair_value
    }

    pub fn depreciation_used(&self) -> f64 {
        self.fair_values.selected().depreciation_used
    }
}

/// Run the full pipeline.
pub fn evaluate(
    profile: &CarProfile,
    prices: &PriceInputs,
    mode: ValuationMode,
    config: &ValuationConfig,
) -> Valuation {
    let on_road = on_road_price(profile, prices);
    let depreciation = depreciation(profile, config);
    let fair_values = compare_fair_values(
        on_road.on_road_price,
        &depreciation,
        prices,
        mode,
        config,
    );
    let verdict = verdict(prices.asking_price, fair_values.selected().fair_value);
    let warnings = generate_warnings(profile, depreciation.age, depreciation.mileage_status);

    tracing::debug!(
        state = profile.state.label(),
        fuel = profile.fuel_type.label(),
        on_road = on_road.on_road_price,
        fair_value = fair_values.selected().fair_value,
        verdict = verdict.verdict.label(),
        warnings = warnings.len(),
        "Evaluated car"
    );

    Valuation {
        profile: profile.clone(),
        prices: *prices,
        mode,
        on_road,
        depreciation,
        fair_values,
        verdict,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carworth_model::{
        AccidentHistory, BodyCondition, Brand, FuelType, ServiceHistory, State, Verdict,
    };
    use pretty_assertions::assert_eq;

    fn car(year: i32, km: u32, asking: f64) -> Valuation {
        let profile = CarProfile::new(year, FuelType::Petrol, State::Karnataka, km);
        let prices = PriceInputs::new(800_000.0, asking);
        evaluate(&profile, &prices, ValuationMode::Advanced, &ValuationConfig::for_year(2025))
    }

    #[test]
    fn test_config_deserializes_partial() {
        let config: ValuationConfig =
            serde_json::from_str(r#"{"reference_year": 2024, "max_depreciation": 0.8}"#).unwrap();
        assert_eq!(config.reference_year, 2024);
        assert_eq!(config.max_depreciation, 0.8);
        assert_eq!(config.expected_annual_km, 15_000.0);
        assert_eq!(config.fair_value_range, 0.05);
    }

    #[test]
    fn test_negative_cap_from_config_does_not_panic() {
        let config: ValuationConfig =
            serde_json::from_str(r#"{"reference_year": 2025, "max_depreciation": -0.1}"#).unwrap();
        let profile = CarProfile::new(2020, FuelType::Petrol, State::Goa, 60_000);
        let prices = PriceInputs::new(800_000.0, 600_000.0);
        let result = evaluate(&profile, &prices, ValuationMode::Advanced, &config);
        assert_eq!(result.depreciation.advanced.capped, 0.0);
        assert_eq!(result.fair_value(), result.on_road.on_road_price);
    }

    #[test]
    fn test_basic_mode_has_no_advanced() {
        let profile = CarProfile::new(2021, FuelType::Diesel, State::Kerala, 60_000);
        let prices = PriceInputs::new(1_200_000.0, 900_000.0);
        let result = evaluate(&profile, &prices, ValuationMode::Basic, &ValuationConfig::for_year(2025));
        assert!(result.fair_values.advanced.is_none());
        assert!(result.fair_values.difference.is_none());
        assert_eq!(result.fair_value(), result.fair_values.basic.fair_value);
    }

    #[test]
    fn test_verdict_uses_advanced_value() {
        let result = car(2021, 60_000, 500_000.0);
        let advanced = result.fair_values.advanced.unwrap();
        assert_eq!(result.fair_value(), advanced.fair_value);
        assert_eq!(
            result.verdict.difference_amount,
            500_000.0 - advanced.fair_value
        );
    }

    #[test]
    fn test_compare_picks_larger_gap() {
        let cheap = car(2021, 50_000, 300_000.0);
        let pricey = car(2021, 50_000, 900_000.0);
        let comparison = compare_deals(&cheap, &pricey);
        assert_eq!(comparison.better, BetterDeal::First);
        assert!(comparison.first.amount > 0.0);
        assert!(comparison.second.amount < 0.0);
        assert_eq!(cheap.verdict.verdict, Verdict::GreatDeal);
    }

    #[test]
    fn test_compare_identical_is_tie() {
        let a = car(2021, 50_000, 600_000.0);
        let comparison = compare_deals(&a, &a.clone());
        assert_eq!(comparison.better, BetterDeal::Tie);
        assert!(comparison.insights.is_empty());
    }

    #[test]
    fn test_compare_insights() {
        let newer = car(2023, 20_000, 600_000.0);
        let older = car(2018, 90_000, 400_000.0);
        let comparison = compare_deals(&newer, &older);
        assert_eq!(
            comparison.insights,
            vec![
                "Car 1 is newer (2023 vs 2018)".to_string(),
                "Car 1 has lower mileage (20,000 vs 90,000 km)".to_string(),
                format!(
                    "Car 1 has less depreciation ({} vs {})",
                    carworth_explain::format_percentage(newer.depreciation.basic.capped),
                    carworth_explain::format_percentage(older.depreciation.basic.capped)
                ),
            ]
        );
    }

    #[test]
    fn test_depreciation_insight_uses_basic_track() {
        let plain = car(2021, 50_000, 600_000.0);
        let profile = plain
            .profile
            .clone()
            .with_brand(Brand::Bmw)
            .with_condition(BodyCondition::Poor, AccidentHistory::Major, ServiceHistory::Unknown);
        let rough = evaluate(
            &profile,
            &plain.prices,
            ValuationMode::Advanced,
            &ValuationConfig::for_year(2025),
        );
        assert_eq!(rough.depreciation.basic.capped, plain.depreciation.basic.capped);
        assert!((rough.depreciation_used() - plain.depreciation_used()).abs() > DEPRECIATION_INSIGHT);
        assert!(compare_deals(&plain, &rough).insights.is_empty());
    }

    #[test]
    fn test_small_gaps_not_reported() {
        let a = car(2021, 50_000, 600_000.0);
        let b = car(2021, 59_000, 600_000.0);
        assert!(compare_deals(&a, &b).insights.is_empty());
    }
}
