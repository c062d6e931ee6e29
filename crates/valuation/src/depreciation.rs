//! Depreciation model.
//!
//! Basic formula:
//!     life depreciation + ownership premium + mileage adjustment
//!
//! where life depreciation is `age / 15` (`age / 10` for diesel in NCR).
//!
//! The advanced track adds brand, transmission and condition adjustments on
//! top of the basic total. Both totals are capped independently.

use carworth_model::{
    Brand, CarProfile, ConditionAdjustments, DepreciationResult, DepreciationTrack, FuelType,
    MileageStatus, State,
};
use carworth_tables::{
    accident_adjustment, body_adjustment, brand_multiplier, life_years, ownership_premium,
    service_adjustment, transmission_adjustment, COMMERCIAL_USE_ADJUSTMENT,
    MILEAGE_HIGH_ADJUSTMENT, MILEAGE_HIGH_RATIO, MILEAGE_SLIGHTLY_HIGH_ADJUSTMENT,
    MILEAGE_SLIGHTLY_HIGH_RATIO, MILEAGE_VERY_LOW_RATIO, NEW_GEN_ADJUSTMENT,
};

use crate::ValuationConfig;

/// Returns `(depreciation, life_years)`.
pub fn life_depreciation(age: u32, fuel: FuelType, state: State) -> (f64, u32) {
    let life_years = life_years(fuel, state);
    (f64::from(age) / f64::from(life_years), life_years)
}

/// Compare actual km with `age × expected_annual_km` (one year minimum).
///
/// Returns `(adjustment, status, expected_km)`. Very low mileage is flagged
/// but not penalized.
pub fn mileage_adjustment(
    km: u32,
    age: u32,
    expected_annual_km: f64,
) -> (f64, MileageStatus, f64) {
    let expected_km = f64::from(age.max(1)) * expected_annual_km;
    let km = f64::from(km);

    let (adjustment, status) = if km > expected_km * MILEAGE_HIGH_RATIO {
        (MILEAGE_HIGH_ADJUSTMENT, MileageStatus::High)
    } else if km > expected_km * MILEAGE_SLIGHTLY_HIGH_RATIO {
        (MILEAGE_SLIGHTLY_HIGH_ADJUSTMENT, MileageStatus::SlightlyHigh)
    } else if km < expected_km * MILEAGE_VERY_LOW_RATIO {
        (0.0, MileageStatus::VeryLow)
    } else {
        (0.0, MileageStatus::Normal)
    };

    (adjustment, status, expected_km)
}

/// Scales life depreciation by the brand multiplier. Returns
/// `(adjustment, multiplier)`.
pub fn brand_adjustment(life_depreciation: f64, brand: Brand) -> (f64, f64) {
    let multiplier = brand_multiplier(brand);
    (life_depreciation * (multiplier - 1.0), multiplier)
}

pub fn condition_adjustments(profile: &CarProfile) -> ConditionAdjustments {
    let body = body_adjustment(profile.body_condition);
    let accident = accident_adjustment(profile.accident_history);
    let service = service_adjustment(profile.service_history);
    let commercial = if profile.commercial_use {
        COMMERCIAL_USE_ADJUSTMENT
    } else {
        0.0
    };
    let new_gen = if profile.new_gen_available {
        NEW_GEN_ADJUSTMENT
    } else {
        0.0
    };

    ConditionAdjustments {
        body,
        accident,
        service,
        commercial,
        new_gen,
        total: body + accident + service + commercial + new_gen,
    }
}

/// Clamp a raw total into `[0, max]`. A negative or NaN `max` acts as 0.
pub fn cap(raw: f64, max: f64) -> DepreciationTrack {
    DepreciationTrack {
        raw,
        capped: raw.max(0.0).min(max.max(0.0)),
        is_capped: raw > max,
    }
}

/// Compute both depreciation tracks for a car.
pub fn depreciation(profile: &CarProfile, config: &ValuationConfig) -> DepreciationResult {
    let age = profile.age(config.reference_year);

    let (life_depreciation, life_years) =
        life_depreciation(age, profile.fuel_type, profile.state);
    let ownership_premium = ownership_premium(profile.owner);
    let (mileage_adjustment, mileage_status, expected_km) =
        mileage_adjustment(profile.km, age, config.expected_annual_km);

    let basic_raw = life_depreciation + ownership_premium + mileage_adjustment;
    let basic = cap(basic_raw, config.max_depreciation);

    let (brand_adjustment, brand_multiplier) = brand_adjustment(life_depreciation, profile.brand);
    let transmission_adjustment = transmission_adjustment(profile.transmission);
    let condition = condition_adjustments(profile);

    let advanced_adjustments_total = brand_adjustment + transmission_adjustment + condition.total;
    let advanced = cap(basic_raw + advanced_adjustments_total, config.max_depreciation);

    tracing::debug!(
        age,
        life_years,
        basic = basic.capped,
        advanced = advanced.capped,
        mileage = mileage_status.label(),
        "Computed depreciation"
    );

    DepreciationResult {
        age,
        life_years,
        expected_km,
        life_depreciation,
        ownership_premium,
        mileage_adjustment,
        mileage_status,
        basic,
        brand_multiplier,
        brand_adjustment,
        transmission_adjustment,
        condition,
        advanced_adjustments_total,
        advanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carworth_model::{AccidentHistory, BodyCondition, OwnerCount, ServiceHistory, Transmission};

    fn config() -> ValuationConfig {
        ValuationConfig::for_year(2025)
    }

    #[test]
    fn test_life_depreciation_standard() {
        let (dep, years) = life_depreciation(5, FuelType::Petrol, State::Maharashtra);
        assert_eq!(years, 15);
        assert_eq!(dep, 5.0 / 15.0);
    }

    #[test]
    fn test_life_depreciation_diesel_ncr() {
        let (dep, years) = life_depreciation(5, FuelType::Diesel, State::Delhi);
        assert_eq!(years, 10);
        assert_eq!(dep, 0.5);
    }

    #[test]
    fn test_mileage_buckets() {
        assert_eq!(mileage_adjustment(45_000, 3, 15_000.0).1, MileageStatus::Normal);
        assert_eq!(mileage_adjustment(70_000, 3, 15_000.0).0, 0.05);
        assert_eq!(mileage_adjustment(50_000, 3, 15_000.0).1, MileageStatus::SlightlyHigh);
        let (adj, status, _) = mileage_adjustment(10_000, 5, 15_000.0);
        assert_eq!((adj, status), (0.0, MileageStatus::VeryLow));
    }

    #[test]
    fn test_mileage_threshold_exclusive() {
        // exactly 130% is not "high"
        assert_eq!(mileage_adjustment(19_500, 1, 15_000.0).1, MileageStatus::SlightlyHigh);
        // exactly 50% is not "very low"
        assert_eq!(mileage_adjustment(7_500, 1, 15_000.0).1, MileageStatus::Normal);
    }

    #[test]
    fn test_new_car_expects_one_year() {
        let (_, status, expected) = mileage_adjustment(20_000, 0, 15_000.0);
        assert_eq!(expected, 15_000.0);
        assert_eq!(status, MileageStatus::High);
    }

    #[test]
    fn test_delhi_diesel_five_years() {
        let car = CarProfile::new(2020, FuelType::Diesel, State::Delhi, 75_000);
        let result = depreciation(&car, &config());

        assert_eq!(result.mileage_status, MileageStatus::Normal);
        assert_eq!(result.mileage_adjustment, 0.0);
        assert_eq!(result.life_depreciation, 0.5);
        assert_eq!(result.ownership_premium, 0.10);
        assert!((result.basic.capped - 0.60).abs() < 1e-12);
        assert!(!result.basic.is_capped);
    }

    #[test]
    fn test_everything_bad_is_capped() {
        let car = CarProfile::new(2010, FuelType::Petrol, State::Delhi, 200_000)
            .with_owner(OwnerCount::FourthPlus)
            .with_brand(Brand::Bmw)
            .with_transmission(Transmission::Dct)
            .with_condition(BodyCondition::Poor, AccidentHistory::Major, ServiceHistory::Unknown);
        let car = CarProfile {
            commercial_use: true,
            new_gen_available: true,
            ..car
        };

        let result = depreciation(&car, &config());
        assert_eq!(result.advanced.capped, 0.85);
        assert!(result.advanced.is_capped);
        assert!(result.basic.is_capped);
        assert!(result.advanced.raw > result.basic.raw);
    }

    #[test]
    fn test_brand_adjustment_scales_life() {
        let (adj, mult) = brand_adjustment(0.4, Brand::Toyota);
        assert_eq!(mult, 0.85);
        assert!((adj + 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_condition_total() {
        let car = CarProfile::new(2020, FuelType::Petrol, State::Goa, 60_000).with_condition(
            BodyCondition::Excellent,
            AccidentHistory::Minor,
            ServiceHistory::FullAuthorized,
        );
        let condition = condition_adjustments(&car);
        assert!((condition.total - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_cap_with_negative_max() {
        let track = cap(0.4, -0.1);
        assert_eq!(track.capped, 0.0);
        assert!(track.is_capped);
        assert_eq!(cap(0.4, f64::NAN).capped, 0.0);
    }

    #[test]
    fn test_negative_max_in_config() {
        let config = ValuationConfig {
            max_depreciation: -0.1,
            ..config()
        };
        let car = CarProfile::new(2020, FuelType::Petrol, State::Goa, 60_000);
        let result = depreciation(&car, &config);
        assert_eq!(result.basic.capped, 0.0);
        assert_eq!(result.advanced.capped, 0.0);
    }

    #[test]
    fn test_cap_floor() {
        let track = cap(-0.1, 0.85);
        assert_eq!(track.capped, 0.0);
        assert!(!track.is_capped);
    }
}
