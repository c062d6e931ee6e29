use carworth_model::{
    CarProfile, FuelType, MileageStatus, OwnerCount, PriceInputs, State, ValuationMode, Verdict,
};
use carworth_valuation::{evaluate, verdict, Valuation, ValuationConfig};
use pretty_assertions::assert_eq;

const YEAR: i32 = 2025;

fn run(profile: &CarProfile, prices: &PriceInputs) -> Valuation {
    evaluate(
        profile,
        prices,
        ValuationMode::Advanced,
        &ValuationConfig::for_year(YEAR),
    )
}

fn sample() -> (CarProfile, PriceInputs) {
    (
        CarProfile::new(YEAR - 4, FuelType::Petrol, State::TamilNadu, 55_000),
        PriceInputs::new(900_000.0, 600_000.0),
    )
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let (profile, prices) = sample();
    assert_eq!(run(&profile, &prices), run(&profile, &prices));
}

#[test]
fn more_km_never_raises_fair_value() {
    let (profile, prices) = sample();
    let mut previous = f64::INFINITY;
    for km in (0..=200_000).step_by(5_000) {
        let car = CarProfile { km, ..profile.clone() };
        let fair = run(&car, &prices).fair_value();
        assert!(fair <= previous, "fair value rose at {km} km");
        previous = fair;
    }
}

#[test]
fn more_owners_never_raise_fair_value() {
    let (profile, prices) = sample();
    let values: Vec<f64> = OwnerCount::ALL
        .iter()
        .map(|&owner| run(&profile.clone().with_owner(owner), &prices).fair_value())
        .collect();
    assert!(values.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn older_cars_never_worth_more() {
    let (profile, prices) = sample();
    let mut previous = f64::INFINITY;
    for age in 0..=20 {
        // constant km keeps the mileage bucket from dominating
        let car = CarProfile {
            year: YEAR - age,
            km: 0,
            ..profile.clone()
        };
        let fair = run(&car, &prices).fair_value();
        assert!(fair <= previous, "fair value rose at age {age}");
        previous = fair;
    }
}

#[test]
fn depreciation_stays_within_cap() {
    for &state in State::ALL.iter() {
        for &fuel in FuelType::ALL.iter() {
            let car = CarProfile::new(YEAR - 19, fuel, state, 400_000)
                .with_owner(OwnerCount::FourthPlus);
            let result = run(&car, &PriceInputs::new(2_000_000.0, 100_000.0));
            for track in [result.depreciation.basic, result.depreciation.advanced] {
                assert!(track.capped >= 0.0 && track.capped <= 0.85);
                assert_eq!(track.is_capped, track.raw > 0.85);
            }
        }
    }
}

#[test]
fn diesel_in_ncr_uses_ten_year_life() {
    for &state in State::ALL.iter() {
        let car = CarProfile::new(YEAR - 3, FuelType::Diesel, state, 45_000);
        let result = run(&car, &PriceInputs::new(1_000_000.0, 700_000.0));
        let expected = if carworth_tables::is_ncr_state(state) { 10 } else { 15 };
        assert_eq!(result.depreciation.life_years, expected, "{state}");
    }
}

#[test]
fn delhi_diesel_five_years_old() {
    let car = CarProfile::new(YEAR - 5, FuelType::Diesel, State::Delhi, 75_000);
    let result = run(&car, &PriceInputs::new(1_000_000.0, 500_000.0));

    assert_eq!(result.depreciation.mileage_status, MileageStatus::Normal);
    assert!((result.depreciation.basic.capped - 0.60).abs() < 1e-12);
    assert!(!result.depreciation.basic.is_capped);
    assert_eq!(result.warnings[0].title, "Diesel NCR Alert");
}

#[test]
fn maharashtra_petrol_road_tax() {
    let car = CarProfile::new(YEAR - 2, FuelType::Petrol, State::Maharashtra, 20_000);
    let result = run(&car, &PriceInputs::new(1_500_000.0, 1_200_000.0));
    assert!((result.on_road.road_tax - 180_000.0).abs() < 1e-6);
    assert_eq!(result.on_road.slab.rate, 0.12);
}

#[test]
fn fair_price_boundary_is_inclusive() {
    assert_eq!(verdict(1_070_000.0, 1_000_000.0).verdict, Verdict::FairPrice);
    assert_eq!(
        verdict(1_070_100.0, 1_000_000.0).verdict,
        Verdict::SlightlyOverpriced
    );
}

#[test]
fn expired_insurance_deducts_replacement_cost() {
    let (profile, prices) = sample();
    let valid = run(&profile, &prices);
    let expired = run(&profile, &prices.with_insurance_expired());

    let deduction = carworth_tables::insurance_replacement(prices.ex_showroom);
    assert_eq!(deduction, 20_000.0);
    assert_eq!(expired.fair_values.basic.insurance_deduction, deduction);
    assert!((valid.fair_value() - expired.fair_value() - deduction).abs() < 1e-6);
}

#[test]
fn valuation_serializes_to_json() {
    let (profile, prices) = sample();
    let json = serde_json::to_value(run(&profile, &prices)).unwrap();
    assert_eq!(json["profile"]["state"], "Tamil Nadu");
    assert!(json["fair_values"]["advanced"].is_object());
}
