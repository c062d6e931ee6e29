//! Static reference data for car valuation.
//!
//! Pure lookups over hardcoded tables:
//! - State-wise road-tax slabs and the NCR state set
//! - GST classification by fuel, engine size and length
//! - Brand depreciation multipliers
//! - Insurance, handling and fixed-fee schedules
//! - Per-attribute depreciation adjustments
//!
//! Every lookup is total: unknown inputs resolve to a documented default.

use carworth_model::{FuelType, State};

mod brands;
mod gst;
mod road_tax;
mod schedules;

pub use brands::{brand_multiplier, brand_multiplier_by_name, is_luxury_brand};
pub use gst::{
    gst_classify, gst_component, gst_rate, small_car_max_engine_cc, GST_ELECTRIC, GST_LARGE,
    GST_SMALL, SMALL_CAR_MAX_LENGTH_MM,
};
pub use road_tax::{
    all_states_summary, is_ncr_state, road_tax_rate, road_tax_slab, road_tax_slab_by_name,
    state_tax_table, StateTaxSummary, StateTaxTable, NCR_STATES,
};
pub use schedules::{
    accident_adjustment, body_adjustment, fixed_charges, handling_tier, insurance_replacement,
    insurance_tier, ownership_premium, service_adjustment, transmission_adjustment,
    COMMERCIAL_USE_ADJUSTMENT, FASTAG_FEE, HSRP_FEE, HYPOTHECATION_FEE, NEW_GEN_ADJUSTMENT,
    REGISTRATION_FEE, RTO_MISC_FEE,
};

/// Expected life of a car, used as the life-depreciation divisor.
pub const CAR_LIFE_YEARS: u32 = 15;

/// Diesel cars registered in NCR states are deregistered after 10 years.
pub const DIESEL_NCR_LIFE_YEARS: u32 = 10;

pub const MAX_DEPRECIATION: f64 = 0.85;

pub const EXPECTED_ANNUAL_KM: f64 = 15_000.0;

/// Ratios of actual to expected km.
pub const MILEAGE_HIGH_RATIO: f64 = 1.3;
pub const MILEAGE_SLIGHTLY_HIGH_RATIO: f64 = 1.1;
pub const MILEAGE_VERY_LOW_RATIO: f64 = 0.5;

pub const MILEAGE_HIGH_ADJUSTMENT: f64 = 0.05;
pub const MILEAGE_SLIGHTLY_HIGH_ADJUSTMENT: f64 = 0.02;

/// Tax collected at source on purchases above [`TCS_THRESHOLD`].
pub const TCS_RATE: f64 = 0.01;
pub const TCS_THRESHOLD: f64 = 1_000_000.0;

/// Symmetric band around a fair value.
pub const FAIR_VALUE_RANGE: f64 = 0.05;

/// Life-depreciation divisor for a fuel/state combination.
pub fn life_years(fuel: FuelType, state: State) -> u32 {
    if fuel == FuelType::Diesel && is_ncr_state(state) {
        DIESEL_NCR_LIFE_YEARS
    } else {
        CAR_LIFE_YEARS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_years_ncr_diesel_only() {
        for state in State::ALL {
            for fuel in FuelType::ALL {
                let expected = if fuel == FuelType::Diesel && NCR_STATES.contains(&state) {
                    10
                } else {
                    15
                };
                assert_eq!(life_years(fuel, state), expected, "{state} {fuel}");
            }
        }
    }
}
