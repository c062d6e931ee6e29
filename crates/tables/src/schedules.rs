//! Price-tiered cost schedules and per-attribute depreciation adjustments.

use carworth_model::{
    AccidentHistory, BodyCondition, FixedCharges, HandlingTier, InsuranceTier, OwnerCount,
    ServiceHistory, Transmission,
};

const LAKH: f64 = 100_000.0;

/// (exclusive upper bound, tier, premium)
const INSURANCE_SCHEDULE: [(f64, InsuranceTier, f64); 7] = [
    (5.0 * LAKH, InsuranceTier::Budget, 15_000.0),
    (8.0 * LAKH, InsuranceTier::Entry, 22_000.0),
    (10.0 * LAKH, InsuranceTier::Compact, 28_000.0),
    (15.0 * LAKH, InsuranceTier::MidSize, 38_000.0),
    (25.0 * LAKH, InsuranceTier::Premium, 55_000.0),
    (50.0 * LAKH, InsuranceTier::Executive, 85_000.0),
    (f64::INFINITY, InsuranceTier::Luxury, 150_000.0),
];

const HANDLING_SCHEDULE: [(f64, HandlingTier, f64); 5] = [
    (5.0 * LAKH, HandlingTier::Entry, 8_000.0),
    (10.0 * LAKH, HandlingTier::Mid, 12_000.0),
    (20.0 * LAKH, HandlingTier::Upper, 18_000.0),
    (50.0 * LAKH, HandlingTier::Premium, 30_000.0),
    (f64::INFINITY, HandlingTier::Luxury, 50_000.0),
];

/// Cost of a fresh policy when the seller's insurance has lapsed.
const INSURANCE_REPLACEMENT_SCHEDULE: [(f64, (), f64); 4] = [
    (10.0 * LAKH, (), 20_000.0),
    (15.0 * LAKH, (), 35_000.0),
    (25.0 * LAKH, (), 50_000.0),
    (f64::INFINITY, (), 80_000.0),
];

pub const REGISTRATION_FEE: f64 = 600.0;
pub const HSRP_FEE: f64 = 400.0;
pub const FASTAG_FEE: f64 = 600.0;
pub const RTO_MISC_FEE: f64 = 1_000.0;
pub const HYPOTHECATION_FEE: f64 = 1_500.0;

/// Brackets are checked in order; anything unmatched (NaN) lands in the top one.
fn tiered<T: Copy, const N: usize>(schedule: &[(f64, T, f64); N], price: f64) -> (T, f64) {
    let (_, tier, amount) = schedule
        .iter()
        .find(|(upper, _, _)| price < *upper)
        .unwrap_or(&schedule[N - 1]);
    (*tier, *amount)
}

/// First-year insurance premium bracket for a new car.
pub fn insurance_tier(ex_showroom: f64) -> (InsuranceTier, f64) {
    tiered(&INSURANCE_SCHEDULE, ex_showroom)
}

/// Dealer handling and logistics charge.
pub fn handling_tier(ex_showroom: f64) -> (HandlingTier, f64) {
    tiered(&HANDLING_SCHEDULE, ex_showroom)
}

/// Deduction from fair value when the seller's insurance has expired.
pub fn insurance_replacement(ex_showroom: f64) -> f64 {
    tiered(&INSURANCE_REPLACEMENT_SCHEDULE, ex_showroom).1
}

pub fn fixed_charges(has_loan: bool) -> FixedCharges {
    FixedCharges {
        registration: REGISTRATION_FEE,
        hsrp: HSRP_FEE,
        fastag: FASTAG_FEE,
        rto_misc: RTO_MISC_FEE,
        hypothecation: if has_loan { HYPOTHECATION_FEE } else { 0.0 },
    }
}

/// Depreciation added for each previous owner in the chain.
pub fn ownership_premium(owner: OwnerCount) -> f64 {
    match owner {
        OwnerCount::First => 0.10,
        OwnerCount::Second => 0.15,
        OwnerCount::Third => 0.20,
        OwnerCount::FourthPlus => 0.30,
    }
}

pub fn transmission_adjustment(transmission: Transmission) -> f64 {
    match transmission {
        Transmission::Manual | Transmission::Cvt | Transmission::TorqueConverter => 0.0,
        Transmission::Amt => 0.02,
        Transmission::Dct => 0.05,
    }
}

pub fn body_adjustment(body: BodyCondition) -> f64 {
    match body {
        BodyCondition::Excellent => -0.02,
        BodyCondition::Good => 0.0,
        BodyCondition::Average => 0.02,
        BodyCondition::Poor => 0.05,
    }
}

pub fn accident_adjustment(accident: AccidentHistory) -> f64 {
    match accident {
        AccidentHistory::None => 0.0,
        AccidentHistory::Minor => 0.10,
        AccidentHistory::Major => 0.20,
    }
}

pub fn service_adjustment(service: ServiceHistory) -> f64 {
    match service {
        ServiceHistory::FullAuthorized => -0.02,
        ServiceHistory::Partial => 0.0,
        ServiceHistory::Unknown => 0.03,
    }
}

pub const COMMERCIAL_USE_ADJUSTMENT: f64 = 0.15;
pub const NEW_GEN_ADJUSTMENT: f64 = 0.05;
