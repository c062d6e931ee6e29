//! Reconstruction of the original on-road price.

use carworth_model::{CarProfile, OnRoadPriceResult, PriceInputs};
use carworth_tables::{
    fixed_charges, gst_classify, gst_component, handling_tier, insurance_tier, road_tax_slab,
    TCS_RATE, TCS_THRESHOLD,
};

/// Tax collected at source; only applies strictly above the threshold.
pub fn tcs(ex_showroom: f64) -> f64 {
    if ex_showroom > TCS_THRESHOLD {
        ex_showroom * TCS_RATE
    } else {
        0.0
    }
}

/// Rebuild what the car cost on the road when new.
///
/// GST is classified for display only. It is already part of the
/// ex-showroom price and is not added again.
pub fn on_road_price(profile: &CarProfile, prices: &PriceInputs) -> OnRoadPriceResult {
    let ex_showroom = prices.ex_showroom;

    let slab = road_tax_slab(profile.state, profile.fuel_type, ex_showroom);
    let default_road_tax_rate = slab.rate;
    let (road_tax_rate, is_custom_rate) = match profile.custom_road_tax_rate {
        Some(rate) => (rate, true),
        None => (default_road_tax_rate, false),
    };
    let road_tax = ex_showroom * road_tax_rate;

    let gst = gst_classify(profile.fuel_type, profile.engine_cc, profile.length_mm);
    let gst_component = gst_component(ex_showroom, gst.rate);

    let (insurance_tier, insurance) = insurance_tier(ex_showroom);
    let (handling_tier, handling) = handling_tier(ex_showroom);
    let fixed_breakdown = fixed_charges(prices.has_loan);
    let fixed = fixed_breakdown.total();
    let tcs = tcs(ex_showroom);

    let on_road_price = ex_showroom + road_tax + insurance + handling + fixed + tcs;

    tracing::debug!(
        ex_showroom,
        road_tax,
        insurance,
        handling,
        fixed,
        tcs,
        on_road_price,
        is_custom_rate,
        "Reconstructed on-road price"
    );

    OnRoadPriceResult {
        ex_showroom,
        road_tax,
        road_tax_rate,
        default_road_tax_rate,
        is_custom_rate,
        slab,
        gst,
        gst_component,
        insurance,
        insurance_tier,
        fixed_charges: fixed,
        fixed_breakdown,
        handling,
        handling_tier,
        tcs,
        on_road_price,
    }
}
