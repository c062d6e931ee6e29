//! Core domain model for CarWorth used-car valuation.
//!
//! This crate defines the value records passed through the valuation pipeline:
//! - `CarProfile` / `PriceInputs`: what the caller knows about the car and the deal
//! - Closed enumerations for every categorical attribute (`FuelType`, `State`, `Brand`, ...)
//! - Result records for each pipeline stage (`OnRoadPriceResult`, `DepreciationResult`, ...)
//! - `Warning`: situational advice attached to a valuation
//!
//! Every enumeration parses from its display label with `From<&str>` and
//! falls back to a documented default instead of failing.

mod attributes;
mod inputs;
mod results;
mod state;

pub use attributes::{
    AccidentHistory, BodyCondition, Brand, FuelType, OwnerCount, ServiceHistory, Transmission,
};
pub use inputs::{CarProfile, PriceInputs, ValuationMode};
pub use results::{
    ConditionAdjustments, DepreciationResult, DepreciationTrack, FairValueComparison,
    FairValueResult, FixedCharges, GstCategory, GstClassification, GstComponent, HandlingTier,
    InsuranceTier, MileageStatus, OnRoadPriceResult, TaxSlabResult, Verdict, VerdictResult,
    VerdictSeverity, Warning, WarningLevel,
};
pub use state::State;

/// Find the variant whose label matches `s`, ignoring ASCII case and
/// surrounding whitespace.
pub(crate) fn match_label<T: Copy>(s: &str, all: &[T], label: impl Fn(T) -> &'static str) -> Option<T> {
    let needle = s.trim();
    all.iter().copied().find(|v| label(*v).eq_ignore_ascii_case(needle))
}
