//! Human-readable explanation of a valuation.
//!
//! Converts pipeline results into breakdown lines, one-line summaries,
//! situational warnings and a buyer checklist, suitable for the CLI or any
//! report renderer.

mod checklist;
mod format;
mod warnings;

pub use checklist::{checklist, ChecklistSection};
pub use format::{
    format_age, format_currency, format_indian_number, format_km, format_lakhs,
    format_percentage, format_signed_percentage,
};
pub use warnings::{generate_warnings, OLD_CAR_AGE};

use carworth_model::{
    DepreciationResult, DepreciationTrack, FairValueComparison, OnRoadPriceResult, ValuationMode,
    VerdictResult,
};
use serde::{Deserialize, Serialize};

/// One row of a breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub value: String,
    /// Rendered as a subtotal/total row
    #[serde(default)]
    pub is_total: bool,
}

impl BreakdownLine {
    fn row(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            is_total: false,
        }
    }

    fn total(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            is_total: true,
        }
    }
}

/// Itemized on-road price.
pub fn explain_on_road(on_road: &OnRoadPriceResult) -> Vec<BreakdownLine> {
    let mut lines = vec![
        BreakdownLine::row("Ex-Showroom Price", format_lakhs(on_road.ex_showroom)),
        BreakdownLine::row(
            format!("Road Tax ({})", format_percentage(on_road.road_tax_rate)),
            format_lakhs(on_road.road_tax),
        ),
        BreakdownLine::row(
            format!("Insurance ({} tier, estimated)", on_road.insurance_tier.label()),
            format_lakhs(on_road.insurance),
        ),
        BreakdownLine::row(
            "RTO Charges (Reg + HSRP + FasTag + Misc)",
            format_currency(on_road.fixed_charges),
        ),
        BreakdownLine::row("Handling/Logistics", format_currency(on_road.handling)),
    ];

    if on_road.tcs > 0.0 {
        lines.push(BreakdownLine::row("TCS (1% above ₹10L)", format_lakhs(on_road.tcs)));
    }

    lines.push(BreakdownLine::total(
        "Total On-Road Price",
        format_lakhs(on_road.on_road_price),
    ));
    lines
}

/// Where the road-tax rate came from, including an override if one was used.
pub fn explain_road_tax(on_road: &OnRoadPriceResult) -> String {
    if on_road.is_custom_rate {
        format!(
            "Custom road tax {} used (table rate for {}: {})",
            format_percentage(on_road.road_tax_rate),
            on_road.slab.state,
            on_road.slab.rate_percent
        )
    } else {
        on_road.slab.reason.clone()
    }
}

/// A capped track sits exactly at the configured maximum.
fn track_label(name: &str, track: &DepreciationTrack) -> String {
    if track.is_capped {
        format!("{} (Capped at {})", name, format_percentage(track.capped))
    } else {
        name.to_string()
    }
}

/// Depreciation components; advanced rows are included only in advanced mode.
pub fn explain_depreciation(dep: &DepreciationResult, mode: ValuationMode) -> Vec<BreakdownLine> {
    let mut lines = vec![
        BreakdownLine::row(
            format!("Life Depreciation ({} / {} yrs)", format_age(dep.age), dep.life_years),
            format_percentage(dep.life_depreciation),
        ),
        BreakdownLine::row("Ownership Premium", format_percentage(dep.ownership_premium)),
        BreakdownLine::row(
            format!("Mileage Adjustment ({})", dep.mileage_status.label()),
            format_percentage(dep.mileage_adjustment),
        ),
        BreakdownLine::total(track_label("Basic Total", &dep.basic), format_percentage(dep.basic.capped)),
    ];

    if mode == ValuationMode::Advanced {
        let c = &dep.condition;
        lines.extend([
            BreakdownLine::row(
                format!("Brand (x{:.2})", dep.brand_multiplier),
                format_signed_percentage(dep.brand_adjustment),
            ),
            BreakdownLine::row("Transmission", format_signed_percentage(dep.transmission_adjustment)),
            BreakdownLine::row("Body Condition", format_signed_percentage(c.body)),
            BreakdownLine::row("Accident History", format_signed_percentage(c.accident)),
            BreakdownLine::row("Service History", format_signed_percentage(c.service)),
        ]);
        if c.commercial != 0.0 {
            lines.push(BreakdownLine::row("Commercial Use", format_signed_percentage(c.commercial)));
        }
        if c.new_gen != 0.0 {
            lines.push(BreakdownLine::row(
                "New Generation Available",
                format_signed_percentage(c.new_gen),
            ));
        }
        lines.push(BreakdownLine::total(
            track_label("Advanced Total", &dep.advanced),
            format_percentage(dep.advanced.capped),
        ));
    }

    lines
}

/// Fair value rows, including the basic/advanced comparison when present.
pub fn explain_fair_value(comparison: &FairValueComparison) -> Vec<BreakdownLine> {
    let selected = comparison.selected();
    let mut lines = Vec::new();

    if let (Some(advanced), Some(difference)) = (&comparison.advanced, comparison.difference) {
        lines.push(BreakdownLine::row(
            "Basic Fair Value",
            format_lakhs(comparison.basic.fair_value),
        ));
        lines.push(BreakdownLine::row(
            "Advanced Fair Value",
            format_lakhs(advanced.fair_value),
        ));
        lines.push(BreakdownLine::row(
            "Advanced vs Basic",
            format!("{:+.2} L", difference / 100_000.0),
        ));
    }

    lines.push(BreakdownLine::row(
        "Base Fair Value",
        format_lakhs(selected.base_fair_value),
    ));
    if selected.insurance_deduction > 0.0 {
        lines.push(BreakdownLine::row(
            "Insurance Expired (deduction)",
            format!("-{}", format_lakhs(selected.insurance_deduction)),
        ));
    }
    lines.push(BreakdownLine::total("Fair Value", format_lakhs(selected.fair_value)));
    lines.push(BreakdownLine::row(
        format!("Range (±{})", format_percentage(selected.range_percent)),
        format!(
            "{} - {}",
            format_lakhs(selected.fair_value_min),
            format_lakhs(selected.fair_value_max)
        ),
    ));
    lines
}

/// One-line verdict summary.
pub fn summarize_verdict(verdict: &VerdictResult, fair_value: f64) -> String {
    let direction = if verdict.difference_amount > 0.0 {
        "above"
    } else {
        "below"
    };
    format!(
        "{}: asking price is {} {} fair value of {}. Target: {}",
        verdict.verdict.label().to_uppercase(),
        format_percentage(verdict.difference_percent.abs()),
        direction,
        format_lakhs(fair_value),
        format_lakhs(verdict.negotiation_target),
    )
}
