//! Side-by-side comparison of two valuations.

use carworth_explain::{format_indian_number, format_percentage};
use serde::Serialize;

use crate::Valuation;

/// Mileage gaps at or below this are not worth mentioning.
pub const MILEAGE_INSIGHT_KM: u32 = 10_000;
/// Depreciation gaps at or below this are not worth mentioning.
pub const DEPRECIATION_INSIGHT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BetterDeal {
    First,
    Second,
    Tie,
}

/// How far below fair value one car is being offered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueGap {
    /// fair value - asking price; positive means below fair value
    pub amount: f64,
    /// `amount / fair value`, zero when the fair value is zero
    pub percent: f64,
}

impl ValueGap {
    pub fn of(valuation: &Valuation) -> Self {
        let fair_value = valuation.fair_value();
        let amount = fair_value - valuation.prices.asking_price;
        let percent = if fair_value > 0.0 {
            amount / fair_value
        } else {
            0.0
        };
        Self { amount, percent }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealComparison {
    pub first: ValueGap,
    pub second: ValueGap,
    pub better: BetterDeal,
    pub insights: Vec<String>,
}

fn name(first: bool) -> &'static str {
    if first {
        "Car 1"
    } else {
        "Car 2"
    }
}

/// The better deal is the one with the larger relative gap below fair value.
pub fn compare_deals(first: &Valuation, second: &Valuation) -> DealComparison {
    let first_gap = ValueGap::of(first);
    let second_gap = ValueGap::of(second);

    let better = if first_gap.percent > second_gap.percent {
        BetterDeal::First
    } else if second_gap.percent > first_gap.percent {
        BetterDeal::Second
    } else {
        BetterDeal::Tie
    };

    let mut insights = Vec::new();

    let (y1, y2) = (first.profile.year, second.profile.year);
    if y1 != y2 {
        insights.push(format!(
            "{} is newer ({} vs {})",
            name(y1 > y2),
            y1.max(y2),
            y1.min(y2)
        ));
    }

    let (km1, km2) = (first.profile.km, second.profile.km);
    if km1.abs_diff(km2) > MILEAGE_INSIGHT_KM {
        insights.push(format!(
            "{} has lower mileage ({} vs {} km)",
            name(km1 < km2),
            format_indian_number(i64::from(km1.min(km2))),
            format_indian_number(i64::from(km1.max(km2)))
        ));
    }

    // basic track, so the insight reflects age, owners and mileage only
    let (d1, d2) = (
        first.depreciation.basic.capped,
        second.depreciation.basic.capped,
    );
    if (d1 - d2).abs() > DEPRECIATION_INSIGHT {
        insights.push(format!(
            "{} has less depreciation ({} vs {})",
            name(d1 < d2),
            format_percentage(d1.min(d2)),
            format_percentage(d1.max(d2))
        ));
    }

    DealComparison {
        first: first_gap,
        second: second_gap,
        better,
        insights,
    }
}
