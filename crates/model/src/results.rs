//! Result records produced by each pipeline stage.
//!
//! Every intermediate value is kept so a breakdown can be rendered without
//! recomputing anything.

use serde::{Deserialize, Serialize};

use crate::State;

/// Road-tax slab resolved for a state, fuel type and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSlabResult {
    /// State whose table was used
    pub state: State,
    /// Internal slab id ("slab1", "flat", ...)
    pub slab_name: String,
    /// Human-readable price range ("₹10-20 Lakh")
    pub slab_range: String,
    pub rate: f64,
    /// Formatted rate ("12.0%")
    pub rate_percent: String,
    /// Why this rate applies
    pub reason: String,
}

/// GST bracket of a new car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GstCategory {
    Small,
    Large,
    Electric,
}

impl GstCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small Car (18% GST)",
            Self::Large => "Large Car/SUV/Luxury (40% GST)",
            Self::Electric => "Electric Vehicle (5% GST)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstClassification {
    pub category: GstCategory,
    pub category_name: String,
    pub rate: f64,
    pub rate_percent: String,
    pub reason: String,
    /// `None` when engine size was not checked
    pub meets_engine_criteria: Option<bool>,
    /// `None` when length was not checked
    pub meets_length_criteria: Option<bool>,
}

/// GST embedded in an ex-showroom price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstComponent {
    pub base_price: f64,
    pub gst_amount: f64,
    pub gst_rate: f64,
}

/// First-year insurance bracket used to rebuild the on-road price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceTier {
    Budget,
    Entry,
    Compact,
    MidSize,
    Premium,
    Executive,
    Luxury,
}

impl InsuranceTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Entry => "Entry",
            Self::Compact => "Compact",
            Self::MidSize => "Mid-size",
            Self::Premium => "Premium",
            Self::Executive => "Executive",
            Self::Luxury => "Luxury",
        }
    }
}

/// Dealer handling/logistics bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlingTier {
    Entry,
    Mid,
    Upper,
    Premium,
    Luxury,
}

impl HandlingTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Mid => "Mid",
            Self::Upper => "Upper",
            Self::Premium => "Premium",
            Self::Luxury => "Luxury",
        }
    }
}

/// Itemized RTO charges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedCharges {
    pub registration: f64,
    pub hsrp: f64,
    pub fastag: f64,
    pub rto_misc: f64,
    /// Zero unless the purchase was financed
    pub hypothecation: f64,
}

impl FixedCharges {
    pub fn total(&self) -> f64 {
        self.registration + self.hsrp + self.fastag + self.rto_misc + self.hypothecation
    }
}

/// Reconstructed original on-road price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnRoadPriceResult {
    pub ex_showroom: f64,
    pub road_tax: f64,
    /// Rate actually applied
    pub road_tax_rate: f64,
    /// Rate from the state table, kept for comparison with an override
    pub default_road_tax_rate: f64,
    pub is_custom_rate: bool,
    pub slab: TaxSlabResult,
    /// Informational only; GST is already inside the ex-showroom price
    pub gst: GstClassification,
    pub gst_component: GstComponent,
    pub insurance: f64,
    pub insurance_tier: InsuranceTier,
    pub fixed_charges: f64,
    pub fixed_breakdown: FixedCharges,
    pub handling: f64,
    pub handling_tier: HandlingTier,
    /// Tax collected at source
    pub tcs: f64,
    pub on_road_price: f64,
}

/// Actual km compared with what the car's age predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MileageStatus {
    Normal,
    SlightlyHigh,
    High,
    /// Flagged for a warning; no depreciation effect
    VeryLow,
}

impl MileageStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::SlightlyHigh => "Slightly High",
            Self::High => "High",
            Self::VeryLow => "Very Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionAdjustments {
    pub body: f64,
    pub accident: f64,
    pub service: f64,
    pub commercial: f64,
    pub new_gen: f64,
    pub total: f64,
}

/// One depreciation total before and after the cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationTrack {
    pub raw: f64,
    pub capped: f64,
    /// `raw` exceeded the maximum
    pub is_capped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationResult {
    pub age: u32,
    /// Divisor for life depreciation (10 or 15)
    pub life_years: u32,
    pub expected_km: f64,

    pub life_depreciation: f64,
    pub ownership_premium: f64,
    pub mileage_adjustment: f64,
    pub mileage_status: MileageStatus,
    pub basic: DepreciationTrack,

    pub brand_multiplier: f64,
    pub brand_adjustment: f64,
    pub transmission_adjustment: f64,
    pub condition: ConditionAdjustments,
    /// Sum of brand, transmission and condition adjustments
    pub advanced_adjustments_total: f64,
    pub advanced: DepreciationTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueResult {
    /// Depreciation ratio applied
    pub depreciation_used: f64,
    pub base_fair_value: f64,
    /// Zero while insurance is valid
    pub insurance_deduction: f64,
    pub fair_value: f64,
    pub fair_value_min: f64,
    pub fair_value_max: f64,
    pub range_percent: f64,
}

/// Fair values from both depreciation tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueComparison {
    pub basic: FairValueResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<FairValueResult>,
    /// Advanced fair value minus basic fair value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

impl FairValueComparison {
    /// The value a verdict should be based on: advanced when present.
    pub fn selected(&self) -> &FairValueResult {
        self.advanced.as_ref().unwrap_or(&self.basic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSeverity {
    Success,
    Warning,
    Error,
}

/// Categorical judgment of an asking price.
///
/// Serialized as its display label. Unlike the input attributes an unknown
/// label is rejected rather than mapped to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Verdict {
    GreatDeal,
    GoodDeal,
    FairPrice,
    SlightlyOverpriced,
    Overpriced,
}

impl Verdict {
    /// Best to worst.
    pub const ALL: [Verdict; 5] = [
        Self::GreatDeal,
        Self::GoodDeal,
        Self::FairPrice,
        Self::SlightlyOverpriced,
        Self::Overpriced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GreatDeal => "Great Deal",
            Self::GoodDeal => "Good Deal",
            Self::FairPrice => "Fair Price",
            Self::SlightlyOverpriced => "Slightly Overpriced",
            Self::Overpriced => "Overpriced",
        }
    }

    pub fn severity(self) -> VerdictSeverity {
        match self {
            Self::GreatDeal | Self::GoodDeal => VerdictSeverity::Success,
            Self::FairPrice | Self::SlightlyOverpriced => VerdictSeverity::Warning,
            Self::Overpriced => VerdictSeverity::Error,
        }
    }

    /// Icon name for presentation layers.
    pub fn icon(self) -> &'static str {
        match self {
            Self::GreatDeal => "check-circle",
            Self::GoodDeal => "check",
            Self::FairPrice => "minus",
            Self::SlightlyOverpriced => "alert-triangle",
            Self::Overpriced => "x-circle",
        }
    }
}

impl TryFrom<String> for Verdict {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        crate::match_label(&s, &Self::ALL, Verdict::label)
            .ok_or_else(|| format!("unknown verdict: {}", s))
    }
}

impl From<Verdict> for &'static str {
    fn from(v: Verdict) -> Self {
        v.label()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictResult {
    pub verdict: Verdict,
    pub severity: VerdictSeverity,
    /// (asking - fair) / fair
    pub difference_percent: f64,
    /// asking - fair
    pub difference_amount: f64,
    pub negotiation_target: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Info,
    Warning,
    Danger,
}

/// Situational advice; never blocks a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub level: WarningLevel,
    pub title: String,
    pub message: String,
}

impl Warning {
    pub fn new(level: WarningLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serializes_as_label() {
        assert_eq!(
            serde_json::to_value(Verdict::SlightlyOverpriced).unwrap(),
            "Slightly Overpriced"
        );
        let parsed: Verdict = serde_json::from_str("\"great deal\"").unwrap();
        assert_eq!(parsed, Verdict::GreatDeal);
        assert!(serde_json::from_str::<Verdict>("\"great_deal\"").is_err());
    }

    #[test]
    fn test_verdict_severity() {
        assert_eq!(Verdict::GreatDeal.severity(), VerdictSeverity::Success);
        assert_eq!(Verdict::FairPrice.severity(), VerdictSeverity::Warning);
        assert_eq!(Verdict::Overpriced.severity(), VerdictSeverity::Error);
    }

    #[test]
    fn test_fixed_charges_total() {
        let fixed = FixedCharges {
            registration: 600.0,
            hsrp: 400.0,
            fastag: 600.0,
            rto_misc: 1000.0,
            hypothecation: 0.0,
        };
        assert_eq!(fixed.total(), 2600.0);
    }

    #[test]
    fn test_warning_level_serialization() {
        let warning = Warning::new(WarningLevel::Danger, "Title", "Message");
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"danger\""));
    }
}
