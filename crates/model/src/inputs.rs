use serde::{Deserialize, Serialize};

use crate::{
    AccidentHistory, BodyCondition, Brand, FuelType, OwnerCount, ServiceHistory, State,
    Transmission,
};

/// Everything known about the car itself.
///
/// Optional fields are only used for display (`engine_cc`, `length_mm` drive
/// the GST classification) or override a table lookup (`custom_road_tax_rate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarProfile {
    /// Manufacture year
    pub year: i32,

    pub fuel_type: FuelType,

    /// Registration state
    pub state: State,

    /// Odometer reading in km
    pub km: u32,

    #[serde(default = "default_owner")]
    pub owner: OwnerCount,

    #[serde(default)]
    pub brand: Brand,

    #[serde(default)]
    pub transmission: Transmission,

    #[serde(default)]
    pub body_condition: BodyCondition,

    #[serde(default)]
    pub accident_history: AccidentHistory,

    #[serde(default)]
    pub service_history: ServiceHistory,

    /// Used as a taxi/fleet vehicle
    #[serde(default)]
    pub commercial_use: bool,

    /// A newer generation of the model is on sale
    #[serde(default)]
    pub new_gen_available: bool,

    /// Engine displacement in cc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_cc: Option<u32>,

    /// Overall length in mm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<u32>,

    /// Road-tax rate (decimal) replacing the state table value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_road_tax_rate: Option<f64>,
}

fn default_owner() -> OwnerCount {
    OwnerCount::First
}

impl CarProfile {
    /// Create a profile for a first-owner car with neutral condition attributes.
    pub fn new(year: i32, fuel_type: FuelType, state: State, km: u32) -> Self {
        Self {
            year,
            fuel_type,
            state,
            km,
            owner: OwnerCount::First,
            brand: Brand::Other,
            transmission: Transmission::Manual,
            body_condition: BodyCondition::Good,
            accident_history: AccidentHistory::None,
            service_history: ServiceHistory::Unknown,
            commercial_use: false,
            new_gen_available: false,
            engine_cc: None,
            length_mm: None,
            custom_road_tax_rate: None,
        }
    }

    pub fn with_owner(mut self, owner: OwnerCount) -> Self {
        self.owner = owner;
        self
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = transmission;
        self
    }

    pub fn with_condition(
        mut self,
        body: BodyCondition,
        accident: AccidentHistory,
        service: ServiceHistory,
    ) -> Self {
        self.body_condition = body;
        self.accident_history = accident;
        self.service_history = service;
        self
    }

    pub fn with_dimensions(mut self, engine_cc: u32, length_mm: u32) -> Self {
        self.engine_cc = Some(engine_cc);
        self.length_mm = Some(length_mm);
        self
    }

    pub fn with_custom_road_tax(mut self, rate: f64) -> Self {
        self.custom_road_tax_rate = Some(rate);
        self
    }

    /// Age in whole years relative to `reference_year`. A manufacture year in
    /// the future counts as a brand-new car.
    pub fn age(&self, reference_year: i32) -> u32 {
        reference_year.saturating_sub(self.year).max(0) as u32
    }
}

/// Prices involved in the deal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInputs {
    /// Ex-showroom price of the car when new (INR)
    pub ex_showroom: f64,

    /// Seller's asking price (INR)
    pub asking_price: f64,

    #[serde(default = "default_true")]
    pub insurance_valid: bool,

    /// Original purchase was financed (adds hypothecation fee)
    #[serde(default)]
    pub has_loan: bool,
}

fn default_true() -> bool {
    true
}

impl PriceInputs {
    pub fn new(ex_showroom: f64, asking_price: f64) -> Self {
        Self {
            ex_showroom,
            asking_price,
            insurance_valid: true,
            has_loan: false,
        }
    }

    pub fn with_insurance_expired(mut self) -> Self {
        self.insurance_valid = false;
        self
    }

    pub fn with_loan(mut self) -> Self {
        self.has_loan = true;
        self
    }
}

/// Which depreciation track drives the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationMode {
    /// Age, ownership and mileage only
    Basic,
    /// Basic plus brand, transmission and condition adjustments
    Advanced,
}

impl Default for ValuationMode {
    fn default() -> Self {
        Self::Advanced
    }
}
