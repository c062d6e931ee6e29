//! Categorical car attributes.
//!
//! Each enum serializes as its display label and deserializes leniently
//! through `From<&str>`, so unrecognized labels map to the fallback variant.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::match_label;

/// Fuel type of the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 5] = [
        Self::Petrol,
        Self::Diesel,
        Self::Cng,
        Self::Electric,
        Self::Hybrid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Cng => "CNG",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl Default for FuelType {
    fn default() -> Self {
        Self::Petrol
    }
}

/// Unknown fuel labels are treated as Petrol.
impl From<&str> for FuelType {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

/// Depreciation behaviour differs by manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Brand {
    MarutiSuzuki,
    Toyota,
    Honda,
    Hyundai,
    Kia,
    Tata,
    Mahindra,
    Mg,
    Skoda,
    Volkswagen,
    Jeep,
    Renault,
    Nissan,
    Ford,
    Bmw,
    MercedesBenz,
    Audi,
    Volvo,
    Jaguar,
    LandRover,
    Porsche,
    Lexus,
    Mini,
    Citroen,
    Other,
}

impl Brand {
    /// Dropdown order; `Other` is always last.
    pub const ALL: [Brand; 25] = [
        Self::MarutiSuzuki,
        Self::Toyota,
        Self::Honda,
        Self::Hyundai,
        Self::Kia,
        Self::Tata,
        Self::Mahindra,
        Self::Mg,
        Self::Skoda,
        Self::Volkswagen,
        Self::Jeep,
        Self::Renault,
        Self::Nissan,
        Self::Ford,
        Self::Bmw,
        Self::MercedesBenz,
        Self::Audi,
        Self::Volvo,
        Self::Jaguar,
        Self::LandRover,
        Self::Porsche,
        Self::Lexus,
        Self::Mini,
        Self::Citroen,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MarutiSuzuki => "Maruti Suzuki",
            Self::Toyota => "Toyota",
            Self::Honda => "Honda",
            Self::Hyundai => "Hyundai",
            Self::Kia => "Kia",
            Self::Tata => "Tata",
            Self::Mahindra => "Mahindra",
            Self::Mg => "MG",
            Self::Skoda => "Skoda",
            Self::Volkswagen => "Volkswagen",
            Self::Jeep => "Jeep",
            Self::Renault => "Renault",
            Self::Nissan => "Nissan",
            Self::Ford => "Ford",
            Self::Bmw => "BMW",
            Self::MercedesBenz => "Mercedes-Benz",
            Self::Audi => "Audi",
            Self::Volvo => "Volvo",
            Self::Jaguar => "Jaguar",
            Self::LandRover => "Land Rover",
            Self::Porsche => "Porsche",
            Self::Lexus => "Lexus",
            Self::Mini => "Mini",
            Self::Citroen => "Citroen",
            Self::Other => "Other",
        }
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self::Other
    }
}

impl From<&str> for Brand {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

/// Gearbox type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Transmission {
    Manual,
    Cvt,
    TorqueConverter,
    Amt,
    /// Dual-clutch (DCT/DSG)
    Dct,
}

impl Transmission {
    pub const ALL: [Transmission; 5] = [
        Self::Manual,
        Self::Cvt,
        Self::TorqueConverter,
        Self::Amt,
        Self::Dct,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Cvt => "CVT",
            Self::TorqueConverter => "Torque Converter",
            Self::Amt => "AMT",
            Self::Dct => "DCT/DSG",
        }
    }
}

impl Default for Transmission {
    fn default() -> Self {
        Self::Manual
    }
}

impl From<&str> for Transmission {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

/// Position of the current owner in the ownership chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum OwnerCount {
    First,
    Second,
    Third,
    /// 4th owner or later
    FourthPlus,
}

impl OwnerCount {
    pub const ALL: [OwnerCount; 4] = [Self::First, Self::Second, Self::Third, Self::FourthPlus];

    /// Used whenever an owner label or ordinal is not recognized.
    pub const FALLBACK: OwnerCount = OwnerCount::Second;

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1st Owner",
            Self::Second => "2nd Owner",
            Self::Third => "3rd Owner",
            Self::FourthPlus => "4th+ Owner",
        }
    }

    /// 1-based ordinal; 4 means "4th or later".
    pub fn ordinal(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::FourthPlus => 4,
        }
    }

    /// Any ordinal above 4 collapses to `FourthPlus`; 0 is not a valid
    /// ordinal and maps to the fallback.
    pub fn from_ordinal(n: u32) -> Self {
        match n {
            0 => Self::FALLBACK,
            1 => Self::First,
            2 => Self::Second,
            3 => Self::Third,
            _ => Self::FourthPlus,
        }
    }

    /// Three or more owners.
    pub fn is_multiple(self) -> bool {
        matches!(self, Self::Third | Self::FourthPlus)
    }
}

/// Accepts display labels ("3rd Owner") and bare ordinals ("3").
/// Anything else is treated as a 2nd owner.
impl From<&str> for OwnerCount {
    fn from(s: &str) -> Self {
        if let Some(owner) = match_label(s, &Self::ALL, Self::label) {
            return owner;
        }
        match s.trim().trim_end_matches('+').parse::<u32>() {
            Ok(n) => Self::from_ordinal(n),
            Err(_) => Self::FALLBACK,
        }
    }
}

/// Exterior body condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum BodyCondition {
    Excellent,
    Good,
    Average,
    Poor,
}

impl BodyCondition {
    pub const ALL: [BodyCondition; 4] = [Self::Excellent, Self::Good, Self::Average, Self::Poor];

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl Default for BodyCondition {
    fn default() -> Self {
        Self::Good
    }
}

impl From<&str> for BodyCondition {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

/// Reported accident history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum AccidentHistory {
    None,
    Minor,
    Major,
}

impl AccidentHistory {
    pub const ALL: [AccidentHistory; 3] = [Self::None, Self::Minor, Self::Major];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Minor => "Minor",
            Self::Major => "Major",
        }
    }
}

impl Default for AccidentHistory {
    fn default() -> Self {
        Self::None
    }
}

impl From<&str> for AccidentHistory {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

/// Service record availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ServiceHistory {
    FullAuthorized,
    Partial,
    Unknown,
}

impl ServiceHistory {
    pub const ALL: [ServiceHistory; 3] = [Self::FullAuthorized, Self::Partial, Self::Unknown];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullAuthorized => "Full Authorized",
            Self::Partial => "Partial",
            Self::Unknown => "Unknown",
        }
    }
}

impl Default for ServiceHistory {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<&str> for ServiceHistory {
    fn from(s: &str) -> Self {
        match_label(s, &Self::ALL, Self::label).unwrap_or_default()
    }
}

// Serde glue and Display: every attribute round-trips through its label.
macro_rules! label_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<String> for $ty {
                fn from(s: String) -> Self {
                    Self::from(s.as_str())
                }
            }

            impl From<$ty> for &'static str {
                fn from(v: $ty) -> Self {
                    v.label()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

label_conversions!(
    FuelType,
    Brand,
    Transmission,
    OwnerCount,
    BodyCondition,
    AccidentHistory,
    ServiceHistory,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_from_str() {
        assert_eq!(FuelType::from("Diesel"), FuelType::Diesel);
        assert_eq!(FuelType::from("cng"), FuelType::Cng);
        assert_eq!(FuelType::from("hydrogen"), FuelType::Petrol);
    }

    #[test]
    fn test_owner_fallback() {
        assert_eq!(OwnerCount::from("1st Owner"), OwnerCount::First);
        assert_eq!(OwnerCount::from("4th+ Owner"), OwnerCount::FourthPlus);
        assert_eq!(OwnerCount::from("3"), OwnerCount::Third);
        assert_eq!(OwnerCount::from("7"), OwnerCount::FourthPlus);
        assert_eq!(OwnerCount::from("first"), OwnerCount::Second);
        assert_eq!(OwnerCount::from_ordinal(0), OwnerCount::Second);
    }

    #[test]
    fn test_owner_ordering() {
        assert!(OwnerCount::First < OwnerCount::Second);
        assert!(OwnerCount::Third < OwnerCount::FourthPlus);
        assert!(OwnerCount::Third.is_multiple());
        assert!(!OwnerCount::Second.is_multiple());
    }

    #[test]
    fn test_brand_and_transmission_labels() {
        assert_eq!(Brand::from("mercedes-benz"), Brand::MercedesBenz);
        assert_eq!(Brand::from("Unknown Brand XYZ"), Brand::Other);
        assert_eq!(Transmission::from("DCT/DSG"), Transmission::Dct);
        assert_eq!(Transmission::Dct.to_string(), "DCT/DSG");
    }

    #[test]
    fn test_labels_serialize() {
        let json = serde_json::to_string(&ServiceHistory::FullAuthorized).unwrap();
        assert_eq!(json, "\"Full Authorized\"");
        let parsed: AccidentHistory = serde_json::from_str("\"Major\"").unwrap();
        assert_eq!(parsed, AccidentHistory::Major);
        let lenient: BodyCondition = serde_json::from_str("\"Mint\"").unwrap();
        assert_eq!(lenient, BodyCondition::Good);
    }
}
