//! Input bounds checking.
//!
//! The valuation core accepts any input and degrades gracefully. These
//! checks sit in front of it at the edges (CLI, file input) and reject
//! values that would produce a meaningless valuation.

use carworth_model::{CarProfile, PriceInputs};
use thiserror::Error;

pub const MIN_EX_SHOWROOM: f64 = 100_000.0;
pub const MIN_ASKING_PRICE: f64 = 50_000.0;
/// Shared ceiling for both prices (5 crore).
pub const MAX_PRICE: f64 = 50_000_000.0;
pub const MAX_KM: u32 = 500_000;
pub const MAX_AGE_YEARS: i32 = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Ex-showroom price must be at least Rs. 1,00,000 (got {0})")]
    ExShowroomTooLow(f64),
    #[error("Ex-showroom price cannot exceed Rs. 5 crore (got {0})")]
    ExShowroomTooHigh(f64),
    #[error("Asking price must be at least Rs. 50,000 (got {0})")]
    AskingPriceTooLow(f64),
    #[error("Asking price cannot exceed Rs. 5 crore (got {0})")]
    AskingPriceTooHigh(f64),
    #[error("Kilometers seem unusually high (max 5,00,000, got {0})")]
    KmTooHigh(u32),
    #[error("Year cannot be in the future ({year} > {reference_year})")]
    FutureYear { year: i32, reference_year: i32 },
    #[error("Car is too old (max 20 years, got {year})")]
    TooOld { year: i32 },
}

pub fn validate_ex_showroom(value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < MIN_EX_SHOWROOM {
        return Err(ValidationError::ExShowroomTooLow(value));
    }
    if value > MAX_PRICE {
        return Err(ValidationError::ExShowroomTooHigh(value));
    }
    Ok(())
}

pub fn validate_asking_price(value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < MIN_ASKING_PRICE {
        return Err(ValidationError::AskingPriceTooLow(value));
    }
    if value > MAX_PRICE {
        return Err(ValidationError::AskingPriceTooHigh(value));
    }
    Ok(())
}

/// Negative km cannot be represented, so only the ceiling is checked.
pub fn validate_km(value: u32) -> Result<(), ValidationError> {
    if value > MAX_KM {
        return Err(ValidationError::KmTooHigh(value));
    }
    Ok(())
}

pub fn validate_year(year: i32, reference_year: i32) -> Result<(), ValidationError> {
    if year > reference_year {
        return Err(ValidationError::FutureYear {
            year,
            reference_year,
        });
    }
    if year < reference_year - MAX_AGE_YEARS {
        return Err(ValidationError::TooOld { year });
    }
    Ok(())
}

/// Run every check and collect all failures.
pub fn validate_inputs(
    profile: &CarProfile,
    prices: &PriceInputs,
    reference_year: i32,
) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = [
        validate_ex_showroom(prices.ex_showroom),
        validate_km(profile.km),
        validate_year(profile.year, reference_year),
        validate_asking_price(prices.asking_price),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carworth_model::{FuelType, State};

    #[test]
    fn test_price_bounds() {
        assert!(validate_ex_showroom(100_000.0).is_ok());
        assert!(validate_ex_showroom(50_000_000.0).is_ok());
        assert_eq!(
            validate_ex_showroom(99_999.0),
            Err(ValidationError::ExShowroomTooLow(99_999.0))
        );
        assert!(validate_ex_showroom(f64::NAN).is_err());
        assert!(validate_asking_price(50_000.0).is_ok());
        assert!(validate_asking_price(50_000_001.0).is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert!(validate_year(2025, 2025).is_ok());
        assert!(validate_year(2005, 2025).is_ok());
        assert_eq!(
            validate_year(2004, 2025),
            Err(ValidationError::TooOld { year: 2004 })
        );
        assert!(matches!(
            validate_year(2026, 2025),
            Err(ValidationError::FutureYear { .. })
        ));
    }

    #[test]
    fn test_km_bound() {
        assert!(validate_km(500_000).is_ok());
        assert!(validate_km(500_001).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let car = CarProfile::new(2030, FuelType::Petrol, State::Goa, 600_000);
        let prices = PriceInputs::new(10_000.0, 10_000.0);
        let errors = validate_inputs(&car, &prices, 2025).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].to_string().starts_with("Ex-showroom price must be at least"));
    }

    #[test]
    fn test_valid_inputs() {
        let car = CarProfile::new(2020, FuelType::Petrol, State::Goa, 60_000);
        assert!(validate_inputs(&car, &PriceInputs::new(800_000.0, 500_000.0), 2025).is_ok());
    }
}
