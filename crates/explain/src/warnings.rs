//! Situational warnings for a valuation.
//!
//! Each rule is evaluated independently; any number may fire. Output order
//! is fixed so presentation stays stable between runs.

use carworth_model::{
    AccidentHistory, CarProfile, FuelType, MileageStatus, Transmission, Warning, WarningLevel,
};
use carworth_tables::{is_ncr_state, DIESEL_NCR_LIFE_YEARS};

/// Cars at or beyond this age get a parts-availability warning.
pub const OLD_CAR_AGE: u32 = 10;

/// Generate every warning that applies to a car.
pub fn generate_warnings(
    profile: &CarProfile,
    age: u32,
    mileage_status: MileageStatus,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if profile.fuel_type == FuelType::Diesel && is_ncr_state(profile.state) {
        let remaining = i64::from(DIESEL_NCR_LIFE_YEARS) - i64::from(age);
        if remaining <= 3 {
            let message = if remaining > 0 {
                format!(
                    "Only {} years remaining for registration in NCR. \
                     10-year diesel ban applies. Resale will be very difficult.",
                    remaining
                )
            } else {
                format!(
                    "The 10-year NCR limit for diesel cars has been reached ({} years old). \
                     The car must be re-registered outside NCR. Resale will be very difficult.",
                    age
                )
            };
            warnings.push(Warning::new(
                WarningLevel::Danger,
                "Diesel NCR Restriction",
                message,
            ));
        } else if remaining <= 5 {
            warnings.push(Warning::new(
                WarningLevel::Warning,
                "Diesel NCR Alert",
                format!(
                    "Only {} years remaining. Consider this for resale.",
                    remaining
                ),
            ));
        }
    }

    match mileage_status {
        MileageStatus::VeryLow => warnings.push(Warning::new(
            WarningLevel::Warning,
            "Very Low Mileage",
            "Mileage is unusually low. Could indicate odometer tampering or long stationary \
             periods causing mechanical issues. Verify carefully.",
        )),
        MileageStatus::High => warnings.push(Warning::new(
            WarningLevel::Info,
            "High Mileage",
            "Mileage is above average. Ensure thorough mechanical inspection.",
        )),
        MileageStatus::Normal | MileageStatus::SlightlyHigh => {}
    }

    if profile.owner.is_multiple() {
        warnings.push(Warning::new(
            WarningLevel::Warning,
            "Multiple Owners",
            "Multiple previous owners increase risk of undisclosed issues. \
             Verify complete service history.",
        ));
    }

    match profile.accident_history {
        AccidentHistory::Major => warnings.push(Warning::new(
            WarningLevel::Danger,
            "Major Accident History",
            "Car has major accident history. Structural integrity may be compromised. \
             Get professional inspection.",
        )),
        AccidentHistory::Minor => warnings.push(Warning::new(
            WarningLevel::Warning,
            "Minor Accident History",
            "Minor accident reported. Check for quality of repairs.",
        )),
        AccidentHistory::None => {}
    }

    if profile.commercial_use {
        warnings.push(Warning::new(
            WarningLevel::Warning,
            "Commercial Use",
            "Car was used commercially. Expect higher wear and tear.",
        ));
    }

    if profile.transmission == Transmission::Dct {
        warnings.push(Warning::new(
            WarningLevel::Info,
            "DCT/DSG Transmission",
            "Dual-clutch transmissions can have expensive repairs. \
             Check for shuddering or jerky shifts during test drive.",
        ));
    }

    if age >= OLD_CAR_AGE {
        warnings.push(Warning::new(
            WarningLevel::Warning,
            "Older Vehicle",
            format!(
                "Car is {} years old. Ensure parts availability and consider maintenance costs.",
                age
            ),
        ));
    }

    warnings
}
