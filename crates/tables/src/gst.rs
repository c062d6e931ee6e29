//! GST classification of new cars (rates effective 22 September 2025).

use carworth_model::{FuelType, GstCategory, GstClassification, GstComponent};

pub const GST_SMALL: f64 = 0.18;
pub const GST_LARGE: f64 = 0.40;
pub const GST_ELECTRIC: f64 = 0.05;

/// Small cars must be at most this long regardless of fuel.
pub const SMALL_CAR_MAX_LENGTH_MM: u32 = 4000;

/// Engine limit for the small-car rate. Hybrids use the higher diesel limit.
pub fn small_car_max_engine_cc(fuel: FuelType) -> Option<u32> {
    match fuel {
        FuelType::Petrol | FuelType::Cng => Some(1200),
        FuelType::Diesel | FuelType::Hybrid => Some(1500),
        FuelType::Electric => None,
    }
}

pub fn gst_rate(category: GstCategory) -> f64 {
    match category {
        GstCategory::Small => GST_SMALL,
        GstCategory::Large => GST_LARGE,
        GstCategory::Electric => GST_ELECTRIC,
    }
}

fn classification(
    category: GstCategory,
    reason: String,
    meets_engine_criteria: Option<bool>,
    meets_length_criteria: Option<bool>,
) -> GstClassification {
    let rate = gst_rate(category);
    GstClassification {
        category,
        category_name: category.label().to_string(),
        rate,
        rate_percent: format!("{:.0}%", rate * 100.0),
        reason,
        meets_engine_criteria,
        meets_length_criteria,
    }
}

/// Classify a car's GST bracket.
///
/// Electric cars are always in the 5% bracket. Without both engine size and
/// length the car is assumed to be large, the higher of the two rates.
pub fn gst_classify(
    fuel: FuelType,
    engine_cc: Option<u32>,
    length_mm: Option<u32>,
) -> GstClassification {
    let max_engine = match small_car_max_engine_cc(fuel) {
        Some(max) => max,
        None => {
            return classification(
                GstCategory::Electric,
                "Electric vehicles are charged concessional 5% GST to promote EV adoption"
                    .to_string(),
                None,
                None,
            )
        }
    };

    let (engine_cc, length_mm) = match (engine_cc, length_mm) {
        (Some(cc), Some(len)) => (cc, len),
        _ => {
            return classification(
                GstCategory::Large,
                "Classification requires engine CC and length. Defaulting to 40% \
                 (provide specs for accurate rate)"
                    .to_string(),
                None,
                None,
            )
        }
    };

    let meets_engine = engine_cc <= max_engine;
    let meets_length = length_mm <= SMALL_CAR_MAX_LENGTH_MM;

    if meets_engine && meets_length {
        let fuel_label = match fuel {
            FuelType::Petrol | FuelType::Cng => "Petrol/CNG/LPG",
            other => other.label(),
        };
        return classification(
            GstCategory::Small,
            format!(
                "Qualifies as small car: {} ≤{}cc AND length ≤{}mm",
                fuel_label, max_engine, SMALL_CAR_MAX_LENGTH_MM
            ),
            Some(meets_engine),
            Some(meets_length),
        );
    }

    let mut reasons = Vec::new();
    if !meets_engine {
        reasons.push(format!("engine {}cc > {}cc limit", engine_cc, max_engine));
    }
    if !meets_length {
        reasons.push(format!(
            "length {}mm > {}mm limit",
            length_mm, SMALL_CAR_MAX_LENGTH_MM
        ));
    }

    classification(
        GstCategory::Large,
        format!("Exceeds small car threshold: {}", reasons.join(" and ")),
        Some(meets_engine),
        Some(meets_length),
    )
}

/// Split an ex-showroom price into its pre-GST base and the GST inside it.
pub fn gst_component(ex_showroom: f64, gst_rate: f64) -> GstComponent {
    let base_price = ex_showroom / (1.0 + gst_rate);
    GstComponent {
        base_price,
        gst_amount: ex_showroom - base_price,
        gst_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_petrol_small_car_boundary() {
        let small = gst_classify(FuelType::Petrol, Some(1200), Some(4000));
        assert_eq!(small.category, GstCategory::Small);
        assert_eq!(small.rate, 0.18);

        let large = gst_classify(FuelType::Petrol, Some(1201), Some(4000));
        assert_eq!(large.category, GstCategory::Large);
        assert_eq!(large.rate, 0.40);
        assert_eq!(large.meets_engine_criteria, Some(false));
        assert_eq!(large.meets_length_criteria, Some(true));
        assert!(large.reason.contains("1201cc"));
    }

    #[test]
    fn test_diesel_threshold_higher() {
        let small = gst_classify(FuelType::Diesel, Some(1497), Some(3995));
        assert_eq!(small.category, GstCategory::Small);
        let hybrid = gst_classify(FuelType::Hybrid, Some(1490), Some(4001));
        assert_eq!(hybrid.category, GstCategory::Large);
        assert!(hybrid.reason.contains("length 4001mm"));
    }

    #[test]
    fn test_electric_ignores_size() {
        for (cc, len) in [(None, None), (Some(0), Some(5200)), (Some(9999), None)] {
            let gst = gst_classify(FuelType::Electric, cc, len);
            assert_eq!(gst.category, GstCategory::Electric);
            assert_eq!(gst.rate, 0.05);
        }
    }

    #[test]
    fn test_missing_specs_default_large() {
        let gst = gst_classify(FuelType::Cng, Some(998), None);
        assert_eq!(gst.category, GstCategory::Large);
        assert_eq!(gst.meets_engine_criteria, None);
    }

    #[test]
    fn test_gst_component() {
        let component = gst_component(1_180_000.0, 0.18);
        assert!((component.base_price - 1_000_000.0).abs() < 1e-6);
        assert!((component.gst_amount - 180_000.0).abs() < 1e-6);
    }
}
