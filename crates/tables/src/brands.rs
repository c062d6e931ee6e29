use carworth_model::Brand;

/// How fast a brand loses value relative to the market average.
/// Below 1.0 holds value better; luxury marques sit well above.
pub fn brand_multiplier(brand: Brand) -> f64 {
    match brand {
        Brand::MarutiSuzuki | Brand::Toyota => 0.85,
        Brand::Honda => 0.95,

        Brand::Hyundai
        | Brand::Kia
        | Brand::Tata
        | Brand::Mahindra
        | Brand::Renault
        | Brand::Nissan
        | Brand::Ford
        | Brand::Citroen
        | Brand::Other => 1.0,

        Brand::Mg | Brand::Jeep | Brand::Lexus => 1.10,
        Brand::Skoda | Brand::Volkswagen | Brand::Porsche => 1.15,
        Brand::Volvo | Brand::Mini => 1.20,
        Brand::Bmw | Brand::MercedesBenz | Brand::Audi | Brand::Jaguar | Brand::LandRover => 1.25,
    }
}

/// Multiplier for a free-form brand name; unknown names count as `Other`.
pub fn brand_multiplier_by_name(name: &str) -> f64 {
    brand_multiplier(Brand::from(name))
}

pub fn is_luxury_brand(brand: Brand) -> bool {
    matches!(
        brand,
        Brand::Bmw
            | Brand::MercedesBenz
            | Brand::Audi
            | Brand::Volvo
            | Brand::Jaguar
            | Brand::LandRover
            | Brand::Porsche
            | Brand::Lexus
            | Brand::Mini
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_holders() {
        assert!(brand_multiplier(Brand::MarutiSuzuki) < 1.0);
        assert!(brand_multiplier(Brand::Toyota) < 1.0);
    }

    #[test]
    fn test_luxury_depreciates_faster() {
        for brand in [Brand::Bmw, Brand::MercedesBenz, Brand::Audi] {
            assert!(brand_multiplier(brand) > 1.0);
            assert!(is_luxury_brand(brand));
        }
        assert!(!is_luxury_brand(Brand::Hyundai));
    }

    #[test]
    fn test_unknown_brand_is_baseline() {
        assert_eq!(brand_multiplier_by_name("Unknown Brand XYZ"), 1.0);
        assert_eq!(brand_multiplier(Brand::Other), 1.0);
    }
}
