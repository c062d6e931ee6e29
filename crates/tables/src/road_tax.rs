//! State-wise road-tax slabs.
//!
//! Each state defines its own price boundaries and a rate per fuel type for
//! every slab. Slabs are listed in ascending order of their upper bound and
//! the last one is unbounded.

use carworth_model::{FuelType, State, TaxSlabResult};
use serde::Serialize;

/// Rate used when a table has no entry for the resolved slab.
const FALLBACK_RATE: f64 = 0.10;

/// States where diesel cars are deregistered after 10 years.
pub const NCR_STATES: [State; 4] = [
    State::Delhi,
    State::Haryana,
    State::UttarPradesh,
    State::Rajasthan,
];

#[derive(Debug)]
struct Slab {
    upper: f64,
    name: &'static str,
    range: &'static str,
}

/// Rates indexed like the state's slab list.
#[derive(Debug)]
struct FuelRates {
    petrol: &'static [f64],
    diesel: &'static [f64],
    cng: &'static [f64],
    electric: &'static [f64],
    hybrid: &'static [f64],
}

#[derive(Debug)]
struct StateTaxConfig {
    slabs: &'static [Slab],
    rates: FuelRates,
}

impl StateTaxConfig {
    fn rates_for(&self, fuel: FuelType) -> &'static [f64] {
        let rates = match fuel {
            FuelType::Petrol => self.rates.petrol,
            FuelType::Diesel => self.rates.diesel,
            FuelType::Cng => self.rates.cng,
            FuelType::Electric => self.rates.electric,
            FuelType::Hybrid => self.rates.hybrid,
        };
        if rates.is_empty() {
            self.rates.petrol
        } else {
            rates
        }
    }
}

const INF: f64 = f64::INFINITY;

static SLABS_6_10: [Slab; 3] = [
    Slab { upper: 600_000.0, name: "slab1", range: "Up to ₹6 Lakh" },
    Slab { upper: 1_000_000.0, name: "slab2", range: "₹6-10 Lakh" },
    Slab { upper: INF, name: "slab3", range: "Above ₹10 Lakh" },
];

static SLABS_6_20: [Slab; 3] = [
    Slab { upper: 600_000.0, name: "slab1", range: "Up to ₹6 Lakh" },
    Slab { upper: 2_000_000.0, name: "slab2", range: "₹6-20 Lakh" },
    Slab { upper: INF, name: "slab3", range: "Above ₹20 Lakh" },
];

static SLABS_10_20: [Slab; 3] = [
    Slab { upper: 1_000_000.0, name: "slab1", range: "Up to ₹10 Lakh" },
    Slab { upper: 2_000_000.0, name: "slab2", range: "₹10-20 Lakh" },
    Slab { upper: INF, name: "slab3", range: "Above ₹20 Lakh" },
];

static SLABS_5_10_20: [Slab; 4] = [
    Slab { upper: 500_000.0, name: "slab1", range: "Up to ₹5 Lakh" },
    Slab { upper: 1_000_000.0, name: "slab2", range: "₹5-10 Lakh" },
    Slab { upper: 2_000_000.0, name: "slab3", range: "₹10-20 Lakh" },
    Slab { upper: INF, name: "slab4", range: "Above ₹20 Lakh" },
];

static SLABS_5_10_15: [Slab; 4] = [
    Slab { upper: 500_000.0, name: "slab1", range: "Up to ₹5 Lakh" },
    Slab { upper: 1_000_000.0, name: "slab2", range: "₹5-10 Lakh" },
    Slab { upper: 1_500_000.0, name: "slab3", range: "₹10-15 Lakh" },
    Slab { upper: INF, name: "slab4", range: "Above ₹15 Lakh" },
];

static SLABS_10: [Slab; 2] = [
    Slab { upper: 1_000_000.0, name: "slab1", range: "Up to ₹10 Lakh" },
    Slab { upper: INF, name: "slab2", range: "Above ₹10 Lakh" },
];

static SLABS_8_15: [Slab; 3] = [
    Slab { upper: 800_000.0, name: "slab1", range: "Up to ₹8 Lakh" },
    Slab { upper: 1_500_000.0, name: "slab2", range: "₹8-15 Lakh" },
    Slab { upper: INF, name: "slab3", range: "Above ₹15 Lakh" },
];

static SLABS_5_10: [Slab; 3] = [
    Slab { upper: 500_000.0, name: "slab1", range: "Up to ₹5 Lakh" },
    Slab { upper: 1_000_000.0, name: "slab2", range: "₹5-10 Lakh" },
    Slab { upper: INF, name: "slab3", range: "Above ₹10 Lakh" },
];

static SLABS_FLAT: [Slab; 1] = [Slab { upper: INF, name: "flat", range: "All Vehicles" }];

static DELHI: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_6_10,
    rates: FuelRates {
        petrol: &[0.04, 0.07, 0.10],
        diesel: &[0.05, 0.0875, 0.125],
        cng: &[0.04, 0.06, 0.08],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.04, 0.06, 0.08],
    },
};

static HARYANA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_6_20,
    rates: FuelRates {
        petrol: &[0.05, 0.08, 0.10],
        diesel: &[0.06, 0.09, 0.11],
        // 20% rebate on the petrol rate
        cng: &[0.04, 0.064, 0.08],
        electric: &[0.02, 0.02, 0.02],
        hybrid: &[0.04, 0.064, 0.08],
    },
};

static MAHARASHTRA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.11, 0.12, 0.13],
        diesel: &[0.13, 0.14, 0.15],
        cng: &[0.07, 0.08, 0.09],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.09, 0.10, 0.11],
    },
};

static KARNATAKA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_5_10_20,
    rates: FuelRates {
        petrol: &[0.13, 0.14, 0.17, 0.18],
        diesel: &[0.13, 0.14, 0.17, 0.18],
        cng: &[0.10, 0.11, 0.13, 0.14],
        electric: &[0.0, 0.0, 0.0, 0.0],
        hybrid: &[0.10, 0.11, 0.13, 0.14],
    },
};

static TELANGANA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10,
    rates: FuelRates {
        petrol: &[0.12, 0.14],
        diesel: &[0.12, 0.14],
        cng: &[0.10, 0.12],
        electric: &[0.0, 0.0],
        hybrid: &[0.10, 0.12],
    },
};

static ANDHRA_PRADESH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10,
    rates: FuelRates {
        petrol: &[0.12, 0.14],
        diesel: &[0.13, 0.15],
        cng: &[0.08, 0.10],
        electric: &[0.0, 0.0],
        hybrid: &[0.10, 0.12],
    },
};

static TAMIL_NADU: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10,
    rates: FuelRates {
        petrol: &[0.10, 0.15],
        diesel: &[0.10, 0.15],
        cng: &[0.07, 0.10],
        electric: &[0.0, 0.0],
        hybrid: &[0.07, 0.10],
    },
};

static UTTAR_PRADESH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10,
    rates: FuelRates {
        petrol: &[0.08, 0.10],
        diesel: &[0.08, 0.10],
        cng: &[0.06, 0.08],
        electric: &[0.0, 0.0],
        hybrid: &[0.06, 0.08],
    },
};

static GUJARAT: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_FLAT,
    rates: FuelRates {
        petrol: &[0.06],
        diesel: &[0.06],
        cng: &[0.04],
        electric: &[0.0],
        hybrid: &[0.04],
    },
};

static RAJASTHAN: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.06, 0.07, 0.08],
        diesel: &[0.08, 0.09, 0.10],
        cng: &[0.05, 0.06, 0.07],
        electric: &[0.02, 0.02, 0.02],
        hybrid: &[0.05, 0.06, 0.07],
    },
};

static PUNJAB: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        // includes 1% social security contribution
        petrol: &[0.09, 0.11, 0.12],
        diesel: &[0.10, 0.12, 0.13],
        cng: &[0.06, 0.08, 0.09],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.07, 0.09, 0.10],
    },
};

static WEST_BENGAL: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.10, 0.12, 0.14],
        diesel: &[0.12, 0.14, 0.16],
        cng: &[0.07, 0.09, 0.10],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.08, 0.10, 0.12],
    },
};

static KERALA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_5_10_15,
    rates: FuelRates {
        petrol: &[0.06, 0.08, 0.10, 0.12],
        diesel: &[0.07, 0.09, 0.11, 0.13],
        cng: &[0.05, 0.06, 0.08, 0.10],
        electric: &[0.0, 0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.07, 0.09, 0.11],
    },
};

static MADHYA_PRADESH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.08, 0.10, 0.12],
        diesel: &[0.09, 0.11, 0.13],
        cng: &[0.05, 0.07, 0.08],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.06, 0.08, 0.10],
    },
};

static BIHAR: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_8_15,
    rates: FuelRates {
        petrol: &[0.07, 0.09, 0.10],
        diesel: &[0.08, 0.10, 0.11],
        cng: &[0.05, 0.06, 0.07],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.07, 0.08],
    },
};

static ODISHA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_5_10,
    rates: FuelRates {
        petrol: &[0.06, 0.07, 0.09],
        diesel: &[0.06, 0.07, 0.09],
        cng: &[0.05, 0.06, 0.07],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.06, 0.07],
    },
};

static JHARKHAND: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.06, 0.08, 0.10],
        diesel: &[0.07, 0.09, 0.11],
        cng: &[0.04, 0.06, 0.07],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.07, 0.08],
    },
};

static CHHATTISGARH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.07, 0.09, 0.10],
        diesel: &[0.08, 0.10, 0.11],
        cng: &[0.05, 0.06, 0.07],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.07, 0.08],
    },
};

static UTTARAKHAND: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.07, 0.08, 0.09],
        diesel: &[0.08, 0.09, 0.10],
        cng: &[0.05, 0.06, 0.07],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.05, 0.06, 0.07],
    },
};

static HIMACHAL_PRADESH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_8_15,
    rates: FuelRates {
        petrol: &[0.025, 0.03, 0.04],
        diesel: &[0.03, 0.035, 0.045],
        cng: &[0.02, 0.025, 0.03],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.02, 0.025, 0.03],
    },
};

static ASSAM: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_5_10,
    rates: FuelRates {
        petrol: &[0.04, 0.06, 0.07],
        diesel: &[0.05, 0.06, 0.07],
        cng: &[0.03, 0.05, 0.06],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.03, 0.05, 0.06],
    },
};

static GOA: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_10_20,
    rates: FuelRates {
        petrol: &[0.09, 0.11, 0.13],
        diesel: &[0.10, 0.12, 0.14],
        cng: &[0.06, 0.08, 0.09],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.07, 0.09, 0.11],
    },
};

static CHANDIGARH: StateTaxConfig = StateTaxConfig {
    slabs: &SLABS_6_10,
    rates: FuelRates {
        petrol: &[0.04, 0.06, 0.07],
        diesel: &[0.05, 0.07, 0.08],
        cng: &[0.03, 0.04, 0.05],
        electric: &[0.0, 0.0, 0.0],
        hybrid: &[0.03, 0.05, 0.06],
    },
};

fn state_config(state: State) -> &'static StateTaxConfig {
    match state {
        State::Delhi => &DELHI,
        State::Haryana => &HARYANA,
        State::Maharashtra => &MAHARASHTRA,
        State::Karnataka => &KARNATAKA,
        State::Telangana => &TELANGANA,
        State::TamilNadu => &TAMIL_NADU,
        State::UttarPradesh => &UTTAR_PRADESH,
        State::Gujarat => &GUJARAT,
        State::Rajasthan => &RAJASTHAN,
        State::Punjab => &PUNJAB,
        State::WestBengal => &WEST_BENGAL,
        State::Kerala => &KERALA,
        State::MadhyaPradesh => &MADHYA_PRADESH,
        State::Bihar => &BIHAR,
        State::Odisha => &ODISHA,
        State::AndhraPradesh => &ANDHRA_PRADESH,
        State::Jharkhand => &JHARKHAND,
        State::Chhattisgarh => &CHHATTISGARH,
        State::Uttarakhand => &UTTARAKHAND,
        State::HimachalPradesh => &HIMACHAL_PRADESH,
        State::Assam => &ASSAM,
        State::Goa => &GOA,
        State::Chandigarh => &CHANDIGARH,
    }
}

/// Resolve the road-tax slab for a car.
///
/// The first slab whose upper bound is at or above `ex_showroom` wins. If no
/// slab matches (only possible for NaN input) the last slab is used.
pub fn road_tax_slab(state: State, fuel: FuelType, ex_showroom: f64) -> TaxSlabResult {
    let config = state_config(state);
    let (index, slab) = config
        .slabs
        .iter()
        .enumerate()
        .find(|(_, slab)| ex_showroom <= slab.upper)
        .unwrap_or_else(|| {
            let last = config.slabs.len() - 1;
            (last, &config.slabs[last])
        });

    let rate = config
        .rates_for(fuel)
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_RATE);
    let rate_percent = format!("{:.1}%", rate * 100.0);

    tracing::debug!(
        state = %state,
        fuel = %fuel,
        slab = slab.name,
        rate,
        "Resolved road-tax slab"
    );

    TaxSlabResult {
        state,
        slab_name: slab.name.to_string(),
        slab_range: slab.range.to_string(),
        rate,
        reason: format!(
            "{} charges {} road tax for {} vehicles in the {} price bracket",
            state, rate_percent, fuel, slab.range
        ),
        rate_percent,
    }
}

/// Like [`road_tax_slab`] but takes a free-form state name. Unrecognized
/// names use the default state's table.
pub fn road_tax_slab_by_name(state: &str, fuel: FuelType, ex_showroom: f64) -> TaxSlabResult {
    let resolved = State::from_name(state).unwrap_or_else(|| {
        tracing::warn!(state, fallback = %State::DEFAULT, "Unknown state, using default tax table");
        State::DEFAULT
    });
    road_tax_slab(resolved, fuel, ex_showroom)
}

/// Road-tax rate only.
pub fn road_tax_rate(state: State, fuel: FuelType, ex_showroom: f64) -> f64 {
    road_tax_slab(state, fuel, ex_showroom).rate
}

pub fn is_ncr_state(state: State) -> bool {
    NCR_STATES.contains(&state)
}

/// Complete slab table of one state, for reference display.
#[derive(Debug, Clone, Serialize)]
pub struct StateTaxTable {
    pub state: State,
    /// Slab range labels in ascending order
    pub slabs: Vec<String>,
    /// Per fuel type, one rate per slab
    pub rates: Vec<(FuelType, Vec<f64>)>,
}

pub fn state_tax_table(state: State) -> StateTaxTable {
    let config = state_config(state);
    StateTaxTable {
        state,
        slabs: config.slabs.iter().map(|s| s.range.to_string()).collect(),
        rates: FuelType::ALL
            .iter()
            .map(|fuel| {
                let rates = config.rates_for(*fuel);
                let row = (0..config.slabs.len())
                    .map(|i| rates.get(i).copied().unwrap_or(0.0))
                    .collect();
                (*fuel, row)
            })
            .collect(),
    }
}

/// Rate span of one state, for the all-states overview.
#[derive(Debug, Clone, Serialize)]
pub struct StateTaxSummary {
    pub state: State,
    pub petrol: (f64, f64),
    pub diesel: (f64, f64),
    pub electric: f64,
    pub num_slabs: usize,
}

/// Summary of every state, sorted by name.
pub fn all_states_summary() -> Vec<StateTaxSummary> {
    let span = |rates: &[f64]| {
        rates.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
            (lo.min(*r), hi.max(*r))
        })
    };

    let mut summary: Vec<StateTaxSummary> = State::ALL
        .iter()
        .map(|state| {
            let config = state_config(*state);
            StateTaxSummary {
                state: *state,
                petrol: span(config.rates_for(FuelType::Petrol)),
                diesel: span(config.rates_for(FuelType::Diesel)),
                electric: span(config.rates_for(FuelType::Electric)).1,
                num_slabs: config.slabs.len(),
            }
        })
        .collect();

    summary.sort_by(|a, b| a.state.label().cmp(b.state.label()));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maharashtra_petrol_slabs() {
        assert_eq!(road_tax_rate(State::Maharashtra, FuelType::Petrol, 800_000.0), 0.11);
        let slab = road_tax_slab(State::Maharashtra, FuelType::Petrol, 1_500_000.0);
        assert_eq!(slab.slab_name, "slab2");
        assert_eq!(slab.rate, 0.12);
        assert_eq!(slab.rate_percent, "12.0%");
        assert!(slab.reason.contains("Maharashtra"));
    }

    #[test]
    fn test_slab_upper_bound_inclusive() {
        let at_bound = road_tax_slab(State::Delhi, FuelType::Petrol, 600_000.0);
        assert_eq!(at_bound.slab_name, "slab1");
        let above = road_tax_slab(State::Delhi, FuelType::Petrol, 600_001.0);
        assert_eq!(above.slab_name, "slab2");
    }

    #[test]
    fn test_unbounded_final_slab() {
        let slab = road_tax_slab(State::Karnataka, FuelType::Diesel, 49_000_000.0);
        assert_eq!(slab.slab_name, "slab4");
        assert_eq!(slab.rate, 0.18);
    }

    #[test]
    fn test_nan_uses_last_slab() {
        let slab = road_tax_slab(State::Gujarat, FuelType::Petrol, f64::NAN);
        assert_eq!(slab.slab_name, "flat");
    }

    #[test]
    fn test_unknown_state_name_falls_back() {
        let slab = road_tax_slab_by_name("Atlantis", FuelType::Petrol, 1_500_000.0);
        assert_eq!(slab.state, State::Maharashtra);
        assert_eq!(slab.rate, 0.12);
    }

    #[test]
    fn test_ncr_states() {
        assert!(is_ncr_state(State::Delhi));
        assert!(is_ncr_state(State::Haryana));
        assert!(is_ncr_state(State::UttarPradesh));
        assert!(is_ncr_state(State::Rajasthan));
        assert!(!is_ncr_state(State::Maharashtra));
        assert!(!is_ncr_state(State::Karnataka));
    }

    #[test]
    fn test_every_state_covers_every_fuel() {
        for state in State::ALL {
            let config = state_config(state);
            assert!(config.slabs.last().map_or(false, |s| s.upper.is_infinite()));
            for fuel in FuelType::ALL {
                assert_eq!(config.rates_for(fuel).len(), config.slabs.len(), "{state} {fuel}");
            }
        }
    }

    #[test]
    fn test_summary_sorted() {
        let summary = all_states_summary();
        assert_eq!(summary.len(), 23);
        assert_eq!(summary[0].state, State::AndhraPradesh);
        let gujarat = summary.iter().find(|s| s.state == State::Gujarat).unwrap();
        assert_eq!(gujarat.num_slabs, 1);
        assert_eq!(gujarat.petrol, (0.06, 0.06));
    }
}
