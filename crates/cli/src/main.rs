//! Command-line front end for used-car valuation.
//!
//! Usage:
//!     carworth value --input car.json
//!     carworth compare --first a.json --second b.json
//!     carworth road-tax --state Maharashtra
//!     carworth gst --fuel Petrol --engine-cc 1197 --length-mm 3995

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use carworth_explain::{
    checklist, explain_depreciation, explain_fair_value, explain_on_road, explain_road_tax,
    format_currency, format_km, format_lakhs, format_percentage, summarize_verdict, BreakdownLine,
};
use carworth_history::{HistoryEntry, HistoryStore, InMemoryHistory};
use carworth_model::{CarProfile, FuelType, PriceInputs, State, ValuationMode};
use carworth_tables::{all_states_summary, gst_classify, gst_component, state_tax_table};
use carworth_validate::validate_inputs;
use carworth_valuation::{compare_deals, evaluate, BetterDeal, Valuation, ValuationConfig};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "carworth")]
#[command(about = "Fair value and deal verdict for used cars in India")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with valuation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Year ages are measured against (defaults to the current year)
    #[arg(long, global = true)]
    reference_year: Option<i32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Value a single car
    Value {
        /// Path to the car JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Skip brand, transmission and condition adjustments
        #[arg(long)]
        basic: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare two cars and pick the better deal
    Compare {
        #[arg(long)]
        first: PathBuf,

        #[arg(long)]
        second: PathBuf,
    },

    /// Show road tax slabs for one state, or a summary of all states
    RoadTax {
        #[arg(short, long)]
        state: Option<String>,
    },

    /// Classify a car into a GST category
    Gst {
        #[arg(long)]
        fuel: String,

        #[arg(long)]
        engine_cc: Option<u32>,

        #[arg(long)]
        length_mm: Option<u32>,

        /// Split this ex-showroom price into base price and GST
        #[arg(long)]
        ex_showroom: Option<f64>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Contents of a car input file.
#[derive(Deserialize)]
struct ValuationRequest {
    profile: CarProfile,
    prices: PriceInputs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "carworth=debug" } else { "carworth=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?),
        )
        .init();

    let config = load_config(cli.config.as_deref(), cli.reference_year)?;

    match cli.command {
        Commands::Value {
            input,
            basic,
            format,
        } => {
            let mode = if basic {
                ValuationMode::Basic
            } else {
                ValuationMode::Advanced
            };
            run_value(&input, mode, format, &config)?;
        }
        Commands::Compare { first, second } => {
            run_compare(&first, &second, &config)?;
        }
        Commands::RoadTax { state } => {
            run_road_tax(state.as_deref())?;
        }
        Commands::Gst {
            fuel,
            engine_cc,
            length_mm,
            ex_showroom,
        } => {
            run_gst(&fuel, engine_cc, length_mm, ex_showroom);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, reference_year: Option<i32>) -> Result<ValuationConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ValuationConfig::default(),
    };
    if let Some(year) = reference_year {
        config.reference_year = year;
    }
    tracing::debug!(reference_year = config.reference_year, "Loaded config");
    Ok(config)
}

/// Read, validate and evaluate one input file.
fn load_and_evaluate(path: &Path, mode: ValuationMode, config: &ValuationConfig) -> Result<Valuation> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request: ValuationRequest =
        serde_json::from_str(&raw).with_context(|| format!("Invalid input {}", path.display()))?;

    if let Err(errors) = validate_inputs(&request.profile, &request.prices, config.reference_year) {
        for error in &errors {
            eprintln!("error: {}", error);
        }
        bail!("{} invalid field(s) in {}", errors.len(), path.display());
    }

    Ok(evaluate(&request.profile, &request.prices, mode, config))
}

fn print_lines(lines: &[BreakdownLine]) {
    for line in lines {
        if line.is_total {
            println!("   {:<44} {:>14}", line.label, line.value);
        } else {
            println!("     {:<42} {:>14}", line.label, line.value);
        }
    }
}

fn print_valuation(valuation: &Valuation) {
    let profile = &valuation.profile;
    println!(
        "{} {} {} | {} | {} | {}",
        profile.year,
        profile.brand,
        profile.fuel_type,
        profile.state,
        format_km(profile.km),
        profile.owner
    );

    println!("\nOn-road price when new");
    print_lines(&explain_on_road(&valuation.on_road));
    println!("   {}", explain_road_tax(&valuation.on_road));
    println!(
        "   GST: {} ({}), included in ex-showroom",
        valuation.on_road.gst.category_name, valuation.on_road.gst.rate_percent
    );

    println!("\nDepreciation");
    print_lines(&explain_depreciation(&valuation.depreciation, valuation.mode));

    println!("\nFair value");
    print_lines(&explain_fair_value(&valuation.fair_values));

    println!("\nVerdict");
    println!("   {}", summarize_verdict(&valuation.verdict, valuation.fair_value()));
    println!(
        "   Asking {} vs fair {} ({})",
        format_currency(valuation.prices.asking_price),
        format_currency(valuation.fair_value()),
        format_percentage(valuation.verdict.difference_percent)
    );

    if !valuation.warnings.is_empty() {
        println!("\nWarnings");
        for warning in &valuation.warnings {
            println!("   [{:?}] {}: {}", warning.level, warning.title, warning.message);
        }
    }
}

fn run_value(
    input: &Path,
    mode: ValuationMode,
    format: OutputFormat,
    config: &ValuationConfig,
) -> Result<()> {
    let valuation = load_and_evaluate(input, mode, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&valuation)?),
        OutputFormat::Text => {
            print_valuation(&valuation);
            println!("\nBefore you buy");
            for section in checklist() {
                println!("   {}", section.category);
                for item in section.items {
                    println!("     - {}", item);
                }
            }
        }
    }

    Ok(())
}

fn run_compare(first: &Path, second: &Path, config: &ValuationConfig) -> Result<()> {
    let a = load_and_evaluate(first, ValuationMode::Advanced, config)?;
    let b = load_and_evaluate(second, ValuationMode::Advanced, config)?;

    let mut history = InMemoryHistory::default();
    history.record(HistoryEntry::from_valuation(&a));
    history.record(HistoryEntry::from_valuation(&b));

    for (name, valuation) in [("Car 1", &a), ("Car 2", &b)] {
        println!("=== {} ===", name);
        print_valuation(valuation);
        println!();
    }

    let comparison = compare_deals(&a, &b);
    println!("=== Comparison ===");
    for (name, gap) in [("Car 1", comparison.first), ("Car 2", comparison.second)] {
        let direction = if gap.amount > 0.0 { "below" } else { "above" };
        println!(
            "   {} value gap: {} ({} {} fair value)",
            name,
            format_lakhs(gap.amount),
            format_percentage(gap.percent.abs()),
            direction
        );
    }
    match comparison.better {
        BetterDeal::First => println!("   Car 1 is the better deal"),
        BetterDeal::Second => println!("   Car 2 is the better deal"),
        BetterDeal::Tie => println!("   Both cars offer similar value"),
    }
    for insight in &comparison.insights {
        println!("   - {}", insight);
    }

    println!("\nRecent valuations ({})", history.name());
    for entry in history.entries() {
        println!(
            "   {}  {} {} {}  asking {}  fair {}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.year,
            entry.fuel,
            entry.state,
            format_lakhs(entry.asking_price),
            format_lakhs(entry.fair_value),
            entry.verdict
        );
    }

    Ok(())
}

fn run_road_tax(state: Option<&str>) -> Result<()> {
    let Some(name) = state else {
        println!(
            "{:<20} {:>15} {:>15} {:>9} {:>6}",
            "State", "Petrol", "Diesel", "Electric", "Slabs"
        );
        for summary in all_states_summary() {
            println!(
                "{:<20} {:>15} {:>15} {:>9} {:>6}",
                summary.state.label(),
                format!(
                    "{}-{}",
                    format_percentage(summary.petrol.0),
                    format_percentage(summary.petrol.1)
                ),
                format!(
                    "{}-{}",
                    format_percentage(summary.diesel.0),
                    format_percentage(summary.diesel.1)
                ),
                format_percentage(summary.electric),
                summary.num_slabs
            );
        }
        return Ok(());
    };

    let state = State::from_name(name).with_context(|| format!("Unknown state: {}", name))?;
    let table = state_tax_table(state);

    println!("Road tax in {}", table.state);
    for (i, slab) in table.slabs.iter().enumerate() {
        println!("   {}", slab);
        for (fuel, rates) in &table.rates {
            if let Some(rate) = rates.get(i) {
                println!("     {:<10} {:>7}", fuel.label(), format_percentage(*rate));
            }
        }
    }

    Ok(())
}

fn run_gst(fuel: &str, engine_cc: Option<u32>, length_mm: Option<u32>, ex_showroom: Option<f64>) {
    let fuel = FuelType::from(fuel);
    let gst = gst_classify(fuel, engine_cc, length_mm);

    println!("{} ({})", gst.category_name, gst.rate_percent);
    println!("   {}", gst.reason);

    if let Some(ex_showroom) = ex_showroom {
        let component = gst_component(ex_showroom, gst.rate);
        println!("   Base price: {}", format_currency(component.base_price));
        println!("   GST:        {}", format_currency(component.gst_amount));
    }
}
