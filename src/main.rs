use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use jet_emissions::format::{format_currency, format_number};
use jet_emissions::*;

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/report_template.md"
));
static TEMPLATE_NAME: &str = "t";

const ABOUT: &str = r#"Estimates the CO2 emitted by a private jet flight and writes a report with:
* the total and per passenger emissions
* how they compare to driving the same distance by car
* how they compare to flying the same passengers on a commercial flight
* how many trees and how much money it takes to offset them
Use `--list` to see the aircraft available.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// The id of the aircraft (e.g. `gulfstream-g650`)
    #[arg(short, long)]
    aircraft: Option<String>,
    /// The one-way distance of the flight. Defaults to 1000
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_distance)]
    distance: Option<f64>,
    /// The unit of `distance`: miles (mi), kilometers (km) or nautical-miles (nm)
    #[arg(short, long, default_value_t = DistanceUnit::Miles)]
    unit: DistanceUnit,
    /// The number of passengers
    #[arg(short, long, default_value_t = 1)]
    passengers: u32,
    /// Whether the aircraft flies back
    #[arg(short, long)]
    round_trip: bool,
    /// A popular route (e.g. "London - Dubai") whose distance is used instead of `distance`
    #[arg(long, conflicts_with = "distance")]
    route: Option<String>,
    /// A CSV with the aircraft catalog, used instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Lists the aircraft of the catalog and the popular routes
    #[arg(short, long)]
    list: bool,
    /// Writes the estimate as JSON instead of a report
    #[arg(long)]
    json: bool,
    /// Where to write the output to. Defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

/// Parses a distance, rejecting `NaN` and infinities
fn parse_distance(arg: &str) -> Result<f64, String> {
    let distance = arg.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if distance.is_finite() {
        Ok(distance)
    } else {
        Err(format!("`{arg}` is not a finite number"))
    }
}

#[derive(serde::Serialize)]
struct Context {
    aircraft: String,
    category: &'static str,
    distance: String,
    round_trip: bool,
    passengers: String,
    total_tonnes: String,
    total_kg: String,
    per_passenger_tonnes: String,
    rating: &'static str,
    factor: String,
    car_trips: String,
    car_percent: String,
    commercial: String,
    commercial_percent: String,
    trees: String,
    offset_min: String,
    offset_max: String,
    per_passenger_offset_min: String,
    per_passenger_offset_max: String,
    warnings: Vec<String>,
}

impl Context {
    fn new(estimate: &Estimate) -> Self {
        let Estimate {
            result,
            comparison,
            warnings,
        } = estimate;
        let per_passenger = comparison.per_passenger_offset_cost(result.passenger_count);

        Self {
            aircraft: result.aircraft.name(),
            category: result.aircraft.category.display_name(),
            distance: format!(
                "{} {}",
                format_number(result.distance, 0),
                result.distance_unit.label()
            ),
            round_trip: result.round_trip,
            passengers: format_number(result.passenger_count, 0),
            total_tonnes: format_number(result.total_co2_tonnes, 2),
            total_kg: format_number(result.total_co2_kg, 0),
            per_passenger_tonnes: format_number(result.per_passenger_co2_tonnes, 2),
            rating: comparison.efficiency_rating.display_name(),
            factor: format_number(result.aircraft.emissions_factor.kg_co2_per_km, 2),
            car_trips: format_number(comparison.car_trips_equivalent, 1),
            car_percent: format_number(comparison.car_trips_equivalent * 100.0, 0),
            commercial: format_number(comparison.commercial_flight_comparison, 1),
            commercial_percent: format_number(comparison.commercial_flight_comparison * 100.0, 0),
            trees: format_number(comparison.trees_needed_to_offset.ceil(), 0),
            offset_min: format_currency(comparison.carbon_offset_cost.min),
            offset_max: format_currency(comparison.carbon_offset_cost.max),
            per_passenger_offset_min: format_currency(per_passenger.min),
            per_passenger_offset_max: format_currency(per_passenger.max),
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}

fn render(estimate: &Estimate) -> Result<String, Box<dyn Error>> {
    let context = Context::new(estimate);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    Ok(tt.render(TEMPLATE_NAME, &context)?)
}

fn list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (category, aircraft) in catalog.by_category() {
        out.push_str(&format!("{}\n", category.display_name()));
        for spec in aircraft {
            out.push_str(&format!(
                "  {:<32} {:<28} {}-{} pax  {:>6} nm  {:.1} kg/km\n",
                spec.id,
                spec.name(),
                spec.passenger_capacity.typical,
                spec.passenger_capacity.maximum,
                format_number(spec.range.nautical_miles, 0),
                spec.emissions_factor.kg_co2_per_km,
            ));
        }
    }
    out.push_str("Popular routes\n");
    for route in POPULAR_ROUTES {
        out.push_str(&format!(
            "  {:<32} {} {}\n",
            route.name,
            format_number(route.distance, 0),
            route.unit.abbreviation()
        ));
    }
    out
}

fn write(output: Option<&PathBuf>, contents: &str) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            log::info!("Written to {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };

    if cli.list {
        return write(cli.output.as_ref(), &list(&catalog));
    }

    let (distance, unit) = match &cli.route {
        Some(name) => {
            let route = popular_route(name)
                .ok_or_else(|| Into::<Box<dyn Error>>::into(format!("Unknown route `{name}`")))?;
            log::info!("Route {}: {} {}", route.name, route.distance, route.unit.abbreviation());
            (route.distance, route.unit)
        }
        None => (cli.distance.unwrap_or(1000.0), cli.unit),
    };

    let aircraft = match &cli.aircraft {
        Some(id) => Some(
            catalog
                .get(id)
                .ok_or_else(|| Into::<Box<dyn Error>>::into(format!("Aircraft `{id}` not found")))?,
        ),
        None => None,
    };

    let input = CalculationInput {
        aircraft,
        distance,
        distance_unit: unit,
        passenger_count: cli.passengers as f64,
        round_trip: cli.round_trip,
    };

    let estimate = match estimate(&input) {
        Ok(estimate) => estimate,
        Err(validation) => {
            for message in validation.messages() {
                log::error!("{message}");
            }
            return Err(validation.into());
        }
    };
    for warning in &estimate.warnings {
        log::warn!("{warning}");
    }

    let contents = if cli.json {
        serde_json::to_string_pretty(&estimate)?
    } else {
        render(&estimate)?
    };
    write(cli.output.as_ref(), &contents)
}
