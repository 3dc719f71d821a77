//! # Troski Fare CLI
//!
//! Prices a trip from the command line.
//!
//! ## Usage
//! ```text
//! troski-fare <distance_km> <duration_min> [share_percent]
//! troski-fare --json '{"distanceKm": 10, "durationMin": 20, "sharePercentage": 80}'
//! ```
//!
//! Rates come from `TROSKI_*` environment variables (see [`config`]).

mod config;

use anyhow::{bail, Context};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use troski_core::money::format_amount;
use troski_core::validation::parse_share_percentage;
use troski_core::{FareEngine, FareQuote, TripMeasurement, ValidationError};

use crate::config::{CliConfig, OutputFormat};

/// Used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "info,troski=debug";

const USAGE: &str = "usage: troski-fare <distance_km> <duration_min> [share_percent]\n       troski-fare --json '<{\"distanceKm\":..,\"durationMin\":..}>'";

/// A parsed quote request.
#[derive(Debug, PartialEq)]
struct QuoteRequest {
    trip: TripMeasurement,
    share_percentage: Option<f64>,
}

fn main() {
    init_tracing();

    if let Err(err) = run(std::env::args().skip(1).collect()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> anyhow::Result<()> {
    let config = CliConfig::load()?;
    let engine = FareEngine::new(config.fare)?;

    let rates = engine.config();
    info!(
        base_fare = rates.base_fare,
        distance_rate = rates.distance_rate,
        time_rate = rates.time_rate,
        output = ?config.output,
        "Configuration loaded"
    );

    let request = parse_request(&args)?;

    let quote = engine.quote_trip(
        &request.trip,
        request.share_percentage,
        config.fuel_price_per_liter,
    )?;
    info!(
        quote_id = %quote.id,
        total_fare = quote.breakdown.total_fare,
        driver_earnings = quote.driver_earnings,
        "Quote issued"
    );

    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&quote)?),
        OutputFormat::Text => println!("{}", render_text(&quote)),
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so JSON output on stdout stays parseable.
///
/// ## Log Levels
/// - `RUST_LOG=warn` - Quiet runs
/// - `RUST_LOG=troski=trace` - Everything from troski crates
/// - Default: info, plus debug (clamping, per-fare events) for troski crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    build_subscriber(filter).init();
}

fn build_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

fn parse_request(args: &[String]) -> anyhow::Result<QuoteRequest> {
    match args {
        [flag, body] if flag == "--json" => {
            let body: Value = serde_json::from_str(body).context("request body is not JSON")?;
            let trip = TripMeasurement::from_json(&body)?;
            let share_percentage = parse_share_percentage(&body)?;
            Ok(QuoteRequest {
                trip,
                share_percentage,
            })
        }
        [distance, duration, rest @ ..] if rest.len() <= 1 => {
            let trip = TripMeasurement::new(
                parse_arg("distance_km", distance)?,
                parse_arg("duration_min", duration)?,
            )?;
            let share_percentage = rest
                .first()
                .map(|raw| parse_arg("share_percent", raw))
                .transpose()?;
            Ok(QuoteRequest {
                trip,
                share_percentage,
            })
        }
        _ => bail!(USAGE),
    }
}

fn parse_arg(field: &str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        found: format!("{raw:?}"),
    })
}

fn render_text(quote: &FareQuote) -> String {
    let mut out = format!(
        "Trip          {:.2} km, {:.1} min\n{}\n\nDriver ({:.0}%)   {}",
        quote.distance_km,
        quote.duration_min,
        quote.breakdown,
        quote.driver_share_percentage,
        format_amount(quote.driver_earnings),
    );
    if let (Some(fuel), Some(net)) = (quote.fuel_cost, quote.driver_net) {
        out.push_str(&format!(
            "\nFuel          {}\nDriver net    {}",
            format_amount(fuel),
            format_amount(net)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use troski_core::FareConfig;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_positional() {
        let request = parse_request(&args(&["10", "20"])).unwrap();
        assert_eq!(request.trip, TripMeasurement::new(10.0, 20.0).unwrap());
        assert_eq!(request.share_percentage, None);

        let request = parse_request(&args(&["10", "20", "90"])).unwrap();
        assert_eq!(request.share_percentage, Some(90.0));
    }

    #[test]
    fn test_parse_json() {
        let request = parse_request(&args(&[
            "--json",
            r#"{"distanceKm": 4.2, "durationMin": 11, "sharePercentage": 80}"#,
        ]))
        .unwrap();
        assert_eq!(request.trip, TripMeasurement::new(4.2, 11.0).unwrap());
        assert_eq!(request.share_percentage, Some(80.0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_request(&args(&[])).is_err());
        assert!(parse_request(&args(&["10"])).is_err());
        assert!(parse_request(&args(&["10", "20", "75", "extra"])).is_err());
        assert!(parse_request(&args(&["ten", "20"])).is_err());
        assert!(parse_request(&args(&["-1", "20"])).is_err());
        assert!(parse_request(&args(&["--json", r#"{"distanceKm": "10", "durationMin": 2}"#])).is_err());
        assert!(parse_request(&args(&["--json", "not json"])).is_err());
    }

    #[test]
    fn test_json_share_must_be_a_number() {
        let err = parse_request(&args(&[
            "--json",
            r#"{"distanceKm": 4, "durationMin": 11, "sharePercentage": "80"}"#,
        ]))
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NotANumber {
                field: "sharePercentage".to_string(),
                found: "string".to_string(),
            })
        );
    }

    #[test]
    fn test_log_filter_is_honoured() {
        let subscriber = build_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "troski_core::fare", Level::DEBUG));
            assert!(!tracing::enabled!(target: "troski_core::fare", Level::TRACE));
            assert!(tracing::enabled!(target: "sqlx::query", Level::INFO));
            assert!(!tracing::enabled!(target: "sqlx::query", Level::DEBUG));
        });

        let quiet = build_subscriber(EnvFilter::new("warn,troski=info"));
        tracing::subscriber::with_default(quiet, || {
            assert!(!tracing::enabled!(target: "troski_core::fare", Level::DEBUG));
            assert!(!tracing::enabled!(target: "sqlx::query", Level::INFO));
            assert!(tracing::enabled!(target: "sqlx::query", Level::WARN));
        });
    }

    #[test]
    fn test_render_text() {
        let engine = FareEngine::new(FareConfig::default()).unwrap();
        let trip = TripMeasurement::new(10.0, 20.0).unwrap();
        let quote = engine.quote_trip(&trip, None, Some(1.5)).unwrap();

        let text = render_text(&quote);
        assert!(text.contains("Total         $14.50"));
        assert!(text.contains("Driver (75%)   $10.88"));
        assert!(text.contains("Fuel          $1.20"));
        assert!(text.contains("Driver net    $9.68"));
    }
}
