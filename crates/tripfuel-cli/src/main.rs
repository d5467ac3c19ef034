//! tripfuel - plan fuel stops for a road trip from the command line.

use anyhow::Result;
use clap::Parser;

use tripfuel_planner::{plan_trip, TripRequest, DEFAULT_SEARCH_RADIUS_MI};
use tripfuel_providers::ors::DEFAULT_ORS_BASE_URL;
use tripfuel_providers::overpass::DEFAULT_OVERPASS_BASE_URL;
use tripfuel_providers::{OrsClient, OverpassClient};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trip origin (free-form place text)
    origin: String,

    /// Trip destination
    destination: String,

    /// Vehicle range per tank, in miles
    #[arg(long)]
    range: f64,

    /// Reserve buffer to keep in the tank, in miles
    #[arg(long, default_value_t = 0.0)]
    reserve: f64,

    /// Station search radius around each stop, in miles
    #[arg(long, default_value_t = DEFAULT_SEARCH_RADIUS_MI)]
    radius: f64,

    /// OpenRouteService API key (falls back to ORS_API_KEY)
    #[arg(long)]
    ors_key: Option<String>,

    /// OpenRouteService base URL
    #[arg(long, default_value = DEFAULT_ORS_BASE_URL)]
    ors_url: String,

    /// Overpass API base URL
    #[arg(long, default_value = DEFAULT_OVERPASS_BASE_URL)]
    overpass_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let ors_key = args
        .ors_key
        .clone()
        .or_else(|| std::env::var("ORS_API_KEY").ok())
        .ok_or_else(|| anyhow::anyhow!("provide --ors-key or set ORS_API_KEY"))?;

    let ors = OrsClient::new(args.ors_url.clone(), ors_key);
    let overpass = OverpassClient::new(args.overpass_url.clone());

    let request = TripRequest {
        origin: args.origin.clone(),
        destination: args.destination.clone(),
        range_mi: args.range,
        reserve_mi: args.reserve,
    };

    println!(
        "Planning gas stops from {} to {}...",
        args.origin, args.destination
    );

    let plan = plan_trip(&ors, &ors, &overpass, &request, args.radius).await?;

    println!();
    println!("Route: {} -> {}", plan.origin.label, plan.destination.label);
    println!("Total trip distance: {:.1} miles", plan.total_distance_mi);

    if plan.stops.is_empty() {
        println!(
            "With a range of ~{:.0} miles, you don't need any fuel stops on this route.",
            args.range
        );
        return Ok(());
    }

    println!(
        "Estimated fuel stops needed: {} (range ~{:.0} mi)",
        plan.stops.len(),
        args.range
    );

    for stop in &plan.stops {
        println!();
        println!("Stop #{}: {}", stop.index, stop.name);
        println!("  {}", stop.address);
        match stop.distance_offset_mi {
            Some(offset) => println!(
                "  Distance from start: ~{:.1} miles (~{:.1} mi from ideal point)",
                stop.distance_from_start_mi, offset
            ),
            None => println!(
                "  Distance from start: ~{:.1} miles",
                stop.distance_from_start_mi
            ),
        }
    }

    Ok(())
}
