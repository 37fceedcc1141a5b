use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_lib::snapshot::{load_or_build, rebuild, snapshot_path};
use skyroute_lib::{RouteQuery, DEFAULT_MAX_LEGS, DEFAULT_SEARCH_RADIUS_KM};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network routing utilities")]
struct Cli {
    /// Directory containing airports.csv, routes.csv, and the snapshot.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Perimeter search radius in kilometres.
    #[arg(long, default_value_t = DEFAULT_SEARCH_RADIUS_KM)]
    radius: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two airports.
    Route {
        /// Starting airport, IATA or ICAO code.
        #[arg(long = "from")]
        from: String,
        /// Destination airport, IATA or ICAO code.
        #[arg(long = "to")]
        to: String,
        /// Maximum number of scheduled legs.
        #[arg(long, default_value_t = DEFAULT_MAX_LEGS)]
        max_legs: u32,
        /// Allow ground transfers between intermediate airports.
        #[arg(long)]
        check_perimeter: bool,
    },
    /// Rebuild the network snapshot from the CSV sources.
    Build,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            from,
            to,
            max_legs,
            check_perimeter,
        } => handle_route(&cli.data_dir, cli.radius, &from, &to, max_legs, check_perimeter),
        Command::Build => handle_build(&cli.data_dir, cli.radius),
    }
}

fn handle_route(
    data_dir: &Path,
    radius: f64,
    from: &str,
    to: &str,
    max_legs: u32,
    check_perimeter: bool,
) -> Result<()> {
    let network = load_or_build(data_dir, radius)
        .with_context(|| format!("failed to load flight network from {}", data_dir.display()))?;

    let query = RouteQuery::new(from, to)
        .with_max_legs(max_legs)
        .with_perimeter(check_perimeter);
    let route = network.shortest_route(&query)?;
    println!("{route}");
    Ok(())
}

fn handle_build(data_dir: &Path, radius: f64) -> Result<()> {
    let network = rebuild(data_dir, radius)
        .with_context(|| format!("failed to build flight network from {}", data_dir.display()))?;

    println!(
        "Snapshot written to {} ({} airports, {} scheduled edges, {} perimeter edges)",
        snapshot_path(data_dir).display(),
        network.airports().len(),
        network.routes().edge_count(),
        network.perimeter().edge_count(),
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
