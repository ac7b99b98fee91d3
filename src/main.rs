use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zonefinder::storage::{GlobalStorage, SelectionFile, SelectionSource};
use zonefinder::zones::geo::{valid_latitude, valid_longitude};
use zonefinder::zones::{format_coords, haversine_km, Catalogue, RegionFilterView, TimezoneResolver, ZoneRecord};

/// Zonefinder: timezone catalogue and nearest-zone resolver
///
/// Examples:
///   zonefinder regions
///   zonefinder zones Europe
///   zonefinder resolve --lat 59.33 --lon 18.07 --select
///   zonefinder lookup America New_York
///   zonefinder serve --port 3000
#[derive(Parser)]
#[command(name = "zonefinder", version, about, long_about = None)]
struct Cli {
    /// JSON dataset file to use instead of the built-in catalogue.
    #[arg(long, global = true, env = "ZONEFINDER_DATA")]
    data: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the regions, in catalogue order.
    Regions,

    /// List the zones of one region.
    Zones {
        region: String,
    },

    /// Find the zone nearest to a coordinate.
    Resolve {
        /// Latitude (-90 to 90).
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude (-180 to 180).
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Remember the result as the selected zone.
        #[arg(long)]
        select: bool,
    },

    /// Look up a zone by exact region and zone key.
    Lookup {
        region: String,
        zone: String,
    },

    /// Select a zone by name and remember it.
    Select {
        region: String,
        zone: String,
    },

    /// Show the remembered zone.
    Current,

    /// Serve the query API over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(Serialize)]
struct ZoneOutput<'a> {
    region: &'a str,
    zone: &'a str,
    name: String,
    country: &'a str,
    lat: f64,
    lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
}

impl<'a> ZoneOutput<'a> {
    fn new(record: &'a ZoneRecord, distance_km: Option<f64>) -> Self {
        Self {
            region: record.region(),
            zone: record.zone(),
            name: record.display_text(),
            country: record.country(),
            lat: record.latitude(),
            lon: record.longitude(),
            distance_km,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalogue = load_catalogue(cli.data.as_deref())?;

    match cli.command {
        Command::Regions => {
            let index = catalogue.regions();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&index.rows())?);
            } else {
                for region in index.iter() {
                    println!("{}", region);
                }
            }
        }

        Command::Zones { ref region } => {
            let view = RegionFilterView::with_region(&catalogue, region);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view.rows())?);
            } else {
                if view.is_empty() {
                    eprintln!("No zones in region '{}'.", region);
                }
                for r in view.visible_entries() {
                    println!("{:<32} {}  {}", r.identifier(), r.country(), format_coords(r.latitude(), r.longitude()));
                }
            }
        }

        Command::Resolve { lat, lon, select } => {
            if !valid_latitude(lat) || !valid_longitude(lon) {
                bail!("Invalid coordinates. Lat: -90..90, Lon: -180..180");
            }
            let resolver = TimezoneResolver::new(&catalogue);
            let record = resolver.resolve(lat, lon);
            let distance = haversine_km(lat, lon, record.latitude(), record.longitude());
            print_zone(record, Some(distance), cli.json)?;

            if select {
                remember(record, SelectionSource::Nearest)?;
            }
        }

        Command::Lookup { ref region, ref zone } => {
            let resolver = TimezoneResolver::new(&catalogue);
            match resolver.lookup_by_name(region, zone) {
                Some(record) => print_zone(record, None, cli.json)?,
                None => bail!("Zone not found: '{}/{}'", region, zone),
            }
        }

        Command::Select { ref region, ref zone } => {
            let record = catalogue
                .find_exact(region, zone)
                .with_context(|| format!("Zone not found: '{}/{}'", region, zone))?;
            remember(record, SelectionSource::Manual)?;
            print_zone(record, None, cli.json)?;
        }

        Command::Current => {
            let file = SelectionFile::load();
            let mut storage = GlobalStorage::new();
            match file.restore_into(&catalogue, &mut storage) {
                Some(record) => {
                    storage.debug_dump();
                    print_zone(record, None, cli.json)?;
                }
                None => bail!("No zone selected. Use `zonefinder select` or `zonefinder resolve --select`."),
            }
        }

        Command::Serve { ref host, port } => {
            let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
            runtime
                .block_on(zonefinder::server::start(host, port, catalogue))
                .with_context(|| format!("server on {}:{} failed", host, port))?;
        }
    }

    Ok(())
}

fn load_catalogue(path: Option<&std::path::Path>) -> Result<Catalogue> {
    match path {
        Some(p) => Catalogue::from_path(p).with_context(|| format!("cannot load dataset {}", p.display())),
        None => Catalogue::builtin().context("built-in dataset is invalid"),
    }
}

/// Persist the zone so later invocations can publish it.
fn remember(record: &ZoneRecord, source: SelectionSource) -> Result<()> {
    let mut file = SelectionFile::load();
    file.put(record, source)
        .with_context(|| format!("cannot write {}", file.path().display()))?;
    eprintln!("  Selected {} ({})", record, source);
    Ok(())
}

fn print_zone(record: &ZoneRecord, distance_km: Option<f64>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&ZoneOutput::new(record, distance_km))?);
        return Ok(());
    }

    println!("{} ({})", record, record.display_text());
    println!("  Country: {}", record.country());
    println!("  Anchor:  {}", format_coords(record.latitude(), record.longitude()));
    if let Some(d) = distance_km {
        println!("  Distance: {:.1} km", d);
    }
    Ok(())
}
