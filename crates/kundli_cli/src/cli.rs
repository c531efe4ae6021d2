//! Command-line argument definitions for kundli

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kundli")]
#[command(about = "Vedic birth chart, dasha and compatibility calculator")]
#[command(version)]
pub struct Cli {
    /// Position backend
    #[arg(long, value_enum, default_value_t = Backend::Keplerian, global = true)]
    pub backend: Backend,

    /// Chart config file (JSON); a missing file means defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Mean Keplerian elements and a truncated lunar series
    Keplerian,
    /// Deterministic placeholder data
    Placeholder,
    /// No ephemeris; every chart falls back to placeholder data
    Offline,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full birth chart
    Chart(ChartArgs),

    /// Mahadasha sequence from birth
    Mahadashas(BirthArgs),

    /// Bhuktis of one Mahadasha
    Bhuktis(BhuktiArgs),

    /// Dasha chain active at a moment
    Current(CurrentArgs),

    /// Porutham compatibility of two births
    Match(MatchArgs),

    /// Navamsa (D9) placement of a longitude
    Navamsa {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },

    /// Panchang elements at birth
    Panchang(BirthArgs),
}

#[derive(Args, Clone)]
pub struct BirthArgs {
    /// Local date and time (YYYY-MM-DDThh:mm[:ss])
    #[arg(long)]
    pub date: String,

    /// UTC offset of the local time in hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tz: f64,

    /// Latitude in degrees, north positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in degrees, east positive
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub lon: f64,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Configured place name; overrides --tz, --lat and --lon
    #[arg(long)]
    pub place: Option<String>,

    /// UTC moment for the current dasha (YYYY-MM-DDThh:mm[:ss])
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Args)]
pub struct BhuktiArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// 0-based Mahadasha index
    #[arg(long)]
    pub index: usize,
}

#[derive(Args)]
pub struct CurrentArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// UTC moment to query (YYYY-MM-DDThh:mm[:ss]); defaults to now
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// First person's local date and time
    #[arg(long)]
    pub date_a: String,

    /// First person's UTC offset in hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tz_a: f64,

    /// Second person's local date and time
    #[arg(long)]
    pub date_b: String,

    /// Second person's UTC offset in hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tz_b: f64,
}
