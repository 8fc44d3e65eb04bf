//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [filters] [--limit <n>] [--outfile <path>]
//! - neodb interactive [--aggressive]
//!
//! Global options (`--config`, `--neofile`, `--cadfile`) may appear anywhere.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::filter::Criteria;

/// neodb - Explore close approaches of near-Earth objects
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the CSV file of near-Earth objects
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the JSON file of close approaches
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a single NEO by designation or name
    Inspect(InspectArgs),

    /// Query close approaches with filters
    Query(QueryArgs),

    /// Start an interactive session over a loaded dataset
    Interactive {
        /// Exit the session if an input file changes on disk
        #[arg(short, long)]
        aggressive: bool,
    },
}

/// Arguments of `inspect`
#[derive(Args, Debug, Clone, PartialEq)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO, e.g. '433'
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO, e.g. 'Halley'
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also print every known close approach of the NEO
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `query`
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, help_heading = "Filters")]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, help_heading = "Filters")]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, help_heading = "Filters")]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long, help_heading = "Filters")]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long, help_heading = "Filters")]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long, help_heading = "Filters")]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long, help_heading = "Filters")]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long, help_heading = "Filters")]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long, help_heading = "Filters")]
    pub max_diameter: Option<f64>,

    /// Only NEOs marked potentially hazardous
    #[arg(long, conflicts_with = "not_hazardous", help_heading = "Filters")]
    pub hazardous: bool,

    /// Only NEOs not marked potentially hazardous
    #[arg(long, help_heading = "Filters")]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to this .csv or .json file instead of printing them
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Collects the filter options into query criteria
    pub fn criteria(&self) -> Criteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

/// One line of an interactive session
#[derive(Parser, Debug)]
#[command(name = "neodb>", no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Inspect a single NEO by designation or name
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),

    /// Query close approaches with filters
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// End the session
    #[command(visible_alias = "quit")]
    Exit,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
