use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// School directory CLI tool
#[derive(Parser)]
#[command(name = "schoolmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(
        short,
        long,
        env = "SCHOOLMAP_DB_PATH",
        default_value = "schools.db",
        global = true
    )]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a single school
    Add {
        /// School name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List all schools ordered by distance from a reference coordinate
    List {
        /// Reference latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Reference longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Bulk-import schools from a CSV file
    Import {
        /// Input CSV file
        input: PathBuf,

        /// Column name for the school name
        #[arg(long, default_value = "name")]
        name_col: String,

        /// Column name for the address
        #[arg(long, default_value = "address")]
        address_col: String,

        /// Column name for latitude
        #[arg(long, default_value = "latitude")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "longitude")]
        lon_col: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            name,
            address,
            lat,
            lon,
            json,
        } => commands::add::run(cli.db_path, name, address, lat, lon, json),
        Commands::List { lat, lon, json } => commands::list::run(cli.db_path, lat, lon, json),
        Commands::Import {
            input,
            name_col,
            address_col,
            lat_col,
            lon_col,
        } => commands::import::run(cli.db_path, input, name_col, address_col, lat_col, lon_col),
    }
}
