//! Parkade CLI
//!
//! Command-line tools for the Parkade parking-lot engine.
//!
//! # Commands
//!
//! - `fees` - Print the sample venue fees
//! - `quote` - Price a stay under one policy
//! - `simulate` - Run a lot through a batch of arrivals and departures

mod commands;

use clap::{Parser, Subcommand};
use commands::simulate::MAX_HOURS;
use tracing_subscriber::EnvFilter;

/// Parkade parking-lot tools.
#[derive(Parser)]
#[command(name = "parkade")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print sample fees for the mall, stadium and airport policies
    Fees,

    /// Price a stay under one fee policy
    Quote {
        /// Fee policy (base, mall, stadium, airport)
        #[arg(short, long, default_value = "base")]
        policy: String,

        /// Vehicle type (motorcycle, car, bus)
        #[arg(short = 't', long)]
        vehicle: String,

        /// Whole hours parked
        #[arg(short = 'H', long)]
        hours: u64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Park a batch of vehicles, let time pass, then unpark them all
    Simulate {
        /// Lot location; also selects the fee policy
        #[arg(short, long, default_value = "mall")]
        location: String,

        /// Override the location-derived fee policy
        #[arg(short, long)]
        policy: Option<String>,

        /// Spot batch as TYPE=COUNT (repeatable)
        #[arg(short, long = "spots", value_name = "TYPE=COUNT")]
        spots: Vec<String>,

        /// Vehicle as TYPE:PLATE (repeatable)
        #[arg(short = 'k', long = "park", value_name = "TYPE:PLATE")]
        park: Vec<String>,

        /// Hours between parking and unparking
        #[arg(
            short = 'H',
            long,
            default_value = "0",
            value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_HOURS))
        )]
        hours: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered records on stdout stay clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Fees => {
            commands::fees::run();
        }
        Commands::Quote {
            policy,
            vehicle,
            hours,
            format,
        } => {
            commands::quote::run(&policy, &vehicle, hours, &format)?;
        }
        Commands::Simulate {
            location,
            policy,
            spots,
            park,
            hours,
            format,
        } => {
            let plan = commands::simulate::Plan::parse(
                &location,
                policy.as_deref(),
                &spots,
                &park,
                hours,
            )?;
            commands::simulate::run(&plan, &format)?;
        }
        Commands::Version => {
            println!("Parkade CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Parkade Core v{}", parkade_core::VERSION);
        }
    }

    Ok(())
}
