use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Terminal,
    /// Machine-readable JSON
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "estatemap")]
#[command(about = "Real estate portfolio analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the portfolio KPI dashboard
    Dashboard {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a retrofit impact simulation
    Simulate {
        /// Building type (office, retail, mixed, residential)
        #[arg(long = "building-type", default_value = "office")]
        building_type: String,

        /// Building age in years
        #[arg(long, default_value = "10")]
        age: f64,

        /// Current CO2 emissions in tons per year
        #[arg(long = "co2", default_value = "150")]
        current_co2: f64,

        /// Retrofit budget in currency units
        #[arg(long, default_value = "5000000")]
        budget: f64,

        /// Certification the retrofit aims for
        #[arg(long = "target-certification", default_value = "leed-gold")]
        target_certification: String,

        /// Implementation timeframe (short, medium, long)
        #[arg(long, default_value = "medium")]
        timeframe: String,

        /// Priority focus area (energy, water, waste, social)
        #[arg(long = "focus", default_value = "energy")]
        focus: String,

        /// Simulation scenario (conservative, moderate, aggressive)
        #[arg(long, default_value = "moderate")]
        scenario: String,

        /// Skip the simulated processing delay
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-run the revenue forecast
    Forecast {
        /// Forecast scenario (baseline, optimistic, pessimistic)
        #[arg(long, default_value = "baseline")]
        scenario: String,

        /// Seed for reproducible runs; omit for a fresh draw
        #[arg(long)]
        seed: Option<u64>,

        /// Months to include (6, 12 or 24 in the UI; any value accepted)
        #[arg(long, default_value = "12")]
        months: usize,

        /// Skip the simulated processing delay
        #[arg(long = "no-delay")]
        no_delay: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List tenants with churn-risk intelligence
    Tenants {
        /// Substring search over name and sector
        #[arg(long, default_value = "")]
        search: String,

        /// Sort order (name, revenue, lease-end)
        #[arg(long, default_value = "name")]
        sort: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List compliance documents
    Documents {
        /// Substring search over name and building
        #[arg(long, default_value = "")]
        search: String,

        /// Filter by status (valid, expired, upcoming)
        #[arg(long)]
        status: Option<String>,

        /// Filter by type (safety, insurance, lease, esg, regulatory)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Filter by exact building name
        #[arg(long)]
        building: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List maintenance requests
    Maintenance {
        /// Substring search over building, unit and issue
        #[arg(long, default_value = "")]
        search: String,

        /// Filter by priority (critical, high, medium, low)
        #[arg(long)]
        priority: Option<String>,

        /// Filter by status (open, in-progress, scheduled, completed)
        #[arg(long)]
        status: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare buildings against industry benchmarks
    Compare {
        /// Metric to compare (occupancy, roi, esg-score)
        #[arg(long, default_value = "occupancy")]
        metric: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
