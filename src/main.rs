use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;

use estatemap::cli::{Cli, Commands, OutputFormat};
use estatemap::config::get_config;
use estatemap::data;
use estatemap::io::output::{create_writer, DashboardReport, ForecastRun, ReportWriter};
use estatemap::portfolio::benchmark::{compare_portfolio, ComparisonMetric};
use estatemap::portfolio::filters::{DocumentQuery, MaintenanceQuery, TenantQuery};
use estatemap::simulation::esg::{run_simulation, EsgSimulationInput};
use estatemap::simulation::forecast::{
    run_forecast, SeededSource, ThreadRngSource, VariationSource,
};
use estatemap::simulation::runner::SimulationRunner;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard { format, output } => handle_dashboard(format, output),
        Commands::Simulate {
            building_type,
            age,
            current_co2,
            budget,
            target_certification,
            timeframe,
            focus,
            scenario,
            no_delay,
            format,
            output,
        } => {
            let input = EsgSimulationInput {
                building_type: building_type.parse()?,
                age,
                current_co2,
                retrofit_budget: budget,
                target_certification,
                timeframe: timeframe.parse()?,
                priority_area: focus.parse()?,
                scenario: scenario.parse()?,
            };
            handle_simulate(input, no_delay, format, output)
        }
        Commands::Forecast {
            scenario,
            seed,
            months,
            no_delay,
            format,
            output,
        } => handle_forecast(scenario.parse()?, seed, months, no_delay, format, output),
        Commands::Tenants {
            search,
            sort,
            format,
            output,
        } => {
            let query = TenantQuery {
                search,
                sort: sort.parse()?,
            };
            handle_tenants(query, format, output)
        }
        Commands::Documents {
            search,
            status,
            kind,
            building,
            format,
            output,
        } => {
            let query = DocumentQuery {
                search,
                status: status.as_deref().map(str::parse).transpose()?,
                kind: kind.as_deref().map(str::parse).transpose()?,
                building,
            };
            handle_documents(query, format, output)
        }
        Commands::Maintenance {
            search,
            priority,
            status,
            format,
            output,
        } => {
            let query = MaintenanceQuery {
                search,
                priority: priority.as_deref().map(str::parse).transpose()?,
                status: status.as_deref().map(str::parse).transpose()?,
            };
            handle_maintenance(query, format, output)
        }
        Commands::Compare {
            metric,
            format,
            output,
        } => handle_compare(metric.parse()?, format, output),
    }
}

// Side effect boundary: pick the sink for report output
fn open_writer(format: OutputFormat, output: Option<PathBuf>) -> Result<Box<dyn ReportWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    Ok(create_writer(convert_format(format), sink))
}

// Pure function: map the CLI format onto the writer format
fn convert_format(format: OutputFormat) -> estatemap::io::output::OutputFormat {
    match format {
        OutputFormat::Terminal => estatemap::io::output::OutputFormat::Terminal,
        OutputFormat::Json => estatemap::io::output::OutputFormat::Json,
        OutputFormat::Markdown => estatemap::io::output::OutputFormat::Markdown,
    }
}

fn run_latency(no_delay: bool, configured_ms: u64) -> Duration {
    if no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(configured_ms)
    }
}

fn handle_dashboard(format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let portfolio = data::sample_portfolio();
    let report = DashboardReport::from_portfolio(&portfolio);
    open_writer(format, output)?.write_dashboard(&report)
}

fn handle_simulate(
    input: EsgSimulationInput,
    no_delay: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let latency = run_latency(no_delay, get_config().latency.esg_run_ms);
    let runner = SimulationRunner::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let result = runtime
        .block_on(runner.run(latency, || run_simulation(&input)))
        .ok_or_else(|| anyhow!("simulation run superseded"))??;

    open_writer(format, output)?.write_simulation(&result)
}

fn handle_forecast(
    scenario: estatemap::core::types::ForecastScenario,
    seed: Option<u64>,
    months: usize,
    no_delay: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let baseline = data::sample_forecast();
    let horizon = months.min(baseline.len());
    let latency = run_latency(no_delay, get_config().latency.forecast_run_ms);
    let runner = SimulationRunner::new();

    let mut source: Box<dyn VariationSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let series = runtime
        .block_on(runner.run(latency, || {
            run_forecast(&baseline[..horizon], scenario, source.as_mut())
        }))
        .ok_or_else(|| anyhow!("forecast run superseded"))?;

    open_writer(format, output)?.write_forecast(&ForecastRun { scenario, series })
}

fn handle_tenants(query: TenantQuery, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let tenants = query.apply(&data::sample_tenants());
    open_writer(format, output)?.write_tenants(&tenants)
}

fn handle_documents(
    query: DocumentQuery,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let documents = query.apply(&data::sample_documents());
    open_writer(format, output)?.write_documents(&documents)
}

fn handle_maintenance(
    query: MaintenanceQuery,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let requests = query.apply(&data::sample_requests());
    open_writer(format, output)?.write_maintenance(&requests)
}

fn handle_compare(
    metric: ComparisonMetric,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let portfolio = data::sample_portfolio();
    let benchmarks = (&get_config().benchmarks).into();
    let report = compare_portfolio(&portfolio.buildings, metric, &benchmarks);
    open_writer(format, output)?.write_comparison(&report)
}
