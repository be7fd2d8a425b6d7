//! peergrid CLI: run the market simulation over an input table and write
//! the per-period financial table plus the savings report.

use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use peergrid::engine::SimulationEngine;
use peergrid::io::{read_table, write_financials, write_report};
use peergrid::market::{MarketConfig, DEFAULT_ALPHA};
use peergrid::report::build_report;

/// Simulate a P2P local energy market against a grid-only baseline.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input market table CSV ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStdin))]
    input: PathOrStdin,

    /// Output path for the per-period financial table ("-" implies stdout)
    #[arg(short, long, default_value = "p2p_financial_results.csv")]
    financials: PathBuf,

    /// Output path for the per-participant savings report ("-" implies stdout)
    #[arg(short, long, default_value = "savings_report.csv")]
    report: PathBuf,

    /// Clearing-price placement within the grid price band, in [0, 1]
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,
}

#[derive(Clone)]
enum PathOrStdin {
    Path(PathBuf),
    Stdin,
}

impl FromStr for PathOrStdin {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Stdin)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}

impl PathOrStdin {
    fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match self {
            Self::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open input {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Stdin => Ok(Box::new(stdin().lock())),
        }
    }
}

/// Open an output path for writing; "-" means stdout.
fn create_output(path: &PathBuf) -> anyhow::Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(stdout().lock()));
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = MarketConfig::new(cli.alpha)?;
    let table = read_table(cli.input.open()?)?;

    tracing::info!(
        periods = table.periods.len(),
        participants = table.roster.len(),
        alpha = config.alpha(),
        "loaded input table"
    );

    let engine = SimulationEngine::new(config, table.roster.len());
    let result = engine.run(&table.periods);
    let report = build_report(&table.roster, &result.metrics);

    let mut financials_out = create_output(&cli.financials)?;
    write_financials(
        &mut financials_out,
        &table.roster,
        &table.timestamps,
        &result.periods,
    )?;
    financials_out.flush()?;

    let mut report_out = create_output(&cli.report)?;
    write_report(&mut report_out, &report)?;
    report_out.flush()?;

    let to_stdout = cli.financials.as_os_str() == "-" || cli.report.as_os_str() == "-";
    if !to_stdout {
        println!(
            "Success. Files generated: {}, {}",
            cli.financials.display(),
            cli.report.display()
        );
    }

    Ok(())
}
