mod rusage;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use unitnorm_load::{load_matrix, ParseMode};
use unitnorm_rsqrt::{
    normalize_rows, FeatureMatrix, HardwareRsqrt, RsqrtStrategy, RsqrtTable,
};

use crate::rusage::ResourceUsage;

#[derive(Parser, Debug)]
#[command(name = "unitnorm")]
#[command(about = "Normalize rows of a feature matrix to unit L2 norm", long_about = None)]
struct Args {
    /// Comma-delimited text file of numeric rows, one feature vector per line.
    #[arg(default_value = "data.csv")]
    input: PathBuf,

    /// Inverse sqrt strategy: `hardware` or `table`.
    #[arg(long, default_value = "hardware")]
    strategy: String,

    /// Number of buckets in the lookup table.
    #[arg(long, default_value_t = RsqrtTable::DEFAULT_SIZE)]
    table_size: usize,

    /// Upper bound of the lookup table domain [0, max).
    #[arg(long, default_value_t = RsqrtTable::DEFAULT_MAX_VALUE)]
    table_max_value: f32,

    /// Fail on malformed numeric tokens instead of coercing them to 0.0.
    #[arg(long)]
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let strategy = RsqrtStrategy::try_from(args.strategy.as_str())?;
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };

    let mut matrix = load_matrix(&args.input, mode)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        rows = matrix.len(),
        dim = matrix.dim(),
        strategy = %args.strategy,
        "loaded feature matrix"
    );

    let before = ResourceUsage::snapshot().context("resource snapshot failed")?;
    match strategy {
        RsqrtStrategy::Hardware => normalize_rows(&mut matrix, &HardwareRsqrt),
        RsqrtStrategy::Table => {
            let table = RsqrtTable::new(args.table_size, args.table_max_value)?;
            normalize_rows(&mut matrix, &table);
        }
    }
    let after = ResourceUsage::snapshot().context("resource snapshot failed")?;

    print_matrix(&matrix);
    println!("Execution time and resource usage:");
    before.print_report("Start Usage");
    after.print_report("End Usage");

    Ok(())
}

fn print_matrix(matrix: &FeatureMatrix) {
    println!("Normalized features:");
    for row in matrix.rows() {
        for x in row {
            print!("{x:.6} ");
        }
        println!();
    }
}
