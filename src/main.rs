use clap::Parser;

use kvprobe::error::BenchError;
use kvprobe::runner::BenchRunner;
use kvprobe::stats::RunReport;
use kvprobe::store::RedisStore;
use kvprobe::workload::RandomSource;

/// Single-client latency microbenchmark for a key-value store.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store hostname or IP
    host: String,

    /// Store port
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Entries written, verified, and deleted per run
    #[arg(default_value_t = 200, value_parser = clap::value_parser!(u64).range(1..))]
    repeat_count: u64,

    /// Logical database index selected at connect
    #[arg(long, default_value_t = 0)]
    db: i64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("benchmark failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), BenchError> {
    let store = RedisStore::connect(&cli.host, cli.port, cli.db).await?;
    tracing::info!("Connected to store at {}:{}", cli.host, cli.port);

    let runner = BenchRunner::new(store, RandomSource::new(), cli.repeat_count as usize);
    let report = runner.run().await?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &RunReport) {
    for timing in report.phases() {
        println!(
            "{:<7} avg response time {:.6} s ({} ops)",
            format!("{}:", timing.phase),
            timing.average_secs(),
            timing.operation_count
        );
    }
}
