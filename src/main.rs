mod events;
mod extract;
mod load;
mod models;
mod pipeline;
mod transform;
mod types;

use std::io::stderr;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::events::TracingSink;
use crate::pipeline::{PipelineConfig, SalesPipeline};

fn main() -> Result<()> {
    //NOTE: The input file and database are the only inputs, positional arguments keep the surface small.
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().is_some_and(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: sales-etl-pipeline [input].csv [database].db [log_level:optional]");
        eprintln!("Defaults: sales_data.csv sales_database.db info");
        eprintln!("Available log levels: error, warn, info, debug, trace");
        return Ok(());
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let config = PipelineConfig::from_args(&args);
    let pipeline = SalesPipeline::new(config, TracingSink);

    pipeline.run()?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
