use anyhow::Result;
use clap::Parser;
use marktime::cli::{Cli, OutputFormat};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const MAX_SLEEP_MS: u64 = 10_000;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Instrumented loop: the second step sleeps twice as long as the first
fn run_workload(iterations: u32, step: Duration) {
    for _ in 0..iterations {
        marktime::mark();
        thread::sleep(step);
        marktime::mark();
        thread::sleep(step * 2);
        marktime::mark();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.sleep_ms > MAX_SLEEP_MS {
        anyhow::bail!(
            "Invalid value for --sleep-ms: {} (must be <= {})",
            args.sleep_ms,
            MAX_SLEEP_MS
        );
    }

    init_tracing(args.debug);

    marktime::clear();
    run_workload(args.iterations, Duration::from_millis(args.sleep_ms));

    match args.format {
        OutputFormat::Text => marktime::stats(),
        format => {
            let rendered = marktime::report().render(format)?;
            eprintln!("{}", rendered.trim_end());
        }
    }

    Ok(())
}
