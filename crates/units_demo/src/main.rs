//! Unit Flyweight - report client
//!
//! Prints one line per unit to stdout. Logs go to stderr.
//!
//! ```bash
//! cargo run -p units_demo
//! RUST_LOG=trace cargo run -p units_demo
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "units_demo")]
#[command(about = "Print unit reports from the shared unit catalog")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match units_demo::run(&mut out) {
        Ok(summary) => tracing::debug!("Wrote {} reports", summary.rendered),
        Err(e) => {
            tracing::error!("Report failed: {e}");
            std::process::exit(1);
        }
    }
}
