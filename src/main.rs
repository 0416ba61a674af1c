use anyhow::{Context, Result};
use clap::Parser;
use floppyplot::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = args.resolve_config()?;
    let summary = floppyplot::plot_log(&config)
        .with_context(|| format!("Failed to plot {}", config.input.display()))?;

    tracing::debug!(rows = summary.rows, "done");
    Ok(())
}
