//! floppyplot - step plots of emulated IEC serial bus logs
//!
//! Reads the headerless `data,clock,attention` log written by the floppy
//! drive emulation and renders the three lines as stacked steps-post panels
//! sharing one tick axis.

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod log_table;
pub mod render;
pub mod step_series;

pub use chart::{ChartLayout, Panel};
pub use config::PlotConfig;
pub use error::PlotError;
pub use log_table::{LogRecord, LogTable, Signal};

use std::path::PathBuf;

/// Outcome of a successful plot run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSummary {
    /// Number of ticks plotted in each panel
    pub rows: usize,
    pub output: PathBuf,
}

/// Load the log, lay out the three panels and write the image
///
/// Nothing is written unless the whole log loads cleanly.
pub fn plot_log(config: &PlotConfig) -> error::Result<PlotSummary> {
    let table = LogTable::from_path(&config.input)?;
    let layout = ChartLayout::from_table(&table, config.size());
    render::render_png(&layout, &config.output)?;

    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        rows = table.len(),
        "plotted bus log"
    );

    Ok(PlotSummary {
        rows: table.len(),
        output: config.output.clone(),
    })
}
